//! Load/Store Unit (LSU).
//!
//! This module implements the memory-access executor. Every load and store:
//! 1. Computes the effective address `base + sext(imm)` with wrapping.
//! 2. Hands a sized transfer to the [`Memory`](crate::soc::Memory) collaborator,
//!    which owns alignment and range policy.
//! 3. Propagates any trap unmodified, before touching the register file.
//!
//! Loads extend the transferred value (sign for `lb`/`lh`, zero for
//! `lbu`/`lhu`); stores mask the register in the second register field to the
//! transfer width.

use tracing::trace;

use super::ExecContext;
use crate::common::{MemWidth, Trap};
use crate::isa::decode::decode_imm_type;
use crate::isa::disasm;
use crate::isa::instruction::sign_extend16;

/// Load variant selected by an I-type opcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LoadOp {
    /// Load byte, sign-extended.
    Lb,
    /// Load byte, zero-extended.
    Lbu,
    /// Load half-word, sign-extended.
    Lh,
    /// Load half-word, zero-extended.
    Lhu,
    /// Load word.
    Lw,
}

impl LoadOp {
    /// Assembly mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Lb => "lb",
            Self::Lbu => "lbu",
            Self::Lh => "lh",
            Self::Lhu => "lhu",
            Self::Lw => "lw",
        }
    }

    /// Transfer width.
    pub const fn width(self) -> MemWidth {
        match self {
            Self::Lb | Self::Lbu => MemWidth::Byte,
            Self::Lh | Self::Lhu => MemWidth::Half,
            Self::Lw => MemWidth::Word,
        }
    }

    /// Widens a raw transferred value to 32 bits.
    ///
    /// Bits above the transfer width in `raw` are ignored.
    pub const fn extend(self, raw: u32) -> u32 {
        match self {
            Self::Lb => raw as u8 as i8 as i32 as u32,
            Self::Lbu => raw & 0xFF,
            Self::Lh => raw as u16 as i16 as i32 as u32,
            Self::Lhu => raw & 0xFFFF,
            Self::Lw => raw,
        }
    }
}

/// Store variant selected by an I-type opcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StoreOp {
    /// Store low byte.
    Sb,
    /// Store low half-word.
    Sh,
    /// Store word.
    Sw,
}

impl StoreOp {
    /// Assembly mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Sb => "sb",
            Self::Sh => "sh",
            Self::Sw => "sw",
        }
    }

    /// Transfer width.
    pub const fn width(self) -> MemWidth {
        match self {
            Self::Sb => MemWidth::Byte,
            Self::Sh => MemWidth::Half,
            Self::Sw => MemWidth::Word,
        }
    }
}

/// Computes `base + sext(imm)` with wrapping.
///
/// Addressing immediates are sign-extended for every load and store.
#[inline]
pub const fn effective_address(base: u32, imm: u16) -> u32 {
    base.wrapping_add(sign_extend16(imm))
}

/// Load/Store Unit for sized memory transfers.
#[derive(Debug)]
pub struct Lsu;

impl Lsu {
    /// Executes a load and writes the extended value to the destination register.
    ///
    /// # Errors
    ///
    /// Returns the memory collaborator's trap unmodified; the destination
    /// register is left untouched.
    pub fn load(op: LoadOp, inst: u32, ctx: &mut ExecContext<'_>) -> Result<String, Trap> {
        let ops = decode_imm_type(inst, &*ctx.regs);
        let addr = effective_address(ops.src1.val, ops.src2.raw);
        let raw = ctx.mem.read(addr, op.width())?;
        let val = op.extend(raw);
        ctx.regs.write(ops.dest, val);
        trace!(op = op.mnemonic(), addr, val, "load");

        Ok(disasm::render_mem(
            op.mnemonic(),
            ctx.names,
            ops.dest,
            ops.src2.raw,
            ops.src1.idx,
        ))
    }

    /// Executes a store of the low bytes of the second-field register.
    ///
    /// # Errors
    ///
    /// Returns the memory collaborator's trap unmodified.
    pub fn store(op: StoreOp, inst: u32, ctx: &mut ExecContext<'_>) -> Result<String, Trap> {
        let ops = decode_imm_type(inst, &*ctx.regs);
        let addr = effective_address(ops.src1.val, ops.src2.raw);
        let width = op.width();
        let val = ctx.regs.read(ops.dest) & width.mask();
        ctx.mem.write(addr, width, val)?;
        trace!(op = op.mnemonic(), addr, val, "store");

        Ok(disasm::render_mem(
            op.mnemonic(),
            ctx.names,
            ops.dest,
            ops.src2.raw,
            ops.src1.idx,
        ))
    }
}
