//! Instruction Disassembler for the MIPS32 I-type family.
//!
//! Renders the fixed text forms produced alongside every executed instruction:
//!
//! | family | form |
//! |---|---|
//! | ALU, branch | `op rt, rs, 0xNNNN` |
//! | lui | `lui rt, 0xNNNN` |
//! | load, store | `op rt, 0xNNNN(rs)` |
//!
//! The immediate is always the raw 16-bit field as four lower-case hex digits,
//! regardless of how the executor extends it. Branches have no destination
//! register but still use the ALU form, with the second register field first.
//!
//! # Usage
//!
//! ```
//! use mipsim_core::isa::abi::AbiNames;
//! use mipsim_core::isa::disasm::disassemble;
//!
//! // addiu sp, sp, -8
//! let text = disassemble(0x27BD_FFF8, &AbiNames);
//! assert_eq!(text.as_deref(), Some("addiu sp, sp, 0xfff8"));
//! ```

use crate::core::units::alu::AluImmOp;
use crate::isa::abi::RegisterNames;
use crate::isa::dispatch::IOp;
use crate::isa::instruction::InstructionBits;

/// Renders the ALU form `op dst, src, 0xNNNN`.
pub fn render_alu(
    mnemonic: &str,
    names: &dyn RegisterNames,
    dest: usize,
    src: usize,
    imm: u16,
) -> String {
    format!(
        "{mnemonic} {}, {}, {:#06x}",
        names.name(dest),
        names.name(src),
        imm
    )
}

/// Renders `lui dst, 0xNNNN`.
pub fn render_lui(names: &dyn RegisterNames, dest: usize, imm: u16) -> String {
    format!("lui {}, {:#06x}", names.name(dest), imm)
}

/// Renders the memory form `op reg, 0xNNNN(base)`.
pub fn render_mem(
    mnemonic: &str,
    names: &dyn RegisterNames,
    reg: usize,
    imm: u16,
    base: usize,
) -> String {
    format!(
        "{mnemonic} {}, {:#06x}({})",
        names.name(reg),
        imm,
        names.name(base)
    )
}

/// Disassembles a 32-bit instruction word without executing it.
///
/// Returns `None` for opcodes outside the I-type family.
pub fn disassemble(inst: u32, names: &dyn RegisterNames) -> Option<String> {
    let op = IOp::decode(inst)?;
    let (rs, rt, imm) = (inst.rs(), inst.rt(), inst.imm16());

    Some(match op {
        IOp::Alu(AluImmOp::Lui) => render_lui(names, rt, imm),
        IOp::Alu(_) | IOp::Branch(_) => render_alu(op.mnemonic(), names, rt, rs, imm),
        IOp::Load(_) | IOp::Store(_) => render_mem(op.mnemonic(), names, rt, imm, rs),
    })
}
