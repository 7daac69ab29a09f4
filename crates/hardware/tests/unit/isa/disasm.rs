//! Disassembly format tests.

use mipsim_core::isa::abi::{AbiNames, RegisterNames};
use mipsim_core::isa::disasm::{disassemble, render_alu, render_lui, render_mem};
use mipsim_core::isa::opcodes::*;
use rstest::rstest;

use crate::common::builder::instruction::i_type;

/// Register names of the form `$N`, to check the lookup is consulted.
struct Numeric;

impl RegisterNames for Numeric {
    fn name(&self, idx: usize) -> &str {
        const NAMES: [&str; 32] = [
            "$0", "$1", "$2", "$3", "$4", "$5", "$6", "$7", "$8", "$9", "$10", "$11", "$12",
            "$13", "$14", "$15", "$16", "$17", "$18", "$19", "$20", "$21", "$22", "$23", "$24",
            "$25", "$26", "$27", "$28", "$29", "$30", "$31",
        ];
        NAMES[idx]
    }
}

#[test]
fn alu_form_pads_immediate_to_four_digits() {
    assert_eq!(render_alu("addi", &AbiNames, 8, 9, 0x4), "addi t0, t1, 0x0004");
}

#[test]
fn lui_form_has_no_source() {
    assert_eq!(render_lui(&AbiNames, 2, 0x1234), "lui v0, 0x1234");
}

#[test]
fn memory_form_puts_base_in_parens() {
    assert_eq!(render_mem("lw", &AbiNames, 31, 0x001c, 29), "lw ra, 0x001c(sp)");
}

#[test]
fn custom_register_names_are_used() {
    assert_eq!(render_alu("ori", &Numeric, 1, 0, 0xabcd), "ori $1, $0, 0xabcd");
}

#[rstest]
#[case(i_type(OP_LUI, 0, 8, 0x1234), "lui t0, 0x1234")]
#[case(i_type(OP_ADDI, 9, 8, 0xFFFF), "addi t0, t1, 0xffff")]
#[case(i_type(OP_ADDIU, 29, 29, 0xFFF8), "addiu sp, sp, 0xfff8")]
#[case(i_type(OP_SLTI, 4, 2, 0x0001), "slti v0, a0, 0x0001")]
#[case(i_type(OP_SLTIU, 4, 2, 0x0001), "sltiu v0, a0, 0x0001")]
#[case(i_type(OP_ANDI, 16, 17, 0x00FF), "andi s1, s0, 0x00ff")]
#[case(i_type(OP_ORI, 0, 1, 0x8000), "ori at, zero, 0x8000")]
#[case(i_type(OP_XORI, 3, 3, 0xFFFF), "xori v1, v1, 0xffff")]
#[case(i_type(OP_BEQ, 8, 9, 0xFFFE), "beq t1, t0, 0xfffe")]
#[case(i_type(OP_BNE, 0, 0, 0x0003), "bne zero, zero, 0x0003")]
#[case(i_type(OP_LB, 29, 8, 0x0010), "lb t0, 0x0010(sp)")]
#[case(i_type(OP_LBU, 29, 8, 0x0010), "lbu t0, 0x0010(sp)")]
#[case(i_type(OP_LH, 30, 8, 0xFFFC), "lh t0, 0xfffc(fp)")]
#[case(i_type(OP_LHU, 30, 8, 0xFFFC), "lhu t0, 0xfffc(fp)")]
#[case(i_type(OP_LW, 29, 31, 0x001C), "lw ra, 0x001c(sp)")]
#[case(i_type(OP_SB, 4, 5, 0x0000), "sb a1, 0x0000(a0)")]
#[case(i_type(OP_SH, 4, 5, 0x0002), "sh a1, 0x0002(a0)")]
#[case(i_type(OP_SW, 29, 31, 0x001C), "sw ra, 0x001c(sp)")]
fn disassemble_every_family_member(#[case] inst: u32, #[case] expected: &str) {
    assert_eq!(disassemble(inst, &AbiNames).as_deref(), Some(expected));
}

#[rstest]
#[case(0x0000_0000)] // SPECIAL (R-type)
#[case(0x0800_0000)] // j
#[case(0x0C00_0000)] // jal
#[case(0x22 << 26)] // lwl
#[case(0x2E << 26)] // swr
#[case(0xFFFF_FFFF)]
fn disassemble_rejects_other_opcodes(#[case] inst: u32) {
    assert_eq!(disassemble(inst, &AbiNames), None);
}
