//! Branch Resolution Unit Tests.
//!
//! Verifies condition evaluation under both comparison operands, displacement
//! computation under both policies, and that the unit only hands the PC a
//! displacement.

use mipsim_core::common::{Gpr, RegisterFile};
use mipsim_core::config::{BranchCompare, BranchDisplacement};
use mipsim_core::core::ExecContext;
use mipsim_core::core::units::bru::{self, BranchOp, Bru};
use mipsim_core::isa::abi::AbiNames;
use mipsim_core::isa::opcodes::{OP_BEQ, OP_BNE};
use mipsim_core::soc::Ram;
use rstest::rstest;

use crate::common::builder::instruction::i_type;

#[rstest]
#[case(BranchOp::Beq, 5, 5, true)]
#[case(BranchOp::Beq, 5, 6, false)]
#[case(BranchOp::Bne, 5, 5, false)]
#[case(BranchOp::Bne, 0, 0xFFFF_FFFF, true)]
fn condition(#[case] op: BranchOp, #[case] a: u32, #[case] b: u32, #[case] expected: bool) {
    assert_eq!(bru::taken(op, a, b), expected);
}

#[rstest]
#[case(0x0000, 0)]
#[case(0x0001, 4)]
#[case(0x7FFF, 0x1_FFFC)]
#[case(0xFFFF, -4)]
#[case(0x8000, -0x2_0000)]
fn sign_extended_displacement(#[case] imm: u16, #[case] expected: i32) {
    assert_eq!(bru::displacement(imm, BranchDisplacement::SignExtended), expected);
}

#[rstest]
#[case(0x0001, 4)]
#[case(0x7FFF, 0x1_FFFC)]
#[case(0xFFFF, 0x3_FFFC)]
#[case(0x8000, 0x2_0000)]
fn unextended_displacement_is_never_negative(#[case] imm: u16, #[case] expected: i32) {
    assert_eq!(bru::displacement(imm, BranchDisplacement::Unextended), expected);
}

fn run_branch(
    op: BranchOp,
    inst: u32,
    regs: &mut Gpr,
    pc: u32,
    policy: BranchDisplacement,
    compare: BranchCompare,
) -> (String, u32) {
    let mut pc = pc;
    let mut mem = Ram::new(0, 16, true);
    let mut ctx = ExecContext::new(regs, &mut pc, &mut mem, &AbiNames)
        .with_branch_displacement(policy)
        .with_branch_compare(compare);
    let text = Bru::execute(op, inst, &mut ctx);
    (text, pc)
}

#[test]
fn default_compare_is_immediate() {
    let mut regs = Gpr::new();
    let mut pc = 0u32;
    let mut mem = Ram::new(0, 16, true);
    let ctx = ExecContext::new(&mut regs, &mut pc, &mut mem, &AbiNames);
    assert_eq!(ctx.branch_compare, BranchCompare::Immediate);
}

// rs = t0 = 3, rt = t1 = 0x99, imm = 3, branch at 0x100.
// Immediate compare sees 3 vs 3; register compare sees 3 vs 0x99.
#[rstest]
#[case(BranchOp::Beq, BranchCompare::Immediate, 0x10C)]
#[case(BranchOp::Beq, BranchCompare::Register, 0x100)]
#[case(BranchOp::Bne, BranchCompare::Immediate, 0x100)]
#[case(BranchOp::Bne, BranchCompare::Register, 0x10C)]
fn compare_operand_selects_outcome(
    #[case] op: BranchOp,
    #[case] compare: BranchCompare,
    #[case] expected_pc: u32,
) {
    let opcode = if op == BranchOp::Beq { OP_BEQ } else { OP_BNE };
    let mut regs = Gpr::new();
    regs.write(8, 3);
    regs.write(9, 0x99);

    let (text, pc) = run_branch(
        op,
        i_type(opcode, 8, 9, 0x0003),
        &mut regs,
        0x100,
        BranchDisplacement::SignExtended,
        compare,
    );

    assert_eq!(pc, expected_pc);
    assert_eq!(text, format!("{} t1, t0, 0x0003", op.mnemonic()));
}

#[test]
fn immediate_compare_uses_zero_extended_field() {
    // 0xFFFF compares as 0x0000_FFFF, not 0xFFFF_FFFF.
    let mut regs = Gpr::new();
    regs.write(4, 0xFFFF_FFFF);
    let (_, pc) = run_branch(
        BranchOp::Beq,
        i_type(OP_BEQ, 4, 0, 0xFFFF),
        &mut regs,
        0x100,
        BranchDisplacement::SignExtended,
        BranchCompare::Immediate,
    );
    assert_eq!(pc, 0x100);

    regs.write(4, 0x0000_FFFF);
    let (_, pc) = run_branch(
        BranchOp::Beq,
        i_type(OP_BEQ, 4, 0, 0xFFFF),
        &mut regs,
        0x100,
        BranchDisplacement::SignExtended,
        BranchCompare::Immediate,
    );
    assert_eq!(pc, 0xFC);
}

#[rstest]
#[case(BranchCompare::Immediate)]
#[case(BranchCompare::Register)]
fn not_taken_leaves_pc(#[case] compare: BranchCompare) {
    let mut regs = Gpr::new();
    regs.write(8, 1);

    let (_, pc) = run_branch(
        BranchOp::Beq,
        i_type(OP_BEQ, 8, 9, 0x0003),
        &mut regs,
        0x100,
        BranchDisplacement::SignExtended,
        compare,
    );

    assert_eq!(pc, 0x100);
}

#[test]
fn backward_branch_under_each_policy() {
    let mut regs = Gpr::new();
    let inst = i_type(OP_BEQ, 0, 0, 0xFFFE);

    let (_, pc) = run_branch(
        BranchOp::Beq,
        inst,
        &mut regs,
        0x100,
        BranchDisplacement::SignExtended,
        BranchCompare::Register,
    );
    assert_eq!(pc, 0xF8);

    let (_, pc) = run_branch(
        BranchOp::Beq,
        inst,
        &mut regs,
        0x100,
        BranchDisplacement::Unextended,
        BranchCompare::Register,
    );
    assert_eq!(pc, 0x100 + 0x3_FFF8);
}

#[rstest]
#[case(BranchCompare::Immediate)]
#[case(BranchCompare::Register)]
fn branch_never_writes_registers(#[case] compare: BranchCompare) {
    let mut regs = Gpr::new();
    regs.write(3, 0x55);
    let before = regs.snapshot();

    let _ = run_branch(
        BranchOp::Bne,
        i_type(OP_BNE, 3, 0, 0x0010),
        &mut regs,
        0,
        BranchDisplacement::SignExtended,
        compare,
    );

    assert_eq!(regs.snapshot(), before);
}
