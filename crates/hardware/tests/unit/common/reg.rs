use mipsim_core::common::reg::NUM_REGS;
use mipsim_core::common::{Gpr, RegisterFile};

#[test]
fn zero_register_is_hardwired() {
    let mut regs = Gpr::new();
    regs.write(0, 0xDEAD_BEEF);
    assert_eq!(regs.read(0), 0);
}

#[test]
fn read_write_roundtrip() {
    let mut regs = Gpr::new();
    for i in 1..NUM_REGS {
        regs.write(i, i as u32 * 3);
    }
    for i in 1..NUM_REGS {
        assert_eq!(regs.read(i), i as u32 * 3);
    }
}

#[test]
fn out_of_range_index_is_ignored() {
    let mut regs = Gpr::new();
    regs.write(NUM_REGS, 1);
    assert_eq!(regs.read(NUM_REGS), 0);
    assert_eq!(regs, Gpr::new());
}

#[test]
fn dump_lists_every_register_by_abi_name() {
    let mut regs = Gpr::new();
    regs.write(29, 0x7FFF_FFF0);
    let dump = regs.dump();

    assert_eq!(dump.lines().count(), NUM_REGS / 2);
    assert_eq!(
        dump.lines().next(),
        Some("zero=0x00000000   at=0x00000000")
    );
    assert!(dump.contains("  sp=0x7ffffff0"));
    assert!(dump.contains("  ra=0x00000000"));
}
