use mipsim_core::common::ProgramCounter;

#[test]
fn add_signed_displacement() {
    let mut pc = 0x100u32;
    pc.add(12);
    assert_eq!(pc.read(), 0x10C);
    pc.add(-0x10C);
    assert_eq!(pc.read(), 0);
}

#[test]
fn add_wraps() {
    let mut pc = 0u32;
    pc.add(-4);
    assert_eq!(pc, 0xFFFF_FFFC);
    pc.add(8);
    assert_eq!(pc, 4);
}
