use mipsim_core::common::MemWidth;
use rstest::rstest;

#[rstest]
#[case(MemWidth::Byte, 1, 0xFF)]
#[case(MemWidth::Half, 2, 0xFFFF)]
#[case(MemWidth::Word, 4, 0xFFFF_FFFF)]
fn size_and_mask(#[case] width: MemWidth, #[case] bytes: u32, #[case] mask: u32) {
    assert_eq!(width.bytes(), bytes);
    assert_eq!(width.mask(), mask);
}

#[test]
fn natural_alignment() {
    assert!((0..8).all(|a| MemWidth::Byte.is_aligned(a)));
    assert!(MemWidth::Half.is_aligned(0x1002));
    assert!(!MemWidth::Half.is_aligned(0x1003));
    assert!(MemWidth::Word.is_aligned(0x1004));
    assert!(!MemWidth::Word.is_aligned(0x1002));
}
