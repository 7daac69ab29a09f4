//! Memory Access Widths.
//!
//! This module defines the sized transfer descriptor handed to the memory
//! collaborator. It is used for:
//! 1. **Transfer Sizing:** Selecting how many bytes a load or store moves.
//! 2. **Masking:** Truncating store data to the transfer width before hand-off.
//! 3. **Alignment:** Reporting the natural alignment a memory policy may enforce.

/// Width of a single memory transfer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MemWidth {
    /// 8-bit byte access.
    Byte,

    /// 16-bit half-word access.
    Half,

    /// 32-bit word access.
    Word,
}

impl MemWidth {
    /// Number of bytes moved by a transfer of this width.
    #[inline]
    pub const fn bytes(self) -> u32 {
        match self {
            Self::Byte => 1,
            Self::Half => 2,
            Self::Word => 4,
        }
    }

    /// Mask selecting the low `bytes() * 8` bits of a register value.
    #[inline]
    pub const fn mask(self) -> u32 {
        match self {
            Self::Byte => 0xFF,
            Self::Half => 0xFFFF,
            Self::Word => 0xFFFF_FFFF,
        }
    }

    /// Returns `true` if `addr` is naturally aligned for this width.
    #[inline]
    pub const fn is_aligned(self, addr: u32) -> bool {
        addr % self.bytes() == 0
    }
}
