//! Path width configurations.
//!
//! A hash path codec is fixed by two numbers: the bits consumed per trie level and the
//! highest addressable depth. Only two configurations exist, and the total width is a
//! derived quantity, not an independent knob: 30 = 6 levels of 5 bits, 60 = 10 levels of
//! 6 bits. The trait is sealed so no third configuration can be introduced downstream.

use core::fmt;
use core::hash::Hash;

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Narrow {}
    impl Sealed for super::Wide {}
}

/// A fixed hash path configuration.
///
/// Implemented only by [`Narrow`] and [`Wide`]. All arithmetic in the codec is driven by
/// these constants; the backing word is always a `u64`, of which only the low
/// [`TOTAL_BITS`](Self::TOTAL_BITS) may ever be set.
pub trait PathWidth:
    sealed::Sealed + Copy + Eq + Ord + Hash + fmt::Debug + Send + Sync + 'static
{
    /// Bits consumed per trie level.
    const BITS_PER_LEVEL: u32;

    /// The highest valid depth index. Depths range over `0..=MAX_DEPTH`.
    const MAX_DEPTH: u8;

    /// Total significant bits of a path word.
    const TOTAL_BITS: u32 = (Self::MAX_DEPTH as u32 + 1) * Self::BITS_PER_LEVEL;

    /// Mask selecting a single digit at depth 0.
    const DIGIT_MASK: u64 = (1 << Self::BITS_PER_LEVEL) - 1;
}

/// The 30-bit configuration: 6 levels of 5 bits, digits in `0..32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Narrow {}

impl PathWidth for Narrow {
    const BITS_PER_LEVEL: u32 = 5;
    const MAX_DEPTH: u8 = 5;
}

/// The 60-bit configuration: 10 levels of 6 bits, digits in `0..64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Wide {}

impl PathWidth for Wide {
    const BITS_PER_LEVEL: u32 = 6;
    const MAX_DEPTH: u8 = 9;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_constants() {
        assert_eq!(Narrow::TOTAL_BITS, 30);
        assert_eq!(Narrow::DIGIT_MASK, 0b11111);
        assert_eq!(Wide::TOTAL_BITS, 60);
        assert_eq!(Wide::DIGIT_MASK, 0b111111);
    }
}
