//! This module contains the packed hash path type and all the relevant methods to work with it.
//!
//! A [`HashPath`] addresses a node in a hash-array-mapped trie by the sequence of branch
//! indices taken from the root, packed into a single word. The digit at depth 0 occupies
//! the lowest bits, so a partial path built during descent is a numeric prefix of every
//! full path that extends it.
//!
//! Paths also have a canonical string representation: a leading `/` followed by each digit
//! as a two-digit zero-padded decimal, e.g. `/08/14/28/20/00/31`. The string form is lossless
//! over the formatted depth and is primarily used for logging and test fixtures in the
//! surrounding store.

use crate::width::PathWidth;
use alloc::string::String;
use arrayvec::ArrayVec;
use core::fmt::{self, Write as _};
use core::marker::PhantomData;

/// The level count of the widest configuration, and the capacity of the digit
/// vectors returned by [`HashPath::digits`].
pub const MAX_LEVELS: usize = 10;

/// A packed hash path: up to `MAX_DEPTH + 1` digits of `BITS_PER_LEVEL` bits each,
/// least-significant digit at depth 0.
///
/// Values are immutable; [`build`](Self::build) and friends return new paths. Only the low
/// `TOTAL_BITS` of the backing word may be set, and every constructor upholds that, so a
/// path can be freely shared and compared as a plain integer.
///
/// The two configurations, [`HashPath30`] and [`HashPath60`], are distinct types. A 30-bit
/// path cannot be passed where a 60-bit path is expected.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HashPath<W> {
    bits: u64,
    _width: PhantomData<W>,
}

/// A 30-bit hash path: 6 levels of 5 bits.
pub type HashPath30 = HashPath<crate::width::Narrow>;

/// A 60-bit hash path: 10 levels of 6 bits.
pub type HashPath60 = HashPath<crate::width::Wide>;

/// Errors arising from out-of-range depths, oversized digits, and malformed path strings.
///
/// All of these are caller-input errors detected at the boundary; once inputs are
/// validated the internal mask and shift arithmetic cannot fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    /// The requested depth exceeds the configuration's maximum.
    InvalidDepth { depth: u8, max: u8 },
    /// A path string did not start with the leading `/`.
    MalformedPath,
    /// The segment at this position was not a decimal number in digit range.
    MalformedDigit { segment: usize },
    /// A digit passed to [`HashPath::build`] does not fit in `BITS_PER_LEVEL` bits.
    DigitOutOfRange { digit: u8, max: u8 },
    /// A path string had more segments than the configuration has levels.
    TooManySegments { max: usize },
    /// A raw word had bits set above the configuration's total width.
    ExcessBits,
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            PathError::InvalidDepth { depth, max } => {
                write!(f, "depth {} exceeds maximum depth {}", depth, max)
            }
            PathError::MalformedPath => write!(f, "path string does not start with '/'"),
            PathError::MalformedDigit { segment } => {
                write!(f, "segment {} is not a decimal digit in range", segment)
            }
            PathError::DigitOutOfRange { digit, max } => {
                write!(f, "digit {} exceeds per-level maximum {}", digit, max)
            }
            PathError::TooManySegments { max } => {
                write!(f, "path string has more than {} segments", max)
            }
            PathError::ExcessBits => write!(f, "word has bits set above the path width"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PathError {}

impl<W: PathWidth> HashPath<W> {
    /// The all-zero path. Starting point for incremental construction via
    /// [`build`](Self::build).
    pub const EMPTY: Self = HashPath {
        bits: 0,
        _width: PhantomData,
    };

    const fn from_bits(bits: u64) -> Self {
        HashPath {
            bits,
            _width: PhantomData,
        }
    }

    fn check_depth(depth: u8) -> Result<(), PathError> {
        if depth > W::MAX_DEPTH {
            return Err(PathError::InvalidDepth {
                depth,
                max: W::MAX_DEPTH,
            });
        }
        Ok(())
    }

    fn digit_at(&self, depth: u8) -> u64 {
        (self.bits >> (depth as u32 * W::BITS_PER_LEVEL)) & W::DIGIT_MASK
    }

    /// Wrap a raw word produced by the key hasher.
    ///
    /// Fails with [`PathError::ExcessBits`] if any bit at or above `TOTAL_BITS` is set;
    /// the word is taken as-is, never truncated.
    pub fn from_raw(bits: u64) -> Result<Self, PathError> {
        if bits >> W::TOTAL_BITS != 0 {
            return Err(PathError::ExcessBits);
        }
        Ok(Self::from_bits(bits))
    }

    /// Get the backing word. Only the low `TOTAL_BITS` may be set.
    pub fn to_raw(self) -> u64 {
        self.bits
    }

    /// Extract the digit stored at `depth`.
    pub fn index(&self, depth: u8) -> Result<u8, PathError> {
        Self::check_depth(depth)?;
        Ok(self.digit_at(depth) as u8)
    }

    /// Truncate this path to depths below `depth` and place `digit` there.
    ///
    /// Digits at depths `0..depth` are preserved; everything at `depth` and above is
    /// replaced, so the result carries exactly the digits `0..=depth`. Given the path
    /// `/11/22/33`, building digit 44 at depth 3 yields `/11/22/33/44`.
    pub fn build(&self, digit: u8, depth: u8) -> Result<Self, PathError> {
        Self::check_depth(depth)?;
        if u64::from(digit) > W::DIGIT_MASK {
            return Err(PathError::DigitOutOfRange {
                digit,
                max: W::DIGIT_MASK as u8,
            });
        }
        let shift = depth as u32 * W::BITS_PER_LEVEL;
        let below = (1u64 << shift) - 1;
        Ok(Self::from_bits((self.bits & below) | (u64::from(digit) << shift)))
    }

    /// The mask covering the digits at depths `[0, depth]` inclusive.
    pub fn prefix_mask(depth: u8) -> Result<u64, PathError> {
        Self::check_depth(depth)?;
        Ok((1u64 << ((depth as u32 + 1) * W::BITS_PER_LEVEL)) - 1)
    }

    /// All digits at depths `[0, depth]`, in depth order.
    pub fn digits(&self, depth: u8) -> Result<ArrayVec<u8, MAX_LEVELS>, PathError> {
        Self::check_depth(depth)?;
        let mut out = ArrayVec::new();
        for d in 0..=depth {
            out.push(self.digit_at(d) as u8);
        }
        Ok(out)
    }

    /// Render the digits at depths `[0, depth]` as a canonical path string:
    /// a leading `/`, then `depth + 1` two-digit zero-padded decimal groups joined by `/`.
    ///
    /// Depth 0 yields a single group (e.g. `"/08"`), never a bare `"/"`, so every
    /// formatted string parses back to the corresponding path prefix.
    pub fn path_string(&self, depth: u8) -> Result<String, PathError> {
        Self::check_depth(depth)?;
        let mut out = String::with_capacity(3 * (depth as usize + 1));
        self.write_path(&mut out, depth)
            .expect("writing to a String cannot fail; qed");
        Ok(out)
    }

    fn write_path(&self, out: &mut impl fmt::Write, depth: u8) -> fmt::Result {
        for d in 0..=depth {
            write!(out, "/{:02}", self.digit_at(d))?;
        }
        Ok(())
    }

    /// Parse a canonical path string.
    ///
    /// The string must start with `/`; each following `/`-separated segment is a decimal
    /// number below `2^BITS_PER_LEVEL`, placed at the depth equal to its position. Fewer
    /// segments than levels is a partial path; more than `MAX_DEPTH + 1` segments fails
    /// with [`PathError::TooManySegments`] rather than shifting digits off the top.
    pub fn parse(s: &str) -> Result<Self, PathError> {
        let rest = s.strip_prefix('/').ok_or(PathError::MalformedPath)?;
        let mut bits = 0u64;
        for (i, segment) in rest.split('/').enumerate() {
            if i > W::MAX_DEPTH as usize {
                return Err(PathError::TooManySegments {
                    max: W::MAX_DEPTH as usize + 1,
                });
            }
            let digit = Self::parse_segment(segment, i)?;
            bits |= u64::from(digit) << (i as u32 * W::BITS_PER_LEVEL);
        }
        Ok(Self::from_bits(bits))
    }

    fn parse_segment(segment: &str, index: usize) -> Result<u8, PathError> {
        if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PathError::MalformedDigit { segment: index });
        }
        let value: u64 = segment
            .parse()
            .map_err(|_| PathError::MalformedDigit { segment: index })?;
        if value > W::DIGIT_MASK {
            return Err(PathError::MalformedDigit { segment: index });
        }
        Ok(value as u8)
    }

    /// Render every digit from `MAX_DEPTH` down to 0 as zero-padded binary groups of
    /// `BITS_PER_LEVEL` bits, space-separated. The leading `"00 "` stands for the unused
    /// top bits of the backing word. Diagnostics only; there is no parser for this form.
    pub fn bit_string(&self) -> String {
        let mut out = String::from("00");
        for d in (0..=W::MAX_DEPTH).rev() {
            write!(
                out,
                " {:0width$b}",
                self.digit_at(d),
                width = W::BITS_PER_LEVEL as usize
            )
            .expect("writing to a String cannot fail; qed");
        }
        out
    }
}

/// Formats the full-depth path string, e.g. `/08/14/28/20/00/31`.
impl<W: PathWidth> fmt::Display for HashPath<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_path(f, W::MAX_DEPTH)
    }
}

impl<W: PathWidth> fmt::Debug for HashPath<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HashPath{}({:#x})", W::TOTAL_BITS, self.bits)
    }
}

impl<W: PathWidth> core::str::FromStr for HashPath<W> {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, PathError> {
        Self::parse(s)
    }
}

#[cfg(feature = "borsh")]
impl<W: PathWidth> borsh::BorshSerialize for HashPath<W> {
    fn serialize<Wr: borsh::io::Write>(&self, writer: &mut Wr) -> borsh::io::Result<()> {
        borsh::BorshSerialize::serialize(&self.bits, writer)
    }
}

#[cfg(feature = "borsh")]
impl<W: PathWidth> borsh::BorshDeserialize for HashPath<W> {
    fn deserialize_reader<R: borsh::io::Read>(reader: &mut R) -> borsh::io::Result<Self> {
        let bits = <u64 as borsh::BorshDeserialize>::deserialize_reader(reader)?;
        Self::from_raw(bits).map_err(|_| {
            borsh::io::Error::new(
                borsh::io::ErrorKind::InvalidData,
                "hash path word exceeds configured bit width",
            )
        })
    }
}
