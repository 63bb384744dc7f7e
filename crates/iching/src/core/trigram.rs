//! Trigram - one of the eight three-line symbols.
//!
//! A Trigram is identified by its index (1-8). Everything else (binary
//! pattern, name, glyph, classical sequence label) is a projection of a
//! fixed 8-entry table.
//!
//! # Bit Convention
//!
//! The binary string is written bottom line first. Its decimal value is
//! read with the bottom line as the most significant bit, and the index is
//! always `decimal_value + 1`:
//!
//! ```text
//! index  binary  decimal   lines (bottom→top)
//!   1     000      0       yin  yin  yin
//!   5     100      4       yang yin  yin
//!   8     111      7       yang yang yang
//! ```

use crate::error::{Error, Result};
use core::fmt;

/// Static record for one trigram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrigramInfo {
    /// Bottom-to-top bit string.
    pub binary: &'static str,
    /// English name.
    pub name: &'static str,
    /// Unicode trigram symbol (U+2630-U+2637).
    pub glyph: char,
    /// Classical (King Wen family) ordering label.
    pub sequence: &'static str,
}

/// The trigram table, indexed by `index - 1`.
#[rustfmt::skip]
pub const TRIGRAMS: [TrigramInfo; 8] = [
    TrigramInfo { binary: "000", name: "Earth", glyph: '☷', sequence: "2" },
    TrigramInfo { binary: "001", name: "Mountain", glyph: '☶', sequence: "7" },
    TrigramInfo { binary: "010", name: "Water", glyph: '☵', sequence: "5" },
    TrigramInfo { binary: "011", name: "Wind", glyph: '☴', sequence: "4" },
    TrigramInfo { binary: "100", name: "Thunder", glyph: '☳', sequence: "3" },
    TrigramInfo { binary: "101", name: "Fire", glyph: '☲', sequence: "6" },
    TrigramInfo { binary: "110", name: "Lake", glyph: '☱', sequence: "8" },
    TrigramInfo { binary: "111", name: "Heaven", glyph: '☰', sequence: "1" },
];

/// One of the eight trigrams.
///
/// # Example
///
/// ```
/// use iching::Trigram;
///
/// let t = Trigram::new(5).unwrap();
/// assert_eq!(t.name(), "Thunder");
/// assert_eq!(t.binary(), "100");
/// assert_eq!(t.decimal_value(), 4);
/// assert_eq!(t.opposite().name(), "Wind");
/// assert_eq!(t.inverse().name(), "Mountain");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u8", into = "u8")
)]
#[repr(transparent)]
pub struct Trigram(u8);

impl Trigram {
    /// Earth (☷, index 1, all yin).
    pub const EARTH: Self = Self(1);

    /// Heaven (☰, index 8, all yang).
    pub const HEAVEN: Self = Self(8);

    /// Creates a trigram from its index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TrigramIndex`] unless `1 <= index <= 8`.
    ///
    /// ```
    /// use iching::Trigram;
    ///
    /// assert!(Trigram::new(1).is_ok());
    /// assert!(Trigram::new(0).is_err());
    /// assert!(Trigram::new(9).is_err());
    /// ```
    pub const fn new(index: u8) -> Result<Self> {
        if index >= 1 && index <= 8 {
            Ok(Self(index))
        } else {
            Err(Error::TrigramIndex(index as u32))
        }
    }

    /// Creates a trigram from its 3-bit value (bottom line = MSB).
    ///
    /// Only the low three bits of `bits` are used, so this is total.
    #[inline]
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        Self((bits & 0b111) + 1)
    }

    /// Parses a bottom-to-top bit string such as `"101"`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBits`] if the input is not exactly three
    /// `0`/`1` characters.
    pub fn from_binary(binary: &str) -> Result<Self> {
        let invalid = || Error::InvalidBits {
            width: 3,
            input: binary.to_owned(),
        };
        if binary.chars().count() != 3 {
            return Err(invalid());
        }
        let mut bits = 0u8;
        for c in binary.chars() {
            bits = (bits << 1)
                | match c {
                    '0' => 0,
                    '1' => 1,
                    _ => return Err(invalid()),
                };
        }
        Ok(Self::from_bits(bits))
    }

    /// Iterates all eight trigrams in index order.
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=8u8).map(Self)
    }

    /// Returns the canonical index (1-8).
    #[inline]
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the 3-bit value, bottom line as most significant bit.
    #[inline]
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0 - 1
    }

    /// Returns the decimal value of [`binary`](Self::binary).
    #[inline]
    #[must_use]
    pub const fn decimal_value(self) -> u8 {
        self.bits()
    }

    #[inline]
    const fn info(self) -> TrigramInfo {
        TRIGRAMS[(self.0 - 1) as usize]
    }

    /// Returns the bottom-to-top bit string.
    #[inline]
    #[must_use]
    pub const fn binary(self) -> &'static str {
        self.info().binary
    }

    /// Returns the English name.
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.info().name
    }

    /// Returns the Unicode trigram symbol.
    #[inline]
    #[must_use]
    pub const fn glyph(self) -> char {
        self.info().glyph
    }

    /// Returns the classical sequence label.
    #[inline]
    #[must_use]
    pub const fn sequence(self) -> &'static str {
        self.info().sequence
    }

    /// Returns the line bits bottom-to-top.
    ///
    /// ```
    /// use iching::Trigram;
    ///
    /// assert_eq!(Trigram::new(5).unwrap().lines(), [1, 0, 0]);
    /// ```
    #[inline]
    #[must_use]
    pub const fn lines(self) -> [u8; 3] {
        let b = self.bits();
        [(b >> 2) & 1, (b >> 1) & 1, b & 1]
    }

    /// Bitwise complement of every line.
    #[inline]
    #[must_use]
    pub const fn opposite(self) -> Self {
        Self::from_bits(!self.bits())
    }

    /// Top-to-bottom reversal of the lines.
    #[inline]
    #[must_use]
    pub const fn inverse(self) -> Self {
        let b = self.bits();
        Self::from_bits(((b & 1) << 2) | (b & 0b010) | (b >> 2))
    }
}

impl TryFrom<u8> for Trigram {
    type Error = Error;

    fn try_from(index: u8) -> Result<Self> {
        Self::new(index)
    }
}

impl From<Trigram> for u8 {
    #[inline]
    fn from(trigram: Trigram) -> Self {
        trigram.index()
    }
}

impl fmt::Debug for Trigram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Trigram({}, {}, {})", self.0, self.binary(), self.name())
    }
}

impl fmt::Display for Trigram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.glyph(), self.name())
    }
}
