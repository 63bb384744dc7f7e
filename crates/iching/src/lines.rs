//! Line algebra over the six-line vector.
//!
//! A [`Lines`] value holds one bit per line, index 0 = line 1 (bottom)
//! through index 5 = line 6 (top). Every transformation in this module is a
//! pure function from one line vector to another; [`Hexagram`](crate::Hexagram)
//! wraps the results back into identities.
//!
//! # Bit Layout
//!
//! ```text
//! index:     0   1   2 | 3   4   5
//! line:      1   2   3 | 4   5   6
//! trigram:   lower     | upper
//! value bit: 5   4   3 | 2   1   0     (line 1 is the MSB)
//! ```
//!
//! The numeric [`value`](Lines::value) equals the bottom-to-top binary
//! string read as a base-2 number.

use crate::core::trigram::Trigram;
use crate::error::{Error, Result};
use core::fmt;

/// Six line bits, bottom to top.
///
/// # Example
///
/// ```
/// use iching::Lines;
///
/// let l = Lines::new([1, 0, 0, 0, 1, 0]);
/// assert_eq!(l.value(), 0b100010);
/// assert_eq!(l.to_string(), "100010");
/// assert_eq!(l.lower().name(), "Thunder");
/// assert_eq!(l.upper().name(), "Water");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "[u8; 6]", into = "[u8; 6]")
)]
pub struct Lines([u8; 6]);

/// An adjacency or correspondence relation between two lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LinePair {
    /// Lower line number (1-based).
    pub a: usize,
    /// Upper line number (1-based).
    pub b: usize,
    /// True when the two lines differ in polarity.
    pub linked: bool,
}

impl Lines {
    /// Creates a line vector; any non-zero entry counts as yang.
    #[must_use]
    pub const fn new(bits: [u8; 6]) -> Self {
        let mut out = [0u8; 6];
        let mut i = 0;
        while i < 6 {
            out[i] = (bits[i] != 0) as u8;
            i += 1;
        }
        Self(out)
    }

    /// Creates a line vector from a 6-bit value (line 1 = MSB).
    #[must_use]
    pub const fn from_value(value: u8) -> Self {
        let mut out = [0u8; 6];
        let mut i = 0;
        while i < 6 {
            out[i] = (value >> (5 - i)) & 1;
            i += 1;
        }
        Self(out)
    }

    /// Stacks `lower` below `upper`.
    #[inline]
    #[must_use]
    pub const fn from_trigrams(lower: Trigram, upper: Trigram) -> Self {
        Self::from_value((lower.bits() << 3) | upper.bits())
    }

    /// Parses a bottom-to-top bit string such as `"100010"`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBits`] unless the input is six `0`/`1`
    /// characters.
    pub fn from_binary(binary: &str) -> Result<Self> {
        let invalid = || Error::InvalidBits {
            width: 6,
            input: binary.to_owned(),
        };
        let mut bits = [0u8; 6];
        let mut count = 0;
        for c in binary.chars() {
            if count == 6 {
                return Err(invalid());
            }
            bits[count] = match c {
                '0' => 0,
                '1' => 1,
                _ => return Err(invalid()),
            };
            count += 1;
        }
        if count != 6 {
            return Err(invalid());
        }
        Ok(Self(bits))
    }

    /// Returns the bits bottom to top.
    #[inline]
    #[must_use]
    pub const fn bits(self) -> [u8; 6] {
        self.0
    }

    /// Returns the 6-bit numeric value.
    #[must_use]
    pub const fn value(self) -> u8 {
        let mut v = 0u8;
        let mut i = 0;
        while i < 6 {
            v = (v << 1) | self.0[i];
            i += 1;
        }
        v
    }

    /// Returns the bit of a 1-based line.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LineNumber`] unless `1 <= line <= 6`.
    pub fn line(self, line: usize) -> Result<u8> {
        match line {
            1..=6 => Ok(self.0[line - 1]),
            _ => Err(Error::LineNumber(line)),
        }
    }

    /// Trigram formed by lines 1-3.
    #[inline]
    #[must_use]
    pub const fn lower(self) -> Trigram {
        Trigram::from_bits(self.value() >> 3)
    }

    /// Trigram formed by lines 4-6.
    #[inline]
    #[must_use]
    pub const fn upper(self) -> Trigram {
        Trigram::from_bits(self.value())
    }

    /// Number of yang lines.
    #[must_use]
    pub fn yang_count(self) -> usize {
        self.0.iter().filter(|&&b| b == 1).count()
    }

    /// Whether a 1-based line is "correct": yang on odd places, yin on even.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LineNumber`] unless `1 <= line <= 6`.
    ///
    /// ```
    /// use iching::Lines;
    ///
    /// // Already Across the River: every line in its proper place.
    /// let l = Lines::new([1, 0, 1, 0, 1, 0]);
    /// assert!((1..=6).all(|n| l.is_correct(n).unwrap()));
    /// ```
    pub fn is_correct(self, line: usize) -> Result<bool> {
        let bit = self.line(line)?;
        Ok(if line % 2 == 1 { bit == 1 } else { bit == 0 })
    }

    /// Line numbers in their proper place.
    #[must_use]
    pub fn correct_lines(self) -> Vec<usize> {
        (1..=6).filter(|&n| self.0[n - 1] == (n % 2) as u8).collect()
    }

    /// Line numbers out of their proper place.
    #[must_use]
    pub fn incorrect_lines(self) -> Vec<usize> {
        (1..=6).filter(|&n| self.0[n - 1] != (n % 2) as u8).collect()
    }

    /// Adjacent pairs (1,2) .. (5,6); a pair holds together when the lines differ.
    #[must_use]
    pub fn holding_pairs(self) -> [LinePair; 5] {
        core::array::from_fn(|i| LinePair {
            a: i + 1,
            b: i + 2,
            linked: self.0[i] != self.0[i + 1],
        })
    }

    /// Pairs (1,4) (2,5) (3,6); a pair corresponds when the lines differ.
    #[must_use]
    pub fn correspondence_pairs(self) -> [LinePair; 3] {
        core::array::from_fn(|i| LinePair {
            a: i + 1,
            b: i + 4,
            linked: self.0[i] != self.0[i + 3],
        })
    }

    /// Every line complemented.
    #[must_use]
    pub const fn complement(self) -> Self {
        Self::from_value(!self.value() & 0b11_1111)
    }

    /// Lines read top to bottom.
    #[must_use]
    pub const fn reverse(self) -> Self {
        let b = self.0;
        Self([b[5], b[4], b[3], b[2], b[1], b[0]])
    }
}

impl fmt::Debug for Lines {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Lines({self})")
    }
}

impl fmt::Display for Lines {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in self.0 {
            write!(f, "{b}")?;
        }
        Ok(())
    }
}

impl From<[u8; 6]> for Lines {
    fn from(bits: [u8; 6]) -> Self {
        Self::new(bits)
    }
}

impl From<Lines> for [u8; 6] {
    fn from(lines: Lines) -> Self {
        lines.0
    }
}

/// The five nuclear windows.
///
/// Each window lists six 1-based line positions; see
/// [`nuclear_from_pattern`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NuclearWindow {
    /// Lines 2-3-4 and 3-4-5.
    First,
    /// Lines 1-2-3 and 2-3-4.
    Second,
    /// Lines 3-4-5 and 4-5-6.
    Third,
    /// Lines 1-2-3 and 3-4-5.
    Fourth,
    /// Lines 2-3-4 and 4-5-6.
    Fifth,
}

impl NuclearWindow {
    /// All windows in order.
    pub const ALL: [Self; 5] = [
        Self::First,
        Self::Second,
        Self::Third,
        Self::Fourth,
        Self::Fifth,
    ];

    /// The six gathered positions.
    #[must_use]
    pub const fn positions(self) -> [usize; 6] {
        match self {
            Self::First => [2, 3, 4, 3, 4, 5],
            Self::Second => [1, 2, 3, 2, 3, 4],
            Self::Third => [3, 4, 5, 4, 5, 6],
            Self::Fourth => [1, 2, 3, 3, 4, 5],
            Self::Fifth => [2, 3, 4, 4, 5, 6],
        }
    }
}

/// Gathers the window's six positions, reverses their order, and returns
/// the result as a new line vector.
///
/// ```
/// use iching::lines::{nuclear_from_pattern, Lines, NuclearWindow};
///
/// let l = Lines::new([1, 0, 0, 0, 1, 0]);
/// // gathered [0,0,0, 0,0,1] → reversed [1,0,0, 0,0,0]
/// assert_eq!(nuclear_from_pattern(l, NuclearWindow::First).bits(), [1, 0, 0, 0, 0, 0]);
/// ```
#[must_use]
pub fn nuclear_from_pattern(lines: Lines, window: NuclearWindow) -> Lines {
    let bits = lines.bits();
    let positions = window.positions();
    Lines(core::array::from_fn(|k| bits[positions[5 - k] - 1]))
}

/// Barber-pole rotation: line 6 moves to the bottom, all others shift up.
///
/// ```
/// use iching::lines::{rotate, Lines};
///
/// let l = Lines::from_binary("111010").unwrap();
/// assert_eq!(rotate(l).to_string(), "011101");
/// ```
#[must_use]
pub const fn rotate(lines: Lines) -> Lines {
    let b = lines.0;
    Lines([b[5], b[0], b[1], b[2], b[3], b[4]])
}

/// Complements the lines selected by `mask` (index 0 = line 1).
#[must_use]
pub const fn flip_mask(lines: Lines, mask: [bool; 6]) -> Lines {
    let mut b = lines.0;
    let mut i = 0;
    while i < 6 {
        if mask[i] {
            b[i] ^= 1;
        }
        i += 1;
    }
    Lines(b)
}

/// Complements the lines at the given 1-based positions.
///
/// Repeated positions flip once per occurrence.
///
/// # Errors
///
/// Returns [`Error::LineNumber`] for any position outside 1..=6.
///
/// ```
/// use iching::lines::{flip_lines, Lines};
///
/// let l = Lines::new([0; 6]);
/// assert_eq!(flip_lines(l, &[1, 6]).unwrap().bits(), [1, 0, 0, 0, 0, 1]);
/// assert!(flip_lines(l, &[7]).is_err());
/// ```
pub fn flip_lines(lines: Lines, positions: &[usize]) -> Result<Lines> {
    let mut b = lines.0;
    for &p in positions {
        if !(1..=6).contains(&p) {
            return Err(Error::LineNumber(p));
        }
        b[p - 1] ^= 1;
    }
    Ok(Lines(b))
}

/// Mask selecting the lines `from..=to` (1-based) that fall within 1..=6.
#[must_use]
pub(crate) fn span_mask(from: usize, to: usize) -> [bool; 6] {
    core::array::from_fn(|i| (from..=to).contains(&(i + 1)))
}
