//! HexagramTable - the 64 canonical hexagrams keyed by trigram pair.
//!
//! The table is stored in King Wen order (number 1..64). A second table,
//! indexed by `(lower - 1, upper - 1)`, is computed at compile time and the
//! build fails if the 64 entries are not a bijection over the 8×8 trigram
//! pairs. Lookups from a pair of [`Trigram`]s are therefore infallible.
//!
//! # Example
//!
//! ```
//! use iching::table;
//!
//! let heaven = table::lookup(8, 8).unwrap();
//! assert_eq!(heaven.number, 1);
//! assert_eq!(heaven.textual_number(), "01");
//! assert_eq!(heaven.name, "Heaven");
//!
//! assert!(table::lookup(0, 9).is_err());
//! ```

use super::trigram::Trigram;
use crate::error::{Error, Result};

/// Static record for one hexagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexagramInfo {
    /// Lower trigram index (1-8).
    pub lower: u8,
    /// Upper trigram index (1-8).
    pub upper: u8,
    /// King Wen sequence number (1-64).
    pub number: u8,
    /// English name.
    pub name: &'static str,
    /// Unicode hexagram symbol (U+4DC0-U+4DFF).
    pub glyph: char,
}

impl HexagramInfo {
    /// Returns the two-digit sequence number, e.g. `"01"`.
    #[must_use]
    pub fn textual_number(&self) -> String {
        format!("{:02}", self.number)
    }
}

const fn entry(lower: u8, upper: u8, number: u8, name: &'static str, glyph: char) -> HexagramInfo {
    HexagramInfo {
        lower,
        upper,
        number,
        name,
        glyph,
    }
}

#[rustfmt::skip]
const KING_WEN: [HexagramInfo; 64] = [
    entry(8, 8, 1, "Heaven", '䷀'),
    entry(1, 1, 2, "Earth", '䷁'),
    entry(5, 3, 3, "Sprouting", '䷂'),
    entry(3, 2, 4, "The Young Shoot", '䷃'),
    entry(8, 3, 5, "Getting Wet", '䷄'),
    entry(3, 8, 6, "Grievance", '䷅'),
    entry(3, 1, 7, "An Army", '䷆'),
    entry(1, 3, 8, "Alliance", '䷇'),
    entry(8, 4, 9, "Small Restraint / Small Accumulation", '䷈'),
    entry(7, 8, 10, "Treading", '䷉'),
    entry(8, 1, 11, "Peace / Flowing", '䷊'),
    entry(1, 8, 12, "Standstill", '䷋'),
    entry(6, 8, 13, "Companions", '䷌'),
    entry(8, 6, 14, "Great Possessions", '䷍'),
    entry(2, 1, 15, "Modesty", '䷎'),
    entry(1, 5, 16, "Contentment", '䷏'),
    entry(5, 7, 17, "The Chase", '䷐'),
    entry(4, 2, 18, "Illness / Decay", '䷑'),
    entry(7, 1, 19, "Authority Approaches", '䷒'),
    entry(1, 4, 20, "Observing", '䷓'),
    entry(5, 6, 21, "Biting Through", '䷔'),
    entry(6, 2, 22, "Adornment", '䷕'),
    entry(1, 2, 23, "Falling", '䷖'),
    entry(5, 1, 24, "Return", '䷗'),
    entry(5, 8, 25, "No Error / No Expectations", '䷘'),
    entry(8, 2, 26, "Big Restraint", '䷙'),
    entry(5, 2, 27, "Bulging Cheeks", '䷚'),
    entry(4, 7, 28, "Big in Excess", '䷛'),
    entry(3, 3, 29, "Water", '䷜'),
    entry(6, 6, 30, "Fire", '䷝'),
    entry(2, 7, 31, "Mutual Influence", '䷞'),
    entry(4, 5, 32, "Constancy", '䷟'),
    entry(2, 8, 33, "The Piglet", '䷠'),
    entry(8, 5, 34, "Big Uses Force", '䷡'),
    entry(1, 6, 35, "Advance", '䷢'),
    entry(6, 1, 36, "The Bright (Calling) Pheasant", '䷣'),
    entry(6, 4, 37, "The Family", '䷤'),
    entry(7, 6, 38, "Estrangement", '䷥'),
    entry(2, 3, 39, "Obstruction", '䷦'),
    entry(3, 5, 40, "Obstruction Removed", '䷧'),
    entry(7, 2, 41, "Decrease", '䷨'),
    entry(5, 4, 42, "Increase", '䷩'),
    entry(8, 7, 43, "Decisive", '䷪'),
    entry(4, 8, 44, "Meeting / Subjugated", '䷫'),
    entry(1, 7, 45, "Gathering Together", '䷬'),
    entry(4, 1, 46, "Pushing Upwards", '䷭'),
    entry(3, 7, 47, "Burdened / Exhausted", '䷮'),
    entry(4, 3, 48, "A Well", '䷯'),
    entry(6, 7, 49, "Revolution", '䷰'),
    entry(4, 6, 50, "The Ritual Caldron", '䷱'),
    entry(5, 5, 51, "Thunder", '䷲'),
    entry(2, 2, 52, "Mountain", '䷳'),
    entry(2, 4, 53, "Gradual Advance", '䷴'),
    entry(7, 5, 54, "A Maiden Marries", '䷵'),
    entry(6, 5, 55, "Abundance", '䷶'),
    entry(2, 6, 56, "The Traveler", '䷷'),
    entry(4, 4, 57, "Wind", '䷸'),
    entry(7, 7, 58, "Lake", '䷹'),
    entry(3, 4, 59, "Flood / Dispersion", '䷺'),
    entry(7, 3, 60, "Restraint (Regulations)", '䷻'),
    entry(7, 4, 61, "Inmost Sincerity (Allegiance)", '䷼'),
    entry(2, 5, 62, "Small in Excess", '䷽'),
    entry(6, 3, 63, "Already Across the River", '䷾'),
    entry(3, 6, 64, "Not Yet Across the River", '䷿'),
];

/// All 64 hexagrams in King Wen order (`HEXAGRAMS[n - 1].number == n`).
pub static HEXAGRAMS: [HexagramInfo; 64] = KING_WEN;

/// `BY_PAIR[lower - 1][upper - 1]` = position of the hexagram in [`HEXAGRAMS`].
static BY_PAIR: [[u8; 8]; 8] = {
    let mut table = [[u8::MAX; 8]; 8];
    let mut i = 0usize;
    while i < 64 {
        let e = &KING_WEN[i];
        assert!(e.number as usize == i + 1, "hexagram table out of order");
        assert!(
            e.lower >= 1 && e.lower <= 8 && e.upper >= 1 && e.upper <= 8,
            "trigram index out of range"
        );
        let (l, u) = ((e.lower - 1) as usize, (e.upper - 1) as usize);
        assert!(table[l][u] == u8::MAX, "duplicate trigram pair");
        table[l][u] = i as u8;
        i += 1;
    }
    table
};

/// Returns the hexagram formed by `lower` below `upper`.
///
/// Total over all 64 pairs.
#[inline]
#[must_use]
pub fn entry_for(lower: Trigram, upper: Trigram) -> &'static HexagramInfo {
    let slot = BY_PAIR[(lower.index() - 1) as usize][(upper.index() - 1) as usize];
    &HEXAGRAMS[slot as usize]
}

/// Looks up a hexagram by raw trigram indices.
///
/// # Errors
///
/// Returns [`Error::UnknownPair`] if either index is outside 1..=8.
pub fn lookup(lower: u8, upper: u8) -> Result<&'static HexagramInfo> {
    match (Trigram::new(lower), Trigram::new(upper)) {
        (Ok(l), Ok(u)) => Ok(entry_for(l, u)),
        _ => Err(Error::UnknownPair {
            lower: u32::from(lower),
            upper: u32::from(upper),
        }),
    }
}

/// Looks up a hexagram by its King Wen number.
///
/// # Errors
///
/// Returns [`Error::HexagramNumber`] unless `1 <= number <= 64`.
pub fn by_number(number: u8) -> Result<&'static HexagramInfo> {
    match number {
        1..=64 => Ok(&HEXAGRAMS[(number - 1) as usize]),
        _ => Err(Error::HexagramNumber(u32::from(number))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_is_total() {
        let mut numbers = HashSet::new();
        for l in Trigram::all() {
            for u in Trigram::all() {
                let e = entry_for(l, u);
                assert_eq!((e.lower, e.upper), (l.index(), u.index()));
                numbers.insert(e.number);
            }
        }
        assert_eq!(numbers.len(), 64);
    }

    #[test]
    fn test_glyphs_follow_king_wen_order() {
        for e in &HEXAGRAMS {
            assert_eq!(e.glyph as u32, 0x4DC0 + u32::from(e.number) - 1);
        }
    }

    #[test]
    fn test_key_entries() {
        assert_eq!(lookup(8, 8).map(|e| e.name), Ok("Heaven"));
        assert_eq!(lookup(1, 1).map(|e| e.name), Ok("Earth"));
        assert_eq!(lookup(3, 6).map(|e| e.number), Ok(64));
        assert_eq!(by_number(11).map(|e| (e.lower, e.upper)), Ok((8, 1)));
    }

    #[test]
    fn test_lookup_errors() {
        assert_eq!(
            lookup(0, 3),
            Err(Error::UnknownPair { lower: 0, upper: 3 })
        );
        assert_eq!(by_number(0), Err(Error::HexagramNumber(0)));
        assert_eq!(by_number(65), Err(Error::HexagramNumber(65)));
    }

    #[test]
    fn test_textual_number() {
        assert_eq!(HEXAGRAMS[0].textual_number(), "01");
        assert_eq!(HEXAGRAMS[63].textual_number(), "64");
    }
}
