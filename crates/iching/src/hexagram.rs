//! Hexagram - two stacked trigrams plus optional per-line draws.
//!
//! A hexagram without draws is *declared*: its identity and line algebra are
//! available, but moving-line queries fail with [`Error::DrawsNotSet`]. A
//! hexagram with draws is *kinetic* and additionally knows which lines move
//! and which hexagram it moves toward ([`Hexagram::target`]).
//!
//! # Moving Lines
//!
//! A draw is a value 1..=8 per line. The rule is asymmetric:
//!
//! | line | moving when |
//! |------|-------------|
//! | yang (1) | draw ∈ {1, 2, 3} |
//! | yin (0)  | draw == 8 |

use crate::core::position::{line_info, LineDomain, LINE_INFO};
use crate::core::table::{self, HexagramInfo};
use crate::core::trigram::Trigram;
use crate::error::{Error, Result};
use crate::lines::{flip_mask, LinePair, Lines};
use core::fmt;

/// Whether a line with bit `bit` moves under draw `draw`.
///
/// ```
/// use iching::hexagram::is_moving;
///
/// assert!(is_moving(1, 3));
/// assert!(!is_moving(1, 4));
/// assert!(is_moving(0, 8));
/// assert!(!is_moving(0, 6));
/// ```
#[inline]
#[must_use]
pub const fn is_moving(bit: u8, draw: u8) -> bool {
    (bit == 1 && draw <= 3) || (bit == 0 && draw == 8)
}

/// The four states a single line can be in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LineState {
    /// Unbroken, not changing.
    StaticYang,
    /// Unbroken, changing to yin.
    MovingYang,
    /// Broken, not changing.
    StaticYin,
    /// Broken, changing to yang.
    MovingYin,
}

impl LineState {
    /// All states in canonical order.
    pub const ALL: [Self; 4] = [
        Self::StaticYang,
        Self::MovingYang,
        Self::StaticYin,
        Self::MovingYin,
    ];

    /// Classifies a line bit and moving flag.
    #[inline]
    #[must_use]
    pub const fn new(bit: u8, moving: bool) -> Self {
        match (bit != 0, moving) {
            (true, false) => Self::StaticYang,
            (true, true) => Self::MovingYang,
            (false, false) => Self::StaticYin,
            (false, true) => Self::MovingYin,
        }
    }

    /// Position in [`LineState::ALL`].
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The line bit (1 = yang).
    #[inline]
    #[must_use]
    pub const fn bit(self) -> u8 {
        match self {
            Self::StaticYang | Self::MovingYang => 1,
            Self::StaticYin | Self::MovingYin => 0,
        }
    }

    /// Whether the line is changing.
    #[inline]
    #[must_use]
    pub const fn is_moving(self) -> bool {
        matches!(self, Self::MovingYang | Self::MovingYin)
    }

    /// A draw value that reproduces this state: yang 3/4, yin 8/7.
    #[inline]
    #[must_use]
    pub const fn canonical_draw(self) -> u8 {
        match self {
            Self::StaticYang => 4,
            Self::MovingYang => 3,
            Self::StaticYin => 7,
            Self::MovingYin => 8,
        }
    }
}

/// Six validated draw values, bottom to top.
///
/// # Example
///
/// ```
/// use iching::Draws;
///
/// let d = Draws::from_slice(&[1, 7, 7, 7, 7, 7]).unwrap();
/// assert_eq!(d.values()[0], 1);
///
/// assert!(Draws::from_slice(&[1, 2, 3]).is_err());
/// assert!(Draws::new([0, 7, 7, 7, 7, 7]).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<u8>", into = "[u8; 6]")
)]
pub struct Draws([u8; 6]);

impl Draws {
    /// Validates six draw values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DrawValue`] for the first value outside 1..=8.
    pub fn new(values: [u8; 6]) -> Result<Self> {
        for (i, &value) in values.iter().enumerate() {
            if !(1..=8).contains(&value) {
                return Err(Error::DrawValue {
                    line: i + 1,
                    value: u32::from(value),
                });
            }
        }
        Ok(Self(values))
    }

    /// Validates a slice of draw values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DrawCount`] unless the slice has six entries, then
    /// as [`Draws::new`].
    pub fn from_slice(values: &[u8]) -> Result<Self> {
        let values: [u8; 6] = values
            .try_into()
            .map_err(|_| Error::DrawCount(values.len()))?;
        Self::new(values)
    }

    /// Canonical draws for a set of line states.
    #[must_use]
    pub fn canonical(states: [LineState; 6]) -> Self {
        Self(states.map(LineState::canonical_draw))
    }

    /// Returns the raw values.
    #[inline]
    #[must_use]
    pub const fn values(self) -> [u8; 6] {
        self.0
    }
}

impl TryFrom<[u8; 6]> for Draws {
    type Error = Error;

    fn try_from(values: [u8; 6]) -> Result<Self> {
        Self::new(values)
    }
}

impl TryFrom<&[u8]> for Draws {
    type Error = Error;

    fn try_from(values: &[u8]) -> Result<Self> {
        Self::from_slice(values)
    }
}

impl TryFrom<Vec<u8>> for Draws {
    type Error = Error;

    fn try_from(values: Vec<u8>) -> Result<Self> {
        Self::from_slice(&values)
    }
}

impl From<Draws> for [u8; 6] {
    fn from(draws: Draws) -> Self {
        draws.0
    }
}

/// A hexagram: lower trigram, upper trigram and optional draws.
///
/// # Example
///
/// ```
/// use iching::{Hexagram, Trigram};
///
/// let h = Hexagram::new(Trigram::new(5).unwrap(), Trigram::new(3).unwrap());
/// assert_eq!(h.textual_number(), "03");
/// assert_eq!(h.name(), "Sprouting");
/// assert_eq!(h.lines().bits(), [1, 0, 0, 0, 1, 0]);
///
/// let cast = h.with_draws(&[1, 7, 7, 7, 7, 7]).unwrap();
/// assert_eq!(cast.moving_lines().unwrap(), [true, false, false, false, false, false]);
/// assert_eq!(cast.target().unwrap().lines().bits(), [0, 0, 0, 0, 1, 0]);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hexagram {
    lower: Trigram,
    upper: Trigram,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    draws: Option<Draws>,
}

impl Hexagram {
    /// Stacks `lower` below `upper`; no draws.
    #[inline]
    #[must_use]
    pub const fn new(lower: Trigram, upper: Trigram) -> Self {
        Self {
            lower,
            upper,
            draws: None,
        }
    }

    /// Builds from raw trigram indices.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TrigramIndex`] if either index is outside 1..=8.
    pub fn from_indices(lower: u8, upper: u8) -> Result<Self> {
        Ok(Self::new(Trigram::new(lower)?, Trigram::new(upper)?))
    }

    /// Builds from a line vector; no draws.
    #[inline]
    #[must_use]
    pub const fn from_lines(lines: Lines) -> Self {
        Self::new(lines.lower(), lines.upper())
    }

    /// Builds from a bottom-to-top bit string such as `"111000"`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBits`] unless the input is six `0`/`1`
    /// characters.
    pub fn from_binary(binary: &str) -> Result<Self> {
        Lines::from_binary(binary).map(Self::from_lines)
    }

    /// Builds from a King Wen number.
    ///
    /// # Errors
    ///
    /// Returns [`Error::HexagramNumber`] unless `1 <= number <= 64`.
    ///
    /// ```
    /// use iching::Hexagram;
    ///
    /// assert_eq!(Hexagram::from_number(64).unwrap().name(), "Not Yet Across the River");
    /// ```
    pub fn from_number(number: u8) -> Result<Self> {
        let info = table::by_number(number)?;
        Self::from_indices(info.lower, info.upper)
    }

    /// Iterates all 64 hexagrams in King Wen order.
    pub fn all() -> impl Iterator<Item = Self> {
        table::HEXAGRAMS.iter().map(|e| {
            Self::new(Trigram::from_bits(e.lower - 1), Trigram::from_bits(e.upper - 1))
        })
    }

    /// Returns a copy carrying `draws`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DrawCount`] or [`Error::DrawValue`] unless `draws`
    /// holds exactly six values in 1..=8.
    pub fn with_draws(self, draws: &[u8]) -> Result<Self> {
        Ok(self.with_checked_draws(Draws::from_slice(draws)?))
    }

    /// Returns a copy carrying already validated draws.
    #[inline]
    #[must_use]
    pub const fn with_checked_draws(self, draws: Draws) -> Self {
        Self {
            draws: Some(draws),
            ..self
        }
    }

    /// Returns a copy without draws.
    #[inline]
    #[must_use]
    pub const fn without_draws(self) -> Self {
        Self::new(self.lower, self.upper)
    }

    /// Returns a copy whose canonical draws make exactly the lines in
    /// `mask` (index 0 = line 1) moving.
    ///
    /// ```
    /// use iching::Hexagram;
    ///
    /// let h = Hexagram::from_binary("100010").unwrap();
    /// let k = h.with_kinetics([false, true, false, false, true, false]);
    /// assert_eq!(k.draws().unwrap().values(), [4, 8, 7, 7, 3, 7]);
    /// ```
    #[must_use]
    pub fn with_kinetics(self, mask: [bool; 6]) -> Self {
        let bits = self.lines().bits();
        let states = core::array::from_fn(|i| LineState::new(bits[i], mask[i]));
        self.with_checked_draws(Draws::canonical(states))
    }

    /// Lower trigram (lines 1-3).
    #[inline]
    #[must_use]
    pub const fn lower(&self) -> Trigram {
        self.lower
    }

    /// Upper trigram (lines 4-6).
    #[inline]
    #[must_use]
    pub const fn upper(&self) -> Trigram {
        self.upper
    }

    /// Draws, if any.
    #[inline]
    #[must_use]
    pub const fn draws(&self) -> Option<Draws> {
        self.draws
    }

    /// Whether draws are attached.
    #[inline]
    #[must_use]
    pub const fn is_kinetic(&self) -> bool {
        self.draws.is_some()
    }

    /// The table record for this hexagram.
    #[inline]
    #[must_use]
    pub fn info(&self) -> &'static HexagramInfo {
        table::entry_for(self.lower, self.upper)
    }

    /// King Wen number (1-64).
    #[must_use]
    pub fn number(&self) -> u8 {
        self.info().number
    }

    /// Two-digit King Wen number, `"01"`..`"64"`.
    #[must_use]
    pub fn textual_number(&self) -> String {
        self.info().textual_number()
    }

    /// English name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.info().name
    }

    /// Unicode hexagram symbol.
    #[must_use]
    pub fn glyph(&self) -> char {
        self.info().glyph
    }

    /// Line vector, bottom to top.
    #[inline]
    #[must_use]
    pub const fn lines(&self) -> Lines {
        Lines::from_trigrams(self.lower, self.upper)
    }

    /// Bottom-to-top bit string (`lower.binary` followed by `upper.binary`).
    #[must_use]
    pub fn binary(&self) -> String {
        self.lines().to_string()
    }

    /// Numeric value of [`binary`](Self::binary).
    #[inline]
    #[must_use]
    pub const fn decimal_value(&self) -> u8 {
        self.lines().value()
    }

    /// Moving flag per line, bottom to top.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DrawsNotSet`] on a hexagram without draws.
    pub fn moving_lines(&self) -> Result<[bool; 6]> {
        let draws = self.draws.ok_or(Error::DrawsNotSet)?.values();
        let bits = self.lines().bits();
        Ok(core::array::from_fn(|i| is_moving(bits[i], draws[i])))
    }

    /// 1-based numbers of the moving lines.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DrawsNotSet`] on a hexagram without draws.
    pub fn moving_line_numbers(&self) -> Result<Vec<usize>> {
        let moving = self.moving_lines()?;
        Ok((1..=6).filter(|&n| moving[n - 1]).collect())
    }

    /// Per-line state; every line is static when no draws are attached.
    #[must_use]
    pub fn line_states(&self) -> [LineState; 6] {
        let moving = self.moving_lines().unwrap_or([false; 6]);
        let bits = self.lines().bits();
        core::array::from_fn(|i| LineState::new(bits[i], moving[i]))
    }

    /// The hexagram reached once every moving line has changed; no draws.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DrawsNotSet`] on a hexagram without draws.
    pub fn target(&self) -> Result<Self> {
        let moving = self.moving_lines()?;
        Ok(Self::from_lines(flip_mask(self.lines(), moving)))
    }

    /// Whether a 1-based line is in its proper place.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LineNumber`] unless `1 <= line <= 6`.
    pub fn is_correct(&self, line: usize) -> Result<bool> {
        self.lines().is_correct(line)
    }

    /// Line numbers in their proper place.
    #[must_use]
    pub fn correct_lines(&self) -> Vec<usize> {
        self.lines().correct_lines()
    }

    /// Line numbers out of their proper place.
    #[must_use]
    pub fn incorrect_lines(&self) -> Vec<usize> {
        self.lines().incorrect_lines()
    }

    /// Adjacent pairs and whether they hold together.
    #[must_use]
    pub fn holding_pairs(&self) -> [LinePair; 5] {
        self.lines().holding_pairs()
    }

    /// Pairs (1,4) (2,5) (3,6) and whether they correspond.
    #[must_use]
    pub fn correspondence_pairs(&self) -> [LinePair; 3] {
        self.lines().correspondence_pairs()
    }

    /// Role title of a 1-based line.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LineNumber`] unless `1 <= line <= 6`.
    pub fn line_role(&self, line: usize) -> Result<&'static str> {
        line_info(line).map(|i| i.role)
    }

    /// Domain of a 1-based line.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LineNumber`] unless `1 <= line <= 6`.
    pub fn line_domain(&self, line: usize) -> Result<LineDomain> {
        line_info(line).map(|i| i.domain)
    }

    /// Role titles bottom to top.
    #[must_use]
    pub fn line_roles(&self) -> [&'static str; 6] {
        LINE_INFO.map(|i| i.role)
    }

    /// Domains bottom to top.
    #[must_use]
    pub fn line_domains(&self) -> [LineDomain; 6] {
        LINE_INFO.map(|i| i.domain)
    }
}

impl From<Lines> for Hexagram {
    fn from(lines: Lines) -> Self {
        Self::from_lines(lines)
    }
}

impl fmt::Debug for Hexagram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = f.debug_struct("Hexagram");
        d.field("number", &self.number())
            .field("name", &self.name())
            .field("lines", &self.lines());
        if let Some(draws) = self.draws {
            d.field("draws", &draws.values());
        }
        d.finish()
    }
}

impl fmt::Display for Hexagram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.textual_number(),
            self.glyph(),
            self.name()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sprouting() -> Hexagram {
        Hexagram::from_indices(5, 3).unwrap()
    }

    #[test]
    fn test_identity_anchors() {
        let heaven = Hexagram::new(Trigram::HEAVEN, Trigram::HEAVEN);
        assert_eq!(heaven.name(), "Heaven");
        assert_eq!(heaven.textual_number(), "01");
        assert_eq!(heaven.binary(), "111111");
        assert_eq!(heaven.decimal_value(), 63);

        let earth = Hexagram::new(Trigram::EARTH, Trigram::EARTH);
        assert_eq!(earth.name(), "Earth");
        assert_eq!(earth.textual_number(), "02");
        assert_eq!(earth.decimal_value(), 0);
    }

    #[test]
    fn test_from_indices_range() {
        assert_eq!(Hexagram::from_indices(0, 1), Err(Error::TrigramIndex(0)));
        assert_eq!(Hexagram::from_indices(1, 9), Err(Error::TrigramIndex(9)));
    }

    #[test]
    fn test_all_in_king_wen_order() {
        let numbers: Vec<u8> = Hexagram::all().map(|h| h.number()).collect();
        assert_eq!(numbers, (1..=64).collect::<Vec<u8>>());
    }

    #[test]
    fn test_draw_validation() {
        let h = sprouting();
        assert_eq!(h.with_draws(&[1, 2, 3]), Err(Error::DrawCount(3)));
        assert_eq!(
            h.with_draws(&[1, 2, 3, 4, 5, 6, 7]),
            Err(Error::DrawCount(7))
        );
        assert_eq!(
            h.with_draws(&[1, 2, 9, 4, 5, 6]),
            Err(Error::DrawValue { line: 3, value: 9 })
        );
        assert_eq!(
            h.with_draws(&[0, 2, 3, 4, 5, 6]),
            Err(Error::DrawValue { line: 1, value: 0 })
        );
        assert!(h.with_draws(&[1, 2, 3, 4, 5, 8]).is_ok());
    }

    #[test]
    fn test_draws_not_set() {
        let h = sprouting();
        assert_eq!(h.moving_lines(), Err(Error::DrawsNotSet));
        assert_eq!(h.target(), Err(Error::DrawsNotSet));
        assert_eq!(h.moving_line_numbers(), Err(Error::DrawsNotSet));
    }

    #[test]
    fn test_sprouting_cast() {
        let h = sprouting().with_draws(&[1, 7, 7, 7, 7, 7]).unwrap();
        assert_eq!(h.lines().bits(), [1, 0, 0, 0, 1, 0]);
        assert_eq!(
            h.moving_lines(),
            Ok([true, false, false, false, false, false])
        );
        assert_eq!(h.moving_line_numbers(), Ok(vec![1]));
        let target = h.target().unwrap();
        assert_eq!(target.lines().bits(), [0, 0, 0, 0, 1, 0]);
        assert!(!target.is_kinetic());
        assert_eq!(target.name(), "Alliance");
    }

    #[test]
    fn test_asymmetric_rule() {
        // yang moves on 1..=3 only
        for d in 1..=8u8 {
            assert_eq!(is_moving(1, d), d <= 3, "yang draw {d}");
            assert_eq!(is_moving(0, d), d == 8, "yin draw {d}");
        }
    }

    #[test]
    fn test_with_kinetics_roundtrip() {
        let mask = [true, false, true, false, false, true];
        for h in Hexagram::all() {
            let k = h.with_kinetics(mask);
            assert_eq!(k.moving_lines(), Ok(mask));
            assert_eq!(k.lines(), h.lines());
        }
    }

    #[test]
    fn test_line_states() {
        let h = sprouting();
        assert_eq!(
            h.line_states(),
            [
                LineState::StaticYang,
                LineState::StaticYin,
                LineState::StaticYin,
                LineState::StaticYin,
                LineState::StaticYang,
                LineState::StaticYin,
            ]
        );
        let k = h.with_draws(&[2, 8, 7, 7, 4, 7]).unwrap();
        assert_eq!(k.line_states()[0], LineState::MovingYang);
        assert_eq!(k.line_states()[1], LineState::MovingYin);
        assert_eq!(k.line_states()[4], LineState::StaticYang);
    }

    #[test]
    fn test_canonical_draws_reproduce_state() {
        for state in LineState::ALL {
            assert_eq!(
                LineState::new(state.bit(), is_moving(state.bit(), state.canonical_draw())),
                state
            );
        }
    }

    #[test]
    fn test_line_labels() {
        let h = sprouting();
        assert_eq!(h.line_role(5), Ok("The Ruler"));
        assert_eq!(h.line_domain(3), Ok(LineDomain::Man));
        assert_eq!(h.line_role(0), Err(Error::LineNumber(0)));
        assert_eq!(h.line_roles()[0], "Common-man");
        assert_eq!(h.line_domains()[5], LineDomain::Heaven);
    }

    #[test]
    fn test_display() {
        assert_eq!(sprouting().to_string(), "03 ䷂ Sprouting");
    }
}
