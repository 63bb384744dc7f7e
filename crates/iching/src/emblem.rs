//! Emblems - the four two-line digrams formed by adjacent lines.

use crate::error::{Error, Result};
use crate::hexagram::Hexagram;
use core::fmt;

/// Default separator for [`Hexagram::render_emblems`].
pub const EMBLEM_SEPARATOR: &str = " | ";

/// Default arrow between a moving emblem and its target.
pub const EMBLEM_ARROW: &str = " → ";

/// One of the four digrams.
///
/// # Example
///
/// ```
/// use iching::Emblem;
///
/// let e = Emblem::from_bits(1, 0);
/// assert_eq!(e, Emblem::LittleYang);
/// assert_eq!(e.glyph(), '⚍');
/// assert_eq!(e.binary(), "10");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Emblem {
    /// `11`
    GreatYang,
    /// `10`
    LittleYang,
    /// `00`
    GreatYin,
    /// `01`
    LittleYin,
}

impl Emblem {
    /// Classifies two line bits, lower line first.
    #[must_use]
    pub const fn from_bits(lower: u8, upper: u8) -> Self {
        match (lower != 0, upper != 0) {
            (true, true) => Self::GreatYang,
            (true, false) => Self::LittleYang,
            (false, false) => Self::GreatYin,
            (false, true) => Self::LittleYin,
        }
    }

    /// The two bits, lower line first.
    #[must_use]
    pub const fn binary(self) -> &'static str {
        match self {
            Self::GreatYang => "11",
            Self::LittleYang => "10",
            Self::GreatYin => "00",
            Self::LittleYin => "01",
        }
    }

    /// Unicode digram symbol.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::GreatYang => '⚌',
            Self::LittleYang => '⚍',
            Self::GreatYin => '⚏',
            Self::LittleYin => '⚎',
        }
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::GreatYang => "Great Yang (Old Yang)",
            Self::LittleYang => "Little Yang (Young Yang)",
            Self::GreatYin => "Great Yin (Old Yin)",
            Self::LittleYin => "Little Yin (Young Yin)",
        }
    }

    fn pick(self, style: EmblemStyle) -> String {
        match style {
            EmblemStyle::Glyph => self.glyph().to_string(),
            EmblemStyle::Binary => self.binary().to_owned(),
            EmblemStyle::Name => self.name().to_owned(),
        }
    }
}

impl fmt::Display for Emblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// How [`Hexagram::render_emblems`] prints each emblem.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum EmblemStyle {
    /// `⚌`
    #[default]
    Glyph,
    /// `11`
    Binary,
    /// `Great Yang (Old Yang)`
    Name,
}

/// The emblem at one adjacent-line pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EmblemReading {
    /// 1-based line numbers `(i, i + 1)`.
    pub pair: (usize, usize),
    /// Emblem in the hexagram itself.
    pub from: Emblem,
    /// Emblem in the target hexagram, when draws are attached.
    pub to: Option<Emblem>,
}

impl EmblemReading {
    /// Whether the pair changes on the way to the target.
    #[must_use]
    pub fn changed(&self) -> bool {
        self.to.is_some_and(|to| to != self.from)
    }
}

impl Hexagram {
    /// Emblem for lines `(i, i + 1)`, with the target's emblem when draws
    /// are attached.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmblemPair`] unless `1 <= i <= 5`.
    ///
    /// ```
    /// use iching::{Emblem, Hexagram};
    ///
    /// let h = Hexagram::from_binary("100010").unwrap();
    /// assert_eq!(h.emblem_at(1).unwrap().from, Emblem::LittleYang);
    /// assert!(h.emblem_at(6).is_err());
    /// ```
    pub fn emblem_at(&self, i: usize) -> Result<EmblemReading> {
        if !(1..=5).contains(&i) {
            return Err(Error::EmblemPair(i));
        }
        Ok(self.emblems()[i - 1])
    }

    /// All five emblems, pairs (1,2) through (5,6).
    #[must_use]
    pub fn emblems(&self) -> [EmblemReading; 5] {
        let bits = self.lines().bits();
        let target = self.target().ok().map(|t| t.lines().bits());
        core::array::from_fn(|i| EmblemReading {
            pair: (i + 1, i + 2),
            from: Emblem::from_bits(bits[i], bits[i + 1]),
            to: target.map(|t| Emblem::from_bits(t[i], t[i + 1])),
        })
    }

    /// Renders the five emblems; moving readings print `from{arrow}to`.
    ///
    /// ```
    /// use iching::emblem::{EMBLEM_ARROW, EMBLEM_SEPARATOR};
    /// use iching::{EmblemStyle, Hexagram};
    ///
    /// let h = Hexagram::from_binary("111111").unwrap();
    /// assert_eq!(
    ///     h.render_emblems(EmblemStyle::Binary, EMBLEM_SEPARATOR, EMBLEM_ARROW),
    ///     "11 | 11 | 11 | 11 | 11"
    /// );
    ///
    /// let k = h.with_draws(&[1, 4, 4, 4, 4, 4]).unwrap();
    /// assert_eq!(
    ///     k.render_emblems(EmblemStyle::Glyph, " ", "→"),
    ///     "⚌→⚎ ⚌→⚌ ⚌→⚌ ⚌→⚌ ⚌→⚌"
    /// );
    /// ```
    #[must_use]
    pub fn render_emblems(&self, style: EmblemStyle, separator: &str, arrow: &str) -> String {
        self.emblems()
            .iter()
            .map(|e| match e.to {
                Some(to) => format!("{}{arrow}{}", e.from.pick(style), to.pick(style)),
                None => e.from.pick(style),
            })
            .collect::<Vec<_>>()
            .join(separator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bits_covers_all() {
        assert_eq!(Emblem::from_bits(1, 1), Emblem::GreatYang);
        assert_eq!(Emblem::from_bits(1, 0), Emblem::LittleYang);
        assert_eq!(Emblem::from_bits(0, 0), Emblem::GreatYin);
        assert_eq!(Emblem::from_bits(0, 1), Emblem::LittleYin);
    }

    #[test]
    fn test_declared_has_no_target() {
        let h = Hexagram::from_number(3).unwrap();
        for e in h.emblems() {
            assert!(e.to.is_none());
            assert!(!e.changed());
        }
    }

    #[test]
    fn test_kinetic_changes() {
        // 100010 with line 1 moving: target 000010
        let h = Hexagram::from_number(3)
            .unwrap()
            .with_draws(&[1, 7, 7, 7, 7, 7])
            .unwrap();
        let first = h.emblem_at(1).unwrap();
        assert_eq!(first.pair, (1, 2));
        assert_eq!(first.from, Emblem::LittleYang);
        assert_eq!(first.to, Some(Emblem::GreatYin));
        assert!(first.changed());
        assert!(!h.emblem_at(2).unwrap().changed());
    }

    #[test]
    fn test_bounds() {
        let h = Hexagram::from_number(1).unwrap();
        assert_eq!(h.emblem_at(0), Err(Error::EmblemPair(0)));
        assert_eq!(h.emblem_at(6), Err(Error::EmblemPair(6)));
    }

    #[test]
    fn test_render_defaults() {
        let h = Hexagram::from_binary("100000")
            .unwrap()
            .with_kinetics([true, false, false, false, false, false]);
        assert_eq!(
            h.render_emblems(EmblemStyle::Binary, EMBLEM_SEPARATOR, EMBLEM_ARROW),
            "10 → 00 | 00 → 00 | 00 → 00 | 00 → 00 | 00 → 00"
        );
    }

    #[test]
    fn test_render_names() {
        let h = Hexagram::from_binary("000000").unwrap();
        assert_eq!(
            h.render_emblems(EmblemStyle::Name, ", ", "->"),
            ["Great Yin (Old Yin)"; 5].join(", ")
        );
    }
}
