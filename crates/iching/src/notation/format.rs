//! The six notations and their token tables.

use crate::error::{Error, Result};
use crate::hexagram::LineState;
use core::fmt;
use core::str::FromStr;

/// A textual notation for the six line states.
///
/// Each notation is a bijection between [`LineState`] and a token:
///
/// | notation | static yang | moving yang | static yin | moving yin |
/// |----------|-------------|-------------|------------|------------|
/// | binary | `1` | `1*` | `0` | `0*` |
/// | glyph | `⚊` | `⚊*` | `⚋` | `⚋*` |
/// | 9876 | `7` | `9` | `8` | `6` |
/// | hanzi | `阳` | `阳*` | `阴` | `阴*` |
/// | shortStrength | `Strong` | `Strong*` | `Weak` | `Weak*` |
/// | longStrength | `Strong` | `Strong→Weak` | `Weak` | `Weak→Strong` |
///
/// # Example
///
/// ```
/// use iching::{LineState, Notation};
///
/// let n: Notation = "9876".parse().unwrap();
/// assert_eq!(n, Notation::NineEightSevenSix);
/// assert_eq!(n.encode(LineState::MovingYang), "9");
/// assert_eq!(n.decode("6").unwrap(), LineState::MovingYin);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Notation {
    /// `1`, `1*`, `0`, `0*`
    Binary,
    /// `⚊`, `⚊*`, `⚋`, `⚋*`
    Glyph,
    /// `7`, `9`, `8`, `6`
    #[cfg_attr(feature = "serde", serde(rename = "9876"))]
    NineEightSevenSix,
    /// `阳`, `阳*`, `阴`, `阴*`
    Hanzi,
    /// `Strong`, `Strong*`, `Weak`, `Weak*`
    ShortStrength,
    /// `Strong`, `Strong→Weak`, `Weak`, `Weak→Strong`
    LongStrength,
}

impl Notation {
    /// All notations.
    pub const ALL: [Self; 6] = [
        Self::Binary,
        Self::Glyph,
        Self::NineEightSevenSix,
        Self::Hanzi,
        Self::ShortStrength,
        Self::LongStrength,
    ];

    /// Canonical name, as accepted by [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Binary => "binary",
            Self::Glyph => "glyph",
            Self::NineEightSevenSix => "9876",
            Self::Hanzi => "hanzi",
            Self::ShortStrength => "shortStrength",
            Self::LongStrength => "longStrength",
        }
    }

    /// Tokens in [`LineState::ALL`] order.
    #[must_use]
    pub const fn tokens(self) -> [&'static str; 4] {
        match self {
            Self::Binary => ["1", "1*", "0", "0*"],
            Self::Glyph => ["⚊", "⚊*", "⚋", "⚋*"],
            Self::NineEightSevenSix => ["7", "9", "8", "6"],
            Self::Hanzi => ["阳", "阳*", "阴", "阴*"],
            Self::ShortStrength => ["Strong", "Strong*", "Weak", "Weak*"],
            Self::LongStrength => ["Strong", "Strong→Weak", "Weak", "Weak→Strong"],
        }
    }

    /// The yang and yin line characters for single-character notations.
    pub(crate) const fn line_chars(self) -> Option<(char, char)> {
        match self {
            Self::Binary => Some(('1', '0')),
            Self::Glyph => Some(('⚊', '⚋')),
            Self::Hanzi => Some(('阳', '阴')),
            _ => None,
        }
    }

    /// Token for one line state.
    #[inline]
    #[must_use]
    pub const fn encode(self, state: LineState) -> &'static str {
        self.tokens()[state.index()]
    }

    /// Line state for one token.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidToken`] if `token` is not in this notation.
    pub fn decode(self, token: &str) -> Result<LineState> {
        self.tokens()
            .iter()
            .position(|&t| t == token)
            .map(|i| LineState::ALL[i])
            .ok_or_else(|| Error::InvalidToken {
                format: self.name(),
                token: token.to_owned(),
            })
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Notation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|n| n.name() == s)
            .ok_or_else(|| Error::UnknownFormat(s.to_owned()))
    }
}

/// Which notation [`parse`](crate::notation::parse) should read.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ParseFormat {
    /// Detect the notation from the input.
    #[default]
    Auto,
    /// Read exactly this notation.
    Exact(Notation),
}

impl From<Notation> for ParseFormat {
    fn from(n: Notation) -> Self {
        Self::Exact(n)
    }
}

impl fmt::Display for ParseFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => f.write_str("auto"),
            Self::Exact(n) => n.fmt(f),
        }
    }
}

impl FromStr for ParseFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s == "auto" {
            Ok(Self::Auto)
        } else {
            s.parse().map(Self::Exact)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_bijective() {
        for n in Notation::ALL {
            for state in LineState::ALL {
                assert_eq!(n.decode(n.encode(state)), Ok(state), "{n}");
            }
        }
    }

    #[test]
    fn test_names_roundtrip() {
        for n in Notation::ALL {
            assert_eq!(n.name().parse::<Notation>(), Ok(n));
            assert_eq!(n.name().parse::<ParseFormat>(), Ok(ParseFormat::Exact(n)));
        }
        assert_eq!("auto".parse::<ParseFormat>(), Ok(ParseFormat::Auto));
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(
            "morse".parse::<Notation>(),
            Err(Error::UnknownFormat("morse".into()))
        );
        assert_eq!(
            "Binary".parse::<ParseFormat>(),
            Err(Error::UnknownFormat("Binary".into()))
        );
    }

    #[test]
    fn test_invalid_token() {
        assert_eq!(
            Notation::NineEightSevenSix.decode("5"),
            Err(Error::InvalidToken {
                format: "9876",
                token: "5".into()
            })
        );
        assert!(Notation::LongStrength.decode("Strong*").is_err());
    }
}
