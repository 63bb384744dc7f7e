//! Line positions: the fixed role and domain of each of the six places.
//!
//! Lines 1-2 belong to Earth, 3-4 to Man and 5-6 to Heaven. The table
//! carries no algebraic weight; it exists for labelling.

use crate::error::{Error, Result};
use core::fmt;

/// One of the three powers a pair of lines belongs to.
///
/// # Example
///
/// ```
/// use iching::{line_info, LineDomain};
///
/// assert_eq!(line_info(5).unwrap().domain, LineDomain::Heaven);
/// assert_eq!(LineDomain::Man.name(), "Man");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LineDomain {
    /// Lines 1 and 2.
    Earth,
    /// Lines 3 and 4.
    Man,
    /// Lines 5 and 6.
    Heaven,
}

impl LineDomain {
    /// All domains bottom to top.
    pub const ALL: [Self; 3] = [Self::Earth, Self::Man, Self::Heaven];

    /// Returns the display name.
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Earth => "Earth",
            Self::Man => "Man",
            Self::Heaven => "Heaven",
        }
    }
}

impl fmt::Display for LineDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Role and domain for one line position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LineInfo {
    /// Traditional role title.
    pub role: &'static str,
    /// Power the position belongs to.
    pub domain: LineDomain,
}

/// Positions 1 (bottom) through 6 (top), indexed by `line - 1`.
pub const LINE_INFO: [LineInfo; 6] = [
    LineInfo {
        role: "Common-man",
        domain: LineDomain::Earth,
    },
    LineInfo {
        role: "The Great Official",
        domain: LineDomain::Earth,
    },
    LineInfo {
        role: "Transitional",
        domain: LineDomain::Man,
    },
    LineInfo {
        role: "Minister/Advisor",
        domain: LineDomain::Man,
    },
    LineInfo {
        role: "The Ruler",
        domain: LineDomain::Heaven,
    },
    LineInfo {
        role: "The Sage",
        domain: LineDomain::Heaven,
    },
];

/// Returns the role/domain metadata for a 1-based line number.
///
/// # Errors
///
/// Returns [`Error::LineNumber`] unless `1 <= line <= 6`.
///
/// ```
/// use iching::line_info;
///
/// assert_eq!(line_info(1).unwrap().role, "Common-man");
/// assert!(line_info(7).is_err());
/// ```
pub fn line_info(line: usize) -> Result<LineInfo> {
    match line {
        1..=6 => Ok(LINE_INFO[line - 1]),
        _ => Err(Error::LineNumber(line)),
    }
}
