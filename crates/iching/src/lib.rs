//! I Ching - trigram and hexagram algebra
//!
//! A hexagram is six stacked lines, each yang (unbroken, `1`) or yin
//! (broken, `0`), read bottom to top. The lower three lines form one
//! trigram and the upper three another; the pair identifies one of 64
//! hexagrams in the King Wen sequence.
//!
//! # Bit Convention
//!
//! ```text
//! binary  = lower.binary ++ upper.binary      (line 1 first)
//! value   = lower.bits << 3 | upper.bits      (line 1 is the MSB)
//! trigram index = bits + 1                     (Earth = 1 ... Heaven = 8)
//! ```
//!
//! | Trigram | Binary | Index | Glyph |
//! |---------|--------|-------|-------|
//! | Earth | 000 | 1 | ☷ |
//! | Thunder | 100 | 5 | ☳ |
//! | Water | 010 | 3 | ☵ |
//! | Heaven | 111 | 8 | ☰ |
//!
//! # Moving Lines
//!
//! A cast attaches one draw (1..=8) per line. Yang lines move on draws
//! 1..=3, yin lines only on 8. Changing every moving line yields the
//! *target* hexagram.
//!
//! # Example
//!
//! ```
//! use iching::{Hexagram, Notation, RenderOptions};
//!
//! let h = Hexagram::from_binary("100010").unwrap();
//! assert_eq!(h.to_string(), "03 ䷂ Sprouting");
//!
//! let cast = h.with_draws(&[1, 7, 7, 7, 7, 7]).unwrap();
//! assert_eq!(cast.target().unwrap().name(), "Alliance");
//! assert_eq!(cast.render(Notation::Binary, &RenderOptions::default()), "1*00010");
//!
//! // Derived hexagrams
//! assert_eq!(h.opposite().binary(), "011101");
//! assert_eq!(h.inverse().number(), 4);
//! assert_eq!(h.nuclear().number(), 24);
//! assert_eq!(h.story().len(), 13);
//! ```
//!
//! # Design Principles
//!
//! - **Value Types**: every hexagram is a small `Copy` value; derivations
//!   return new values
//! - **Total Tables**: the trigram-pair table is checked for bijectivity at
//!   compile time
//! - **Errors at the Boundary**: invalid indices, draws and notation input
//!   are rejected with a typed [`Error`]

// Static tables (trigrams, hexagrams, line positions)
mod core;

// Six-line vectors and pure line transforms
pub mod lines;

// Hexagram identity, draws and moving lines
pub mod hexagram;

// Opposite, inverse, nuclear, cycle, flower and story
pub mod derive;

// Two-line digrams
pub mod emblem;

// Textual notations
pub mod notation;

mod error;

// Re-export table modules for external access
pub use crate::core::position;
pub use crate::core::table;
pub use crate::core::trigram;

// Re-export core types at crate root
pub use crate::core::position::{line_info, LineDomain, LineInfo, LINE_INFO};
pub use crate::core::table::{HexagramInfo, HEXAGRAMS};
pub use crate::core::trigram::{Trigram, TrigramInfo, TRIGRAMS};
pub use derive::{Flower, STORY_LEN};
pub use emblem::{Emblem, EmblemReading, EmblemStyle};
pub use error::{Error, ErrorKind, Result};
pub use hexagram::{Draws, Hexagram, LineState};
pub use lines::{LinePair, Lines, NuclearWindow};
pub use notation::{Notation, ParseFormat, RenderOptions};

/// Common imports.
///
/// ```
/// use iching::prelude::*;
///
/// let h: Hexagram = "⚊⚋⚋⚋⚊⚋".parse().unwrap();
/// assert_eq!(h.lower(), Trigram::new(5).unwrap());
/// ```
pub mod prelude {
    pub use crate::{
        Draws, Emblem, EmblemStyle, Error, ErrorKind, Hexagram, LineState, Lines, Notation,
        ParseFormat, RenderOptions, Result, Trigram,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_is_lower_then_upper() {
        for h in Hexagram::all() {
            let expected = (h.lower().bits() << 3) | h.upper().bits();
            assert_eq!(h.decimal_value(), expected);
            assert_eq!(
                h.binary(),
                format!("{}{}", h.lower().binary(), h.upper().binary())
            );
        }
    }

    #[test]
    fn test_binary_identifies_hexagram() {
        for h in Hexagram::all() {
            assert_eq!(Hexagram::from_binary(&h.binary()), Ok(h));
            assert_eq!(Hexagram::from_number(h.number()), Ok(h));
        }
    }

    #[test]
    fn test_target_of_static_cast_is_self() {
        for h in Hexagram::all() {
            let cast = h.with_kinetics([false; 6]);
            assert_eq!(cast.target(), Ok(h));
        }
    }

    #[test]
    fn test_target_of_all_moving_is_opposite() {
        for h in Hexagram::all() {
            let cast = h.with_kinetics([true; 6]);
            assert_eq!(cast.target(), Ok(h.opposite()));
        }
    }
}
