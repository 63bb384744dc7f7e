//! Textual notations for hexagrams.
//!
//! Six notations encode the four line states (static/moving yang/yin). A
//! rendered hexagram is six tokens, bottom to top, joined by a separator,
//! with an optional extra separator between the two trigrams. Parsing
//! accepts any of the six, detected automatically or named explicitly, and
//! restores moving lines as canonical draws.
//!
//! # Example
//!
//! ```
//! use iching::{Hexagram, Notation, ParseFormat, RenderOptions};
//!
//! let h: Hexagram = "9 8 8 8 7 8".parse().unwrap();
//! assert_eq!(h.name(), "Sprouting");
//! assert_eq!(h.target().unwrap().name(), "Alliance");
//!
//! let opts = RenderOptions::new().with_separator(" ");
//! assert_eq!(
//!     h.render(Notation::LongStrength, &opts),
//!     "Strong→Weak Weak Weak Weak Strong Weak"
//! );
//!
//! let again = Hexagram::parse("Strong→Weak Weak Weak Weak Strong Weak", ParseFormat::Auto).unwrap();
//! assert_eq!(again, h);
//! ```

mod codec;
mod format;

pub use codec::{detect, parse, tokenize, RenderOptions};
pub use format::{Notation, ParseFormat};
