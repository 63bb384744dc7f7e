//! Static symbol tables.
//!
//! - [`trigram::Trigram`]: the eight three-line symbols
//! - [`table`]: the 64 hexagrams keyed by trigram pair
//! - [`position`]: per-line role and domain labels

pub mod position;
pub mod table;
pub mod trigram;
