//! Property-based tests for the notation codec.

use iching::lines::Lines;
use iching::{Hexagram, Notation, ParseFormat, RenderOptions};
use proptest::prelude::*;

fn notation() -> impl Strategy<Value = Notation> {
    prop::sample::select(Notation::ALL.to_vec())
}

fn separator() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["", " ", ",", ", ", " | ", "/", "-", "_"])
}

proptest! {
    /// Rendering then parsing with the same notation restores lines and
    /// moving flags
    #[test]
    fn prop_exact_roundtrip(
        value in 0u8..64,
        mask in prop::array::uniform6(any::<bool>()),
        n in notation(),
        sep in separator(),
        tri in separator(),
    ) {
        let h = Hexagram::from_lines(Lines::from_value(value)).with_kinetics(mask);
        let opts = RenderOptions::new().with_separator(sep).with_trigram_separator(tri);
        let text = h.render(n, &opts);
        let parsed = Hexagram::parse(&text, ParseFormat::Exact(n)).unwrap();
        prop_assert_eq!(parsed, h);
    }

    /// Auto-detection reads everything the renderer writes
    #[test]
    fn prop_auto_roundtrip(
        value in 0u8..64,
        mask in prop::array::uniform6(any::<bool>()),
        n in notation(),
        sep in separator(),
    ) {
        let h = Hexagram::from_lines(Lines::from_value(value)).with_kinetics(mask);
        let text = h.render(n, &RenderOptions::new().with_separator(sep));
        let parsed: Hexagram = text.parse().unwrap();
        prop_assert_eq!(parsed.lines(), h.lines());
        prop_assert_eq!(parsed.moving_lines().unwrap(), mask);
    }

    /// Parsing never panics on arbitrary input
    #[test]
    fn prop_parse_total(text in ".{0,40}") {
        let _ = Hexagram::parse(&text, ParseFormat::Auto);
        for n in Notation::ALL {
            let _ = Hexagram::parse(&text, ParseFormat::Exact(n));
        }
    }
}
