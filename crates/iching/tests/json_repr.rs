//! JSON representation of the public value types.

#![cfg(feature = "serde")]

use iching::{Draws, EmblemStyle, Hexagram, Lines, Notation, RenderOptions, Trigram};
use serde_json::json;

#[test]
fn test_hexagram_json() {
    let h = Hexagram::from_number(3).unwrap();
    assert_eq!(serde_json::to_value(h).unwrap(), json!({"lower": 5, "upper": 3}));

    let cast = h.with_draws(&[1, 7, 7, 7, 7, 7]).unwrap();
    let value = serde_json::to_value(cast).unwrap();
    assert_eq!(value["draws"], json!([1, 7, 7, 7, 7, 7]));
    let back: Hexagram = serde_json::from_value(value).unwrap();
    assert_eq!(back, cast);
}

#[test]
fn test_invalid_values_rejected() {
    assert!(serde_json::from_value::<Trigram>(json!(0)).is_err());
    assert!(serde_json::from_value::<Trigram>(json!(9)).is_err());
    assert!(serde_json::from_value::<Draws>(json!([1, 2, 3])).is_err());
    assert!(serde_json::from_value::<Draws>(json!([1, 2, 3, 4, 5, 9])).is_err());
    assert!(serde_json::from_value::<Hexagram>(json!({"lower": 0, "upper": 1})).is_err());
}

#[test]
fn test_lines_normalize() {
    let lines: Lines = serde_json::from_value(json!([1, 0, 2, 0, 1, 0])).unwrap();
    assert_eq!(lines.bits(), [1, 0, 1, 0, 1, 0]);
}

#[test]
fn test_notation_names() {
    assert_eq!(
        serde_json::to_value(Notation::NineEightSevenSix).unwrap(),
        json!("9876")
    );
    assert_eq!(
        serde_json::from_value::<Notation>(json!("longStrength")).unwrap(),
        Notation::LongStrength
    );
    assert_eq!(serde_json::to_value(EmblemStyle::Name).unwrap(), json!("name"));
}

#[test]
fn test_render_options_defaults() {
    let opts: RenderOptions = serde_json::from_value(json!({"separator": " "})).unwrap();
    assert_eq!(opts, RenderOptions::new().with_separator(" "));
}
