//! Rendering, tokenizing, format detection and parsing.

use super::format::{Notation, ParseFormat};
use crate::error::{Error, Result};
use crate::hexagram::{Draws, Hexagram, LineState};
use crate::lines::Lines;
use core::str::FromStr;

/// Characters accepted between tokens by format detection.
const SEPARATORS: &[char] = &[',', '.', '_', '-', '–', '—', '/', '|', '\\'];

/// Characters the fallback tokenizer splits on (plus whitespace).
const SPLIT_ON: &[char] = &[',', '|', '/', '_', '-', '–', '—'];

/// Options for [`Hexagram::render`].
///
/// # Example
///
/// ```
/// use iching::{Hexagram, Notation, RenderOptions};
///
/// let h = Hexagram::from_binary("111000").unwrap();
/// let opts = RenderOptions::new().with_trigram_separator("-");
/// assert_eq!(h.render(Notation::Binary, &opts), "111-000");
///
/// let opts = RenderOptions::new()
///     .with_separator(", ")
///     .with_moving_mask([true, false, false, false, false, false]);
/// assert_eq!(h.render(Notation::Hanzi, &opts), "阳*, 阳, 阳, 阴, 阴, 阴");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RenderOptions {
    /// Joined between tokens.
    pub separator: String,
    /// Inserted as an extra element between the lower and upper trigram.
    pub trigram_separator: String,
    /// Moving flags overriding the hexagram's draws (index 0 = line 1).
    pub moving_mask: Option<[bool; 6]>,
}

impl RenderOptions {
    /// No separators, moving flags from draws.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the per-token separator.
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Sets the separator between the two trigram groups.
    #[must_use]
    pub fn with_trigram_separator(mut self, separator: impl Into<String>) -> Self {
        self.trigram_separator = separator.into();
        self
    }

    /// Overrides the moving flags.
    #[must_use]
    pub const fn with_moving_mask(mut self, mask: [bool; 6]) -> Self {
        self.moving_mask = Some(mask);
        self
    }

    /// Renders every line as static regardless of draws.
    #[must_use]
    pub const fn all_static(self) -> Self {
        self.with_moving_mask([false; 6])
    }
}

impl Hexagram {
    /// Renders the six lines, bottom to top.
    ///
    /// Moving flags come from `options.moving_mask`, else from the draws,
    /// else every line is static.
    ///
    /// ```
    /// use iching::{Hexagram, Notation, RenderOptions};
    ///
    /// let h = Hexagram::from_number(3).unwrap().with_draws(&[1, 7, 7, 7, 7, 7]).unwrap();
    /// let opts = RenderOptions::default();
    /// assert_eq!(h.render(Notation::Binary, &opts), "1*00010");
    /// assert_eq!(h.render(Notation::NineEightSevenSix, &opts), "988878");
    /// ```
    #[must_use]
    pub fn render(&self, notation: Notation, options: &RenderOptions) -> String {
        let bits = self.lines().bits();
        let moving = options
            .moving_mask
            .or_else(|| self.moving_lines().ok())
            .unwrap_or([false; 6]);

        let mut tokens: Vec<&str> = (0..6)
            .map(|i| notation.encode(LineState::new(bits[i], moving[i])))
            .collect();
        if !options.trigram_separator.is_empty() {
            tokens.insert(3, options.trigram_separator.as_str());
        }
        tokens.join(options.separator.as_str())
    }

    /// Renders using a notation name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownFormat`] if `format` names no notation.
    pub fn render_as(&self, format: &str, options: &RenderOptions) -> Result<String> {
        Ok(self.render(format.parse()?, options))
    }

    /// Parses a hexagram written in any notation.
    ///
    /// # Errors
    ///
    /// See [`parse`].
    pub fn parse(text: &str, format: ParseFormat) -> Result<Self> {
        parse(text, format)
    }
}

impl FromStr for Hexagram {
    type Err = Error;

    /// Parses with format auto-detection.
    fn from_str(s: &str) -> Result<Self> {
        parse(s, ParseFormat::Auto)
    }
}

/// Detects the notation of `text`.
///
/// Checks run in a fixed order: pure binary characters, pure 9876 digits,
/// glyphs, hanzi, arrows (long strength), then the words Strong/Weak.
///
/// # Errors
///
/// Returns [`Error::UnrecognizedFormat`] if no check matches.
///
/// ```
/// use iching::notation::detect;
/// use iching::Notation;
///
/// assert_eq!(detect("111-000").unwrap(), Notation::Binary);
/// assert_eq!(detect("7 8 9 6 7 7").unwrap(), Notation::NineEightSevenSix);
/// assert_eq!(detect("Strong Weak→Strong").unwrap(), Notation::LongStrength);
/// assert!(detect("hello").is_err());
/// ```
pub fn detect(text: &str) -> Result<Notation> {
    let text = text.trim();
    let only = |allowed: &[char]| {
        !text.is_empty()
            && text
                .chars()
                .all(|c| allowed.contains(&c) || c.is_whitespace() || SEPARATORS.contains(&c))
    };

    let detected = if only(&['0', '1', '*']) {
        Notation::Binary
    } else if only(&['6', '7', '8', '9']) {
        Notation::NineEightSevenSix
    } else if text.contains(['⚊', '⚋']) {
        Notation::Glyph
    } else if text.contains(['阴', '阳']) {
        Notation::Hanzi
    } else if text.contains("Strong→Weak") || text.contains("Weak→Strong") {
        Notation::LongStrength
    } else if text.contains("Strong") || text.contains("Weak") {
        Notation::ShortStrength
    } else {
        return Err(Error::UnrecognizedFormat);
    };
    tracing::trace!(notation = detected.name(), "detected notation");
    Ok(detected)
}

/// Splits `text` into line tokens for `notation`.
///
/// Characters outside the notation's alphabet act as separators. If
/// nothing is recognised, falls back to splitting on separators so that the
/// caller sees the offending token.
#[must_use]
pub fn tokenize(text: &str, notation: Notation) -> Vec<String> {
    let text = text.trim();
    let tokens = match notation {
        Notation::Binary | Notation::Glyph | Notation::Hanzi => scan_chars(text, notation),
        Notation::NineEightSevenSix => text
            .chars()
            .filter(char::is_ascii_digit)
            .map(String::from)
            .collect(),
        Notation::ShortStrength => scan_words(text, &["Strong*", "Strong", "Weak*", "Weak"]),
        Notation::LongStrength => {
            scan_words(text, &["Strong→Weak", "Weak→Strong", "Strong", "Weak"])
        }
    };
    if !tokens.is_empty() {
        return tokens;
    }
    text.split(|c: char| c.is_whitespace() || SPLIT_ON.contains(&c))
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Line characters each followed by an optional `*`; everything else skipped.
fn scan_chars(text: &str, notation: Notation) -> Vec<String> {
    let Some((yang, yin)) = notation.line_chars() else {
        return Vec::new();
    };
    let mut tokens = Vec::new();
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == yang || c == yin {
            let mut token = String::from(c);
            if chars.next_if_eq(&'*').is_some() {
                token.push('*');
            }
            tokens.push(token);
        }
    }
    tokens
}

/// Leftmost matches of `words`, trying them in order at each position.
fn scan_words(text: &str, words: &[&str]) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut rest = text;
    while let Some(c) = rest.chars().next() {
        match words.iter().find(|w| rest.starts_with(**w)) {
            Some(word) => {
                tokens.push((*word).to_owned());
                rest = &rest[word.len()..];
            }
            None => rest = &rest[c.len_utf8()..],
        }
    }
    tokens
}

/// Parses six line tokens into a hexagram with canonical draws.
///
/// The draws reproduce the decoded moving flags: yang 3 (moving) or 4,
/// yin 8 (moving) or 7.
///
/// # Errors
///
/// - [`Error::UnrecognizedFormat`] if `format` is auto and detection fails
/// - [`Error::WrongTokenCount`] unless exactly six tokens are found
/// - [`Error::InvalidToken`] for a token outside the notation
///
/// ```
/// use iching::notation::{parse, ParseFormat};
/// use iching::Notation;
///
/// let h = parse("111*000", Notation::Binary.into()).unwrap();
/// assert_eq!(h.lines().bits(), [1, 1, 1, 0, 0, 0]);
/// assert_eq!(h.moving_lines().unwrap(), [false, false, true, false, false, false]);
/// assert_eq!(h.draws().unwrap().values(), [4, 4, 3, 7, 7, 7]);
///
/// assert!(parse("1101", ParseFormat::Auto).is_err());
/// ```
pub fn parse(text: &str, format: ParseFormat) -> Result<Hexagram> {
    let notation = match format {
        ParseFormat::Auto => detect(text)?,
        ParseFormat::Exact(n) => n,
    };
    let tokens = tokenize(text, notation);
    tracing::debug!(
        notation = notation.name(),
        tokens = tokens.len(),
        "tokenized notation"
    );
    if tokens.len() != 6 {
        return Err(Error::WrongTokenCount(tokens.len()));
    }

    let mut states = [LineState::StaticYin; 6];
    for (state, token) in states.iter_mut().zip(&tokens) {
        *state = notation.decode(token)?;
    }
    let lines = Lines::new(states.map(LineState::bit));
    Ok(Hexagram::from_lines(lines).with_checked_draws(Draws::canonical(states)))
}
