//! `iching`: query the trigram/hexagram algebra from the command line.
//!
//! **Usage:**
//! ```text
//! iching show <LOWER> <UPPER> [--draws 1,7,7,7,7,7] [--json]
//! iching render <LOWER> <UPPER> [--draws ..] [--format F] [--separator S] [--trigram-separator S]
//! iching parse <TEXT> [--format auto|F] [--json]
//! iching derive <LOWER> <UPPER> <DERIVATION> [--json]
//! iching emblems <LOWER> <UPPER> [--draws ..] [--style glyph|binary|name]
//! ```
//!
//! `LOWER` and `UPPER` are trigram indices 1..=8. Set `RUST_LOG=debug` to see
//! codec diagnostics on stderr. Exits non-zero on any invalid input.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs
)]

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use iching::emblem::{EMBLEM_ARROW, EMBLEM_SEPARATOR};
use iching::{EmblemStyle, Hexagram, Notation, ParseFormat, RenderOptions};
use serde_json::{json, Value};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Query the I Ching hexagram algebra.
#[derive(Debug, Parser)]
#[command(name = "iching", version, about = "Trigram and hexagram algebra")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

/// A hexagram given as two trigram indices plus optional draws.
#[derive(Debug, Args)]
struct HexagramArgs {
    /// Lower trigram index (1-8).
    lower: u8,

    /// Upper trigram index (1-8).
    upper: u8,

    /// Six comma-separated draw values (1-8), bottom line first.
    #[arg(long, value_delimiter = ',')]
    draws: Option<Vec<u8>>,
}

impl HexagramArgs {
    fn build(&self) -> Result<Hexagram> {
        let h = Hexagram::from_indices(self.lower, self.upper)
            .with_context(|| format!("invalid trigram pair {}/{}", self.lower, self.upper))?;
        match &self.draws {
            Some(draws) => h.with_draws(draws).context("invalid --draws"),
            None => Ok(h),
        }
    }
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Identity, lines, moving lines and line relations
    Show {
        #[command(flatten)]
        hexagram: HexagramArgs,

        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Render in one of the six notations
    Render {
        #[command(flatten)]
        hexagram: HexagramArgs,

        /// binary, glyph, 9876, hanzi, shortStrength or longStrength.
        #[arg(long, short, default_value = "binary")]
        format: Notation,

        /// Separator between line tokens.
        #[arg(long, default_value = "")]
        separator: String,

        /// Separator between the lower and upper trigram.
        #[arg(long, default_value = "")]
        trigram_separator: String,
    },

    /// Parse a hexagram written in any notation
    Parse {
        /// Text to parse, e.g. "9 8 8 8 7 8".
        text: String,

        /// auto, or one of the six notation names.
        #[arg(long, short, default_value = "auto")]
        format: ParseFormat,

        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Apply one derivation
    Derive {
        /// Lower trigram index (1-8).
        lower: u8,

        /// Upper trigram index (1-8).
        upper: u8,

        /// Derivation to apply.
        #[arg(value_enum)]
        derivation: Derivation,

        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// The five adjacent-line emblems
    Emblems {
        #[command(flatten)]
        hexagram: HexagramArgs,

        /// How each emblem is printed.
        #[arg(long, value_enum, default_value_t = Style::Glyph)]
        style: Style,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Derivation {
    Opposite,
    Inverse,
    Nuclear,
    SecondNuclear,
    ThirdNuclear,
    FourthNuclear,
    FifthNuclear,
    Rotate,
    Cycle,
    Flower,
    Story,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Style {
    Glyph,
    Binary,
    Name,
}

impl From<Style> for EmblemStyle {
    fn from(style: Style) -> Self {
        match style {
            Style::Glyph => Self::Glyph,
            Style::Binary => Self::Binary,
            Style::Name => Self::Name,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    tracing::debug!(command = ?cli.command, "parsed arguments");
    print!("{}", run(cli.command)?);
    Ok(())
}

/// Executes one subcommand and returns its stdout text.
fn run(command: Command) -> Result<String> {
    let out = match command {
        Command::Show { hexagram, json } => {
            let h = hexagram.build()?;
            if json {
                format!("{}\n", serde_json::to_string_pretty(&show_json(&h)?)?)
            } else {
                show_text(&h)?
            }
        }
        Command::Render {
            hexagram,
            format,
            separator,
            trigram_separator,
        } => {
            let h = hexagram.build()?;
            let opts = RenderOptions::new()
                .with_separator(separator)
                .with_trigram_separator(trigram_separator);
            format!("{}\n", h.render(format, &opts))
        }
        Command::Parse { text, format, json } => {
            let h = Hexagram::parse(&text, format)
                .with_context(|| format!("could not parse {text:?} as {format}"))?;
            if json {
                format!("{}\n", serde_json::to_string_pretty(&show_json(&h)?)?)
            } else {
                show_text(&h)?
            }
        }
        Command::Derive {
            lower,
            upper,
            derivation,
            json,
        } => {
            let h = Hexagram::from_indices(lower, upper)
                .with_context(|| format!("invalid trigram pair {lower}/{upper}"))?;
            let out = derive(&h, derivation);
            if json {
                format!("{}\n", serde_json::to_string_pretty(&out)?)
            } else {
                derive_text(&out)
            }
        }
        Command::Emblems { hexagram, style } => {
            let h = hexagram.build()?;
            let text = h.render_emblems(style.into(), EMBLEM_SEPARATOR, EMBLEM_ARROW);
            format!("{text}\n")
        }
    };
    Ok(out)
}

fn summary(h: &Hexagram) -> Value {
    json!({
        "number": h.number(),
        "name": h.name(),
        "glyph": h.glyph().to_string(),
        "binary": h.binary(),
    })
}

fn show_json(h: &Hexagram) -> Result<Value> {
    let mut out = summary(h);
    out["lower"] = json!({ "index": h.lower().index(), "name": h.lower().name() });
    out["upper"] = json!({ "index": h.upper().index(), "name": h.upper().name() });
    out["correct"] = json!(h.correct_lines());
    out["holding"] = serde_json::to_value(h.holding_pairs())?;
    out["correspondence"] = serde_json::to_value(h.correspondence_pairs())?;
    out["nuclear"] = summary(&h.nuclear());
    if let Some(draws) = h.draws() {
        out["draws"] = json!(draws.values());
        out["moving"] = json!(h.moving_line_numbers()?);
        out["target"] = summary(&h.target()?);
    }
    Ok(out)
}

fn show_text(h: &Hexagram) -> Result<String> {
    let join = |lines: Vec<usize>| {
        lines
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    };
    let mut out = format!("{h}\n");
    out += &format!("  lower    {}\n", h.lower());
    out += &format!("  upper    {}\n", h.upper());
    out += &format!("  binary   {}\n", h.binary());
    out += &format!("  correct  {}\n", join(h.correct_lines()));
    out += &format!("  nuclear  {}\n", h.nuclear());
    if let Some(draws) = h.draws() {
        out += &format!("  draws    {:?}\n", draws.values());
        out += &format!("  moving   {}\n", join(h.moving_line_numbers()?));
        out += &format!("  target   {}\n", h.target()?);
    }
    Ok(out)
}

fn derive(h: &Hexagram, derivation: Derivation) -> Value {
    let list = |hs: &[Hexagram]| Value::Array(hs.iter().map(summary).collect());
    match derivation {
        Derivation::Opposite => summary(&h.opposite()),
        Derivation::Inverse => summary(&h.inverse()),
        Derivation::Nuclear => summary(&h.nuclear()),
        Derivation::SecondNuclear => summary(&h.second_nuclear()),
        Derivation::ThirdNuclear => summary(&h.third_nuclear()),
        Derivation::FourthNuclear => summary(&h.fourth_nuclear()),
        Derivation::FifthNuclear => summary(&h.fifth_nuclear()),
        Derivation::Rotate => summary(&h.rotate()),
        Derivation::Cycle => list(h.cycle().as_slice()),
        Derivation::Story => list(h.story().as_slice()),
        Derivation::Flower => {
            let flower = h.flower();
            json!({
                "antecedents": list(flower.antecedents.as_slice()),
                "consequents": list(flower.consequents.as_slice()),
            })
        }
    }
}

fn derive_text(value: &Value) -> String {
    let line = |v: &Value| {
        format!(
            "{:02} {} {} ({})\n",
            v["number"].as_u64().unwrap_or_default(),
            v["glyph"].as_str().unwrap_or_default(),
            v["name"].as_str().unwrap_or_default(),
            v["binary"].as_str().unwrap_or_default(),
        )
    };
    match value {
        Value::Array(items) => items.iter().map(line).collect(),
        Value::Object(map) if map.contains_key("antecedents") => {
            let mut out = String::new();
            for key in ["antecedents", "consequents"] {
                out += &format!("{key}:\n");
                if let Some(Value::Array(items)) = map.get(key) {
                    for item in items {
                        out += &format!("  {}", line(item));
                    }
                }
            }
            out
        }
        other => line(other),
    }
}
