//! Color strings in config files.
//!
//! Accepted: `#RGB`, `#RRGGBB`, `#RRGGBBAA`, `rgb(r,g,b)` and `rgba(r,g,b,a)`,
//! where `a` is either `0..=255` or a fraction like `0.5`.

mod parse;


use rectkit_common::types::Color;
use rectkit_common::ConfigError;

use parse::Syntax;

/// Parse a color string into a [`Color`].
pub fn parse_color(s: &str) -> Result<Color, ConfigError> {
    let s = s.trim();
    let syntax = Syntax::detect(s)
        .ok_or_else(|| ConfigError::ParseError(format!("unrecognized color format: {s:?}")))?;

    syntax.parse(s).ok_or_else(|| {
        let kind = match syntax {
            Syntax::Hex => "hex",
            Syntax::Functional => "rgb/rgba",
        };
        ConfigError::ParseError(format!("invalid {kind} color: {s:?}"))
    })
}

/// Whether `s` is a color [`parse_color`] accepts.
pub fn validate_color(s: &str) -> bool {
    parse_color(s).is_ok()
}
