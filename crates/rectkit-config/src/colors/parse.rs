//! Color string grammar: hex digits after `#`, or CSS-style `rgb()`/`rgba()`.

use rectkit_common::types::Color;
use regex::Regex;
use std::sync::LazyLock;

/// `rgb(r, g, b)` or `rgba(r, g, b, a)`; alpha is an integer or a fraction.
static FUNCTIONAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^rgba?\(\s*(?P<r>\d{1,3})\s*,\s*(?P<g>\d{1,3})\s*,\s*(?P<b>\d{1,3})\s*(?:,\s*(?P<a>\d*\.?\d+)\s*)?\)$",
    )
    .unwrap()
});

/// Which notation a color string is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Syntax {
    Hex,
    Functional,
}

impl Syntax {
    pub(super) fn detect(s: &str) -> Option<Syntax> {
        if s.starts_with('#') {
            Some(Syntax::Hex)
        } else if s.starts_with("rgb(") || s.starts_with("rgba(") {
            Some(Syntax::Functional)
        } else {
            None
        }
    }

    pub(super) fn parse(self, s: &str) -> Option<Color> {
        match self {
            Syntax::Hex => parse_hex(s),
            Syntax::Functional => parse_functional(s),
        }
    }
}

/// `#RGB` (each digit doubled), `#RRGGBB` or `#RRGGBBAA`.
fn parse_hex(s: &str) -> Option<Color> {
    let digits = s.strip_prefix('#')?;
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    match digits.len() {
        3 => {
            let nibble = |i: usize| u8::from_str_radix(&digits[i..=i], 16).ok().map(|v| v * 0x11);
            Some(Color::from_rgba(nibble(0)?, nibble(1)?, nibble(2)?, 0xff))
        }
        6 | 8 => Color::from_hex(digits),
        _ => None,
    }
}

fn parse_functional(s: &str) -> Option<Color> {
    let caps = FUNCTIONAL_RE.captures(s)?;
    let channel = |name: &str| caps[name].parse::<u8>().ok();
    let alpha = match caps.name("a") {
        None => 0xff,
        Some(m) => parse_alpha(m.as_str())?,
    };
    Some(Color::from_rgba(channel("r")?, channel("g")?, channel("b")?, alpha))
}

/// A fraction in `0.0..=1.0` when it has a decimal point, else `0..=255`.
fn parse_alpha(s: &str) -> Option<u8> {
    if s.contains('.') {
        let fraction: f32 = s.parse().ok()?;
        (0.0..=1.0)
            .contains(&fraction)
            .then(|| (fraction * 255.0).round() as u8)
    } else {
        s.parse::<u8>().ok()
    }
}
