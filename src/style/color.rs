use std::fmt;
use std::str::FromStr;

use crate::foundation::error::{VsmlError, VsmlResult};
use crate::style::palette;

/// Straight-alpha RGBA8 color; canonical text form is `#rrggbbaa`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel, `255` is opaque.
    pub a: u8,
}

impl Color {
    /// Fully transparent black, the default fill of every canvas.
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    /// Build a color from channels.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Build an opaque color from channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Canonical `#rrggbbaa` form.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

impl FromStr for Color {
    type Err = VsmlError;

    fn from_str(s: &str) -> VsmlResult<Self> {
        let s = s.trim();
        if s == "transparent" {
            return Ok(Self::TRANSPARENT);
        }
        if let Some([r, g, b]) = palette::lookup(s) {
            return Ok(Self::rgb(r, g, b));
        }
        let parsed = if let Some(hex) = s.strip_prefix('#') {
            parse_hex(hex)
        } else if let Some(args) = s.strip_prefix("rgba(").and_then(|x| x.strip_suffix(')')) {
            parse_rgba_args(args)
        } else if let Some(args) = s.strip_prefix("rgb(").and_then(|x| x.strip_suffix(')')) {
            parse_rgb_args(args)
        } else {
            None
        };
        parsed.ok_or_else(|| VsmlError::value_parse("color", s))
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    fn nibble(c: u8) -> Option<u8> {
        let v = (c as char).to_digit(16)? as u8;
        Some(v * 16 + v)
    }

    fn byte(pair: &str) -> Option<u8> {
        u8::from_str_radix(pair, 16).ok()
    }

    let b = hex.as_bytes();
    match hex.len() {
        3 => Some(Color::rgb(nibble(b[0])?, nibble(b[1])?, nibble(b[2])?)),
        4 => Some(Color::rgba(
            nibble(b[0])?,
            nibble(b[1])?,
            nibble(b[2])?,
            nibble(b[3])?,
        )),
        6 => Some(Color::rgb(
            byte(&hex[0..2])?,
            byte(&hex[2..4])?,
            byte(&hex[4..6])?,
        )),
        8 => Some(Color::rgba(
            byte(&hex[0..2])?,
            byte(&hex[2..4])?,
            byte(&hex[4..6])?,
            byte(&hex[6..8])?,
        )),
        _ => None,
    }
}

fn channel(s: &str) -> Option<u8> {
    let s = s.trim();
    if s.is_empty() || !s.bytes().all(|c| c.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

fn parse_rgb_args(args: &str) -> Option<Color> {
    let mut it = args.split(',');
    let (r, g, b) = (it.next()?, it.next()?, it.next()?);
    if it.next().is_some() {
        return None;
    }
    Some(Color::rgb(channel(r)?, channel(g)?, channel(b)?))
}

/// `rgba(r, g, b, a)` where `a` is a non-negative real.
///
/// Only the fractional part of `a` is scaled onto `0..=255` (truncating), so `1.0` maps to `0`.
/// Documents in the wild rely on this exact mapping.
fn parse_rgba_args(args: &str) -> Option<Color> {
    let mut it = args.split(',');
    let (r, g, b, a) = (it.next()?, it.next()?, it.next()?, it.next()?);
    if it.next().is_some() {
        return None;
    }
    let a = a.trim();
    if a.is_empty() || !a.bytes().all(|c| c.is_ascii_digit() || c == b'.') {
        return None;
    }
    let a: f64 = a.parse().ok()?;
    let alpha = (a % 1.0 * 255.0) as u8;
    Some(Color::rgba(channel(r)?, channel(g)?, channel(b)?, alpha))
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl TryFrom<String> for Color {
    type Error = VsmlError;

    fn try_from(s: String) -> VsmlResult<Self> {
        s.parse()
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self {
        c.to_hex()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/color.rs"]
mod tests;
