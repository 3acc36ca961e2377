// SPDX-License-Identifier: MIT
//
// tk-color color type — 8-bit sRGB channels with a floating alpha.
//
// Single-character variable names (r, g, b, a) are the standard
// convention in color code and are kept on purpose.
#![allow(clippy::many_single_char_names)]
//
// Theming math in this workspace never needs a perceptual color space:
// every question we answer (luminance, contrast, hex identity) is defined
// on the 8-bit sRGB channels a stylesheet actually carries. So the color
// is stored exactly as CSS writes it, and the linear-light view lives in
// the `linear` module as a lookup table.
//
// Accepted text forms:
//
//   #rgb  #rgba  #rrggbb  #rrggbbaa
//   rgb(r, g, b)  rgba(r, g, b, a)
//   white  black  transparent

use std::fmt;
use std::str::FromStr;

use crate::error::ParseColorError;
use crate::linear;

// ─── Color ───────────────────────────────────────────────────────────────────

/// A concrete sRGB color with 8-bit channels and alpha transparency.
///
/// # Examples
///
/// ```
/// use tk_color::Color;
///
/// let salmon = Color::rgb(255, 112, 112);
/// assert_eq!(salmon.to_hex(), "#ff7070");
///
/// let parsed: Color = "rgba(0, 0, 0, 0.87)".parse().unwrap();
/// assert_eq!(parsed.r, 0);
/// assert!(!parsed.is_opaque());
/// ```
#[derive(Clone, Copy)]
pub struct Color {
    /// Red channel, 0 to 255.
    pub r: u8,

    /// Green channel, 0 to 255.
    pub g: u8,

    /// Blue channel, 0 to 255.
    pub b: u8,

    /// Alpha (opacity): 0.0 (fully transparent) to 1.0 (fully opaque).
    pub alpha: f32,
}

impl Color {
    // ─── Constructors ────────────────────────────────────────────────────

    /// Create an opaque color from 8-bit channels.
    #[inline]
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, alpha: 1.0 }
    }

    /// Create a color from 8-bit channels with alpha (clamped to 0.0–1.0).
    #[inline]
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, alpha: f32) -> Self {
        Self {
            r,
            g,
            b,
            alpha: alpha.clamp(0.0, 1.0),
        }
    }

    /// Create a color from a hex string.
    ///
    /// Supports: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA` (with or without `#`).
    ///
    /// # Errors
    ///
    /// Returns [`ParseColorError`] if the string is not a valid hex color.
    pub fn hex(s: &str) -> Result<Self, ParseColorError> {
        parse_hex(s)
    }

    /// Pure black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Pure white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Fully transparent (invisible) black.
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0.0);

    // ─── Alpha ───────────────────────────────────────────────────────────

    /// Return a copy with the given alpha value (clamped to 0.0–1.0).
    #[inline]
    #[must_use]
    pub const fn with_alpha(self, alpha: f32) -> Self {
        Self {
            alpha: alpha.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Whether this color is fully opaque: its alpha byte is `ff`.
    #[inline]
    #[must_use]
    pub fn is_opaque(self) -> bool {
        self.alpha8() == u8::MAX
    }

    /// Whether this color is fully transparent (alpha <= 0.0).
    #[inline]
    #[must_use]
    pub fn is_transparent(self) -> bool {
        self.alpha <= 0.0
    }

    // ─── Channel Access ──────────────────────────────────────────────────

    /// The raw 8-bit channels, alpha discarded.
    #[inline]
    #[must_use]
    pub const fn to_rgb8(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// The channels as linear-light intensities (0.0–1.0), alpha discarded.
    ///
    /// Goes through the shared lookup table, so no `powf` runs here.
    #[inline]
    #[must_use]
    pub fn to_linear(self) -> (f64, f64, f64) {
        (
            linear::channel_to_linear(self.r),
            linear::channel_to_linear(self.g),
            linear::channel_to_linear(self.b),
        )
    }

    /// The alpha value as an 8-bit channel.
    #[inline]
    #[must_use]
    pub fn alpha8(self) -> u8 {
        to_u8(self.alpha.clamp(0.0, 1.0))
    }

    // ─── Text Output ─────────────────────────────────────────────────────

    /// Convert to a lowercase hex string (`#rrggbb`, or `#rrggbbaa` when the
    /// alpha byte is below `ff`).
    #[must_use]
    pub fn to_hex(self) -> String {
        let Self { r, g, b, .. } = self;
        if self.is_opaque() {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            let a = self.alpha8();
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "Color::rgb({}, {}, {})", self.r, self.g, self.b)
        } else {
            write!(
                f,
                "Color::rgba({}, {}, {}, {:.2})",
                self.r, self.g, self.b, self.alpha
            )
        }
    }
}

/// Opaque colors print as `#rrggbb`; translucent ones as `rgba(r, g, b, a)`
/// with the shortest alpha that parses back to the same value.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            f.write_str(&self.to_hex())
        } else {
            write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.alpha)
        }
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        // Alpha is parsed from decimal text, so compare it with an epsilon.
        const EPS: f32 = 1e-4;
        self.r == other.r
            && self.g == other.g
            && self.b == other.b
            && (self.alpha - other.alpha).abs() < EPS
    }
}

impl Default for Color {
    /// Default is fully opaque black.
    fn default() -> Self {
        Self::BLACK
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Color {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Color {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

// ─── Parsing ─────────────────────────────────────────────────────────────────

/// Parse any supported color text.
fn parse_color(s: &str) -> Result<Color, ParseColorError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ParseColorError::Empty);
    }

    if s.starts_with('#') {
        return parse_hex(s);
    }

    let lower = s.to_ascii_lowercase();
    if let Some(args) = functional_args(&lower, "rgba").or_else(|| functional_args(&lower, "rgb"))
    {
        return parse_functional(s, args);
    }

    match lower.as_str() {
        "white" => Ok(Color::WHITE),
        "black" => Ok(Color::BLACK),
        "transparent" => Ok(Color::TRANSPARENT),
        _ => Err(ParseColorError::Unknown(s.to_string())),
    }
}

/// Return the text between `name(` and the closing `)`, if `s` has that shape.
fn functional_args<'a>(s: &'a str, name: &str) -> Option<&'a str> {
    s.strip_prefix(name)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
}

/// Parse the comma-separated arguments of `rgb(...)` / `rgba(...)`.
///
/// Both spellings accept three or four arguments, like CSS Color 4.
fn parse_functional(source: &str, args: &str) -> Result<Color, ParseColorError> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    let bad = || ParseColorError::Functional(source.to_string());

    let (r, g, b, a) = match parts.as_slice() {
        [r, g, b] => (r, g, b, None),
        [r, g, b, a] => (r, g, b, Some(a)),
        _ => return Err(bad()),
    };

    let r = parse_channel(r)?;
    let g = parse_channel(g)?;
    let b = parse_channel(b)?;
    let alpha = match a {
        Some(a) => parse_alpha(a)?,
        None => 1.0,
    };
    Ok(Color::rgba(r, g, b, alpha))
}

fn parse_channel(text: &str) -> Result<u8, ParseColorError> {
    let value: i64 = text
        .parse()
        .map_err(|_| ParseColorError::Functional(text.to_string()))?;
    u8::try_from(value).map_err(|_| ParseColorError::ChannelOutOfRange(value))
}

fn parse_alpha(text: &str) -> Result<f32, ParseColorError> {
    let (number, scale) = text
        .strip_suffix('%')
        .map_or((text, 1.0), |pct| (pct, 100.0));
    let value: f32 = number
        .trim()
        .parse()
        .map_err(|_| ParseColorError::Functional(text.to_string()))?;
    let value = value / scale;
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(ParseColorError::AlphaOutOfRange(text.to_string()))
    }
}

/// Parse a hex color string into a Color.
fn parse_hex(s: &str) -> Result<Color, ParseColorError> {
    let digits = s.strip_prefix('#').unwrap_or(s);
    let bytes = digits.as_bytes();
    let bad = || ParseColorError::Hex(s.to_string());

    let nibble = |i: usize| parse_hex_digit(bytes[i]).ok_or_else(bad);
    let byte = |i: usize| parse_hex_byte(&bytes[i..i + 2]).ok_or_else(bad);

    match bytes.len() {
        // #RGB
        3 => {
            let (r, g, b) = (nibble(0)?, nibble(1)?, nibble(2)?);
            Ok(Color::rgb(r << 4 | r, g << 4 | g, b << 4 | b))
        }
        // #RGBA
        4 => {
            let (r, g, b, a) = (nibble(0)?, nibble(1)?, nibble(2)?, nibble(3)?);
            Ok(Color::rgba(r << 4 | r, g << 4 | g, b << 4 | b, from_u8(a << 4 | a)))
        }
        // #RRGGBB
        6 => Ok(Color::rgb(byte(0)?, byte(2)?, byte(4)?)),
        // #RRGGBBAA
        8 => Ok(Color::rgba(byte(0)?, byte(2)?, byte(4)?, from_u8(byte(6)?))),
        _ => Err(bad()),
    }
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

/// Convert a float (0.0–1.0) to a u8 (0–255) with correct rounding.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f32) -> u8 {
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    v.mul_add(255.0, 0.5).clamp(0.0, 255.0) as u8
}

#[inline]
fn from_u8(v: u8) -> f32 {
    f32::from(v) / 255.0
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
