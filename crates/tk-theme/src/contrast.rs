//! WCAG luminance, contrast ratio, and light/dark tone classification.
//!
//! Relative luminance is computed from the 8-bit channels through the
//! shared linear-light table in [`tk_color::linear`]; alpha never takes
//! part. Contrast follows the WCAG 2.x definition:
//!
//!   (`L_lighter` + 0.05) / (`L_darker` + 0.05)
//!
//! A background's *tone* answers "is this a light or a dark surface?". The
//! decision compares white text against 87%-black text: the surface is
//! light when white fails the minimum contrast **and** dark text does
//! better than white. Everything else is dark. Both conditions are needed,
//! so the rule is kept exactly in that form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tk_color::Color;
use tracing::debug;

use crate::error::{Result, ThemeError};
use crate::options::ThemeOptions;
use crate::value::StyleValue;

/// Minimum contrast white text needs before a surface stops counting as dark.
pub const MINIMUM_CONTRAST: f64 = 3.1;

/// The dark text color tones are measured against: black at 87% opacity.
pub const NEAR_BLACK: Color = Color::rgba(0, 0, 0, 0.87);

// ---------------------------------------------------------------------------
// Luminance and contrast
// ---------------------------------------------------------------------------

/// Compute the relative luminance of a color per WCAG 2.1.
///
/// Weighted sum of linear-light channels:
///   L = 0.2126 * `R_lin` + 0.7152 * `G_lin` + 0.0722 * `B_lin`
///
/// Returns a value in [0.0, 1.0] where 0 is black and 1 is white.
#[must_use]
pub fn luminance(color: Color) -> f64 {
    let (r_lin, g_lin, b_lin) = color.to_linear();
    0.2126f64.mul_add(r_lin, 0.7152f64.mul_add(g_lin, 0.0722 * b_lin))
}

/// Compute the WCAG 2.1 contrast ratio between a background and a foreground.
///
/// Returns a value in [1.0, 21.0], independent of argument order.
#[must_use]
pub fn contrast(back: Color, front: Color) -> f64 {
    let back_lum = luminance(back) + 0.05;
    let front_lum = luminance(front) + 0.05;
    back_lum.max(front_lum) / back_lum.min(front_lum)
}

// ---------------------------------------------------------------------------
// Tone
// ---------------------------------------------------------------------------

/// Light or dark — of a surface, or of the text that belongs on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Light,
    Dark,
}

impl Tone {
    /// The other tone.
    #[inline]
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// The lowercase token (`"light"` / `"dark"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tone {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ThemeError::UnknownTone(other.to_string())),
        }
    }
}

/// What [`tone`] can classify: a color, or a tone that is already decided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToneInput {
    Color(Color),
    Tone(Tone),
}

impl From<Color> for ToneInput {
    fn from(color: Color) -> Self {
        Self::Color(color)
    }
}

impl From<Tone> for ToneInput {
    fn from(tone: Tone) -> Self {
        Self::Tone(tone)
    }
}

/// Classify a background as light or dark with the default threshold.
///
/// A [`Tone`] passed in is returned unchanged.
#[must_use]
pub fn tone(input: impl Into<ToneInput>) -> Tone {
    classify(input.into(), MINIMUM_CONTRAST)
}

/// The text tone that reads best on a background: the opposite of [`tone`].
#[must_use]
pub fn contrast_tone(input: impl Into<ToneInput>) -> Tone {
    tone(input).opposite()
}

/// [`tone`] with the threshold taken from `options`.
#[must_use]
pub fn tone_with(options: &ThemeOptions, input: impl Into<ToneInput>) -> Tone {
    classify(input.into(), options.minimum_contrast)
}

/// [`contrast_tone`] with the threshold taken from `options`.
#[must_use]
pub fn contrast_tone_with(options: &ThemeOptions, input: impl Into<ToneInput>) -> Tone {
    tone_with(options, input).opposite()
}

/// Read a style value as a tone input.
///
/// Descriptors resolve to their final fallback first. The strings `light`
/// and `dark` are tones; colors are colors.
///
/// # Errors
///
/// Returns [`ThemeError::NotAColor`] for anything else (numbers, maps,
/// other string tokens including `var()` text, which has no color until
/// the stylesheet is applied).
pub fn tone_input_of(value: &StyleValue) -> Result<ToneInput> {
    let value = value.resolve();
    if let Some(color) = value.as_color() {
        return Ok(ToneInput::Color(color));
    }
    match value {
        StyleValue::Str(text) => text
            .parse::<Tone>()
            .map(ToneInput::Tone)
            .map_err(|_| ThemeError::NotAColor(text.clone())),
        other => Err(ThemeError::NotAColor(other.to_string())),
    }
}

/// [`tone`] of an arbitrary style value.
///
/// # Errors
///
/// See [`tone_input_of`].
pub fn tone_of_value(value: &StyleValue) -> Result<Tone> {
    tone_input_of(value).map(tone)
}

fn classify(input: ToneInput, minimum_contrast: f64) -> Tone {
    let color = match input {
        ToneInput::Tone(tone) => return tone,
        ToneInput::Color(color) => color,
    };

    let light_contrast = contrast(color, Color::WHITE);
    let dark_contrast = contrast(color, NEAR_BLACK);

    let tone = if light_contrast < minimum_contrast && dark_contrast > light_contrast {
        Tone::Light
    } else {
        Tone::Dark
    };
    debug!(
        color = %color,
        light_contrast,
        dark_contrast,
        minimum_contrast,
        tone = %tone,
        "classified background tone"
    );
    tone
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
