//! Text ("ink") colors by emphasis level.
//!
//! Dark text is black at decreasing opacity; light text is white at
//! decreasing opacity. Picking ink for a fill means asking the fill for
//! its [`contrast_tone`] and reading the table for that tone.

use std::fmt;
use std::str::FromStr;

use tk_color::Color;

use crate::contrast::{Tone, ToneInput, contrast_tone, tone_input_of};
use crate::error::{Result, ThemeError};
use crate::value::StyleValue;

/// How prominent a piece of text is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextEmphasis {
    Primary,
    Secondary,
    Hint,
    Disabled,
    Icon,
}

impl TextEmphasis {
    /// Every level, most prominent first.
    pub const ALL: [Self; 5] = [
        Self::Primary,
        Self::Secondary,
        Self::Hint,
        Self::Disabled,
        Self::Icon,
    ];

    /// The lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Hint => "hint",
            Self::Disabled => "disabled",
            Self::Icon => "icon",
        }
    }
}

impl fmt::Display for TextEmphasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TextEmphasis {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|e| e.as_str() == s)
            .ok_or_else(|| ThemeError::UnknownEmphasis(s.to_string()))
    }
}

/// The text color for `emphasis` in the given text tone.
#[must_use]
pub const fn text_color(tone: Tone, emphasis: TextEmphasis) -> Color {
    match (tone, emphasis) {
        (Tone::Dark, TextEmphasis::Primary) => Color::rgba(0, 0, 0, 0.87),
        (Tone::Dark, TextEmphasis::Secondary) => Color::rgba(0, 0, 0, 0.54),
        (Tone::Dark, TextEmphasis::Hint | TextEmphasis::Disabled | TextEmphasis::Icon) => {
            Color::rgba(0, 0, 0, 0.38)
        }
        (Tone::Light, TextEmphasis::Primary) => Color::WHITE,
        (Tone::Light, TextEmphasis::Secondary) => Color::rgba(255, 255, 255, 0.7),
        (Tone::Light, TextEmphasis::Hint | TextEmphasis::Disabled | TextEmphasis::Icon) => {
            Color::rgba(255, 255, 255, 0.5)
        }
    }
}

/// The text color for `emphasis` that reads best on `fill`.
#[must_use]
pub fn ink_color_for_fill(emphasis: TextEmphasis, fill: impl Into<ToneInput>) -> Color {
    text_color(contrast_tone(fill), emphasis)
}

/// [`ink_color_for_fill`] for a style value; descriptors resolve to their
/// final fallback first.
///
/// # Errors
///
/// Returns [`ThemeError::NotAColor`] when the fill is not a color or tone.
pub fn ink_color_for_value(emphasis: TextEmphasis, fill: &StyleValue) -> Result<Color> {
    tone_input_of(fill).map(|input| ink_color_for_fill(emphasis, input))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
