//! Errors raised when a theming value does not have the expected shape.

use thiserror::Error;
use tk_color::ParseColorError;

/// Theming error.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// The value cannot be treated as a color here.
    #[error("not a color: {0}")]
    NotAColor(String),

    /// A mapping looked like a descriptor but was malformed.
    #[error("invalid descriptor: {0}")]
    InvalidDescriptor(String),

    /// `name=value` with a name no option answers to.
    #[error("unknown option: {0}")]
    UnknownOption(String),

    /// A known option given a value it cannot take.
    #[error("invalid value for option {name}: {value}")]
    InvalidOptionValue {
        /// Option name as written.
        name: String,
        /// Offending value.
        value: String,
    },

    /// Not one of the text emphasis levels.
    #[error("unknown text emphasis: {0}")]
    UnknownEmphasis(String),

    /// Not `light` or `dark`.
    #[error("unknown tone: {0}")]
    UnknownTone(String),

    /// Color text failed to parse.
    #[error("color error: {0}")]
    Color(#[from] ParseColorError),

    /// JSON input failed to parse.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for theming operations.
pub type Result<T> = std::result::Result<T, ThemeError>;
