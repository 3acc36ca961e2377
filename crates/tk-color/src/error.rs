// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Why a piece of text could not be read as a color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// Nothing but whitespace.
    #[error("empty color")]
    Empty,

    /// Wrong length or a non-hex digit.
    #[error("invalid hex color: {0}")]
    Hex(String),

    /// Malformed `rgb(...)` / `rgba(...)`.
    #[error("invalid color function: {0}")]
    Functional(String),

    /// An `rgb` channel outside 0–255.
    #[error("color channel out of range: {0}")]
    ChannelOutOfRange(i64),

    /// An alpha outside 0–1 (or 0%–100%).
    #[error("alpha out of range: {0}")]
    AlphaOutOfRange(String),

    /// Not a hex color, color function, or supported keyword.
    #[error("unknown color: {0}")]
    Unknown(String),
}
