//! # tk-theme — Theming utilities for design-system stylesheets
//!
//! Answers the questions a theme generator asks about a color, and builds
//! the CSS custom-property text it emits.
//!
//! # Architecture
//!
//! ```text
//! color / descriptor / token
//!     │
//!     ├──► contrast.rs: luminance, contrast ratio, light/dark tone
//!     │        │
//!     │        ▼
//!     │    ink.rs:      text color per emphasis for a fill
//!     │
//!     ├──► vars.rs:     var() rendering, fallback chains, var names
//!     │
//!     └──► hash.rs:     short stable identifiers (keyframe names)
//!
//! value.rs:   StyleValue / VarWithFallback, JSON input
//! options.rs: ThemeOptions (threshold, var prefix)
//! ```
//!
//! All functions are pure. The only shared state is the read-only
//! linear-light channel table in `tk-color`.

pub mod contrast;
pub mod error;
pub mod hash;
pub mod ink;
pub mod options;
pub mod value;
pub mod vars;

pub use contrast::{Tone, ToneInput, contrast, contrast_tone, luminance, tone};
pub use error::ThemeError;
pub use hash::{color_hash, keyframe_name};
pub use ink::{TextEmphasis, ink_color_for_fill, text_color};
pub use options::ThemeOptions;
pub use value::{StyleValue, VarWithFallback};
pub use vars::{get_var_fallback, is_var_with_fallback, render_var};
