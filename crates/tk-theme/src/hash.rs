//! Short, stable identifiers for colors.
//!
//! Generated CSS (keyframes in particular) needs one name per color it was
//! built for. [`color_hash`] derives that suffix from whatever form the
//! color arrived in: a custom property name for `var()` references, the
//! token itself for plain strings, and the hex digits for concrete colors.

use tracing::trace;

use crate::error::{Result, ThemeError};
use crate::value::StyleValue;
use crate::vars::{get_css_varname, is_css_var};

/// Derive a short identifier for a color value.
///
/// Evaluated in order:
///
/// 1. a descriptor is replaced by its immediate fallback (one level only);
/// 2. `var(...)` text yields its bare variable name, `--` included;
/// 3. any other string token is returned unchanged;
/// 4. a concrete color yields its lowercase hex digits without the `#`
///    (`rrggbb`, or `rrggbbaa` when translucent).
///
/// ```
/// use tk_color::Color;
/// use tk_theme::hash::color_hash;
/// use tk_theme::StyleValue;
///
/// let hash = color_hash(&StyleValue::from(Color::rgb(255, 112, 112))).unwrap();
/// assert_eq!(hash, "ff7070");
/// ```
///
/// # Errors
///
/// Returns [`ThemeError::NotAColor`] for numbers, maps, and descriptors
/// whose immediate fallback is another descriptor.
pub fn color_hash(color: &StyleValue) -> Result<String> {
    let value = match color {
        StyleValue::Var(var) => var.fallback.as_ref(),
        other => other,
    };

    let hash = match (value, value.as_color()) {
        (StyleValue::Str(text), _) if is_css_var(text) => get_css_varname(text).to_string(),
        (StyleValue::Str(text), _) => text.clone(),
        (_, Some(c)) => c.to_hex()[1..].to_string(),
        (other, None) => return Err(ThemeError::NotAColor(other.to_string())),
    };
    trace!(value = %value, hash = %hash, "color hash");
    Ok(hash)
}

/// A keyframe (or other identifier) name specialized for a color:
/// `{prefix}-{color_hash}`.
///
/// # Errors
///
/// See [`color_hash`].
pub fn keyframe_name(prefix: &str, color: &StyleValue) -> Result<String> {
    Ok(format!("{prefix}-{}", color_hash(color)?))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
