//! CSS custom properties — descriptors, fallback chains, `var()` text.
//!
//! A descriptor renders as `var(--name, fallback)`, the fallback written
//! out as it was read. When the fallback is itself a descriptor the
//! expression nests, keeping the whole chain:
//!
//! ```text
//! {varname: --a, fallback: {varname: --b, fallback: #fff}}
//!     render_var       → var(--a, var(--b, #fff))
//!     get_var_fallback → #fff
//! ```
//!
//! Values that are already `var(...)` text are recognized by prefix, and
//! [`get_css_varname`] pulls the bare `--name` back out of them.

use tracing::trace;

use crate::value::{StyleValue, VarWithFallback};

/// Text every CSS variable reference starts with.
pub const CSS_VAR_PREFIX: &str = "var(";

/// Whether `style` is a deferred descriptor (both `varname` and `fallback`).
#[inline]
#[must_use]
pub const fn is_var_with_fallback(style: &StyleValue) -> bool {
    style.is_var_with_fallback()
}

/// The ultimate fallback of a descriptor.
///
/// Nested descriptors are unwrapped until the first plain value, which is
/// returned as is.
#[must_use]
pub fn get_var_fallback(style: &VarWithFallback) -> &StyleValue {
    let mut current = style;
    while let StyleValue::Var(next) = current.fallback.as_ref() {
        trace!(from = %current.varname, to = %next.varname, "following fallback");
        current = next;
    }
    &current.fallback
}

/// Render a descriptor as a `var()` expression, nesting inner descriptors.
#[must_use]
pub fn render_var(style: &VarWithFallback) -> String {
    match style.fallback.as_ref() {
        StyleValue::Var(inner) => format!("var({}, {})", style.varname, render_var(inner)),
        fallback => format!("var({}, {fallback})", style.varname),
    }
}

/// Build a custom property name: `--{prefix}-{name}`, or `--{name}` when
/// `prefix` is empty.
#[must_use]
pub fn create_varname(name: &str, prefix: &str) -> String {
    if prefix.is_empty() {
        format!("--{name}")
    } else {
        format!("--{prefix}-{name}")
    }
}

/// Whether `text` is a CSS variable reference (`var(...)`).
#[inline]
#[must_use]
pub fn is_css_var(text: &str) -> bool {
    text.starts_with(CSS_VAR_PREFIX)
}

/// The bare variable name inside a `var(...)` reference.
///
/// Takes everything from the first `--` up to, but not including, the first
/// `,` or `)` after it. Anything that is not a reference, or a reference
/// without `--`, is returned unchanged.
///
/// ```
/// use tk_theme::vars::get_css_varname;
///
/// assert_eq!(get_css_varname("var(--accent, rgba(0, 0, 0, 0.5))"), "--accent");
/// assert_eq!(get_css_varname("#fff"), "#fff");
/// ```
#[must_use]
pub fn get_css_varname(text: &str) -> &str {
    if !is_css_var(text) {
        return text;
    }
    let Some(start) = text.find("--") else {
        return text;
    };
    let rest = &text[start..];
    let end = rest.find([',', ')']).unwrap_or(rest.len());
    &rest[..end]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
