//! Style values — what a theme property can hold.
//!
//! A property is a concrete color (built in code, or read from text and
//! remembered as written), a string token (which may be a textual
//! `var(--name, ...)` reference), a number, a plain key-value map, or a
//! deferred descriptor: "use variable `varname`, else `fallback`".
//!
//! Descriptors arrive as JSON objects carrying both a `varname` and a
//! `fallback` key. The fallback is an owned box, so a chain of descriptors
//! is a finite tree and every walk over it terminates.

use std::collections::BTreeMap;
use std::fmt;

use serde_json::Value;
use tk_color::Color;

use crate::error::{Result, ThemeError};
use crate::vars;

/// Key naming the custom property in a descriptor map.
pub const VARNAME_KEY: &str = "varname";

/// Key holding the fallback value in a descriptor map.
pub const FALLBACK_KEY: &str = "fallback";

// ---------------------------------------------------------------------------
// VarWithFallback
// ---------------------------------------------------------------------------

/// A deferred reference: the custom property `varname`, or `fallback` when
/// the property is not defined.
#[derive(Debug, Clone, PartialEq)]
pub struct VarWithFallback {
    /// Custom property name, including its `--` prefix.
    pub varname: String,
    /// Value used when the property is unresolved. May itself be a descriptor.
    pub fallback: Box<StyleValue>,
}

impl VarWithFallback {
    /// Create a descriptor.
    #[must_use]
    pub fn new(varname: impl Into<String>, fallback: impl Into<StyleValue>) -> Self {
        Self {
            varname: varname.into(),
            fallback: Box::new(fallback.into()),
        }
    }
}

// ---------------------------------------------------------------------------
// StyleValue
// ---------------------------------------------------------------------------

/// Any value a theme property can carry.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    /// A concrete color.
    Color(Color),
    /// A color read from text. Renders back as `text`, byte for byte.
    Literal { color: Color, text: String },
    /// A string token, passed through verbatim. `var(...)` text lands here.
    Str(String),
    /// A bare number (opacity, weight, ...).
    Number(f64),
    /// A deferred reference with a fallback.
    Var(VarWithFallback),
    /// Any other key-value mapping.
    Map(BTreeMap<String, StyleValue>),
}

impl StyleValue {
    /// Build a descriptor value.
    #[must_use]
    pub fn var(varname: impl Into<String>, fallback: impl Into<Self>) -> Self {
        Self::Var(VarWithFallback::new(varname, fallback))
    }

    /// Read a single token: a color literal if it parses as one, a string
    /// otherwise. Either way the text is kept as written.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        match text.parse::<Color>() {
            Ok(color) => Self::Literal {
                color,
                text: text.to_string(),
            },
            Err(_) => Self::Str(text.to_string()),
        }
    }

    /// Read a JSON document into a value.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Json`] for malformed JSON, or the errors of
    /// [`StyleValue::from_json`].
    pub fn from_json_str(text: &str) -> Result<Self> {
        let json: Value = serde_json::from_str(text)?;
        Self::from_json(&json)
    }

    /// Convert parsed JSON into a value.
    ///
    /// Objects carrying both `varname` and `fallback` become descriptors;
    /// other objects become maps. Strings go through [`StyleValue::parse`].
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::InvalidDescriptor`] when a descriptor's
    /// `varname` is not a string, or for `null` and arrays, which have no
    /// style meaning.
    pub fn from_json(json: &Value) -> Result<Self> {
        match json {
            Value::String(text) => Ok(Self::parse(text)),
            Value::Number(n) => n
                .as_f64()
                .map(Self::Number)
                .ok_or_else(|| ThemeError::InvalidDescriptor(n.to_string())),
            Value::Bool(b) => Ok(Self::Str(b.to_string())),
            Value::Object(map) => {
                if let (Some(varname), Some(fallback)) =
                    (map.get(VARNAME_KEY), map.get(FALLBACK_KEY))
                {
                    let varname = varname.as_str().ok_or_else(|| {
                        ThemeError::InvalidDescriptor(format!(
                            "{VARNAME_KEY} must be a string, got {varname}"
                        ))
                    })?;
                    return Ok(Self::var(varname, Self::from_json(fallback)?));
                }
                map.iter()
                    .map(|(k, v)| Ok((k.clone(), Self::from_json(v)?)))
                    .collect::<Result<BTreeMap<_, _>>>()
                    .map(Self::Map)
            }
            Value::Null | Value::Array(_) => Err(ThemeError::InvalidDescriptor(json.to_string())),
        }
    }

    /// Whether this value is a deferred descriptor.
    #[inline]
    #[must_use]
    pub const fn is_var_with_fallback(&self) -> bool {
        matches!(self, Self::Var(_))
    }

    /// The descriptor inside, if any.
    #[inline]
    #[must_use]
    pub const fn as_var(&self) -> Option<&VarWithFallback> {
        match self {
            Self::Var(var) => Some(var),
            _ => None,
        }
    }

    /// The terminal value: descriptors are unwrapped down to their last
    /// fallback, anything else is returned as is.
    #[must_use]
    pub fn resolve(&self) -> &Self {
        self.as_var().map_or(self, vars::get_var_fallback)
    }

    /// The concrete color, if this is one, built or written.
    #[inline]
    #[must_use]
    pub const fn as_color(&self) -> Option<Color> {
        match self {
            Self::Color(c) | Self::Literal { color: c, .. } => Some(*c),
            _ => None,
        }
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Color(c) => write!(f, "{c}"),
            Self::Literal { text, .. } | Self::Str(text) => f.write_str(text),
            Self::Number(n) => write!(f, "{n}"),
            Self::Var(var) => f.write_str(&vars::render_var(var)),
            Self::Map(map) => {
                f.write_str("(")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str(")")
            }
        }
    }
}

impl From<Color> for StyleValue {
    fn from(color: Color) -> Self {
        Self::Color(color)
    }
}

/// Always a [`StyleValue::Str`], even for color-like text: `"#FFFFFF"`
/// stays a token and hashes to itself. Use [`StyleValue::parse`] to read
/// colors out of text.
impl From<&str> for StyleValue {
    fn from(text: &str) -> Self {
        Self::Str(text.to_string())
    }
}

/// Same as `From<&str>`: no color parsing.
impl From<String> for StyleValue {
    fn from(text: String) -> Self {
        Self::Str(text)
    }
}

impl From<f64> for StyleValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<VarWithFallback> for StyleValue {
    fn from(var: VarWithFallback) -> Self {
        Self::Var(var)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_color_token() {
        let value = StyleValue::parse("#ff7070");
        assert_eq!(value.as_color(), Some(Color::rgb(255, 112, 112)));
        assert!(matches!(value, StyleValue::Literal { .. }));
    }

    #[test]
    fn parse_keeps_written_text() {
        for text in ["#FFF", "transparent", "rgba(0, 0, 0, 0.1234)", "rgb(255,112,112)"] {
            assert_eq!(StyleValue::parse(text).to_string(), text);
        }
    }

    #[test]
    fn from_str_never_parses_colors() {
        let value = StyleValue::from("#FFFFFF");
        assert_eq!(value, StyleValue::Str("#FFFFFF".to_string()));
        assert_eq!(value.as_color(), None);
    }

    #[test]
    fn as_color_of_built_and_written() {
        assert_eq!(StyleValue::from(Color::BLACK).as_color(), Some(Color::BLACK));
        assert_eq!(StyleValue::parse("black").as_color(), Some(Color::BLACK));
        assert_eq!(StyleValue::Number(1.0).as_color(), None);
    }

    #[test]
    fn parse_plain_token_stays_string() {
        assert_eq!(StyleValue::parse("currentColor"), StyleValue::from("currentColor"));
    }

    #[test]
    fn parse_var_text_stays_string() {
        let text = "var(--mdc-theme-primary, #6200ee)";
        assert_eq!(StyleValue::parse(text), StyleValue::from(text));
    }

    #[test]
    fn json_descriptor() {
        let value =
            StyleValue::from_json_str(r##"{"varname": "--a", "fallback": "#fff"}"##).unwrap();
        assert_eq!(value, StyleValue::var("--a", StyleValue::parse("#fff")));
        assert_eq!(value.resolve().as_color(), Some(Color::WHITE));
        assert!(value.is_var_with_fallback());
    }

    #[test]
    fn json_nested_descriptor() {
        let value = StyleValue::from_json_str(
            r#"{"varname": "--a", "fallback": {"varname": "--b", "fallback": 0.5}}"#,
        )
        .unwrap();
        assert_eq!(value, StyleValue::var("--a", StyleValue::var("--b", 0.5)));
    }

    #[test]
    fn json_map_missing_fallback_is_plain_map() {
        let value = StyleValue::from_json_str(r#"{"varname": "--a"}"#).unwrap();
        assert!(!value.is_var_with_fallback());
        assert!(matches!(value, StyleValue::Map(_)));
    }

    #[test]
    fn json_map_missing_varname_is_plain_map() {
        let value = StyleValue::from_json_str(r#"{"fallback": "red"}"#).unwrap();
        assert!(!value.is_var_with_fallback());
    }

    #[test]
    fn json_descriptor_with_non_string_varname() {
        let err = StyleValue::from_json_str(r#"{"varname": 3, "fallback": "x"}"#).unwrap_err();
        assert!(matches!(err, ThemeError::InvalidDescriptor(_)));
    }

    #[test]
    fn json_null_rejected() {
        assert!(StyleValue::from_json_str("null").is_err());
        assert!(StyleValue::from_json_str("[1, 2]").is_err());
    }

    #[test]
    fn json_malformed() {
        let err = StyleValue::from_json_str("{varname").unwrap_err();
        assert!(matches!(err, ThemeError::Json(_)));
    }

    #[test]
    fn resolve_plain_value_is_identity() {
        let value = StyleValue::from(Color::BLACK);
        assert_eq!(value.resolve(), &value);
    }

    #[test]
    fn display_forms() {
        assert_eq!(StyleValue::Number(0.87).to_string(), "0.87");
        assert_eq!(StyleValue::from("bold").to_string(), "bold");
        assert_eq!(StyleValue::var("--a", Color::WHITE).to_string(), "var(--a, #ffffff)");

        let mut map = BTreeMap::new();
        map.insert("color".to_string(), StyleValue::from(Color::BLACK));
        map.insert("weight".to_string(), StyleValue::Number(500.0));
        assert_eq!(StyleValue::Map(map).to_string(), "(color: #000000, weight: 500)");
    }
}
