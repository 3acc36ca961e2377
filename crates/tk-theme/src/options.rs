//! Theme options — defaults, JSON config, and `name=value` overrides.
//!
//! Options are layered: [`ThemeOptions::default`], then a JSON document
//! ([`ThemeOptions::from_json_str`]), then individual `name=value`
//! directives applied with [`ThemeOptions::apply`]. Later layers win.
//!
//! | Full name          | Abbrev   | Type   | Default     |
//! |--------------------|----------|--------|-------------|
//! | `minimum-contrast` | `mc`     | number | 3.1         |
//! | `var-prefix`       | `prefix` | string | `mdc-theme` |

use serde::Deserialize;
use tracing::debug;

use crate::contrast::MINIMUM_CONTRAST;
use crate::error::{Result, ThemeError};
use crate::vars::create_varname;

/// Prefix for generated custom property names unless configured otherwise.
pub const DEFAULT_VAR_PREFIX: &str = "mdc-theme";

/// Tunable inputs to tone classification and variable naming.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct ThemeOptions {
    /// White-text contrast below which a surface may count as light.
    pub minimum_contrast: f64,
    /// Prefix placed between `--` and the name by [`ThemeOptions::varname`].
    pub var_prefix: String,
}

impl Default for ThemeOptions {
    fn default() -> Self {
        Self {
            minimum_contrast: MINIMUM_CONTRAST,
            var_prefix: DEFAULT_VAR_PREFIX.to_string(),
        }
    }
}

/// A settable option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionName {
    MinimumContrast,
    VarPrefix,
}

impl OptionName {
    /// Look up an option by full name or abbreviation.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "minimum-contrast" | "mc" => Some(Self::MinimumContrast),
            "var-prefix" | "prefix" => Some(Self::VarPrefix),
            _ => None,
        }
    }

    /// The full option name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::MinimumContrast => "minimum-contrast",
            Self::VarPrefix => "var-prefix",
        }
    }
}

/// Split a `name=value` directive and resolve the name.
///
/// # Errors
///
/// Returns [`ThemeError::UnknownOption`] when there is no `=` or the name
/// is not a known option.
pub fn parse_option(arg: &str) -> Result<(OptionName, &str)> {
    let (name, value) = arg
        .split_once('=')
        .ok_or_else(|| ThemeError::UnknownOption(arg.to_string()))?;
    let option =
        OptionName::from_name(name.trim()).ok_or_else(|| ThemeError::UnknownOption(name.to_string()))?;
    Ok((option, value.trim()))
}

impl ThemeOptions {
    /// Read options from a JSON object. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Json`] for malformed JSON or unknown keys, and
    /// [`ThemeError::InvalidOptionValue`] for an unusable contrast threshold.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(text)?;
        validate_contrast(options.minimum_contrast, &options.minimum_contrast.to_string())?;
        Ok(options)
    }

    /// Apply one `name=value` directive.
    ///
    /// # Errors
    ///
    /// See [`parse_option`]; also [`ThemeError::InvalidOptionValue`] when
    /// the value does not fit the option.
    pub fn apply(&mut self, arg: &str) -> Result<()> {
        let (option, value) = parse_option(arg)?;
        match option {
            OptionName::MinimumContrast => {
                let parsed = value.parse::<f64>().map_err(|_| invalid(option, value))?;
                self.minimum_contrast = validate_contrast(parsed, value)?;
            }
            OptionName::VarPrefix => {
                if value.contains(char::is_whitespace) {
                    return Err(invalid(option, value));
                }
                self.var_prefix = value.to_string();
            }
        }
        debug!(option = option.name(), value, "option set");
        Ok(())
    }

    /// Current value of an option, rendered as text.
    #[must_use]
    pub fn get(&self, option: OptionName) -> String {
        match option {
            OptionName::MinimumContrast => self.minimum_contrast.to_string(),
            OptionName::VarPrefix => self.var_prefix.clone(),
        }
    }

    /// A custom property name under the configured prefix.
    #[must_use]
    pub fn varname(&self, name: &str) -> String {
        create_varname(name, &self.var_prefix)
    }
}

/// Contrast ratios live in [1, 21]; a threshold outside that is meaningless.
fn validate_contrast(value: f64, text: &str) -> Result<f64> {
    if (1.0..=21.0).contains(&value) {
        Ok(value)
    } else {
        Err(invalid(OptionName::MinimumContrast, text))
    }
}

fn invalid(option: OptionName, value: &str) -> ThemeError {
    ThemeError::InvalidOptionValue {
        name: option.name().to_string(),
        value: value.to_string(),
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
    fn defaults() {
        let options = ThemeOptions::default();
        assert!((options.minimum_contrast - 3.1).abs() < f64::EPSILON);
        assert_eq!(options.var_prefix, "mdc-theme");
    }

    #[test]
    fn parse_full_and_abbrev_names() {
        assert_eq!(parse_option("minimum-contrast=4.5").unwrap(), (OptionName::MinimumContrast, "4.5"));
        assert_eq!(parse_option("mc=4.5").unwrap(), (OptionName::MinimumContrast, "4.5"));
        assert_eq!(parse_option("prefix=acme").unwrap(), (OptionName::VarPrefix, "acme"));
    }

    #[test]
    fn parse_rejects_unknown_and_bare_names() {
        assert!(matches!(parse_option("bogus=1"), Err(ThemeError::UnknownOption(_))));
        assert!(matches!(parse_option("mc"), Err(ThemeError::UnknownOption(_))));
    }

    #[test]
    fn apply_minimum_contrast() {
        let mut options = ThemeOptions::default();
        options.apply("mc=4.5").unwrap();
        assert_eq!(options.get(OptionName::MinimumContrast), "4.5");
    }

    #[test]
    fn apply_rejects_bad_contrast() {
        let mut options = ThemeOptions::default();
        assert!(matches!(
            options.apply("mc=abc"),
            Err(ThemeError::InvalidOptionValue { .. })
        ));
        assert!(options.apply("mc=0.5").is_err());
        assert!(options.apply("mc=22").is_err());
        assert_eq!(options, ThemeOptions::default());
    }

    #[test]
    fn apply_prefix_and_varname() {
        let mut options = ThemeOptions::default();
        assert_eq!(options.varname("primary"), "--mdc-theme-primary");
        options.apply("var-prefix=acme").unwrap();
        assert_eq!(options.varname("primary"), "--acme-primary");
        options.apply("prefix=").unwrap();
        assert_eq!(options.varname("primary"), "--primary");
    }

    #[test]
    fn apply_rejects_prefix_with_spaces() {
        let mut options = ThemeOptions::default();
        assert!(options.apply("prefix=a b").is_err());
    }

    #[test]
    fn json_partial_keeps_defaults() {
        let options = ThemeOptions::from_json_str(r#"{"minimum-contrast": 4.5}"#).unwrap();
        assert!((options.minimum_contrast - 4.5).abs() < f64::EPSILON);
        assert_eq!(options.var_prefix, DEFAULT_VAR_PREFIX);
    }

    #[test]
    fn json_unknown_key_rejected() {
        assert!(matches!(
            ThemeOptions::from_json_str(r#"{"contrast": 4.5}"#),
            Err(ThemeError::Json(_))
        ));
    }

    #[test]
    fn json_bad_threshold_rejected() {
        assert!(matches!(
            ThemeOptions::from_json_str(r#"{"minimum-contrast": 0}"#),
            Err(ThemeError::InvalidOptionValue { .. })
        ));
    }
}
