// SPDX-License-Identifier: MIT
//
// tonekit — command-line front end for the theming utilities.
//
// Wires the two library crates to the shell:
//
//   tk-color → parse the color arguments
//   tk-theme → contrast, tone, ink, var() rendering, hashing
//
// Every invocation is one pure computation:
//
//   argv → options (defaults ← --config ← --set) → Command → stdout
//
// Values starting with `{` are JSON descriptors; anything else is a color
// when it parses as one and a plain token otherwise. Errors go to stderr
// as `tonekit: <message>` with exit status 1.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use thiserror::Error;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use tk_color::{Color, ParseColorError};
use tk_theme::contrast::{self, ToneInput, tone_input_of};
use tk_theme::ink::ink_color_for_fill;
use tk_theme::options::ThemeOptions;
use tk_theme::vars::get_css_varname;
use tk_theme::{StyleValue, TextEmphasis, ThemeError, VarWithFallback};

const USAGE: &str = "\
usage: tonekit [--config FILE] [--set NAME=VALUE]... <command> [args]

commands:
  luminance <color>            relative luminance (0-1)
  contrast <back> <front>      WCAG contrast ratio (1-21)
  tone <color|light|dark>      light or dark background
  contrast-tone <color>        text tone for that background
  ink <emphasis> <fill>        text color for a fill
  hash <value>                 short identifier for a color value
  keyframe <prefix> <value>    <prefix>-<hash>
  render <descriptor>          var() expression for a descriptor
  fallback <descriptor>        final fallback of a descriptor
  varname <text>               bare --name inside var(...)
  varname-for <name>           --<var-prefix>-<name>
  help                         this message";

// ─── Errors ─────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
enum CliError {
    #[error("{0}\n\n{usage}", usage = USAGE)]
    Usage(String),

    #[error(transparent)]
    Theme(#[from] ThemeError),

    #[error(transparent)]
    Color(#[from] ParseColorError),

    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

// ─── Commands ───────────────────────────────────────────────────────────────

/// One parsed subcommand with its arguments already typed.
#[derive(Debug, PartialEq)]
enum Command {
    Luminance(Color),
    Contrast(Color, Color),
    Tone(ToneInput),
    ContrastTone(ToneInput),
    Ink(TextEmphasis, ToneInput),
    Hash(StyleValue),
    Keyframe(String, StyleValue),
    Render(VarWithFallback),
    Fallback(VarWithFallback),
    Varname(String),
    VarnameFor(String),
    Help,
}

/// Everything `main` needs to run.
#[derive(Debug)]
struct Invocation {
    options: ThemeOptions,
    command: Command,
}

/// Parse argv (without the program name).
fn parse_args(args: &[String]) -> Result<Invocation, CliError> {
    let mut options = ThemeOptions::default();
    let mut overrides = Vec::new();
    let mut rest = args;

    // Flags precede the command. --set directives apply after --config
    // regardless of their order on the line.
    loop {
        match rest {
            [flag, path, tail @ ..] if flag == "--config" => {
                options = load_config(Path::new(path))?;
                rest = tail;
            }
            [flag, directive, tail @ ..] if flag == "--set" => {
                overrides.push(directive.as_str());
                rest = tail;
            }
            [flag, ..] if flag == "--config" || flag == "--set" => {
                return Err(CliError::Usage(format!("{flag} needs a value")));
            }
            _ => break,
        }
    }
    for directive in overrides {
        options.apply(directive)?;
    }

    let command = parse_command(rest)?;
    Ok(Invocation { options, command })
}

fn parse_command(args: &[String]) -> Result<Command, CliError> {
    let Some((name, args)) = args.split_first() else {
        return Err(CliError::Usage("missing command".to_string()));
    };
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    let command = match (name.as_str(), args.as_slice()) {
        ("luminance", [color]) => Command::Luminance(color.parse()?),
        ("contrast", [back, front]) => Command::Contrast(back.parse()?, front.parse()?),
        ("tone", [input]) => Command::Tone(read_tone_input(input)?),
        ("contrast-tone", [input]) => Command::ContrastTone(read_tone_input(input)?),
        ("ink", [emphasis, fill]) => Command::Ink(emphasis.parse()?, read_tone_input(fill)?),
        ("hash", [value]) => Command::Hash(read_value(value)?),
        ("keyframe", [prefix, value]) => Command::Keyframe((*prefix).to_string(), read_value(value)?),
        ("render", [value]) => Command::Render(read_descriptor(value)?),
        ("fallback", [value]) => Command::Fallback(read_descriptor(value)?),
        ("varname", [text]) => Command::Varname((*text).to_string()),
        ("varname-for", [name]) => Command::VarnameFor((*name).to_string()),
        ("help" | "--help" | "-h", []) => Command::Help,
        (
            "luminance" | "contrast" | "tone" | "contrast-tone" | "ink" | "hash" | "keyframe"
            | "render" | "fallback" | "varname" | "varname-for" | "help",
            _,
        ) => {
            return Err(CliError::Usage(format!("wrong number of arguments for {name}")));
        }
        _ => return Err(CliError::Usage(format!("unknown command: {name}"))),
    };
    Ok(command)
}

/// Execute a command and return what goes to stdout.
fn run(command: &Command, options: &ThemeOptions) -> Result<String, CliError> {
    debug!(?command, "running");
    let output = match command {
        Command::Luminance(color) => format!("{:.4}", contrast::luminance(*color)),
        Command::Contrast(back, front) => format!("{:.2}", contrast::contrast(*back, *front)),
        Command::Tone(input) => contrast::tone_with(options, *input).to_string(),
        Command::ContrastTone(input) => contrast::contrast_tone_with(options, *input).to_string(),
        Command::Ink(emphasis, fill) => {
            let input = match fill {
                ToneInput::Color(color) => ToneInput::Tone(contrast::tone_with(options, *color)),
                decided => *decided,
            };
            ink_color_for_fill(*emphasis, input).to_string()
        }
        Command::Hash(value) => tk_theme::color_hash(value)?,
        Command::Keyframe(prefix, value) => tk_theme::keyframe_name(prefix, value)?,
        Command::Render(var) => tk_theme::render_var(var),
        Command::Fallback(var) => tk_theme::get_var_fallback(var).to_string(),
        Command::Varname(text) => get_css_varname(text).to_string(),
        Command::VarnameFor(name) => options.varname(name),
        Command::Help => USAGE.to_string(),
    };
    Ok(output)
}

// ─── Argument readers ───────────────────────────────────────────────────────

fn read_value(arg: &str) -> Result<StyleValue, CliError> {
    if arg.trim_start().starts_with('{') {
        Ok(StyleValue::from_json_str(arg)?)
    } else {
        Ok(StyleValue::parse(arg))
    }
}

fn read_descriptor(arg: &str) -> Result<VarWithFallback, CliError> {
    match read_value(arg)? {
        StyleValue::Var(var) => Ok(var),
        other => Err(CliError::Usage(format!(
            "expected a {{\"varname\", \"fallback\"}} descriptor, got {other}"
        ))),
    }
}

fn read_tone_input(arg: &str) -> Result<ToneInput, CliError> {
    Ok(tone_input_of(&read_value(arg)?)?)
}

fn load_config(path: &Path) -> Result<ThemeOptions, CliError> {
    let text = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(ThemeOptions::from_json_str(&text)?)
}

// ─── Entry point ────────────────────────────────────────────────────────────

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logging();
    let args: Vec<String> = env::args().skip(1).collect();

    let result = parse_args(&args).and_then(|inv| run(&inv.command, &inv.options));
    match result {
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("tonekit: {e}");
            process::exit(1);
        }
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tk_theme::Tone;

    fn argv(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| (*s).to_string()).collect()
    }

    fn exec(args: &[&str]) -> Result<String, CliError> {
        let inv = parse_args(&argv(args))?;
        run(&inv.command, &inv.options)
    }

    // ── Parsing ─────────────────────────────────────────────────────

    #[test]
    fn parse_tone_of_color() {
        let inv = parse_args(&argv(&["tone", "#ffffff"])).unwrap();
        assert_eq!(inv.command, Command::Tone(ToneInput::Color(Color::WHITE)));
    }

    #[test]
    fn parse_tone_token() {
        let inv = parse_args(&argv(&["tone", "dark"])).unwrap();
        assert_eq!(inv.command, Command::Tone(ToneInput::Tone(Tone::Dark)));
    }

    #[test]
    fn parse_set_overrides_defaults() {
        let inv = parse_args(&argv(&["--set", "mc=4.5", "--set", "prefix=acme", "help"])).unwrap();
        assert!((inv.options.minimum_contrast - 4.5).abs() < f64::EPSILON);
        assert_eq!(inv.options.var_prefix, "acme");
        assert_eq!(inv.command, Command::Help);
    }

    #[test]
    fn missing_command() {
        assert!(matches!(parse_args(&[]), Err(CliError::Usage(_))));
    }

    #[test]
    fn unknown_command() {
        assert!(matches!(exec(&["sparkle"]), Err(CliError::Usage(_))));
    }

    #[test]
    fn wrong_arity() {
        assert!(matches!(exec(&["contrast", "#fff"]), Err(CliError::Usage(_))));
    }

    #[test]
    fn dangling_flag() {
        assert!(matches!(exec(&["--set"]), Err(CliError::Usage(_))));
    }

    #[test]
    fn bad_option() {
        assert!(matches!(exec(&["--set", "nope=1", "help"]), Err(CliError::Theme(_))));
    }

    #[test]
    fn missing_config_file() {
        let err = exec(&["--config", "/nonexistent/tonekit.json", "help"]).unwrap_err();
        assert!(matches!(err, CliError::Io { .. }));
    }

    // ── Commands ────────────────────────────────────────────────────

    #[test]
    fn luminance_of_white() {
        assert_eq!(exec(&["luminance", "white"]).unwrap(), "1.0000");
    }

    #[test]
    fn contrast_black_on_white() {
        assert_eq!(exec(&["contrast", "#000", "#fff"]).unwrap(), "21.00");
    }

    #[test]
    fn tone_and_contrast_tone() {
        assert_eq!(exec(&["tone", "#ff7070"]).unwrap(), "light");
        assert_eq!(exec(&["contrast-tone", "#ff7070"]).unwrap(), "dark");
        assert_eq!(exec(&["tone", "light"]).unwrap(), "light");
    }

    #[test]
    fn tone_respects_threshold_option() {
        assert_eq!(exec(&["tone", "rgb(255, 0, 0)"]).unwrap(), "dark");
        assert_eq!(exec(&["--set", "mc=4.5", "tone", "rgb(255, 0, 0)"]).unwrap(), "light");
    }

    #[test]
    fn ink_on_white() {
        assert_eq!(exec(&["ink", "secondary", "white"]).unwrap(), "rgba(0, 0, 0, 0.54)");
    }

    #[test]
    fn hash_forms() {
        assert_eq!(exec(&["hash", "#FFFFFF"]).unwrap(), "ffffff");
        assert_eq!(exec(&["hash", "var(--my-fancy-color, #fff)"]).unwrap(), "--my-fancy-color");
        assert_eq!(
            exec(&["hash", r##"{"varname": "--x", "fallback": "rgb(255, 112, 112)"}"##]).unwrap(),
            "ff7070"
        );
    }

    #[test]
    fn keyframe_command() {
        assert_eq!(exec(&["keyframe", "fade", "#ff7070"]).unwrap(), "fade-ff7070");
    }

    #[test]
    fn render_and_fallback() {
        let chain = r##"{"varname": "--a", "fallback": {"varname": "--b", "fallback": "#fff"}}"##;
        assert_eq!(exec(&["render", chain]).unwrap(), "var(--a, var(--b, #fff))");
        assert_eq!(exec(&["fallback", chain]).unwrap(), "#fff");
    }

    #[test]
    fn render_keeps_translucent_fallback() {
        let var = r#"{"varname": "--a", "fallback": "rgba(0, 0, 0, 0.1234)"}"#;
        assert_eq!(exec(&["render", var]).unwrap(), "var(--a, rgba(0, 0, 0, 0.1234))");
    }

    #[test]
    fn render_rejects_plain_value() {
        assert!(matches!(exec(&["render", "#fff"]), Err(CliError::Usage(_))));
    }

    #[test]
    fn varname_command() {
        assert_eq!(exec(&["varname", "var(--shade, rgba(0, 0, 0, 0.5))"]).unwrap(), "--shade");
    }

    #[test]
    fn varname_for_uses_prefix_option() {
        assert_eq!(exec(&["varname-for", "primary"]).unwrap(), "--mdc-theme-primary");
        assert_eq!(exec(&["--set", "prefix=acme", "varname-for", "primary"]).unwrap(), "--acme-primary");
        assert_eq!(exec(&["--set", "prefix=", "varname-for", "primary"]).unwrap(), "--primary");
    }

    #[test]
    fn bad_color_is_error() {
        assert!(matches!(exec(&["luminance", "nope"]), Err(CliError::Color(_))));
    }
}
