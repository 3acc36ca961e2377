//! Descriptor chains read from JSON, end to end.

use pretty_assertions::assert_eq;
use tk_color::Color;
use tk_theme::contrast::tone_of_value;
use tk_theme::vars::get_css_varname;
use tk_theme::{StyleValue, Tone, color_hash, get_var_fallback, render_var};

const THREE_LEVELS: &str = r##"{
    "varname": "--mdc-theme-primary",
    "fallback": {
        "varname": "--brand-primary",
        "fallback": "#6200ee"
    }
}"##;

fn chain() -> StyleValue {
    StyleValue::from_json_str(THREE_LEVELS).unwrap()
}

#[test]
fn fallback_reaches_bottom_literal() {
    let value = chain();
    let var = value.as_var().unwrap();
    let bottom = get_var_fallback(var);
    assert_eq!(bottom.as_color(), Some(Color::rgb(0x62, 0x00, 0xee)));
    assert_eq!(bottom.to_string(), "#6200ee");
}

#[test]
fn render_keeps_fallback_text_as_written() {
    let value = StyleValue::from_json_str(
        r#"{"varname": "--shade", "fallback": {"varname": "--ink", "fallback": "rgba(0, 0, 0, 0.1234)"}}"#,
    )
    .unwrap();
    assert_eq!(
        render_var(value.as_var().unwrap()),
        "var(--shade, var(--ink, rgba(0, 0, 0, 0.1234)))"
    );

    let short = StyleValue::from_json_str(r##"{"varname": "--a", "fallback": "#FFF"}"##).unwrap();
    assert_eq!(render_var(short.as_var().unwrap()), "var(--a, #FFF)");
}

#[test]
fn render_names_every_level() {
    let value = chain();
    let rendered = render_var(value.as_var().unwrap());
    assert_eq!(rendered, "var(--mdc-theme-primary, var(--brand-primary, #6200ee))");
}

#[test]
fn rendered_text_round_trips_through_varname() {
    let value = chain();
    let rendered = render_var(value.as_var().unwrap());
    assert_eq!(get_css_varname(&rendered), "--mdc-theme-primary");
    assert_eq!(color_hash(&StyleValue::parse(&rendered)).unwrap(), "--mdc-theme-primary");
}

#[test]
fn tone_of_chain_uses_bottom_color() {
    assert_eq!(tone_of_value(&chain()).unwrap(), Tone::Dark);
}
