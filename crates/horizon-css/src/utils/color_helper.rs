//! Recognizing and parsing color values.

use std::sync::LazyLock;

use regex::Regex;

use crate::decl::{Hsl, Hsla, Rgb, Rgba};

const NUMBER: &str = r"[+-]?(?:[0-9]*\.[0-9]+|[0-9]+)";

fn function_pattern(name: &str, components: &[&str]) -> Regex {
    let separator = r"\s*,\s*";
    let body = components
        .iter()
        .map(|c| format!("({c})"))
        .collect::<Vec<_>>()
        .join(separator);
    Regex::new(&format!(r"(?i)^{name}\(\s*{body}\s*\)$"))
        .unwrap_or_else(|e| panic!("invalid color pattern for {name}: {e}"))
}

static HEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$")
        .unwrap_or_else(|e| panic!("invalid hex color pattern: {e}"))
});

static RGB: LazyLock<Regex> = LazyLock::new(|| {
    let c = format!("{NUMBER}%?");
    function_pattern("rgb", &[&c, &c, &c])
});

static RGBA: LazyLock<Regex> = LazyLock::new(|| {
    let c = format!("{NUMBER}%?");
    function_pattern("rgba", &[&c, &c, &c, &c])
});

static HSL: LazyLock<Regex> = LazyLock::new(|| {
    let hue = format!("{NUMBER}(?:deg)?");
    let percent = format!("{NUMBER}%");
    function_pattern("hsl", &[&hue, &percent, &percent])
});

static HSLA: LazyLock<Regex> = LazyLock::new(|| {
    let hue = format!("{NUMBER}(?:deg)?");
    let percent = format!("{NUMBER}%");
    let opacity = format!("{NUMBER}%?");
    function_pattern("hsla", &[&hue, &percent, &percent, &opacity])
});

/// Minimum and maximum of an RGB component.
pub const RGB_RANGE: (i32, i32) = (0, 255);
/// Number of degrees in the hue circle.
pub const HSL_HUE_RANGE: f64 = 360.0;

/// Returns true for `transparent` and `currentcolor`, compared case-insensitively.
pub fn is_color_keyword(value: &str) -> bool {
    let value = value.trim();
    value.eq_ignore_ascii_case("transparent") || value.eq_ignore_ascii_case("currentcolor")
}

/// Returns true for one of the named colors, such as `red` or `rebeccapurple`.
pub fn is_named_color(value: &str) -> bool {
    cssparser::color::parse_named_color(value.trim()).is_ok()
}

/// Returns true for `#rgb`, `#rgba`, `#rrggbb` and `#rrggbbaa`.
pub fn is_hex_color_value(value: &str) -> bool {
    HEX.is_match(value.trim())
}

pub fn is_rgb_color_value(value: &str) -> bool {
    RGB.is_match(value.trim())
}

pub fn is_rgba_color_value(value: &str) -> bool {
    RGBA.is_match(value.trim())
}

pub fn is_hsl_color_value(value: &str) -> bool {
    HSL.is_match(value.trim())
}

pub fn is_hsla_color_value(value: &str) -> bool {
    HSLA.is_match(value.trim())
}

/// Returns true for any value that denotes a color.
pub fn is_color_value(value: &str) -> bool {
    is_color_keyword(value)
        || is_named_color(value)
        || is_hex_color_value(value)
        || is_rgb_color_value(value)
        || is_rgba_color_value(value)
        || is_hsl_color_value(value)
        || is_hsla_color_value(value)
}

fn components<const N: usize>(pattern: &Regex, value: &str) -> Option<[String; N]> {
    let captures = pattern.captures(value.trim())?;
    let mut out: [String; N] = std::array::from_fn(|_| String::new());
    for (i, slot) in out.iter_mut().enumerate() {
        *slot = captures.get(i + 1)?.as_str().to_string();
    }
    Some(out)
}

/// Parse `rgb(r, g, b)`. Components are kept as written.
pub fn parse_rgb(value: &str) -> Option<Rgb> {
    let [r, g, b] = components(&RGB, value)?;
    Rgb::new(r, g, b).ok()
}

pub fn parse_rgba(value: &str) -> Option<Rgba> {
    let [r, g, b, a] = components(&RGBA, value)?;
    Rgba::new(r, g, b, a).ok()
}

pub fn parse_hsl(value: &str) -> Option<Hsl> {
    let [h, s, l] = components(&HSL, value)?;
    Hsl::new(h, s, l).ok()
}

pub fn parse_hsla(value: &str) -> Option<Hsla> {
    let [h, s, l, a] = components(&HSLA, value)?;
    Hsla::new(h, s, l, a).ok()
}

/// The RGB components of a named color.
pub fn named_color_rgb(value: &str) -> Option<Rgb> {
    let (r, g, b) = cssparser::color::parse_named_color(value.trim()).ok()?;
    Some(Rgb::from_ints(r.into(), g.into(), b.into()))
}

/// Clamp an RGB component to `0..=255`.
pub fn rgb_value(value: i32) -> i32 {
    value.clamp(RGB_RANGE.0, RGB_RANGE.1)
}

/// Normalize a hue into `0..360`.
pub fn hsl_hue_value(value: f64) -> f64 {
    value.rem_euclid(HSL_HUE_RANGE)
}

/// Clamp a saturation or lightness percentage to `0..=100`.
pub fn hsl_percentage_value(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}

/// Clamp an opacity to `0..=1`.
pub fn opacity_value(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

/// `#rrggbb` for the given components, each clamped first.
pub fn hex_color_value(red: i32, green: i32, blue: i32) -> String {
    format!(
        "#{:02x}{:02x}{:02x}",
        rgb_value(red),
        rgb_value(green),
        rgb_value(blue)
    )
}
