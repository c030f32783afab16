//! Base colour of the die, and parsing it from CSS-style strings.

use std::sync::OnceLock;

use regex::Regex;

use crate::render::Color;
use crate::types::*;

pub const DEFAULT_THEME_COLOR: Rgb = [155, 120, 220];

/// Opacity of face edges and the bounding ring.
const EDGE_ALPHA: Real = 0.5;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    base: Rgb,
}

impl Theme {
    pub fn new(base: Rgb) -> Theme {
        Theme { base }
    }

    pub fn base(&self) -> Rgb {
        self.base
    }

    pub fn set_base(&mut self, base: Rgb) {
        self.base = base;
    }

    /// The base colour scaled per channel by `brightness`, floored and
    /// clamped to 0-255.
    pub fn shade(&self, brightness: Real) -> Color {
        let channel = |c: u8| (c as Real * brightness).floor().max(0.0).min(255.0) as u8;
        Color::rgb(
            channel(self.base[0]),
            channel(self.base[1]),
            channel(self.base[2]),
        )
    }

    /// Translucent version of the base colour, for strokes.
    pub fn edge(&self) -> Color {
        Color::rgba(self.base[0], self.base[1], self.base[2], EDGE_ALPHA)
    }
}

impl Default for Theme {
    fn default() -> Theme {
        Theme::new(DEFAULT_THEME_COLOR)
    }
}

/// Parse `#rgb`, `#rrggbb`, `rgb(r, g, b)` or `rgba(r, g, b, a)`.
///
/// Anything else (including malformed hex) gives `DEFAULT_THEME_COLOR`;
/// this never fails. Alpha is ignored and channels above 255 are clamped.
pub fn parse_color(s: &str) -> Rgb {
    let s = s.trim();
    let parsed = if let Some(hex) = s.strip_prefix('#') {
        parse_hex(hex)
    } else {
        parse_rgb_function(s)
    };
    parsed.unwrap_or(DEFAULT_THEME_COLOR)
}

fn parse_hex(hex: &str) -> Option<Rgb> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |digits: &str| u8::from_str_radix(digits, 16).ok();
    match hex.len() {
        3 => {
            let mut rgb = [0; 3];
            for (out, digit) in rgb.iter_mut().zip(hex.chars()) {
                let doubled: String = [digit, digit].iter().collect();
                *out = channel(&doubled)?;
            }
            Some(rgb)
        }
        6 => Some([
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        ]),
        _ => None,
    }
}

fn parse_rgb_function(s: &str) -> Option<Rgb> {
    static RGB_FUNCTION: OnceLock<Regex> = OnceLock::new();
    let re = RGB_FUNCTION.get_or_init(|| {
        Regex::new(r"(?i)^rgba?\(\s*(\d+)\s*,\s*(\d+)\s*,\s*(\d+)")
            .expect("Color regex should be valid")
    });
    let captures = re.captures(s)?;
    let mut rgb = [0; 3];
    for (i, out) in rgb.iter_mut().enumerate() {
        let digits = captures.get(i + 1)?.as_str();
        // Arbitrarily long digit strings just saturate.
        *out = digits.parse::<u32>().unwrap_or(u32::MAX).min(255) as u8;
    }
    Some(rgb)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_hex() {
        assert_eq!(parse_color("#fff"), [255, 255, 255]);
        assert_eq!(parse_color("#0a3"), [0x00, 0xaa, 0x33]);
    }

    #[test]
    fn long_hex() {
        assert_eq!(parse_color("#9b78dc"), [155, 120, 220]);
        assert_eq!(parse_color("  #FF8000 "), [255, 128, 0]);
    }

    #[test]
    fn rgb_functions() {
        assert_eq!(parse_color("rgb(10,20,30)"), [10, 20, 30]);
        assert_eq!(parse_color("RGBA( 1 , 2 , 3 , 0.5)"), [1, 2, 3]);
        assert_eq!(parse_color("rgb(300, 0, 99999999999999)"), [255, 0, 255]);
    }

    #[test]
    fn unrecognized_falls_back_to_default() {
        assert_eq!(parse_color("not-a-color"), DEFAULT_THEME_COLOR);
        assert_eq!(parse_color(""), DEFAULT_THEME_COLOR);
        assert_eq!(parse_color("#abcd"), DEFAULT_THEME_COLOR);
        assert_eq!(parse_color("#ggg"), DEFAULT_THEME_COLOR);
        assert_eq!(parse_color("rgb(1, 2)"), DEFAULT_THEME_COLOR);
        assert_eq!(parse_color("hsl(10, 20%, 30%)"), DEFAULT_THEME_COLOR);
    }

    #[test]
    fn shading_scales_and_floors() {
        let theme = Theme::default();
        assert_eq!(theme.shade(1.0), Color::rgb(155, 120, 220));
        assert_eq!(theme.shade(0.5), Color::rgb(77, 60, 110));
        assert_eq!(Theme::new([255, 255, 255]).shade(1.5), Color::rgb(255, 255, 255));
    }

    #[test]
    fn edge_is_translucent_base() {
        let theme = Theme::new([1, 2, 3]);
        assert_eq!(theme.edge(), Color::rgba(1, 2, 3, 0.5));
    }
}
