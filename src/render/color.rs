use std::sync::OnceLock;

use regex::Regex;

/// Opaque 8-bit sRGB color. Also serves as the text brush for layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rgb` or `#rrggbb` (leading `#` optional, case-insensitive).
    pub fn parse_hex(s: &str) -> Result<Self, String> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        if !s.is_ascii() {
            return Err(format!("invalid hex color \"{s}\""));
        }

        fn hex_byte(pair: &str) -> Result<u8, String> {
            u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
        }

        match s.len() {
            3 => {
                let mut out = [0u8; 3];
                for (i, c) in s.chars().enumerate() {
                    let doubled: String = [c, c].iter().collect();
                    out[i] = hex_byte(&doubled)?;
                }
                Ok(Self::new(out[0], out[1], out[2]))
            }
            6 => Ok(Self::new(
                hex_byte(&s[0..2])?,
                hex_byte(&s[2..4])?,
                hex_byte(&s[4..6])?,
            )),
            _ => Err("hex color must be #RGB or #RRGGBB (case-insensitive)".to_owned()),
        }
    }

    /// Parse `s`, falling back to `fallback` when it is not a usable hex color.
    pub fn parse_or(s: &str, fallback: Self) -> Self {
        match Self::parse_hex(s) {
            Ok(c) => c,
            Err(e) => {
                tracing::warn!(color = s, error = %e, "unusable color, using fallback");
                fallback
            }
        }
    }

    /// Scale each channel by `factor`, truncating toward zero.
    pub fn fade(self, factor: f64) -> Self {
        let f = factor.clamp(0.0, 1.0);
        let scale = |c: u8| -> u8 { (f64::from(c) * f) as u8 };
        Self::new(scale(self.r), scale(self.g), scale(self.b))
    }

    /// Linear blend toward `other`; `t` is clamped to `0..=1`.
    pub fn mix(self, other: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let lerp = |a: u8, b: u8| -> u8 {
            (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8
        };
        Self::new(
            lerp(self.r, other.r),
            lerp(self.g, other.g),
            lerp(self.b, other.b),
        )
    }

    pub fn to_paint(self) -> vello_cpu::peniko::Color {
        vello_cpu::peniko::Color::from_rgba8(self.r, self.g, self.b, 255)
    }
}

fn hex_color_regex() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"#(?:[0-9a-fA-F]{3}){1,2}").ok())
        .as_ref()
}

/// Every hex color literal mentioned in a free-form gradient description, in order.
pub fn gradient_colors(spec: &str) -> Vec<Rgb8> {
    let Some(re) = hex_color_regex() else {
        return Vec::new();
    };
    re.find_iter(spec)
        .filter_map(|m| Rgb8::parse_hex(m.as_str()).ok())
        .collect()
}

/// First and last color of a gradient description, if it names any.
pub fn gradient_endpoints(spec: &str) -> Option<(Rgb8, Rgb8)> {
    let colors = gradient_colors(spec);
    Some((*colors.first()?, *colors.last()?))
}

#[cfg(test)]
#[path = "../../tests/unit/render/color.rs"]
mod tests;
