use serde::{Deserialize, Serialize};

use crate::foundation::geometry::lerp_f64;

/// Straight-alpha RGBA8 color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Color {
    /// Opaque white.
    pub const WHITE: Self = Self::rgba8(255, 255, 255, 255);
    /// Opaque black.
    pub const BLACK: Self = Self::rgba8(0, 0, 0, 255);
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::rgba8(0, 0, 0, 0);

    /// Construct from straight RGBA8 channels.
    pub const fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Construct from a packed `0xAARRGGBB` value.
    pub const fn from_argb32(v: u32) -> Self {
        Self {
            a: (v >> 24) as u8,
            r: (v >> 16) as u8,
            g: (v >> 8) as u8,
            b: v as u8,
        }
    }

    /// Construct from normalized channels, clamping each into `[0, 1]`.
    pub fn from_unit_rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self {
            r: unit_to_u8(r),
            g: unit_to_u8(g),
            b: unit_to_u8(b),
            a: unit_to_u8(a),
        }
    }

    /// Same color with alpha replaced by `opacity * 255`.
    pub fn with_opacity(self, opacity: f64) -> Self {
        Self {
            a: unit_to_u8(opacity),
            ..self
        }
    }

    /// Move the RGB channels towards black by `amount` in `[0, 1]`; alpha is kept.
    pub fn darken(self, amount: f64) -> Self {
        let k = 1.0 - amount.clamp(0.0, 1.0);
        let ch = |c: u8| (f64::from(c) * k).round().clamp(0.0, 255.0) as u8;
        Self {
            r: ch(self.r),
            g: ch(self.g),
            b: ch(self.b),
            a: self.a,
        }
    }

    /// Channel-wise interpolation, rounded and clamped to the u8 range.
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let ch = |a: u8, b: u8| {
            lerp_f64(f64::from(a), f64::from(b), t)
                .round()
                .clamp(0.0, 255.0) as u8
        };
        Self {
            r: ch(self.r, other.r),
            g: ch(self.g, other.g),
            b: ch(self.b, other.b),
            a: ch(self.a, other.a),
        }
    }

    /// `#RRGGBBAA` form, accepted back by deserialization.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }

    /// Premultiplied RGBA8 for raster surfaces.
    pub fn to_premul_rgba8(self) -> [u8; 4] {
        let a = u16::from(self.a);
        let premul = |c: u8| (((u16::from(c) * a) + 127) / 255) as u8;
        [premul(self.r), premul(self.g), premul(self.b), self.a]
    }
}

fn unit_to_u8(x: f64) -> u8 {
    (x.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Hex(String),
            RgbaObj {
                r: f64,
                g: f64,
                b: f64,
                #[serde(default = "one")]
                a: f64,
            },
            HslaObj {
                h: f64,
                s: f64,
                l: f64,
                #[serde(default = "one")]
                a: f64,
            },
            Arr(Vec<f64>),
        }

        fn one() -> f64 {
            1.0
        }

        match Repr::deserialize(deserializer)? {
            Repr::Hex(s) => parse_hex(&s).map_err(serde::de::Error::custom),
            Repr::RgbaObj { r, g, b, a } => Ok(Self::from_unit_rgba(r, g, b, a)),
            Repr::HslaObj { h, s, l, a } => Ok(hsla_to_color(h, s, l, a)),
            Repr::Arr(v) => match v.as_slice() {
                [r, g, b] => Ok(Self::from_unit_rgba(*r, *g, *b, 1.0)),
                [r, g, b, a] => Ok(Self::from_unit_rgba(*r, *g, *b, *a)),
                _ => Err(serde::de::Error::custom(
                    "rgba array must have len 3 ([r,g,b]) or 4 ([r,g,b,a])",
                )),
            },
        }
    }
}

impl std::str::FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s)
    }
}

/// Parse `#RRGGBB` / `#RRGGBBAA` (the `#` is optional).
pub fn parse_hex(s: &str) -> Result<Color, String> {
    let s = s.trim();
    let s = s.strip_prefix('#').unwrap_or(s);

    fn hex_byte(pair: &str) -> Result<u8, String> {
        u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
    }

    if !s.is_ascii() {
        return Err("hex color must be ASCII".to_owned());
    }

    match s.len() {
        6 => Ok(Color::rgba8(
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
            255,
        )),
        8 => Ok(Color::rgba8(
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
            hex_byte(&s[6..8])?,
        )),
        _ => Err("hex color must be #RRGGBB or #RRGGBBAA (case-insensitive)".to_owned()),
    }
}

fn hsla_to_color(h: f64, s: f64, l: f64, a: f64) -> Color {
    let h = (h % 360.0 + 360.0) % 360.0 / 360.0;
    let s = s.clamp(0.0, 1.0);
    let l = l.clamp(0.0, 1.0);

    if s == 0.0 {
        return Color::from_unit_rgba(l, l, l, a);
    }

    fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
        if t < 0.0 {
            t += 1.0;
        }
        if t > 1.0 {
            t -= 1.0;
        }
        if t < 1.0 / 6.0 {
            return p + (q - p) * 6.0 * t;
        }
        if t < 1.0 / 2.0 {
            return q;
        }
        if t < 2.0 / 3.0 {
            return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
        }
        p
    }

    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let p = 2.0 * l - q;

    Color::from_unit_rgba(
        hue_to_rgb(p, q, h + 1.0 / 3.0),
        hue_to_rgb(p, q, h),
        hue_to_rgb(p, q, h - 1.0 / 3.0),
        a,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/color.rs"]
mod tests;
