//! 8-bit RGBA colors

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ParseColorError;

/// RGBA color with 8 bits per channel
///
/// Icons are authored with `0xAARRGGBB` literals, so [`Color::from_argb`] is
/// `const` and usable in statics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
    pub const TRANSPARENT: Color = Color::rgba(0x00, 0x00, 0x00, 0x00);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Build a color from a packed `0xAARRGGBB` value
    pub const fn from_argb(argb: u32) -> Self {
        Self {
            a: (argb >> 24) as u8,
            r: (argb >> 16) as u8,
            g: (argb >> 8) as u8,
            b: argb as u8,
        }
    }

    /// Pack into `0xAARRGGBB`
    pub const fn to_argb(self) -> u32 {
        (self.a as u32) << 24 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    pub fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// Alpha as a 0.0-1.0 fraction
    pub fn alpha(self) -> f32 {
        self.a as f32 / 255.0
    }

    /// Multiply the alpha channel by `factor` (clamped to 0.0-1.0)
    pub fn multiply_alpha(self, factor: f32) -> Self {
        let a = (self.a as f32 * factor.clamp(0.0, 1.0)).round() as u8;
        Self { a, ..self }
    }

    /// Keep this color's alpha but take the RGB channels from `tint`,
    /// scaling alpha by the tint's own alpha
    pub fn tinted(self, tint: Color) -> Self {
        Color {
            r: tint.r,
            g: tint.g,
            b: tint.b,
            a: ((self.a as u16 * tint.a as u16 + 127) / 255) as u8,
        }
    }

    /// `#RRGGBB` without the alpha channel
    pub fn to_rgb_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    pub fn to_array(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.alpha(),
        ]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    /// `#RRGGBB` for opaque colors, `#RRGGBBAA` otherwise
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_rgb_hex())?;
        if self.a != 0xFF {
            write!(f, "{:02X}", self.a)?;
        }
        Ok(())
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().trim_start_matches('#');
        let err = || ParseColorError(s.to_string());

        if !matches!(hex.len(), 6 | 8) || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(err());
        }

        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| err());
        let (r, g, b) = (channel(0)?, channel(2)?, channel(4)?);
        let a = if hex.len() == 8 { channel(6)? } else { 0xFF };

        Ok(Color::rgba(r, g, b, a))
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_argb() {
        let color = Color::from_argb(0xFF67DFE8);
        assert_eq!(color, Color::rgb(0x67, 0xDF, 0xE8));
        assert_eq!(color.to_argb(), 0xFF67DFE8);
        assert_eq!(color.to_string(), "#67DFE8");
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!("#EF6A4C".parse::<Color>().unwrap(), Color::rgb(0xEF, 0x6A, 0x4C));
        assert_eq!("00000080".parse::<Color>().unwrap(), Color::rgba(0, 0, 0, 0x80));
        assert!("#FFF".parse::<Color>().is_err());
        assert!("#GGGGGG".parse::<Color>().is_err());
        assert!("#+F+F+F".parse::<Color>().is_err());
        assert!("+FFFFFFF".parse::<Color>().is_err());
    }

    #[test]
    fn test_translucent_display() {
        assert_eq!(Color::rgba(0x12, 0x34, 0x56, 0x78).to_string(), "#12345678");
        assert_eq!(Color::TRANSPARENT.to_string(), "#00000000");
    }

    #[test]
    fn test_tinted_keeps_coverage() {
        let tint = Color::rgb(0x00, 0xFF, 0x00);
        assert_eq!(Color::from_argb(0xFFEF6A4C).tinted(tint), tint);
        assert!(Color::TRANSPARENT.tinted(tint).is_transparent());

        let half = Color::rgba(0x00, 0xFF, 0x00, 0x80);
        assert_eq!(Color::WHITE.tinted(half).a, 0x80);
    }

    #[test]
    fn test_multiply_alpha() {
        assert_eq!(Color::WHITE.multiply_alpha(0.5).a, 128);
        assert_eq!(Color::WHITE.multiply_alpha(2.0).a, 255);
    }
}
