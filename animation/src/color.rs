use crate::error::*;

use serde::{Serialize, Serializer, Deserialize, Deserializer};
use serde::de;

use std::fmt;

///
/// An 8-bit RGBA colour
///
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color          = Color::rgb(0x00, 0x00, 0x00);
    pub const WHITE: Color          = Color::rgb(0xff, 0xff, 0xff);
    pub const RED: Color            = Color::rgb(0xff, 0x3d, 0x00);
    pub const GREEN: Color          = Color::rgb(0x1c, 0xa6, 0x4a);
    pub const BLUE: Color           = Color::rgb(0x19, 0x76, 0xd2);
    pub const TRANSPARENT: Color    = Color::rgba(0x00, 0x00, 0x00, 0x00);

    ///
    /// Creates an opaque colour
    ///
    pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b, a: 0xff }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Color {
        Color { r, g, b, a }
    }

    ///
    /// The colours offered in the quick-pick palette of the colour tool
    ///
    pub fn palette() -> Vec<Color> {
        vec![
            Color::WHITE,
            Color::RED,
            Color::BLACK,
            Color::BLUE,
            Color::GREEN,
            Color::rgb(0xff, 0xc1, 0x07),
            Color::rgb(0x9c, 0x27, 0xb0),
            Color::rgb(0x79, 0x55, 0x48),
        ]
    }

    ///
    /// Returns this colour with a different alpha value
    ///
    pub fn with_alpha(self, a: u8) -> Color {
        Color { a, ..self }
    }

    ///
    /// Returns this colour with its alpha multiplied by a factor between 0 and 1
    ///
    pub fn fade(self, factor: f32) -> Color {
        let factor = factor.clamp(0.0, 1.0);
        self.with_alpha(((self.a as f32) * factor).round() as u8)
    }

    #[inline]
    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    ///
    /// Parses a colour in the form `#rgb`, `#rrggbb` or `#rrggbbaa` (the leading '#' is optional)
    ///
    pub fn from_hex(text: &str) -> Result<Color, AnimationError> {
        let invalid = || AnimationError::InvalidColor(text.to_string());
        let digits  = text.trim().trim_start_matches('#');

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let component = |start: usize, len: usize| -> Result<u8, AnimationError> {
            let value = u8::from_str_radix(&digits[start..start+len], 16).map_err(|_| invalid())?;
            Ok(if len == 1 { value * 0x11 } else { value })
        };

        match digits.len() {
            3 => Ok(Color::rgb(component(0, 1)?, component(1, 1)?, component(2, 1)?)),
            6 => Ok(Color::rgb(component(0, 2)?, component(2, 2)?, component(4, 2)?)),
            8 => Ok(Color::rgba(component(0, 2)?, component(2, 2)?, component(4, 2)?, component(6, 2)?)),
            _ => Err(invalid())
        }
    }

    ///
    /// Formats this colour as `#rrggbbaa`
    ///
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Color, D::Error> {
        let text = String::deserialize(deserializer)?;
        Color::from_hex(&text).map_err(de::Error::custom)
    }
}
