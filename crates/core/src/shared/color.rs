use std::fmt;

use serde::{Serialize, Serializer};

/// Opaque RGB display color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const GREEN: Color = Color::rgb(0x22, 0xc5, 0x5e);
    pub const PURPLE: Color = Color::rgb(0xa8, 0x55, 0xf7);
    pub const RED: Color = Color::rgb(0xef, 0x44, 0x44);
    pub const YELLOW: Color = Color::rgb(0xea, 0xb3, 0x08);
    pub const ORANGE: Color = Color::rgb(0xf9, 0x73, 0x16);
    pub const DARK_GRAY: Color = Color::rgb(0x37, 0x41, 0x51);
    pub const GRAY: Color = Color::rgb(0x6b, 0x72, 0x80);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_rgb(self) -> image::Rgb<u8> {
        image::Rgb([self.r, self.g, self.b])
    }

    pub fn hex(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
