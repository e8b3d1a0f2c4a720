use serde::Serialize;
use std::fmt;
use std::hash::{Hash, Hasher};

fn is_one(num: &f32) -> bool {
    *num == 1.0
}

/// An sRGB colour with a separate alpha channel.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(skip_serializing_if = "is_one")]
    pub a: f32,
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.r.hash(state);
        self.g.hash(state);
        self.b.hash(state);
        self.a.to_bits().hash(state);
    }
}

impl Default for Color {
    fn default() -> Self {
        Self { r: 0, g: 0, b: 0, a: 1.0 }
    }
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Unpacks a `0xRRGGBB` integer. Bits above the low 24 are ignored.
    pub const fn from_packed(value: u32) -> Self {
        Self::rgb(
            ((value >> 16) & 0xff) as u8,
            ((value >> 8) & 0xff) as u8,
            (value & 0xff) as u8,
        )
    }

    /// Parses `rrggbb`, `rgb` or `rrggbbaa` hex digits without any prefix.
    pub fn from_hex_digits(hex: &str) -> Option<Self> {
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        match hex.len() {
            3 => {
                let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).ok()?;
                let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).ok()?;
                let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).ok()?;
                Some(Self::rgb(r, g, b))
            }
            6 => u32::from_str_radix(hex, 16).ok().map(Self::from_packed),
            8 => {
                let packed = u32::from_str_radix(hex, 16).ok()?;
                let alpha = (packed & 0xff) as u8;
                Some(Self { a: f32::from(alpha) / 255.0, ..Self::from_packed(packed >> 8) })
            }
            _ => None,
        }
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// `#RRGGBB`, with a trailing alpha byte when not opaque.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())?;
        if self.a < 1.0 {
            write!(f, "{:02X}", (self.a.clamp(0.0, 1.0) * 255.0).round() as u8)?;
        }
        Ok(())
    }
}
