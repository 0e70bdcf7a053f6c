//! RGBA colors for style palettes.
//!
//! ```
//! use imgui_modern::Rgba;
//!
//! let border = Rgba::from_hex("#6E6E8080").unwrap();
//! assert_eq!(border.to_u32(), 0x8080_6E6E);
//! ```

/// RGBA color with f32 components in range [0.0, 1.0].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);

    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color.
    #[must_use]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color from u8 RGBA components.
    #[must_use]
    pub fn from_rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: f32::from(r) / 255.0,
            g: f32::from(g) / 255.0,
            b: f32::from(b) / 255.0,
            a: f32::from(a) / 255.0,
        }
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA` (leading `#` optional).
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.is_ascii() || (hex.len() != 6 && hex.len() != 8) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        let a = if hex.len() == 8 { channel(6)? } else { 255 };
        Some(Self::from_rgba_u8(channel(0)?, channel(2)?, channel(4)?, a))
    }

    /// Return a copy with a different alpha.
    #[must_use]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Pack into the toolkit's `0xAABBGGRR` draw-list format.
    #[must_use]
    pub fn to_u32(self) -> u32 {
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u32;
        (q(self.a) << 24) | (q(self.b) << 16) | (q(self.g) << 8) | q(self.r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_rgb() {
        let c = Rgba::from_hex("#FF0000").unwrap();
        assert_eq!(c.to_u32(), 0xFF00_00FF);
    }

    #[test]
    fn test_from_hex_rgba_without_hash() {
        let c = Rgba::from_hex("00FF0080").unwrap();
        assert_eq!(c.to_u32(), 0x8000_FF00);
    }

    #[test]
    fn test_from_hex_rejects_garbage() {
        assert!(Rgba::from_hex("#12345").is_none());
        assert!(Rgba::from_hex("#GGGGGG").is_none());
        assert!(Rgba::from_hex("#ééé").is_none());
    }

    #[test]
    fn test_to_u32_clamps() {
        let c = Rgba::new(2.0, -1.0, 0.0, 1.0);
        assert_eq!(c.to_u32(), 0xFF00_00FF);
    }

    #[test]
    fn test_with_alpha() {
        assert_eq!(Rgba::WHITE.with_alpha(0.0).to_u32(), 0x00FF_FFFF);
    }
}
