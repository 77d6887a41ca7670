use anyhow::{bail, Result};

/// Core color type used by the preview themes and swatch widgets.
/// Wraps sRGB u8 components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex color string like `#ff8800` or `#FF8800`.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 {
            bail!(
                "invalid hex color: expected 6 hex digits, got {}",
                hex.len()
            );
        }
        let r = u8::from_str_radix(&hex[0..2], 16)?;
        let g = u8::from_str_radix(&hex[2..4], 16)?;
        let b = u8::from_str_radix(&hex[4..6], 16)?;
        Ok(Self { r, g, b })
    }

    /// Serialize to lowercase hex `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// WCAG 2.0 relative luminance.
    ///
    /// Linearizes each sRGB channel, then computes the weighted sum.
    pub fn relative_luminance(self) -> f32 {
        fn linearize(c: u8) -> f32 {
            let c = c as f32 / 255.0;
            if c <= 0.04045 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        let r = linearize(self.r);
        let g = linearize(self.g);
        let b = linearize(self.b);
        0.2126 * r + 0.7152 * g + 0.0722 * b
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: Color = Color { r: 0, g: 0, b: 0 };
    const WHITE: Color = Color {
        r: 255,
        g: 255,
        b: 255,
    };

    #[test]
    fn hex_round_trip() {
        let original = Color::from_hex("#ff8800").unwrap();
        assert_eq!(original.r, 255);
        assert_eq!(original.g, 136);
        assert_eq!(original.b, 0);
        assert_eq!(original.to_hex(), "#ff8800");
    }

    #[test]
    fn hex_uppercase_input() {
        let color = Color::from_hex("#FF8800").unwrap();
        assert_eq!(color.to_hex(), "#ff8800");
    }

    #[test]
    fn hex_without_hash() {
        let color = Color::from_hex("aabbcc").unwrap();
        assert_eq!(color.to_hex(), "#aabbcc");
    }

    #[test]
    fn hex_invalid_length() {
        assert!(Color::from_hex("#fff").is_err());
    }

    #[test]
    fn hex_invalid_chars() {
        assert!(Color::from_hex("#gggggg").is_err());
    }

    #[test]
    fn relative_luminance_black() {
        assert!(BLACK.relative_luminance() < 0.001);
    }

    #[test]
    fn relative_luminance_white() {
        assert!((WHITE.relative_luminance() - 1.0).abs() < 0.001);
    }

    #[test]
    fn display_matches_to_hex() {
        let color = Color::new(171, 205, 239);
        assert_eq!(format!("{color}"), color.to_hex());
    }
}
