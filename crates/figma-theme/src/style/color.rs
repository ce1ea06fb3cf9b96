//! Canonical string encoding for resolved colors.
//!
//! Two output forms, chosen by alpha:
//!
//! - Opaque (`a == 1`): lowercase 6-digit hex, `#0085ff`
//! - Translucent: CSS function notation without spaces, `rgba(0,0,0,0.3)`
//!
//! # Example
//!
//! ```rust
//! use figma_theme::Color;
//!
//! assert_eq!(Color::opaque(1.0, 0.0, 0.0).to_css_string(), "#ff0000");
//! assert_eq!(
//!     Color::new(0.0, 0.0, 0.0, 0.699999988079071).to_css_string(),
//!     "rgba(0,0,0,0.7)"
//! );
//! ```

use std::fmt;

/// Normalized RGBA color, each component in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    /// Creates a color from normalized components.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a fully opaque color.
    pub fn opaque(r: f64, g: f64, b: f64) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Returns the color channels scaled to `0..=255`.
    pub fn channels(&self) -> (u8, u8, u8) {
        (channel(self.r), channel(self.g), channel(self.b))
    }

    /// Returns true only for an alpha of exactly `1`.
    pub fn is_opaque(&self) -> bool {
        self.a == 1.0
    }

    /// Encodes the color as `#rrggbb` when opaque, `rgba(r,g,b,a)` otherwise.
    ///
    /// Alpha is rounded to two decimals, so export artifacts such as
    /// `0.699999988079071` come out as `0.7`.
    pub fn to_css_string(&self) -> String {
        let (r, g, b) = self.channels();
        if self.is_opaque() {
            format!("#{:02x}{:02x}{:02x}", r, g, b)
        } else {
            format!("rgba({},{},{},{})", r, g, b, format_alpha(self.a))
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css_string())
    }
}

/// Encodes a color into its canonical theme string.
pub fn encode_color(color: Color) -> String {
    color.to_css_string()
}

fn channel(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Formats alpha with one or two decimals: `0.7`, `0.05`, `0.0`, `1.0`.
fn format_alpha(alpha: f64) -> String {
    let hundredths = (alpha * 100.0).round().clamp(0.0, 100.0) as u32;
    let (whole, frac) = (hundredths / 100, hundredths % 100);
    if frac % 10 == 0 {
        format!("{}.{}", whole, frac / 10)
    } else {
        format!("{}.{:02}", whole, frac)
    }
}
