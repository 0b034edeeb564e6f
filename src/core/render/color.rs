//=========================================================================
// Color
//=========================================================================
//
// 8-bit RGB value type with hex parsing.
//
// All operations return new colors; nothing mutates in place.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;

use thiserror::Error;

//=== ColorError ==========================================================

/// Hex color parsing errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Input was neither 3 nor 6 digits long.
    #[error("hex color must have 3 or 6 digits, got {0:?}")]
    InvalidLength(String),

    /// Input contained a character outside `0-9a-fA-F`.
    #[error("invalid hex digit {digit:?} in {input:?}")]
    InvalidDigit { input: String, digit: char },
}

//=== Color ===============================================================

/// RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };
    pub const WHITE: Self = Self { r: 255, g: 255, b: 255 };

    /// Builds a color from float channels, clamped to `0..=255`.
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: clamp_channel(r),
            g: clamp_channel(g),
            b: clamp_channel(b),
        }
    }

    /// Parses `"RGB"` or `"RRGGBB"` (no leading `#`, any case).
    ///
    /// Short form expands each digit (`"F80"` → `FF8800`).
    ///
    /// # Errors
    ///
    /// Returns [`ColorError`] on a bad length or a non-hex character.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let digits = hex
            .chars()
            .map(|c| {
                c.to_digit(16).map(|d| d as u8).ok_or_else(|| ColorError::InvalidDigit {
                    input: hex.to_string(),
                    digit: c,
                })
            })
            .collect::<Result<Vec<u8>, _>>()?;

        match digits.as_slice() {
            [r, g, b] => Ok(Self { r: r * 17, g: g * 17, b: b * 17 }),
            [r1, r2, g1, g2, b1, b2] => Ok(Self {
                r: r1 * 16 + r2,
                g: g1 * 16 + g2,
                b: b1 * 16 + b2,
            }),
            _ => Err(ColorError::InvalidLength(hex.to_string())),
        }
    }

    /// Uppercase `"RRGGBB"` form.
    pub fn to_hex(self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Subtracts `amount` from every channel (saturating).
    pub fn darken(self, amount: u8) -> Self {
        Self {
            r: self.r.saturating_sub(amount),
            g: self.g.saturating_sub(amount),
            b: self.b.saturating_sub(amount),
        }
    }

    /// Adds `amount` to every channel (saturating).
    pub fn brighten(self, amount: u8) -> Self {
        Self {
            r: self.r.saturating_add(amount),
            g: self.g.saturating_add(amount),
            b: self.b.saturating_add(amount),
        }
    }

    /// Linear blend toward `other`; `t` is clamped to `0.0..=1.0`.
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| f64::from(a) * (1.0 - t) + f64::from(b) * t;
        Self::rgb(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{},{}]", self.r, self.g, self.b)
    }
}

fn clamp_channel(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, 255.0) as u8
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_clamps_channels() {
        assert_eq!(Color::rgb(-20.0, 300.0, 127.6), Color { r: 0, g: 255, b: 128 });
        assert_eq!(Color::rgb(f64::NAN, 0.0, 0.0), Color::BLACK);
    }

    #[test]
    fn from_hex_long_form() {
        assert_eq!(Color::from_hex("FF8000"), Ok(Color { r: 255, g: 128, b: 0 }));
        assert_eq!(Color::from_hex("1a2B3c"), Ok(Color { r: 0x1A, g: 0x2B, b: 0x3C }));
    }

    #[test]
    fn from_hex_short_form_expands_digits() {
        assert_eq!(Color::from_hex("F80"), Ok(Color { r: 0xFF, g: 0x88, b: 0x00 }));
        assert_eq!(Color::from_hex("fff"), Ok(Color::WHITE));
    }

    #[test]
    fn from_hex_rejects_bad_input() {
        assert!(matches!(Color::from_hex("FFFF"), Err(ColorError::InvalidLength(_))));
        assert!(matches!(Color::from_hex(""), Err(ColorError::InvalidLength(_))));
        assert_eq!(
            Color::from_hex("#FFF"),
            Err(ColorError::InvalidDigit { input: "#FFF".into(), digit: '#' })
        );
    }

    #[test]
    fn to_hex_is_uppercase_and_padded() {
        assert_eq!(Color { r: 10, g: 0, b: 255 }.to_hex(), "0A00FF");
        assert_eq!(Color::from_hex("abcdef").unwrap().to_hex(), "ABCDEF");
    }

    #[test]
    fn darken_and_brighten_return_new_values() {
        let base = Color { r: 10, g: 100, b: 250 };

        assert_eq!(base.darken(20), Color { r: 0, g: 80, b: 230 });
        assert_eq!(base.brighten(20), Color { r: 30, g: 120, b: 255 });
        assert_eq!(base, Color { r: 10, g: 100, b: 250 }, "Base color must be untouched");
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        let a = Color::BLACK;
        let b = Color { r: 200, g: 100, b: 50 };

        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Color { r: 100, g: 50, b: 25 });
        assert_eq!(a.lerp(b, 7.0), b, "t is clamped");
    }

    #[test]
    fn display_format() {
        assert_eq!(Color { r: 1, g: 2, b: 3 }.to_string(), "[1,2,3]");
    }
}
