//! sRGB <-> CIE Lab / LCh(ab) conversions (D65) and color literal parsing.
//!
//! [`Color`] is the only color value used by the engine. It can only be built from a
//! validated literal, from 8-bit channels, or by converting back from Lab/LCh, in which
//! case out-of-gamut results are clipped to the sRGB cube.

use std::{fmt, str::FromStr};

use palette::{FromColor, Lab, Lch, Srgb, convert::FromColorUnclamped, white_point::D65};
use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use utoipa::ToSchema;

use super::error::ColorError;

/// Chroma below which a color is treated as achromatic and reported with hue 0.
const ACHROMATIC_CHROMA: f64 = 1e-4;
/// Alpha values this close to 1 are treated as opaque.
const OPAQUE_EPSILON: f64 = 1e-6;

/// Validated, gamma-encoded sRGB color with channels clipped to `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, SerializeDisplay, DeserializeFromStr)]
pub struct Color {
    rgb: Srgb<f64>,
    alpha: f64,
}

/// Cylindrical CIE LCh(ab) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LchCoords {
    /// Perceptual lightness, 0–100.
    pub l: f64,
    /// Chroma, `>= 0`.
    pub c: f64,
    /// Hue in degrees, `[0, 360)`.
    pub h: f64,
}

impl Color {
    /// Parse any CSS color literal (hex, `rgb()`, `hsl()`, `hwb()`, named colors).
    pub fn parse(literal: &str) -> Result<Self, ColorError> {
        let parsed = csscolorparser::parse(literal.trim()).map_err(|err| {
            ColorError::InvalidColorLiteral {
                literal: literal.to_string(),
                reason: err.to_string(),
            }
        })?;

        let rgb = Srgb::new(
            f64::from(parsed.r),
            f64::from(parsed.g),
            f64::from(parsed.b),
        );
        Ok(Self::from_srgb(rgb).with_alpha(f64::from(parsed.a)))
    }

    /// Build an opaque color from 8-bit channels.
    #[must_use]
    pub fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::from_srgb(Srgb::new(red, green, blue).into_format())
    }

    /// Pure white.
    #[must_use]
    pub fn white() -> Self {
        Self::from_rgb8(255, 255, 255)
    }

    /// Pure black.
    #[must_use]
    pub fn black() -> Self {
        Self::from_rgb8(0, 0, 0)
    }

    /// Wrap an sRGB value, clipping every channel into `[0, 1]`.
    #[must_use]
    pub fn from_srgb(rgb: Srgb<f64>) -> Self {
        let clip = |channel: f64| {
            if channel.is_nan() {
                0.0
            } else {
                channel.clamp(0.0, 1.0)
            }
        };
        Self {
            rgb: Srgb::new(clip(rgb.red), clip(rgb.green), clip(rgb.blue)),
            alpha: 1.0,
        }
    }

    fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha.clamp(0.0, 1.0);
        self
    }

    /// Gamma-encoded channels.
    #[must_use]
    pub const fn srgb(&self) -> Srgb<f64> {
        self.rgb
    }

    /// Opacity in `[0, 1]`.
    #[must_use]
    pub const fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Channels rounded to bytes.
    #[must_use]
    pub fn to_rgb8(&self) -> Srgb<u8> {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let byte = |channel: f64| (channel * 255.0).round().clamp(0.0, 255.0) as u8;
        Srgb::new(byte(self.rgb.red), byte(self.rgb.green), byte(self.rgb.blue))
    }

    /// The color snapped to the 8-bit grid its hex form describes.
    #[must_use]
    pub fn quantized(&self) -> Self {
        let bytes = self.to_rgb8();
        Self::from_rgb8(bytes.red, bytes.green, bytes.blue).with_alpha(self.alpha)
    }

    /// Cartesian Lab coordinates.
    #[must_use]
    pub fn to_lab(&self) -> Lab<D65, f64> {
        Lab::from_color_unclamped(self.rgb)
    }

    /// Convert back from Lab, clipping to the sRGB gamut.
    #[must_use]
    pub fn from_lab(lab: Lab<D65, f64>) -> Self {
        Self::from_srgb(Srgb::from_color(lab))
    }

    /// Cylindrical LCh coordinates. Achromatic colors report hue 0.
    #[must_use]
    pub fn to_lch(&self) -> LchCoords {
        let lch: Lch<D65, f64> = Lch::from_color_unclamped(self.to_lab());
        let c = lch.chroma.max(0.0);
        let h = if c < ACHROMATIC_CHROMA {
            0.0
        } else {
            wrap_degrees(lch.hue.into_positive_degrees())
        };
        LchCoords { l: lch.l, c, h }
    }

    /// Compose a color from LCh coordinates, clipping to the sRGB gamut.
    #[must_use]
    pub fn from_lch(l: f64, c: f64, h: f64) -> Self {
        let lch = Lch::<D65, f64>::new(l, c.max(0.0), wrap_degrees(h));
        Self::from_lab(Lab::from_color_unclamped(lch))
    }

    /// Perceptual lightness (Lab `L`).
    #[must_use]
    pub fn lightness(&self) -> f64 {
        self.to_lab().l
    }

    /// Euclidean distance between the two colors in Lab.
    #[must_use]
    pub fn distance(&self, other: &Self) -> f64 {
        let (a, b) = (self.to_lab(), other.to_lab());
        let dl = a.l - b.l;
        let da = a.a - b.a;
        let db = a.b - b.b;
        db.mul_add(db, dl.mul_add(dl, da * da)).sqrt()
    }

    /// Canonical uppercase hex, `#RRGGBB` or `#RRGGBBAA` when translucent.
    #[must_use]
    pub fn to_hex(&self) -> String {
        let Srgb {
            red, green, blue, ..
        } = self.to_rgb8();
        if self.alpha < 1.0 - OPAQUE_EPSILON {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let alpha = (self.alpha * 255.0).round() as u8;
            format!("#{red:02X}{green:02X}{blue:02X}{alpha:02X}")
        } else {
            format!("#{red:02X}{green:02X}{blue:02X}")
        }
    }
}

/// Wrap any angle into `[0, 360)`.
#[must_use]
pub fn wrap_degrees(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    #[test]
    fn parses_hex_and_css_forms() {
        assert_eq!(Color::parse("#c01c21").unwrap().to_hex(), "#C01C21");
        assert_eq!(Color::parse("#FFF").unwrap().to_hex(), "#FFFFFF");
        assert_eq!(Color::parse("rgb(0, 125, 204)").unwrap().to_hex(), "#007DCC");
        assert_eq!(Color::parse("red").unwrap().to_hex(), "#FF0000");
        assert_eq!(Color::parse("  grey ").unwrap().to_hex(), "#808080");
        assert_eq!(Color::parse("hsl(0, 0%, 100%)").unwrap(), Color::white());
    }

    #[test]
    fn translucent_colors_keep_alpha_in_hex() {
        let color = Color::parse("rgba(0, 0, 0, 0.5)").unwrap();
        assert_eq!(color.to_hex(), "#00000080");
    }

    #[test]
    fn rejects_malformed_literals() {
        for literal in ["", "#12", "#GGGGGG", "not-a-color", "rgb(1,2)"] {
            let err = Color::parse(literal).unwrap_err();
            assert!(
                matches!(err, ColorError::InvalidColorLiteral { .. }),
                "{literal}: {err:?}"
            );
        }
    }

    #[test]
    fn lch_round_trip_for_in_gamut_colors() {
        for hex in ["#C01C21", "#F29C24", "#FFDE00", "#89BF1D", "#007DCC", "#79808D", "#010203"] {
            let color = Color::parse(hex).unwrap();
            let LchCoords { l, c, h } = color.to_lch();
            let back = Color::from_lch(l, c, h);
            let (a, b) = (color.srgb(), back.srgb());
            assert!(approx_eq(a.red, b.red, 0.005), "{hex}");
            assert!(approx_eq(a.green, b.green, 0.005), "{hex}");
            assert!(approx_eq(a.blue, b.blue, 0.005), "{hex}");
            assert_eq!(back.to_hex(), hex);
        }
    }

    #[test]
    fn lch_ranges() {
        let white = Color::white().to_lch();
        assert!(approx_eq(white.l, 100.0, 0.01));
        assert_eq!(white.h, 0.0);

        let black = Color::black().to_lch();
        assert!(approx_eq(black.l, 0.0, 0.01));

        let blue = Color::parse("#0000FF").unwrap().to_lch();
        assert!((0.0..360.0).contains(&blue.h));
        assert!(blue.c > 100.0);
    }

    #[test]
    fn out_of_gamut_lch_is_clipped() {
        let color = Color::from_lch(50.0, 250.0, 140.0);
        let rgb = color.srgb();
        for channel in [rgb.red, rgb.green, rgb.blue] {
            assert!((0.0..=1.0).contains(&channel));
        }
    }

    #[test]
    fn wraps_hue() {
        assert_eq!(wrap_degrees(-15.0), 345.0);
        assert_eq!(wrap_degrees(725.0), 5.0);
        assert_eq!(wrap_degrees(360.0), 0.0);
    }

    #[test]
    fn distance_is_zero_for_identical_colors() {
        let a = Color::parse("#C01C21").unwrap();
        let b = Color::parse("rgb(192, 28, 33)").unwrap();
        assert!(a.distance(&b) < 1e-9);
        assert!(approx_eq(Color::white().distance(&Color::black()), 100.0, 0.01));
    }

    #[test]
    fn serializes_as_hex_string() {
        let color = Color::parse("#007dcc").unwrap();
        assert_eq!(serde_json::to_string(&color).unwrap(), "\"#007DCC\"");
        let back: Color = serde_json::from_str("\"#007DCC\"").unwrap();
        assert_eq!(back, color);
        assert!(serde_json::from_str::<Color>("\"nope\"").is_err());
    }
}
