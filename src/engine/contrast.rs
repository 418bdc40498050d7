//! Contrast metrics of a swatch against the palette background.
//!
//! Two independent scores are reported side by side:
//!
//! - the WCAG 2.x luminance ratio, in `[1, 21]`, accessible from 4.5 upwards;
//! - the APCA lightness contrast `Lc`, signed by polarity (see [`super::apca`]).
//!
//! They intentionally disagree near their thresholds, which is why both are kept.

use serde::Serialize;
use utoipa::ToSchema;

use super::{apca, round_to, round_to_hundredth, space::Color};

/// Minimum rounded ratio for normal body text.
pub const ACCESSIBLE_RATIO: f64 = 4.5;

/// Scores of one foreground color against a background.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct ContrastScores {
    /// Luminance ratio rounded to two decimals.
    pub ratio: f64,
    /// APCA `Lc` rounded to a whole number.
    pub perceptual: f64,
    /// Whether `ratio` reaches [`ACCESSIBLE_RATIO`].
    pub accessible: bool,
}

/// WCAG 2.x relative luminance, `0` for black and `1` for white.
#[must_use]
pub fn relative_luminance(color: &Color) -> f64 {
    let linear = |channel: u8| {
        let c = f64::from(channel) / 255.0;
        if c <= 0.039_28 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    let rgb = color.to_rgb8();
    0.2126f64.mul_add(
        linear(rgb.red),
        0.7152f64.mul_add(linear(rgb.green), 0.0722 * linear(rgb.blue)),
    )
}

/// Luminance ratio `(L1 + 0.05) / (L2 + 0.05)` with the lighter color on top.
///
/// Always within `[1, 21]`, whatever the argument order.
#[must_use]
pub fn contrast_ratio(a: &Color, b: &Color) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// APCA contrast of `foreground` over `background`.
#[must_use]
pub fn perceptual_contrast(background: &Color, foreground: &Color) -> f64 {
    apca::perceptual_contrast(background.to_rgb8(), foreground.to_rgb8())
}

/// Evaluate both metrics for display.
#[must_use]
pub fn evaluate(foreground: &Color, background: &Color) -> ContrastScores {
    let ratio = round_to_hundredth(contrast_ratio(foreground, background));
    ContrastScores {
        ratio,
        perceptual: round_to(perceptual_contrast(background, foreground), 1.0),
        accessible: ratio >= ACCESSIBLE_RATIO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    fn color(hex: &str) -> Color {
        Color::parse(hex).unwrap()
    }

    #[test]
    fn luminance_extremes() {
        assert!(approx_eq(relative_luminance(&Color::black()), 0.0, 1e-9));
        assert!(approx_eq(relative_luminance(&Color::white()), 1.0, 1e-9));
        assert!(approx_eq(relative_luminance(&color("#FF0000")), 0.2126, 1e-4));
    }

    #[test]
    fn black_white_ratio_is_21() {
        let ratio = contrast_ratio(&Color::white(), &Color::black());
        assert!(approx_eq(ratio, 21.0, 0.1), "B/W contrast: {ratio}");
    }

    #[test]
    fn ratio_is_symmetric_and_bounded() {
        let samples = ["#C01C21", "#FFDE00", "#007DCC", "#808080", "#000000", "#FFFFFF"];
        for a in samples {
            for b in samples {
                let ab = contrast_ratio(&color(a), &color(b));
                let ba = contrast_ratio(&color(b), &color(a));
                assert!(approx_eq(ab, ba, 1e-12));
                assert!((1.0..=21.0 + 1e-9).contains(&ab), "{a}/{b}: {ab}");
            }
        }
    }

    #[test]
    fn same_color_ratio_is_one() {
        let ratio = contrast_ratio(&color("#007DCC"), &color("#007DCC"));
        assert!(approx_eq(ratio, 1.0, 1e-12));
    }

    #[test]
    fn evaluate_rounds_and_flags() {
        let scores = evaluate(&Color::black(), &Color::white());
        assert_eq!(scores.ratio, 21.0);
        assert_eq!(scores.perceptual, 106.0);
        assert!(scores.accessible);

        // #777777 on white sits just under the 4.5 threshold.
        let scores = evaluate(&color("#777777"), &Color::white());
        assert_eq!(scores.ratio, 4.48);
        assert!(!scores.accessible);
    }

    #[test]
    fn perceptual_score_is_polarity_aware() {
        let yellow = color("#FFDE00");
        let on_white = evaluate(&yellow, &Color::white()).perceptual;
        let on_black = evaluate(&yellow, &Color::black()).perceptual;
        assert!(on_white > 0.0);
        assert!(on_black < 0.0);
    }
}
