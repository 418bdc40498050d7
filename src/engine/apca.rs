//! APCA (Accessible Perceptual Contrast Algorithm), version 0.0.98G-4g.
//!
//! Constants and clamps follow the published APCA-W3 base algorithm exactly; results are
//! expected to agree with the reference implementation to floating point precision.

use palette::Srgb;

/// sRGB luminance coefficients for 0.0.98G.
const S_R_CO: f64 = 0.212_647_813_391_364_0;
const S_G_CO: f64 = 0.715_179_147_533_600_8;
const S_B_CO: f64 = 0.072_173_039_075_035_2;
/// Simple exponent used instead of the piecewise sRGB transfer curve.
const MAIN_TRC: f64 = 2.4;

const NORM_BG: f64 = 0.56;
const NORM_TXT: f64 = 0.57;
const REV_TXT: f64 = 0.62;
const REV_BG: f64 = 0.65;

const BLK_THRS: f64 = 0.022;
const BLK_CLMP: f64 = 1.414;
const SCALE_BOW: f64 = 1.14;
const SCALE_WOB: f64 = 1.14;
const LO_BOW_OFFSET: f64 = 0.027;
const LO_WOB_OFFSET: f64 = 0.027;
const DELTA_Y_MIN: f64 = 0.0005;
const LO_CLIP: f64 = 0.1;

/// Accepted input range for screen luminance.
const Y_MIN: f64 = 0.0;
const Y_MAX: f64 = 1.1;

/// Estimated screen luminance of an 8-bit sRGB color.
#[must_use]
pub fn srgb_to_y(color: Srgb<u8>) -> f64 {
    let simple_exp = |channel: u8| (f64::from(channel) / 255.0).powf(MAIN_TRC);
    S_R_CO * simple_exp(color.red)
        + S_G_CO * simple_exp(color.green)
        + S_B_CO * simple_exp(color.blue)
}

/// Lightness contrast `Lc` of text luminance `txt_y` over background luminance `bg_y`.
///
/// Positive for dark text on a light background, negative for light text on a dark one,
/// and `0.0` for invalid inputs or contrasts below the low clip.
#[must_use]
pub fn contrast_from_y(txt_y: f64, bg_y: f64) -> f64 {
    if txt_y.is_nan() || bg_y.is_nan() || txt_y.min(bg_y) < Y_MIN || txt_y.max(bg_y) > Y_MAX {
        return 0.0;
    }

    let soft_clamp = |y: f64| {
        if y > BLK_THRS {
            y
        } else {
            y + (BLK_THRS - y).powf(BLK_CLMP)
        }
    };
    let txt_y = soft_clamp(txt_y);
    let bg_y = soft_clamp(bg_y);

    if (bg_y - txt_y).abs() < DELTA_Y_MIN {
        return 0.0;
    }

    let output = if bg_y > txt_y {
        // Normal polarity: dark text on light background.
        let sapc = (bg_y.powf(NORM_BG) - txt_y.powf(NORM_TXT)) * SCALE_BOW;
        if sapc < LO_CLIP { 0.0 } else { sapc - LO_BOW_OFFSET }
    } else {
        // Reverse polarity: light text on dark background.
        let sapc = (bg_y.powf(REV_BG) - txt_y.powf(REV_TXT)) * SCALE_WOB;
        if sapc > -LO_CLIP { 0.0 } else { sapc + LO_WOB_OFFSET }
    };

    output * 100.0
}

/// Perceptual contrast of `foreground` drawn over `background`.
#[must_use]
pub fn perceptual_contrast(background: Srgb<u8>, foreground: Srgb<u8>) -> f64 {
    contrast_from_y(srgb_to_y(foreground), srgb_to_y(background))
}
