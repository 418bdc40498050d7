//! Black → seed → white color ramps with optional lightness correction.

use palette::Mix;
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use super::{error::ColorError, space::Color};

/// Number of uniform segments sampled to build the lightness correction table.
const CORRECTION_SAMPLES: usize = 128;
/// Bisection stops once the ramp is this close to the requested lightness.
const CORRECTION_TOLERANCE: f64 = 1e-2;
/// Upper bound on bisection steps inside a sampled segment.
const CORRECTION_MAX_ITER: usize = 20;
/// Segments flatter than this cannot be inverted meaningfully.
const FLAT_SEGMENT: f64 = 1e-9;

/// How the ramp interpolates between its stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum InterpolationModel {
    /// Mix in CIE Lab.
    #[default]
    Perceptual,
    /// Mix gamma-encoded sRGB channels.
    LinearRgb,
}

/// Continuous `[0, 1] → Color` ramp through pure black, the seed and pure white.
#[derive(Debug, Clone)]
pub struct ScaleFunction {
    stops: [Color; 3],
    model: InterpolationModel,
    correction: Option<LightnessCorrection>,
}

impl ScaleFunction {
    /// Build the ramp for `seed`. When `correct_lightness` is set, `at(t)` has a
    /// perceptual lightness of roughly `t · 100`.
    #[must_use]
    pub fn new(seed: Color, model: InterpolationModel, correct_lightness: bool) -> Self {
        let mut scale = Self {
            stops: [Color::black(), seed, Color::white()],
            model,
            correction: None,
        };
        if correct_lightness {
            scale.correction = Some(LightnessCorrection::sample(&scale));
        }
        scale
    }

    /// The seed color sitting at `t = 0.5`.
    #[must_use]
    pub const fn seed(&self) -> Color {
        self.stops[1]
    }

    /// Interpolation model in use.
    #[must_use]
    pub const fn model(&self) -> InterpolationModel {
        self.model
    }

    /// Whether the input fraction is remapped through the lightness correction.
    #[must_use]
    pub const fn is_corrected(&self) -> bool {
        self.correction.is_some()
    }

    /// Evaluate the ramp. `t` is clamped into `[0, 1]`.
    #[must_use]
    pub fn at(&self, t: f64) -> Color {
        let t = clamp_fraction(t);
        let Some(correction) = &self.correction else {
            return self.raw(t);
        };

        let fraction = match correction.invert(self, t) {
            Ok(fraction) => fraction,
            Err(ColorError::IllConditionedInversion { target, fraction }) => {
                debug!(
                    seed = %self.seed(),
                    target,
                    fraction,
                    "lightness correction clamped to nearest achievable fraction"
                );
                fraction
            }
            Err(_) => t,
        };
        self.raw(fraction)
    }

    /// Evaluate the uncorrected three-stop interpolation.
    #[must_use]
    pub fn raw(&self, t: f64) -> Color {
        let t = clamp_fraction(t);
        let (from, to, u) = if t <= 0.5 {
            (self.stops[0], self.stops[1], t * 2.0)
        } else {
            (self.stops[1], self.stops[2], t.mul_add(2.0, -1.0))
        };

        match self.model {
            InterpolationModel::Perceptual => Color::from_lab(from.to_lab().mix(to.to_lab(), u)),
            InterpolationModel::LinearRgb => {
                let (a, b) = (from.srgb(), to.srgb());
                let lerp = |x: f64, y: f64| (y - x).mul_add(u, x);
                Color::from_srgb(palette::Srgb::new(
                    lerp(a.red, b.red),
                    lerp(a.green, b.green),
                    lerp(a.blue, b.blue),
                ))
            }
        }
    }
}

/// Sampled lightness profile of a raw ramp, made monotone so it can be inverted.
#[derive(Debug, Clone)]
struct LightnessCorrection {
    /// Lightness at `i / CORRECTION_SAMPLES`, running maximum applied.
    profile: Vec<f64>,
    start: f64,
    end: f64,
}

impl LightnessCorrection {
    fn sample(scale: &ScaleFunction) -> Self {
        let mut profile = Vec::with_capacity(CORRECTION_SAMPLES + 1);
        let mut running = f64::NEG_INFINITY;
        for i in 0..=CORRECTION_SAMPLES {
            #[allow(clippy::cast_precision_loss)]
            let t = i as f64 / CORRECTION_SAMPLES as f64;
            running = running.max(scale.raw(t).lightness());
            profile.push(running);
        }

        let start = scale.raw(0.0).lightness();
        let end = scale.raw(1.0).lightness();
        Self {
            profile,
            start,
            end,
        }
    }

    /// Find the raw fraction whose lightness equals the ideal lightness at `t`.
    fn invert(&self, scale: &ScaleFunction, t: f64) -> Result<f64, ColorError> {
        let target = (self.end - self.start).mul_add(t, self.start);
        let n = self.profile.len() - 1;

        if target <= self.profile[0] {
            return if target < self.profile[0] - CORRECTION_TOLERANCE {
                Err(ColorError::IllConditionedInversion {
                    target,
                    fraction: 0.0,
                })
            } else {
                Ok(0.0)
            };
        }
        if target >= self.profile[n] {
            return if target > self.profile[n] + CORRECTION_TOLERANCE {
                Err(ColorError::IllConditionedInversion {
                    target,
                    fraction: 1.0,
                })
            } else {
                Ok(1.0)
            };
        }

        let (mut lo, mut hi) = (0usize, n);
        while lo + 1 < hi {
            let mid = (lo + hi) / 2;
            if self.profile[mid] <= target {
                lo = mid;
            } else {
                hi = mid;
            }
        }

        #[allow(clippy::cast_precision_loss)]
        let (t0, t1) = (lo as f64 / n as f64, hi as f64 / n as f64);
        let (l0, l1) = (self.profile[lo], self.profile[hi]);
        if l1 - l0 < FLAT_SEGMENT {
            return Err(ColorError::IllConditionedInversion {
                target,
                fraction: t0,
            });
        }

        // Piecewise-linear guess, then bisection against the raw ramp.
        let mut guess = (t1 - t0).mul_add((target - l0) / (l1 - l0), t0);
        let (mut lower, mut upper) = (t0, t1);
        for _ in 0..CORRECTION_MAX_ITER {
            let diff = scale.raw(guess).lightness() - target;
            if diff.abs() <= CORRECTION_TOLERANCE {
                break;
            }
            if diff < 0.0 {
                lower = guess;
            } else {
                upper = guess;
            }
            guess = (lower + upper) * 0.5;
        }
        Ok(guess)
    }
}

fn clamp_fraction(t: f64) -> f64 {
    if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEEDS: [&str; 8] = [
        "#C01C21", "#F29C24", "#FFDE00", "#89BF1D", "#4FC47F", "#007DCC", "#79808D", "#808080",
    ];

    fn seed(hex: &str) -> Color {
        Color::parse(hex).unwrap()
    }

    #[test]
    fn endpoints_and_seed_are_exact() {
        for model in [InterpolationModel::Perceptual, InterpolationModel::LinearRgb] {
            let scale = ScaleFunction::new(seed("#007DCC"), model, false);
            assert_eq!(scale.at(0.0).to_hex(), "#000000");
            assert_eq!(scale.at(0.5).to_hex(), "#007DCC");
            assert_eq!(scale.at(1.0).to_hex(), "#FFFFFF");
        }
    }

    #[test]
    fn linear_rgb_interpolates_channels() {
        let scale = ScaleFunction::new(seed("#808080"), InterpolationModel::LinearRgb, false);
        // Halfway between black and #808080.
        assert_eq!(scale.at(0.25).to_hex(), "#404040");
    }

    #[test]
    fn corrected_ramp_tracks_target_lightness() {
        for hex in SEEDS {
            for model in [InterpolationModel::Perceptual, InterpolationModel::LinearRgb] {
                let scale = ScaleFunction::new(seed(hex), model, true);
                for target in [17.4, 29.35, 38.12, 49.5, 57.92, 67.76, 79.28, 92.76] {
                    let l = scale.at(target / 100.0).lightness();
                    assert!(
                        (l - target).abs() < 1.0,
                        "{hex} {model:?}: wanted {target}, got {l}"
                    );
                }
            }
        }
    }

    #[test]
    fn corrected_ramp_is_monotonic() {
        for hex in SEEDS {
            let scale = ScaleFunction::new(seed(hex), InterpolationModel::Perceptual, true);
            let mut previous = f64::NEG_INFINITY;
            for i in 0..=200 {
                let l = scale.at(f64::from(i) / 200.0).lightness();
                assert!(l >= previous - 0.1, "{hex} at step {i}: {l} < {previous}");
                previous = previous.max(l);
            }
        }
    }

    #[test]
    fn uncorrected_ramp_keeps_seed_at_midpoint() {
        let scale = ScaleFunction::new(seed("#FFDE00"), InterpolationModel::Perceptual, false);
        assert!(!scale.is_corrected());
        // Yellow is far lighter than 50 L, so the raw midpoint is not near 50.
        assert!(scale.at(0.5).lightness() > 80.0);
    }

    #[test]
    fn extreme_seeds_do_not_fail() {
        for hex in ["#FFFFFF", "#000000", "#FEFEFE", "#010101"] {
            let scale = ScaleFunction::new(seed(hex), InterpolationModel::Perceptual, true);
            for i in 0..=10 {
                let l = scale.at(f64::from(i) / 10.0).lightness();
                assert!((0.0..=100.5).contains(&l), "{hex}: {l}");
            }
        }
    }

    #[test]
    fn out_of_range_fractions_are_clamped() {
        let scale = ScaleFunction::new(seed("#C01C21"), InterpolationModel::LinearRgb, true);
        assert_eq!(scale.at(-1.0), scale.at(0.0));
        assert_eq!(scale.at(2.0), scale.at(1.0));
        assert_eq!(scale.at(f64::NAN), scale.at(0.0));
    }
}
