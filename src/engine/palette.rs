//! Palette configuration and the full palette rebuild.
//!
//! A [`PaletteConfig`] owns the base colors (each carrying its derived [`ScaleFunction`]),
//! the ordered [`LightnessStepTable`], the background and the lightness-correction toggle.
//! Every setter validates first and mutates second, so a rejected edit leaves the
//! configuration exactly as it was. [`rebuild`] is a pure function of the configuration.

use indexmap::IndexMap;
use serde::Serialize;

use super::{
    contrast::{self, ContrastScores},
    error::ColorError,
    round_to_hundredth,
    scale::{InterpolationModel, ScaleFunction},
    space::{Color, LchCoords},
};

/// Step assigned to the synthetic white anchor (below every real step).
pub const WHITE_ANCHOR_STEP: u32 = 0;
/// Step assigned to the synthetic black anchor (above every real step).
pub const BLACK_ANCHOR_STEP: u32 = 1000;
/// Name of the white anchor.
pub const WHITE_ANCHOR: &str = "white";
/// Name of the black anchor.
pub const BLACK_ANCHOR: &str = "black";

/// Hue corrections must lie strictly inside `(-LIMIT, LIMIT)` degrees.
pub const HUE_CORRECTION_LIMIT: f64 = 360.0;

/// Lightness of the 500 step in the built-in table.
const DEFAULT_L_BASE: f64 = 49.5;
/// Geometric factor applied for each step lighter than 500.
const DEFAULT_L_INCREASE: f64 = 1.17;
/// Geometric factor applied for each step darker than 500.
const DEFAULT_L_DECREASE: f64 = 0.77;

/// Reject hue corrections outside of `(-360, 360)`.
pub fn validate_hue_correction(degrees: f64) -> Result<f64, ColorError> {
    if degrees.is_finite() && degrees.abs() < HUE_CORRECTION_LIMIT {
        Ok(degrees)
    } else {
        Err(ColorError::OutOfRangeParameter {
            parameter: "hue correction",
            value: degrees,
            expected: "strictly between -360 and 360 degrees",
        })
    }
}

/// Reject lightness targets outside of `[0, 100]`.
pub fn validate_lightness(percent: f64) -> Result<f64, ColorError> {
    if percent.is_finite() && (0.0..=100.0).contains(&percent) {
        Ok(percent)
    } else {
        Err(ColorError::OutOfRangeParameter {
            parameter: "lightness",
            value: percent,
            expected: "between 0 and 100",
        })
    }
}

/// A named palette column and its cached ramp.
#[derive(Debug, Clone)]
pub struct BaseColor {
    name: String,
    seed: Color,
    model: InterpolationModel,
    hue_correction: f64,
    scale: ScaleFunction,
}

impl BaseColor {
    /// Validate and build a base color, deriving its scale.
    pub fn new(
        name: impl Into<String>,
        seed: Color,
        model: InterpolationModel,
        hue_correction: f64,
        correct_lightness: bool,
    ) -> Result<Self, ColorError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ColorError::EmptyName);
        }
        let hue_correction = validate_hue_correction(hue_correction)?;
        Ok(Self {
            scale: ScaleFunction::new(seed, model, correct_lightness),
            name,
            seed,
            model,
            hue_correction,
        })
    }

    fn builtin(name: &str, rgb: (u8, u8, u8), model: InterpolationModel) -> Self {
        let seed = Color::from_rgb8(rgb.0, rgb.1, rgb.2);
        Self {
            name: name.to_string(),
            seed,
            model,
            hue_correction: 0.0,
            scale: ScaleFunction::new(seed, model, true),
        }
    }

    /// Column name, unique within a configuration.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Seed color placed in the middle of the ramp.
    #[must_use]
    pub const fn seed(&self) -> Color {
        self.seed
    }

    /// Interpolation model of the ramp.
    #[must_use]
    pub const fn model(&self) -> InterpolationModel {
        self.model
    }

    /// Total hue drift in degrees, spread across the steps.
    #[must_use]
    pub const fn hue_correction(&self) -> f64 {
        self.hue_correction
    }

    /// Derived ramp, always consistent with seed, model and correction toggle.
    #[must_use]
    pub const fn scale(&self) -> &ScaleFunction {
        &self.scale
    }

    fn refresh_scale(&mut self, correct_lightness: bool) {
        self.scale = ScaleFunction::new(self.seed, self.model, correct_lightness);
    }
}

/// Ordered mapping from step identifier to target lightness percentage.
///
/// The insertion order is the traversal order used for hue drift.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct LightnessStepTable {
    steps: IndexMap<u32, f64>,
}

impl LightnessStepTable {
    /// Build a table, rejecting duplicate steps and out-of-range lightness.
    pub fn new(steps: impl IntoIterator<Item = (u32, f64)>) -> Result<Self, ColorError> {
        let mut table = IndexMap::new();
        for (step, percent) in steps {
            let percent = validate_lightness(percent)?;
            if table.insert(step, percent).is_some() {
                return Err(ColorError::DuplicateStep(step));
            }
        }
        Ok(Self { steps: table })
    }

    /// Target lightness of `step`.
    #[must_use]
    pub fn get(&self, step: u32) -> Option<f64> {
        self.steps.get(&step).copied()
    }

    /// Zero-based traversal index of `step`.
    #[must_use]
    pub fn index_of(&self, step: u32) -> Option<usize> {
        self.steps.get_index_of(&step)
    }

    /// Number of steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the table has no step.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Steps in traversal order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.steps.iter().map(|(step, percent)| (*step, *percent))
    }

    /// Change the lightness of an existing step.
    pub fn set(&mut self, step: u32, percent: f64) -> Result<(), ColorError> {
        let percent = validate_lightness(percent)?;
        let slot = self
            .steps
            .get_mut(&step)
            .ok_or(ColorError::UnknownStep(step))?;
        *slot = percent;
        Ok(())
    }
}

impl Default for LightnessStepTable {
    /// 50 → 98, then a geometric progression around 500 → 49.5.
    fn default() -> Self {
        let lighter = |power: i32| round_to_hundredth(DEFAULT_L_BASE * DEFAULT_L_INCREASE.powi(power));
        let darker = |power: i32| round_to_hundredth(DEFAULT_L_BASE * DEFAULT_L_DECREASE.powi(power));
        let steps = [
            (50, 98.0),
            (100, lighter(4)),
            (200, lighter(3)),
            (300, lighter(2)),
            (400, lighter(1)),
            (500, DEFAULT_L_BASE),
            (600, darker(1)),
            (700, darker(2)),
            (800, darker(3)),
            (900, darker(4)),
        ];
        Self {
            steps: steps.into_iter().collect(),
        }
    }
}

/// Everything a palette rebuild depends on.
#[derive(Debug, Clone)]
pub struct PaletteConfig {
    base_colors: Vec<BaseColor>,
    steps: LightnessStepTable,
    background: Color,
    correct_lightness: bool,
}

impl PaletteConfig {
    /// Assemble a configuration, rejecting duplicate names and re-deriving every scale for
    /// `correct_lightness`.
    pub fn new(
        base_colors: Vec<BaseColor>,
        steps: LightnessStepTable,
        background: Color,
        correct_lightness: bool,
    ) -> Result<Self, ColorError> {
        for (i, base) in base_colors.iter().enumerate() {
            if base_colors[..i].iter().any(|other| other.name == base.name) {
                return Err(ColorError::DuplicateBaseColor(base.name.clone()));
            }
        }

        let mut config = Self {
            base_colors,
            steps,
            background,
            correct_lightness,
        };
        config.refresh_scales();
        Ok(config)
    }

    /// Base colors in column order.
    #[must_use]
    pub fn base_colors(&self) -> &[BaseColor] {
        &self.base_colors
    }

    /// Look a base color up by name.
    #[must_use]
    pub fn base_color(&self, name: &str) -> Option<&BaseColor> {
        self.base_colors.iter().find(|base| base.name == name)
    }

    /// Lightness step table.
    #[must_use]
    pub const fn steps(&self) -> &LightnessStepTable {
        &self.steps
    }

    /// Background used for contrast evaluation.
    #[must_use]
    pub const fn background(&self) -> Color {
        self.background
    }

    /// Whether scales remap their input for linear lightness.
    #[must_use]
    pub const fn correct_lightness(&self) -> bool {
        self.correct_lightness
    }

    fn base_color_mut(&mut self, name: &str) -> Result<&mut BaseColor, ColorError> {
        self.base_colors
            .iter_mut()
            .find(|base| base.name == name)
            .ok_or_else(|| ColorError::UnknownBaseColor(name.to_string()))
    }

    /// Replace the seed of `name` with a parsed literal.
    pub fn set_seed(&mut self, name: &str, literal: &str) -> Result<(), ColorError> {
        let seed = Color::parse(literal)?;
        let correct_lightness = self.correct_lightness;
        let base = self.base_color_mut(name)?;
        base.seed = seed;
        base.refresh_scale(correct_lightness);
        Ok(())
    }

    /// Switch the interpolation model of `name`.
    pub fn set_model(&mut self, name: &str, model: InterpolationModel) -> Result<(), ColorError> {
        let correct_lightness = self.correct_lightness;
        let base = self.base_color_mut(name)?;
        if base.model != model {
            base.model = model;
            base.refresh_scale(correct_lightness);
        }
        Ok(())
    }

    /// Set the hue drift of `name`.
    pub fn set_hue_correction(&mut self, name: &str, degrees: f64) -> Result<(), ColorError> {
        let degrees = validate_hue_correction(degrees)?;
        self.base_color_mut(name)?.hue_correction = degrees;
        Ok(())
    }

    /// Set the target lightness of an existing step.
    pub fn set_lightness(&mut self, step: u32, percent: f64) -> Result<(), ColorError> {
        self.steps.set(step, percent)
    }

    /// Replace the background with a parsed literal.
    pub fn set_background(&mut self, literal: &str) -> Result<(), ColorError> {
        self.background = Color::parse(literal)?;
        Ok(())
    }

    /// Toggle lightness correction, re-deriving every scale when it changes.
    pub fn set_correct_lightness(&mut self, enabled: bool) {
        if self.correct_lightness != enabled {
            self.correct_lightness = enabled;
            self.refresh_scales();
        }
    }

    fn refresh_scales(&mut self) {
        for base in &mut self.base_colors {
            if base.scale.is_corrected() != self.correct_lightness {
                base.refresh_scale(self.correct_lightness);
            }
        }
    }
}

impl Default for PaletteConfig {
    fn default() -> Self {
        use InterpolationModel::{LinearRgb, Perceptual};

        Self {
            base_colors: vec![
                BaseColor::builtin("red", (0xC0, 0x1C, 0x21), Perceptual),
                BaseColor::builtin("orange", (0xF2, 0x9C, 0x24), Perceptual),
                BaseColor::builtin("yellow", (0xFF, 0xDE, 0x00), Perceptual),
                BaseColor::builtin("lime", (0x89, 0xBF, 0x1D), LinearRgb),
                BaseColor::builtin("mint", (0x4F, 0xC4, 0x7F), LinearRgb),
                BaseColor::builtin("blue", (0x00, 0x7D, 0xCC), LinearRgb),
                BaseColor::builtin("slate", (0x79, 0x80, 0x8D), LinearRgb),
                BaseColor::builtin("grey", (0x80, 0x80, 0x80), LinearRgb),
            ],
            steps: LightnessStepTable::default(),
            background: Color::white(),
            correct_lightness: true,
        }
    }
}

/// One generated swatch (or anchor) with its contrast annotations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaletteEntry {
    /// Owning base color, or the anchor name.
    pub base_color: String,
    /// Lightness step identifier.
    pub step: u32,
    /// Resulting color, snapped to 8-bit channels.
    pub color: Color,
    /// Cylindrical coordinates of `color`, rounded to two decimals.
    pub lch: LchCoords,
    /// Luminance ratio against the background.
    pub contrast_ratio: f64,
    /// APCA contrast against the background.
    pub perceptual_contrast: f64,
    /// Whether `contrast_ratio` passes the accessibility threshold.
    pub accessible: bool,
}

impl PaletteEntry {
    fn new(base_color: &str, step: u32, color: Color, background: &Color) -> Self {
        let LchCoords { l, c, h } = color.to_lch();
        let ContrastScores {
            ratio,
            perceptual,
            accessible,
        } = contrast::evaluate(&color, background);
        Self {
            base_color: base_color.to_string(),
            step,
            color,
            lch: LchCoords {
                l: round_to_hundredth(l),
                c: round_to_hundredth(c),
                h: round_to_hundredth(h),
            },
            contrast_ratio: ratio,
            perceptual_contrast: perceptual,
            accessible,
        }
    }
}

/// A complete palette: swatches in column × step order, then the two anchors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Palette {
    background: Color,
    swatches: Vec<PaletteEntry>,
    anchors: [PaletteEntry; 2],
}

impl Palette {
    /// Background the contrasts were computed against.
    #[must_use]
    pub const fn background(&self) -> Color {
        self.background
    }

    /// Generated swatches, base colors outer and steps inner.
    #[must_use]
    pub fn swatches(&self) -> &[PaletteEntry] {
        &self.swatches
    }

    /// White (step 0) and black (step 1000) anchors.
    #[must_use]
    pub const fn anchors(&self) -> &[PaletteEntry; 2] {
        &self.anchors
    }

    /// Every matching candidate: swatches first, anchors last.
    pub fn entries(&self) -> impl Iterator<Item = &PaletteEntry> {
        self.swatches.iter().chain(self.anchors.iter())
    }

    /// Number of entries including anchors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.swatches.len() + self.anchors.len()
    }

    /// Always false: anchors are unconditional.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Find the swatch of `base_color` at `step`.
    #[must_use]
    pub fn swatch(&self, base_color: &str, step: u32) -> Option<&PaletteEntry> {
        self.entries()
            .find(|entry| entry.base_color == base_color && entry.step == step)
    }
}

/// Progressive hue drift of the step at `step_index` (zero-based) among `step_count`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn hue_adjustment(hue_correction: f64, step_count: usize, step_index: usize) -> f64 {
    if step_count == 0 {
        return 0.0;
    }
    (hue_correction / step_count as f64) * (step_index + 1) as f64
}

/// Rotate the hue of `color` by `degrees`, clipping the result to sRGB.
#[must_use]
pub fn drift_hue(color: &Color, degrees: f64) -> Color {
    let LchCoords { l, c, h } = color.to_lch();
    Color::from_lch(l, c, h + degrees)
}

/// Unquantized color of `base` at `lightness` percent, hue drift applied.
#[must_use]
pub fn shade(base: &BaseColor, lightness: f64, hue_adjustment: f64) -> Color {
    let raw = base.scale().at(lightness / 100.0);
    if hue_adjustment == 0.0 {
        raw
    } else {
        drift_hue(&raw, hue_adjustment)
    }
}

/// Rebuild the whole palette from `config`.
#[must_use]
pub fn rebuild(config: &PaletteConfig) -> Palette {
    let background = config.background();
    let step_count = config.steps().len();

    let mut swatches = Vec::with_capacity(config.base_colors().len() * step_count);
    for base in config.base_colors() {
        for (index, (step, lightness)) in config.steps().iter().enumerate() {
            let adjustment = hue_adjustment(base.hue_correction(), step_count, index);
            let color = shade(base, lightness, adjustment).quantized();
            swatches.push(PaletteEntry::new(base.name(), step, color, &background));
        }
    }

    let anchors = [
        PaletteEntry::new(WHITE_ANCHOR, WHITE_ANCHOR_STEP, Color::white(), &background),
        PaletteEntry::new(BLACK_ANCHOR, BLACK_ANCHOR_STEP, Color::black(), &background),
    ];

    Palette {
        background,
        swatches,
        anchors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red_only(steps: LightnessStepTable, hue: f64) -> PaletteConfig {
        let red = BaseColor::new(
            "red",
            Color::parse("#C01C21").unwrap(),
            InterpolationModel::Perceptual,
            hue,
            true,
        )
        .unwrap();
        PaletteConfig::new(vec![red], steps, Color::white(), true).unwrap()
    }

    fn hue_delta(from: f64, to: f64) -> f64 {
        (to - from + 540.0).rem_euclid(360.0) - 180.0
    }

    #[test]
    fn default_step_table_matches_geometric_progression() {
        let steps = LightnessStepTable::default();
        let collected: Vec<_> = steps.iter().collect();
        assert_eq!(collected.len(), 10);
        assert_eq!(collected[0], (50, 98.0));
        assert_eq!(collected[1], (100, 92.76));
        assert_eq!(collected[2], (200, 79.28));
        assert_eq!(collected[3], (300, 67.76));
        assert_eq!(collected[5], (500, 49.5));
        assert_eq!(collected[7], (700, 29.35));
        assert_eq!(collected[9], (900, 17.4));
        assert_eq!(steps.index_of(500), Some(5));
    }

    #[test]
    fn step_table_rejects_duplicates_and_out_of_range() {
        assert_eq!(
            LightnessStepTable::new([(50, 98.0), (50, 90.0)]).unwrap_err(),
            ColorError::DuplicateStep(50)
        );
        assert!(matches!(
            LightnessStepTable::new([(50, 200.0)]).unwrap_err(),
            ColorError::OutOfRangeParameter { .. }
        ));
        assert!(LightnessStepTable::new([(50, f64::NAN)]).is_err());
    }

    #[test]
    fn palette_size_is_columns_times_steps_plus_anchors() {
        let config = PaletteConfig::default();
        let palette = rebuild(&config);
        assert_eq!(palette.len(), 8 * 10 + 2);
        assert_eq!(palette.swatches().len(), 80);

        let anchors = palette.anchors();
        assert_eq!(anchors[0].base_color, WHITE_ANCHOR);
        assert_eq!(anchors[0].step, WHITE_ANCHOR_STEP);
        assert_eq!(anchors[0].color.to_hex(), "#FFFFFF");
        assert_eq!(anchors[1].base_color, BLACK_ANCHOR);
        assert_eq!(anchors[1].step, BLACK_ANCHOR_STEP);
        assert_eq!(anchors[1].color.to_hex(), "#000000");
    }

    #[test]
    fn swatches_follow_column_then_step_order() {
        let palette = rebuild(&PaletteConfig::default());
        let first = &palette.swatches()[0];
        assert_eq!((first.base_color.as_str(), first.step), ("red", 50));
        let eleventh = &palette.swatches()[10];
        assert_eq!((eleventh.base_color.as_str(), eleventh.step), ("orange", 50));
        let last = palette.entries().last().unwrap();
        assert_eq!(last.base_color, BLACK_ANCHOR);
    }

    #[test]
    fn red_500_lands_near_target_lightness() {
        let config = red_only(LightnessStepTable::new([(500, 49.5)]).unwrap(), 0.0);
        let palette = rebuild(&config);
        assert_eq!(palette.swatches().len(), 1);
        let entry = &palette.swatches()[0];
        assert_eq!(entry.step, 500);
        assert!((entry.lch.l - 49.5).abs() < 1.0, "L = {}", entry.lch.l);
    }

    #[test]
    fn rebuild_is_deterministic() {
        let config = PaletteConfig::default();
        let a = serde_json::to_string(&rebuild(&config)).unwrap();
        let b = serde_json::to_string(&rebuild(&config)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn hue_adjustment_is_progressive() {
        assert_eq!(hue_adjustment(-15.0, 10, 2), -4.5);
        assert_eq!(hue_adjustment(-15.0, 10, 9), -15.0);
        assert_eq!(hue_adjustment(20.0, 10, 0), 2.0);
        assert_eq!(hue_adjustment(20.0, 0, 0), 0.0);
    }

    #[test]
    fn hue_drift_rotates_single_swatch() {
        let config = red_only(LightnessStepTable::default(), -15.0);
        let base = &config.base_colors()[0];
        let lightness = config.steps().get(200).unwrap();

        let raw = base.scale().at(lightness / 100.0);
        let drifted = shade(base, lightness, hue_adjustment(-15.0, 10, 2));
        let delta = hue_delta(raw.to_lch().h, drifted.to_lch().h);
        assert!((delta + 4.5).abs() < 0.05, "delta {delta}");
        assert!((raw.lightness() - drifted.lightness()).abs() < 0.05);
    }

    #[test]
    fn entries_carry_contrast_against_background() {
        let palette = rebuild(&PaletteConfig::default());
        for entry in palette.entries() {
            assert!((1.0..=21.0).contains(&entry.contrast_ratio));
            assert_eq!(entry.accessible, entry.contrast_ratio >= 4.5);
        }
        let white = &palette.anchors()[0];
        assert_eq!(white.contrast_ratio, 1.0);
        assert_eq!(white.perceptual_contrast, 0.0);
        let black = &palette.anchors()[1];
        assert_eq!(black.contrast_ratio, 21.0);
    }

    #[test]
    fn rejected_edits_leave_config_untouched() {
        let mut config = PaletteConfig::default();
        let before = rebuild(&config);

        assert!(config.set_seed("red", "#nothex").is_err());
        assert!(config.set_seed("magenta", "#FF00FF").is_err());
        assert!(config.set_hue_correction("red", 360.0).is_err());
        assert!(config.set_hue_correction("red", -400.0).is_err());
        assert!(config.set_lightness(500, 200.0).is_err());
        assert_eq!(
            config.set_lightness(550, 50.0).unwrap_err(),
            ColorError::UnknownStep(550)
        );
        assert!(config.set_background("nope").is_err());

        assert_eq!(rebuild(&config), before);
    }

    #[test]
    fn accepted_edits_refresh_derived_scale() {
        let mut config = PaletteConfig::default();
        config.set_seed("blue", "#0050A0").unwrap();
        let blue = config.base_color("blue").unwrap();
        assert_eq!(blue.seed().to_hex(), "#0050A0");
        assert_eq!(blue.scale().seed().to_hex(), "#0050A0");

        config.set_model("blue", InterpolationModel::Perceptual).unwrap();
        assert_eq!(
            config.base_color("blue").unwrap().scale().model(),
            InterpolationModel::Perceptual
        );

        config.set_correct_lightness(false);
        assert!(config.base_colors().iter().all(|b| !b.scale().is_corrected()));
        config.set_correct_lightness(true);
        assert!(config.base_colors().iter().all(|b| b.scale().is_corrected()));
    }

    #[test]
    fn config_rejects_duplicate_names() {
        let seed = Color::parse("#808080").unwrap();
        let a = BaseColor::new("grey", seed, InterpolationModel::LinearRgb, 0.0, true).unwrap();
        let b = a.clone();
        let err = PaletteConfig::new(vec![a, b], LightnessStepTable::default(), Color::white(), true)
            .unwrap_err();
        assert_eq!(err, ColorError::DuplicateBaseColor("grey".into()));
    }

    #[test]
    fn config_new_aligns_scales_with_toggle() {
        let seed = Color::parse("#808080").unwrap();
        let grey = BaseColor::new("grey", seed, InterpolationModel::LinearRgb, 0.0, true).unwrap();
        let config =
            PaletteConfig::new(vec![grey], LightnessStepTable::default(), Color::white(), false)
                .unwrap();
        assert!(!config.base_colors()[0].scale().is_corrected());
    }

    #[test]
    fn base_color_validation() {
        let seed = Color::black();
        assert_eq!(
            BaseColor::new(" ", seed, InterpolationModel::Perceptual, 0.0, true).unwrap_err(),
            ColorError::EmptyName
        );
        assert!(BaseColor::new("x", seed, InterpolationModel::Perceptual, 359.9, true).is_ok());
        assert!(BaseColor::new("x", seed, InterpolationModel::Perceptual, -360.0, true).is_err());
    }

    #[test]
    fn background_change_only_moves_contrast() {
        let mut config = PaletteConfig::default();
        let light = rebuild(&config);
        config.set_background("#000000").unwrap();
        let dark = rebuild(&config);

        for (a, b) in light.entries().zip(dark.entries()) {
            assert_eq!(a.color, b.color);
        }
        let red_900 = dark.swatch("red", 900).unwrap();
        assert!(red_900.perceptual_contrast <= 0.0);
    }
}
