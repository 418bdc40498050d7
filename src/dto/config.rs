use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    dto::validation::{validate_base_color_name, validate_color_literal},
    engine::{
        Color, ColorError, LchCoords,
        palette::{BaseColor, LightnessStepTable, PaletteConfig},
        scale::InterpolationModel,
    },
    state::PaletteSnapshot,
};

fn default_correct_lightness() -> bool {
    true
}

/// Payload replacing the whole palette configuration.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct ConfigInput {
    #[validate(nested)]
    pub base_colors: Vec<BaseColorInput>,
    /// Steps in output order.
    #[validate(length(min = 1), nested)]
    pub lightness_steps: Vec<LightnessStepInput>,
    #[validate(custom(function = "validate_color_literal"))]
    pub background: String,
    #[serde(default = "default_correct_lightness")]
    pub correct_lightness: bool,
}

/// Incoming base color definition.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct BaseColorInput {
    #[validate(custom(function = "validate_base_color_name"))]
    pub name: String,
    /// Any CSS color literal.
    #[validate(custom(function = "validate_color_literal"))]
    pub color: String,
    #[serde(default)]
    pub model: InterpolationModel,
    /// Total hue drift in degrees across the steps.
    #[serde(default)]
    #[validate(range(exclusive_min = -360.0, exclusive_max = 360.0))]
    pub hue_correction: f64,
}

/// Lightness target of one step.
#[derive(Clone, Debug, Deserialize, Serialize, ToSchema, Validate)]
pub struct LightnessStepInput {
    pub step: u32,
    /// CIE L* in percent.
    #[validate(range(min = 0.0, max = 100.0))]
    pub lightness: f64,
}

impl TryFrom<ConfigInput> for PaletteConfig {
    type Error = ColorError;

    fn try_from(input: ConfigInput) -> Result<Self, Self::Error> {
        let base_colors = input
            .base_colors
            .into_iter()
            .map(|base| {
                BaseColor::new(
                    base.name,
                    Color::parse(&base.color)?,
                    base.model,
                    base.hue_correction,
                    input.correct_lightness,
                )
            })
            .collect::<Result<Vec<_>, _>>()?;
        let steps = LightnessStepTable::new(
            input
                .lightness_steps
                .into_iter()
                .map(|entry| (entry.step, entry.lightness)),
        )?;
        let background = Color::parse(&input.background)?;
        PaletteConfig::new(base_colors, steps, background, input.correct_lightness)
    }
}

/// Partial update of one base color; omitted fields keep their value.
#[derive(Debug, Default, Deserialize, ToSchema, Validate)]
pub struct UpdateBaseColorRequest {
    #[serde(default)]
    #[validate(custom(function = "validate_color_literal"))]
    pub color: Option<String>,
    #[serde(default)]
    pub model: Option<InterpolationModel>,
    #[serde(default)]
    #[validate(range(exclusive_min = -360.0, exclusive_max = 360.0))]
    pub hue_correction: Option<f64>,
}

/// New lightness target for an existing step.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct UpdateLightnessRequest {
    #[validate(range(min = 0.0, max = 100.0))]
    pub lightness: f64,
}

/// New background color.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct UpdateBackgroundRequest {
    #[validate(custom(function = "validate_color_literal"))]
    pub color: String,
}

/// Toggle of the lightness correction.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct UpdateLightnessCorrectionRequest {
    pub enabled: bool,
}

/// Current configuration, as served by `GET /config`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ConfigResponse {
    pub revision: u64,
    pub base_colors: Vec<BaseColorSummary>,
    pub lightness_steps: Vec<LightnessStepInput>,
    pub background: String,
    pub correct_lightness: bool,
}

#[derive(Clone, Debug, Serialize, ToSchema)]
/// Public projection of a base color.
pub struct BaseColorSummary {
    pub name: String,
    /// Seed as uppercase hex.
    pub color: String,
    pub model: InterpolationModel,
    pub hue_correction: f64,
    /// Seed coordinates, useful to pick a hue correction.
    pub lch: LchCoords,
}

impl From<&BaseColor> for BaseColorSummary {
    fn from(base: &BaseColor) -> Self {
        Self {
            name: base.name().to_string(),
            color: base.seed().to_hex(),
            model: base.model(),
            hue_correction: base.hue_correction(),
            lch: base.seed().to_lch(),
        }
    }
}

impl From<&PaletteSnapshot> for ConfigResponse {
    fn from(snapshot: &PaletteSnapshot) -> Self {
        let config = &snapshot.config;
        Self {
            revision: snapshot.revision,
            base_colors: config
                .base_colors()
                .iter()
                .map(BaseColorSummary::from)
                .collect(),
            lightness_steps: config
                .steps()
                .iter()
                .map(|(step, lightness)| LightnessStepInput { step, lightness })
                .collect(),
            background: config.background().to_hex(),
            correct_lightness: config.correct_lightness(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base(name: &str, color: &str, hue_correction: f64) -> BaseColorInput {
        BaseColorInput {
            name: name.into(),
            color: color.into(),
            model: InterpolationModel::Perceptual,
            hue_correction,
        }
    }

    fn input(base_colors: Vec<BaseColorInput>) -> ConfigInput {
        ConfigInput {
            base_colors,
            lightness_steps: vec![LightnessStepInput {
                step: 500,
                lightness: 49.5,
            }],
            background: "#FFFFFF".into(),
            correct_lightness: true,
        }
    }

    #[test]
    fn config_input_validation_rejects_bad_fields() {
        assert!(input(vec![base("red", "#C01C21", -15.0)]).validate().is_ok());
        assert!(input(vec![base("red", "#nope", 0.0)]).validate().is_err());
        assert!(input(vec![base("red", "#C01C21", 360.0)]).validate().is_err());
        assert!(input(vec![base(" ", "#C01C21", 0.0)]).validate().is_err());

        let mut steps = input(vec![]);
        steps.lightness_steps[0].lightness = 120.0;
        assert!(steps.validate().is_err());
        steps.lightness_steps.clear();
        assert!(steps.validate().is_err());
    }

    #[test]
    fn partial_update_validates_present_fields_only() {
        assert!(UpdateBaseColorRequest::default().validate().is_ok());
        let request = UpdateBaseColorRequest {
            color: Some("#nope".into()),
            ..Default::default()
        };
        assert!(request.validate().is_err());
        let request = UpdateBaseColorRequest {
            hue_correction: Some(-400.0),
            ..Default::default()
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn config_input_converts_in_order() {
        let config = PaletteConfig::try_from(input(vec![
            base("red", "#C01C21", -15.0),
            base("blue", "#007DCC", 0.0),
        ]))
        .unwrap();
        assert_eq!(config.base_colors()[0].name(), "red");
        assert_eq!(config.base_colors()[1].seed().to_hex(), "#007DCC");
        assert_eq!(config.steps().get(500), Some(49.5));
    }

    #[test]
    fn config_input_rejects_duplicates() {
        let err = PaletteConfig::try_from(input(vec![
            base("red", "#C01C21", 0.0),
            base("red", "#FF0000", 0.0),
        ]))
        .unwrap_err();
        assert_eq!(err, ColorError::DuplicateBaseColor("red".into()));
    }
}
