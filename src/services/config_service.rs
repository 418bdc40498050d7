//! Single-field configuration edits and whole-configuration replacement.

use crate::{
    dto::config::{
        ConfigInput, ConfigResponse, UpdateBackgroundRequest, UpdateBaseColorRequest,
        UpdateLightnessCorrectionRequest, UpdateLightnessRequest,
    },
    engine::{ColorError, palette::PaletteConfig},
    error::ServiceError,
    services::palette_service,
    state::SharedState,
};

/// Return the configuration currently served.
pub async fn get_config(state: &SharedState) -> ConfigResponse {
    ConfigResponse::from(&state.snapshot().await)
}

/// Replace the whole configuration; nothing changes when any part is invalid.
pub async fn replace_config(
    state: &SharedState,
    input: ConfigInput,
) -> Result<ConfigResponse, ServiceError> {
    let config = PaletteConfig::try_from(input)?;
    let snapshot = palette_service::replace_config(state, config).await;
    Ok(ConfigResponse::from(&snapshot))
}

/// Update the seed, model or hue correction of one base color, all or nothing.
pub async fn update_base_color(
    state: &SharedState,
    name: &str,
    request: UpdateBaseColorRequest,
) -> Result<ConfigResponse, ServiceError> {
    let snapshot = palette_service::apply_edit(state, "base color", |config| {
        if config.base_color(name).is_none() {
            return Err(ColorError::UnknownBaseColor(name.to_string()));
        }
        if let Some(literal) = &request.color {
            config.set_seed(name, literal)?;
        }
        if let Some(model) = request.model {
            config.set_model(name, model)?;
        }
        if let Some(degrees) = request.hue_correction {
            config.set_hue_correction(name, degrees)?;
        }
        Ok(())
    })
    .await?;
    Ok(ConfigResponse::from(&snapshot))
}

/// Set the lightness target of an existing step.
pub async fn update_lightness(
    state: &SharedState,
    step: u32,
    request: UpdateLightnessRequest,
) -> Result<ConfigResponse, ServiceError> {
    let snapshot = palette_service::apply_edit(state, "lightness step", |config| {
        config.set_lightness(step, request.lightness)
    })
    .await?;
    Ok(ConfigResponse::from(&snapshot))
}

/// Replace the background color.
pub async fn update_background(
    state: &SharedState,
    request: UpdateBackgroundRequest,
) -> Result<ConfigResponse, ServiceError> {
    let snapshot = palette_service::apply_edit(state, "background", |config| {
        config.set_background(&request.color)
    })
    .await?;
    Ok(ConfigResponse::from(&snapshot))
}

/// Toggle the lightness correction of every scale.
pub async fn update_lightness_correction(
    state: &SharedState,
    request: UpdateLightnessCorrectionRequest,
) -> Result<ConfigResponse, ServiceError> {
    let snapshot = palette_service::apply_edit(state, "lightness correction", |config| {
        config.set_correct_lightness(request.enabled);
        Ok(())
    })
    .await?;
    Ok(ConfigResponse::from(&snapshot))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        dto::config::{BaseColorInput, LightnessStepInput},
        engine::scale::InterpolationModel,
    };

    fn state() -> SharedState {
        palette_service::bootstrap(PaletteConfig::default(), None)
    }

    #[tokio::test]
    async fn partial_base_color_update_keeps_other_fields() {
        let state = state();
        let config = update_base_color(
            &state,
            "red",
            UpdateBaseColorRequest {
                hue_correction: Some(-15.0),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        let red = &config.base_colors[0];
        assert_eq!(red.name, "red");
        assert_eq!(red.color, "#C01C21");
        assert_eq!(red.model, InterpolationModel::Perceptual);
        assert_eq!(red.hue_correction, -15.0);
        assert_eq!(config.revision, 1);
    }

    #[tokio::test]
    async fn base_color_update_is_all_or_nothing() {
        let state = state();
        let err = update_base_color(
            &state,
            "red",
            UpdateBaseColorRequest {
                color: Some("#000000".into()),
                hue_correction: Some(720.0),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ServiceError::InvalidInput(_)));

        let config = get_config(&state).await;
        assert_eq!(config.revision, 0);
        assert_eq!(config.base_colors[0].color, "#C01C21");
    }

    #[tokio::test]
    async fn unknown_targets_are_not_found() {
        let state = state();
        let err = update_base_color(&state, "teal", UpdateBaseColorRequest::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));

        let err = update_lightness(&state, 550, UpdateLightnessRequest { lightness: 40.0 })
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn lightness_edit_moves_the_swatch() {
        let state = state();
        update_lightness(&state, 500, UpdateLightnessRequest { lightness: 30.0 })
            .await
            .unwrap();
        let palette = state.palette().await;
        let swatch = palette.swatch("red", 500).unwrap();
        assert!((swatch.lch.l - 30.0).abs() < 1.0, "L = {}", swatch.lch.l);
    }

    #[tokio::test]
    async fn replace_config_installs_new_columns() {
        let state = state();
        let config = replace_config(
            &state,
            ConfigInput {
                base_colors: vec![BaseColorInput {
                    name: "red".into(),
                    color: "#C01C21".into(),
                    model: InterpolationModel::Perceptual,
                    hue_correction: 0.0,
                }],
                lightness_steps: vec![LightnessStepInput {
                    step: 500,
                    lightness: 49.5,
                }],
                background: "#FFFFFF".into(),
                correct_lightness: true,
            },
        )
        .await
        .unwrap();
        assert_eq!(config.base_colors.len(), 1);
        assert_eq!(state.palette().await.len(), 3);
    }

    #[tokio::test]
    async fn correction_toggle_is_reported() {
        let state = state();
        let config =
            update_lightness_correction(&state, UpdateLightnessCorrectionRequest { enabled: false })
                .await
                .unwrap();
        assert!(!config.correct_lightness);
        let snapshot = state.snapshot().await;
        assert!(
            snapshot
                .config
                .base_colors()
                .iter()
                .all(|base| !base.scale().is_corrected())
        );
    }
}
