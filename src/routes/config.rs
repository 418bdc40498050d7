use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, put},
};
use axum_valid::Valid;

use crate::{
    dto::config::{
        ConfigInput, ConfigResponse, UpdateBackgroundRequest, UpdateBaseColorRequest,
        UpdateLightnessCorrectionRequest, UpdateLightnessRequest,
    },
    error::AppError,
    services::config_service,
    state::SharedState,
};

/// Routes reading and editing the palette configuration. Every accepted edit rebuilds the palette.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/config", get(get_config).put(replace_config))
        .route("/config/base-colors/{name}", put(update_base_color))
        .route("/config/lightness/{step}", put(update_lightness))
        .route("/config/background", put(update_background))
        .route(
            "/config/lightness-correction",
            put(update_lightness_correction),
        )
}

#[utoipa::path(
    get,
    path = "/config",
    tag = "config",
    responses((status = 200, description = "Current configuration", body = ConfigResponse))
)]
/// Return the configuration the palette is generated from.
pub async fn get_config(State(state): State<SharedState>) -> Json<ConfigResponse> {
    Json(config_service::get_config(&state).await)
}

#[utoipa::path(
    put,
    path = "/config",
    tag = "config",
    request_body = ConfigInput,
    responses(
        (status = 200, description = "Configuration replaced", body = ConfigResponse),
        (status = 400, description = "Invalid configuration; nothing changed")
    )
)]
/// Replace the whole configuration.
pub async fn replace_config(
    State(state): State<SharedState>,
    Valid(Json(payload)): Valid<Json<ConfigInput>>,
) -> Result<Json<ConfigResponse>, AppError> {
    let config = config_service::replace_config(&state, payload).await?;
    Ok(Json(config))
}

#[utoipa::path(
    put,
    path = "/config/base-colors/{name}",
    tag = "config",
    params(("name" = String, Path, description = "Name of the base color")),
    request_body = UpdateBaseColorRequest,
    responses(
        (status = 200, description = "Base color updated", body = ConfigResponse),
        (status = 400, description = "Invalid value; nothing changed"),
        (status = 404, description = "Unknown base color")
    )
)]
/// Update the seed, model or hue correction of one base color.
pub async fn update_base_color(
    State(state): State<SharedState>,
    Path(name): Path<String>,
    Valid(Json(payload)): Valid<Json<UpdateBaseColorRequest>>,
) -> Result<Json<ConfigResponse>, AppError> {
    let config = config_service::update_base_color(&state, &name, payload).await?;
    Ok(Json(config))
}

#[utoipa::path(
    put,
    path = "/config/lightness/{step}",
    tag = "config",
    params(("step" = u32, Path, description = "Lightness step identifier, e.g. 500")),
    request_body = UpdateLightnessRequest,
    responses(
        (status = 200, description = "Lightness step updated", body = ConfigResponse),
        (status = 400, description = "Lightness out of range"),
        (status = 404, description = "Unknown step")
    )
)]
/// Set the lightness target of an existing step.
pub async fn update_lightness(
    State(state): State<SharedState>,
    Path(step): Path<u32>,
    Valid(Json(payload)): Valid<Json<UpdateLightnessRequest>>,
) -> Result<Json<ConfigResponse>, AppError> {
    let config = config_service::update_lightness(&state, step, payload).await?;
    Ok(Json(config))
}

#[utoipa::path(
    put,
    path = "/config/background",
    tag = "config",
    request_body = UpdateBackgroundRequest,
    responses(
        (status = 200, description = "Background updated", body = ConfigResponse),
        (status = 400, description = "Invalid color literal")
    )
)]
/// Replace the background every contrast is computed against.
pub async fn update_background(
    State(state): State<SharedState>,
    Valid(Json(payload)): Valid<Json<UpdateBackgroundRequest>>,
) -> Result<Json<ConfigResponse>, AppError> {
    let config = config_service::update_background(&state, payload).await?;
    Ok(Json(config))
}

#[utoipa::path(
    put,
    path = "/config/lightness-correction",
    tag = "config",
    request_body = UpdateLightnessCorrectionRequest,
    responses((status = 200, description = "Lightness correction toggled", body = ConfigResponse))
)]
/// Enable or disable the lightness correction of every scale.
pub async fn update_lightness_correction(
    State(state): State<SharedState>,
    Valid(Json(payload)): Valid<Json<UpdateLightnessCorrectionRequest>>,
) -> Result<Json<ConfigResponse>, AppError> {
    let config = config_service::update_lightness_correction(&state, payload).await?;
    Ok(Json(config))
}
