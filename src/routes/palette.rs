use axum::{Json, Router, extract::State, routing::get};

use crate::{dto::palette::PaletteResponse, services::palette_service, state::SharedState};

/// Read-only palette endpoint.
pub fn router() -> Router<SharedState> {
    Router::new().route("/palette", get(get_palette))
}

#[utoipa::path(
    get,
    path = "/palette",
    tag = "palette",
    responses((status = 200, description = "Current palette", body = PaletteResponse))
)]
/// Return the palette generated from the current configuration.
pub async fn get_palette(State(state): State<SharedState>) -> Json<PaletteResponse> {
    Json(palette_service::current_palette(&state).await)
}
