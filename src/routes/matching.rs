use axum::{Json, Router, extract::State, routing::get};

use crate::{
    dto::matching::{MatchReportResponse, MatchRequest},
    engine::matcher::ColorUsageCorpus,
    error::AppError,
    services::match_service,
    state::SharedState,
};

/// Corpus matching endpoints.
pub fn router() -> Router<SharedState> {
    Router::new().route("/match", get(match_startup_corpus).post(match_uploaded_corpus))
}

#[utoipa::path(
    get,
    path = "/match",
    tag = "match",
    responses(
        (status = 200, description = "Report for the corpus loaded at startup", body = MatchReportResponse),
        (status = 404, description = "No corpus configured")
    )
)]
/// Match the corpus loaded at startup against the current palette.
pub async fn match_startup_corpus(
    State(state): State<SharedState>,
) -> Result<Json<MatchReportResponse>, AppError> {
    let report = match_service::match_startup_corpus(&state).await?;
    Ok(Json(report))
}

#[utoipa::path(
    post,
    path = "/match",
    tag = "match",
    request_body = MatchRequest,
    responses((status = 200, description = "Report for the uploaded corpus", body = MatchReportResponse))
)]
/// Match an uploaded corpus against the current palette.
pub async fn match_uploaded_corpus(
    State(state): State<SharedState>,
    Json(payload): Json<MatchRequest>,
) -> Json<MatchReportResponse> {
    let corpus = ColorUsageCorpus::from(payload);
    Json(match_service::match_corpus(&state, &corpus).await)
}
