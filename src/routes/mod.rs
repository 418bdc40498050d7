use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{services::documentation::ApiDoc, state::SharedState};

pub mod config;
pub mod health;
pub mod matching;
pub mod palette;
pub mod sse;

/// Compose all route trees, wiring in shared state and the Swagger UI at `/docs`.
pub fn router(state: SharedState) -> Router<()> {
    let api_router = health::router()
        .merge(palette::router())
        .merge(config::router())
        .merge(matching::router())
        .merge(sse::router());

    let docs_router: Router<SharedState> = SwaggerUi::new("/docs")
        .url("/api-doc/openapi.json", ApiDoc::openapi())
        .into();

    api_router.merge(docs_router).with_state(state)
}
