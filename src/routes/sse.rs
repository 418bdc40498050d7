use std::convert::Infallible;

use axum::{Router, extract::State, response::sse::Sse, routing::get};
use futures::Stream;
use tracing::info;

use crate::{services::sse_service, state::SharedState};

#[utoipa::path(
    get,
    path = "/sse/palette",
    tag = "sse",
    responses((status = 200, description = "Palette SSE stream", content_type = "text/event-stream", body = String))
)]
/// Stream `palette.rebuilt` events to rendering clients.
pub async fn palette_stream(
    State(state): State<SharedState>,
) -> Sse<impl Stream<Item = Result<axum::response::sse::Event, Infallible>>> {
    let receiver = sse_service::subscribe_palette(&state);
    let revision = state.snapshot().await.revision;
    info!(revision, "New palette SSE connection");
    sse_service::to_sse_stream(receiver, sse_service::palette_handshake(revision))
}

/// Configure the SSE endpoints.
pub fn router() -> Router<SharedState> {
    Router::<SharedState>::new().route("/sse/palette", get(palette_stream))
}
