use crate::{dto::health::HealthResponse, state::SharedState};

/// Respond with the revision and size of the palette currently served.
pub async fn health_status(state: &SharedState) -> HealthResponse {
    let snapshot = state.snapshot().await;
    HealthResponse::ok(snapshot.revision, snapshot.palette.len())
}
