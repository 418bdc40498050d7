use serde::Serialize;
use utoipa::ToSchema;

/// Simple health response returned by the `/healthcheck` route.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Health status, always "ok" once the palette is built.
    pub status: String,
    /// Revision of the palette currently served.
    pub revision: u64,
    /// Number of entries in the current palette, anchors included.
    pub entries: usize,
}

impl HealthResponse {
    /// Create a health response indicating the system is operational.
    pub fn ok(revision: u64, entries: usize) -> Self {
        Self {
            status: "ok".to_string(),
            revision,
            entries,
        }
    }
}
