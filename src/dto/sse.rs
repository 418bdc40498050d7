use std::time::SystemTime;

use serde::Serialize;
use utoipa::ToSchema;

use crate::{dto::format_system_time, state::PaletteSnapshot};

#[derive(Clone, Debug)]
/// Dispatched payload carried across SSE channels.
pub struct ServerEvent {
    pub event: Option<String>,
    pub data: String,
}

impl ServerEvent {
    /// Convenience wrapper that serialises `payload` into the SSE data field.
    pub fn json<E, T>(event: E, payload: &T) -> serde_json::Result<Self>
    where
        E: Into<Option<String>>,
        T: Serialize,
    {
        Ok(Self {
            event: event.into(),
            data: serde_json::to_string(payload)?,
        })
    }
}

#[derive(Debug, Serialize, ToSchema)]
/// Initial metadata sent to an SSE client when it connects.
pub struct Handshake {
    /// Identifier of the SSE stream.
    pub stream: String,
    /// Human-readable message confirming the subscription.
    pub message: String,
    /// Palette revision at subscription time.
    pub revision: u64,
}

#[derive(Debug, Serialize, ToSchema)]
/// Broadcast after every accepted configuration edit.
pub struct PaletteRebuiltEvent {
    pub revision: u64,
    /// RFC 3339 timestamp of the rebuild.
    pub rebuilt_at: String,
    pub background: String,
    /// Number of swatches, anchors excluded.
    pub swatches: usize,
    /// Number of swatches that fail the contrast ratio threshold.
    pub inaccessible: usize,
}

impl PaletteRebuiltEvent {
    /// Summarize `snapshot`, stamped with `rebuilt_at`.
    pub fn new(snapshot: &PaletteSnapshot, rebuilt_at: SystemTime) -> Self {
        let swatches = snapshot.palette.swatches();
        Self {
            revision: snapshot.revision,
            rebuilt_at: format_system_time(rebuilt_at),
            background: snapshot.palette.background().to_hex(),
            swatches: swatches.len(),
            inaccessible: swatches.iter().filter(|entry| !entry.accessible).count(),
        }
    }
}
