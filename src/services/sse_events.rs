use std::time::SystemTime;

use serde::Serialize;
use tracing::warn;

use crate::{
    dto::sse::{PaletteRebuiltEvent, ServerEvent},
    state::{PaletteSnapshot, SharedState},
};

const EVENT_PALETTE_REBUILT: &str = "palette.rebuilt";

/// Broadcast that a new palette revision is being served.
pub fn broadcast_palette_rebuilt(state: &SharedState, snapshot: &PaletteSnapshot) {
    let payload = PaletteRebuiltEvent::new(snapshot, SystemTime::now());
    send_palette_event(state, EVENT_PALETTE_REBUILT, &payload);
}

fn send_palette_event<T: Serialize>(state: &SharedState, event: &str, payload: &T) {
    match ServerEvent::json(Some(event.to_string()), payload) {
        Ok(message) => state.palette_sse().broadcast(message),
        Err(err) => warn!(event, error = %err, "failed to serialize palette SSE payload"),
    }
}
