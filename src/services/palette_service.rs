//! Palette ownership: rebuilding on configuration changes and installing the result.

use std::time::Instant;

use tracing::{debug, info, warn};

use crate::{
    dto::palette::PaletteResponse,
    engine::{
        ColorError,
        matcher::ColorUsageCorpus,
        palette::{self, Palette, PaletteConfig},
    },
    error::ServiceError,
    services::sse_events,
    state::{AppState, PaletteSnapshot, SharedState},
};

/// Build the shared state for `config`, computing its first palette.
pub fn bootstrap(config: PaletteConfig, corpus: Option<ColorUsageCorpus>) -> SharedState {
    let palette = on_config_changed(&config);
    AppState::new(config, palette, corpus)
}

/// Rebuild the palette after the configuration changed. Always a full, deterministic rebuild.
pub fn on_config_changed(config: &PaletteConfig) -> Palette {
    let started = Instant::now();
    let palette = palette::rebuild(config);
    debug!(
        entries = palette.len(),
        base_colors = config.base_colors().len(),
        elapsed_us = started.elapsed().as_micros(),
        "palette rebuilt"
    );
    palette
}

/// Return the palette currently served.
pub async fn current_palette(state: &SharedState) -> PaletteResponse {
    PaletteResponse::from(&state.snapshot().await)
}

/// Apply `edit` to a copy of the current configuration, then rebuild and install it.
///
/// A rejected edit leaves the served configuration and palette untouched.
pub async fn apply_edit<F>(
    state: &SharedState,
    description: &str,
    edit: F,
) -> Result<PaletteSnapshot, ServiceError>
where
    F: FnOnce(&mut PaletteConfig) -> Result<(), ColorError>,
{
    let _gate = state.edit_gate().await;
    let current = state.snapshot().await;
    let mut next = PaletteConfig::clone(&current.config);
    if let Err(err) = edit(&mut next) {
        warn!(edit = description, error = %err, "configuration edit rejected");
        return Err(err.into());
    }
    Ok(install(state, description, next).await)
}

/// Replace the whole configuration.
pub async fn replace_config(state: &SharedState, config: PaletteConfig) -> PaletteSnapshot {
    let _gate = state.edit_gate().await;
    install(state, "replace configuration", config).await
}

/// Rebuild, swap the snapshot and notify subscribers. Callers hold the edit gate.
async fn install(state: &SharedState, description: &str, config: PaletteConfig) -> PaletteSnapshot {
    let palette = on_config_changed(&config);
    let snapshot = state.install(config, palette).await;
    info!(
        edit = description,
        revision = snapshot.revision,
        "palette configuration updated"
    );
    sse_events::broadcast_palette_rebuilt(state, &snapshot);
    snapshot
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> SharedState {
        bootstrap(PaletteConfig::default(), None)
    }

    #[tokio::test]
    async fn bootstrap_serves_revision_zero() {
        let state = state();
        let palette = current_palette(&state).await;
        assert_eq!(palette.revision, 0);
        assert_eq!(palette.swatches.len(), 80);
        assert_eq!(palette.anchors.len(), 2);
        assert_eq!(palette.background, "#FFFFFF");
    }

    #[tokio::test]
    async fn accepted_edit_rebuilds_and_bumps_revision() {
        let state = state();
        let snapshot = apply_edit(&state, "background", |config| {
            config.set_background("#111111")
        })
        .await
        .unwrap();
        assert_eq!(snapshot.revision, 1);
        assert_eq!(snapshot.palette.background().to_hex(), "#111111");

        let served = state.snapshot().await;
        assert_eq!(served.revision, 1);
        assert_eq!(served.config.background().to_hex(), "#111111");
    }

    #[tokio::test]
    async fn rejected_edit_keeps_previous_snapshot() {
        let state = state();
        let before = state.palette().await;
        let err = apply_edit(&state, "lightness", |config| config.set_lightness(550, 40.0))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));

        let after = state.snapshot().await;
        assert_eq!(after.revision, 0);
        assert_eq!(*after.palette, *before);
    }

    #[tokio::test]
    async fn edits_notify_palette_subscribers() {
        let state = state();
        let mut receiver = state.palette_sse().subscribe();
        apply_edit(&state, "correction", |config| {
            config.set_correct_lightness(false);
            Ok(())
        })
        .await
        .unwrap();

        let event = receiver.recv().await.unwrap();
        assert_eq!(event.event.as_deref(), Some("palette.rebuilt"));
        let payload: serde_json::Value = serde_json::from_str(&event.data).unwrap();
        assert_eq!(payload["revision"], 1);
        assert_eq!(payload["swatches"], 80);
    }

    #[tokio::test]
    async fn concurrent_edits_are_serialized() {
        let state = state();
        let mut handles = Vec::new();
        for step in [50, 100, 200, 300] {
            let state = state.clone();
            handles.push(tokio::spawn(async move {
                apply_edit(&state, "lightness", move |config| {
                    config.set_lightness(step, 60.0)
                })
                .await
                .map(|snapshot| snapshot.revision)
            }));
        }

        let mut revisions = Vec::new();
        for handle in handles {
            revisions.push(handle.await.unwrap().unwrap());
        }
        revisions.sort_unstable();
        assert_eq!(revisions, [1, 2, 3, 4]);

        let served = state.snapshot().await;
        for step in [50, 100, 200, 300] {
            assert_eq!(served.config.steps().get(step), Some(60.0));
        }
    }
}
