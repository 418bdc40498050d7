mod sse;

use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard, RwLock};

use crate::engine::{
    matcher::ColorUsageCorpus,
    palette::{Palette, PaletteConfig},
};

pub use self::sse::SseHub;

pub type SharedState = Arc<AppState>;

/// Capacity of the palette SSE broadcast channel.
const PALETTE_SSE_CAPACITY: usize = 16;

#[derive(Debug, Clone)]
/// Consistent view of a configuration and the palette rebuilt from it.
pub struct PaletteSnapshot {
    /// Incremented on every accepted edit, starting at 0.
    pub revision: u64,
    pub config: Arc<PaletteConfig>,
    pub palette: Arc<Palette>,
}

/// Central application state: the current palette snapshot, the startup corpus and the SSE hub.
pub struct AppState {
    snapshot: RwLock<PaletteSnapshot>,
    corpus: Option<ColorUsageCorpus>,
    palette_sse: SseHub,
    edit_gate: Mutex<()>,
}

impl AppState {
    /// Construct a new [`AppState`] wrapped in an [`Arc`] so it can be cloned cheaply.
    ///
    /// `palette` must have been rebuilt from `config`.
    pub fn new(
        config: PaletteConfig,
        palette: Palette,
        corpus: Option<ColorUsageCorpus>,
    ) -> SharedState {
        Arc::new(Self {
            snapshot: RwLock::new(PaletteSnapshot {
                revision: 0,
                config: Arc::new(config),
                palette: Arc::new(palette),
            }),
            corpus,
            palette_sse: SseHub::new(PALETTE_SSE_CAPACITY),
            edit_gate: Mutex::new(()),
        })
    }

    /// Clone the current snapshot; cheap since both halves are shared.
    pub async fn snapshot(&self) -> PaletteSnapshot {
        self.snapshot.read().await.clone()
    }

    /// Current palette.
    pub async fn palette(&self) -> Arc<Palette> {
        self.snapshot.read().await.palette.clone()
    }

    /// Serialize configuration edits; hold the guard from reading the config until
    /// [`AppState::install`] returns.
    pub async fn edit_gate(&self) -> MutexGuard<'_, ()> {
        self.edit_gate.lock().await
    }

    /// Swap in a new configuration and its palette, bumping the revision.
    pub async fn install(&self, config: PaletteConfig, palette: Palette) -> PaletteSnapshot {
        let mut guard = self.snapshot.write().await;
        let revision = guard.revision + 1;
        *guard = PaletteSnapshot {
            revision,
            config: Arc::new(config),
            palette: Arc::new(palette),
        };
        guard.clone()
    }

    /// Corpus loaded at startup, if one was configured.
    pub fn corpus(&self) -> Option<&ColorUsageCorpus> {
        self.corpus.as_ref()
    }

    /// Hub fanning out palette events to SSE subscribers.
    pub fn palette_sse(&self) -> &SseHub {
        &self.palette_sse
    }
}
