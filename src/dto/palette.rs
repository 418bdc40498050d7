use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    engine::{
        LchCoords,
        palette::{Palette, PaletteEntry},
    },
    state::PaletteSnapshot,
};

/// Generated palette, as served by `GET /palette` and written to `palette.json`.
#[derive(Debug, Serialize, ToSchema)]
pub struct PaletteResponse {
    pub revision: u64,
    /// Background every contrast was computed against.
    pub background: String,
    pub correct_lightness: bool,
    /// Swatches grouped by base color, then in step table order.
    pub swatches: Vec<SwatchSummary>,
    /// White (step 0) and black (step 1000).
    pub anchors: Vec<SwatchSummary>,
}

#[derive(Clone, Debug, Serialize, ToSchema)]
/// Projection of one palette entry exposed to REST/SSE clients.
pub struct SwatchSummary {
    pub base_color: String,
    pub step: u32,
    /// Uppercase `#RRGGBB`.
    pub hex: String,
    pub lch: LchCoords,
    pub contrast_ratio: f64,
    pub perceptual_contrast: f64,
    pub accessible: bool,
}

impl From<&PaletteEntry> for SwatchSummary {
    fn from(entry: &PaletteEntry) -> Self {
        Self {
            base_color: entry.base_color.clone(),
            step: entry.step,
            hex: entry.color.to_hex(),
            lch: entry.lch,
            contrast_ratio: entry.contrast_ratio,
            perceptual_contrast: entry.perceptual_contrast,
            accessible: entry.accessible,
        }
    }
}

impl PaletteResponse {
    /// Project `palette` at `revision`.
    pub fn new(revision: u64, palette: &Palette, correct_lightness: bool) -> Self {
        Self {
            revision,
            background: palette.background().to_hex(),
            correct_lightness,
            swatches: palette.swatches().iter().map(SwatchSummary::from).collect(),
            anchors: palette.anchors().iter().map(SwatchSummary::from).collect(),
        }
    }
}

impl From<&PaletteSnapshot> for PaletteResponse {
    fn from(snapshot: &PaletteSnapshot) -> Self {
        Self::new(
            snapshot.revision,
            &snapshot.palette,
            snapshot.config.correct_lightness(),
        )
    }
}
