use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::engine::{
    matcher::{ColorUsageCorpus, MatchReport, MatchResult, MatchStats, QualityBucket},
    round_to_tenth,
};

/// Uploaded corpus: CSS color literal → usage count, in insertion order.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = Object, example = json!({ "#C01C21": 10, "rgba(0, 125, 204, 1)": 3 }))]
pub struct MatchRequest(pub IndexMap<String, u64>);

impl From<MatchRequest> for ColorUsageCorpus {
    fn from(request: MatchRequest) -> Self {
        ColorUsageCorpus::new(request.0)
    }
}

/// Match report, as served by `/match` and written to `match-report.json`.
#[derive(Debug, Serialize, ToSchema)]
pub struct MatchReportResponse {
    /// Palette revision the corpus was matched against.
    pub revision: u64,
    pub results: Vec<MatchRow>,
    /// Literals that failed to parse, in corpus order.
    pub skipped: Vec<String>,
    pub stats: MatchStats,
}

#[derive(Clone, Debug, Serialize, ToSchema)]
/// Nearest swatch of one corpus literal.
pub struct MatchRow {
    /// Literal as found in the corpus.
    pub source: String,
    /// Literal normalized to uppercase hex.
    pub source_hex: String,
    pub usage_count: u64,
    pub closest: ClosestSwatch,
    /// Lab distance to the closest swatch.
    pub distance: f64,
    /// `distance` rounded to one decimal for display.
    pub distance_label: f64,
    pub bucket: QualityBucket,
}

#[derive(Clone, Debug, Serialize, ToSchema)]
/// Swatch or anchor a corpus color was matched to.
pub struct ClosestSwatch {
    pub base_color: String,
    pub step: u32,
    pub hex: String,
}

impl From<MatchResult> for MatchRow {
    fn from(result: MatchResult) -> Self {
        Self {
            source_hex: result.source_color.to_hex(),
            source: result.source,
            usage_count: result.usage_count,
            closest: ClosestSwatch {
                hex: result.closest.color.to_hex(),
                base_color: result.closest.base_color,
                step: result.closest.step,
            },
            distance_label: round_to_tenth(result.distance),
            distance: result.distance,
            bucket: result.bucket,
        }
    }
}

impl MatchReportResponse {
    /// Project an engine report computed against `revision`.
    pub fn new(revision: u64, report: MatchReport) -> Self {
        Self {
            revision,
            results: report.results.into_iter().map(MatchRow::from).collect(),
            skipped: report.skipped,
            stats: report.stats,
        }
    }
}
