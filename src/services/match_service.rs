//! Matching of color usage corpora against the current palette.

use tracing::info;

use crate::{
    dto::matching::MatchReportResponse,
    engine::matcher::{self, ColorUsageCorpus},
    error::ServiceError,
    state::SharedState,
};

/// Match `corpus` against the palette currently served.
pub async fn match_corpus(state: &SharedState, corpus: &ColorUsageCorpus) -> MatchReportResponse {
    let snapshot = state.snapshot().await;
    let report = matcher::match_corpus(&snapshot.palette, corpus);
    let stats = &report.stats;
    info!(
        revision = snapshot.revision,
        total = stats.total,
        matched = stats.matched,
        invalid = stats.invalid,
        perfect = stats.perfect,
        fail = stats.fail,
        "corpus matched"
    );
    MatchReportResponse::new(snapshot.revision, report)
}

/// Match the corpus loaded at startup.
pub async fn match_startup_corpus(
    state: &SharedState,
) -> Result<MatchReportResponse, ServiceError> {
    let corpus = state
        .corpus()
        .ok_or_else(|| ServiceError::NotFound("no corpus configured".into()))?;
    Ok(match_corpus(state, corpus).await)
}
