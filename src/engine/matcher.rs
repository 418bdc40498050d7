//! Nearest-swatch matching of a color usage corpus.

use std::{fs, io, path::Path};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;
use utoipa::ToSchema;

use super::{
    palette::{Palette, PaletteEntry},
    space::Color,
};

/// Below this distance a match counts as perfect. Not zero, so colors written in another
/// notation (e.g. `hsla()`) and snapped back to 8-bit still count.
pub const PERFECT_BELOW: f64 = 0.05;
/// Below this distance a match counts as great.
pub const GREAT_BELOW: f64 = 1.0;
/// Below this distance a match counts as good.
pub const GOOD_BELOW: f64 = 3.5;
/// Above this distance a match counts as a failure.
pub const FAIL_ABOVE: f64 = 20.0;

/// How close the nearest swatch is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum QualityBucket {
    /// `< 0.05`
    Perfect,
    /// `< 1`
    Great,
    /// `< 3.5`
    Good,
    /// Anything in `[3.5, 20]`.
    Ok,
    /// `> 20`
    Fail,
}

impl QualityBucket {
    /// All buckets, best first.
    pub const ALL: [Self; 5] = [Self::Perfect, Self::Great, Self::Good, Self::Ok, Self::Fail];

    /// Classify a Lab distance.
    #[must_use]
    pub fn classify(distance: f64) -> Self {
        if distance < PERFECT_BELOW {
            Self::Perfect
        } else if distance < GREAT_BELOW {
            Self::Great
        } else if distance < GOOD_BELOW {
            Self::Good
        } else if distance > FAIL_ABOVE {
            Self::Fail
        } else {
            Self::Ok
        }
    }
}

/// Failure to load a corpus file.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// The file could not be read.
    #[error("failed to read corpus: {0}")]
    Io(#[from] io::Error),
    /// The file is not a JSON object of literal → count.
    #[error("failed to parse corpus: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Corpus of previously used colors: literal → usage count, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorUsageCorpus {
    entries: IndexMap<String, u64>,
}

impl ColorUsageCorpus {
    /// Wrap an ordered literal → count map.
    #[must_use]
    pub const fn new(entries: IndexMap<String, u64>) -> Self {
        Self { entries }
    }

    /// Read a corpus from a JSON object file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CorpusError> {
        let contents = fs::read_to_string(path.as_ref())?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Number of literals, including invalid ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the corpus has no literal.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Literals and counts in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries
            .iter()
            .map(|(literal, count)| (literal.as_str(), *count))
    }
}

impl FromIterator<(String, u64)> for ColorUsageCorpus {
    fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// The palette entry a corpus color was matched to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwatchRef {
    /// Base color or anchor name.
    pub base_color: String,
    /// Lightness step.
    pub step: u32,
    /// Swatch color.
    pub color: Color,
}

impl From<&PaletteEntry> for SwatchRef {
    fn from(entry: &PaletteEntry) -> Self {
        Self {
            base_color: entry.base_color.clone(),
            step: entry.step,
            color: entry.color,
        }
    }
}

/// Match of one valid corpus literal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    /// Literal exactly as it appears in the corpus.
    pub source: String,
    /// Parsed corpus color.
    pub source_color: Color,
    /// Usage count from the corpus.
    pub usage_count: u64,
    /// Nearest palette entry.
    pub closest: SwatchRef,
    /// Lab distance to `closest`.
    pub distance: f64,
    /// Classification of `distance`.
    pub bucket: QualityBucket,
}

/// Aggregate counts of a match run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct MatchStats {
    /// Matches below the perfect threshold.
    pub perfect: usize,
    /// Matches below the great threshold.
    pub great: usize,
    /// Matches below the good threshold.
    pub good: usize,
    /// Matches between the good and fail thresholds.
    pub ok: usize,
    /// Matches above the fail threshold.
    pub fail: usize,
    /// Valid corpus literals; the bucket counts sum to this.
    pub matched: usize,
    /// Literals skipped because they are not colors.
    pub invalid: usize,
    /// Every corpus literal, valid or not.
    pub total: usize,
}

impl MatchStats {
    fn record(&mut self, bucket: QualityBucket) {
        let slot = match bucket {
            QualityBucket::Perfect => &mut self.perfect,
            QualityBucket::Great => &mut self.great,
            QualityBucket::Good => &mut self.good,
            QualityBucket::Ok => &mut self.ok,
            QualityBucket::Fail => &mut self.fail,
        };
        *slot += 1;
        self.matched += 1;
    }

    /// Count for one bucket.
    #[must_use]
    pub const fn count(&self, bucket: QualityBucket) -> usize {
        match bucket {
            QualityBucket::Perfect => self.perfect,
            QualityBucket::Great => self.great,
            QualityBucket::Good => self.good,
            QualityBucket::Ok => self.ok,
            QualityBucket::Fail => self.fail,
        }
    }
}

/// Result rows in corpus order plus the aggregate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchReport {
    /// One row per valid literal.
    pub results: Vec<MatchResult>,
    /// Literals that failed to parse, in corpus order.
    pub skipped: Vec<String>,
    /// Aggregate counts.
    pub stats: MatchStats,
}

/// Nearest palette entry to `color`; ties keep the first entry in palette order.
#[must_use]
pub fn closest<'a>(palette: &'a Palette, color: &Color) -> (&'a PaletteEntry, f64) {
    let white = &palette.anchors()[0];
    let mut best: Option<(&PaletteEntry, f64)> = None;
    for entry in palette.entries() {
        let distance = color.distance(&entry.color);
        if best.is_none_or(|(_, nearest)| distance < nearest) {
            best = Some((entry, distance));
        }
    }
    // Anchors guarantee at least two candidates.
    best.unwrap_or((white, f64::INFINITY))
}

/// Match every corpus literal against `palette`.
#[must_use]
pub fn match_corpus(palette: &Palette, corpus: &ColorUsageCorpus) -> MatchReport {
    let mut stats = MatchStats {
        total: corpus.len(),
        ..MatchStats::default()
    };
    let mut results = Vec::with_capacity(corpus.len());
    let mut skipped = Vec::new();

    for (literal, usage_count) in corpus.iter() {
        let color = match Color::parse(literal) {
            Ok(color) => color,
            Err(err) => {
                warn!(literal, error = %err, "skipping invalid corpus color");
                stats.invalid += 1;
                skipped.push(literal.to_string());
                continue;
            }
        };

        let (entry, distance) = closest(palette, &color);
        let bucket = QualityBucket::classify(distance);
        stats.record(bucket);
        results.push(MatchResult {
            source: literal.to_string(),
            source_color: color,
            usage_count,
            closest: entry.into(),
            distance,
            bucket,
        });
    }

    MatchReport {
        results,
        skipped,
        stats,
    }
}
