//! Loads the configuration and an optional corpus once, then writes `palette.json` and
//! `match-report.json`.

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]

mod json_io;

use anyhow::{Context, Result};
use json_io::save_json;
use shadesmith::{
    config::{self, AppConfig},
    dto::{matching::MatchReportResponse, palette::PaletteResponse},
    engine::matcher::{self, ColorUsageCorpus, QualityBucket},
    services::palette_service,
};
use std::{env, fs, path::PathBuf};
use tracing::info;

pub fn run(corpus_arg: Option<PathBuf>) -> Result<()> {
    let target_dir = env::var("CARGO_TARGET_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("target"));
    let out_dir = target_dir.join("palette-report");
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;

    let palette_config = AppConfig::load().into_palette();
    let palette = palette_service::on_config_changed(&palette_config);
    let palette_path = save_json(
        out_dir.join("palette.json"),
        &PaletteResponse::new(0, &palette, palette_config.correct_lightness()),
    )?;
    println!("Wrote {} entries to {}", palette.len(), palette_path.display());

    let Some(corpus_path) = corpus_arg.or_else(config::corpus_path) else {
        info!("no corpus given; skipping match report");
        return Ok(());
    };
    let corpus = ColorUsageCorpus::from_path(&corpus_path)
        .with_context(|| format!("loading corpus {}", corpus_path.display()))?;
    let report = matcher::match_corpus(&palette, &corpus);

    println!("Matched {} of {} corpus colors", report.stats.matched, report.stats.total);
    for bucket in QualityBucket::ALL {
        println!("  {:<8} {}", format!("{bucket:?}").to_lowercase(), report.stats.count(bucket));
    }
    println!("  invalid  {}", report.stats.invalid);

    let report_path = save_json(
        out_dir.join("match-report.json"),
        &MatchReportResponse::new(0, report),
    )?;
    println!("Wrote match report to {}", report_path.display());

    Ok(())
}
