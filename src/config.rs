//! Application-level configuration loading, including the base colors and lightness steps.

use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use indexmap::IndexMap;
use serde::Deserialize;
use tracing::{info, warn};

use crate::engine::{
    Color,
    palette::{BaseColor, LightnessStepTable, PaletteConfig},
    scale::InterpolationModel,
};

/// Default location on disk where the palette configuration is read from.
const DEFAULT_CONFIG_PATH: &str = "config/palette.json";
/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
const CONFIG_PATH_ENV: &str = "SHADESMITH_CONFIG_PATH";
/// Environment variable naming an optional color usage corpus loaded at startup.
const CORPUS_PATH_ENV: &str = "SHADESMITH_CORPUS_PATH";

#[derive(Debug, Clone, Default)]
/// Startup configuration: the initial palette configuration.
pub struct AppConfig {
    palette: PaletteConfig,
}

impl AppConfig {
    /// Load the configuration from the resolved path, falling back to built-in defaults.
    pub fn load() -> Self {
        Self::load_from(&resolve_config_path())
    }

    /// Load the configuration from `path`, falling back to built-in defaults.
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str::<RawConfig>(&contents) {
                Ok(raw) => {
                    let app_config: Self = raw.into();
                    info!(
                        path = %path.display(),
                        base_colors = app_config.palette.base_colors().len(),
                        steps = app_config.palette.steps().len(),
                        "loaded palette configuration"
                    );
                    app_config
                }
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "failed to parse config; falling back to defaults"
                    );
                    Self::default()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    path = %path.display(),
                    "config file not found; using built-in defaults"
                );
                Self::default()
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to read config; falling back to defaults"
                );
                Self::default()
            }
        }
    }

    /// Palette configuration to start from.
    pub fn palette(&self) -> &PaletteConfig {
        &self.palette
    }

    /// Consume the configuration, keeping the palette part.
    pub fn into_palette(self) -> PaletteConfig {
        self.palette
    }
}

#[derive(Debug, Deserialize)]
/// JSON representation of the configuration file located at [`DEFAULT_CONFIG_PATH`].
///
/// Every section is optional; missing ones use the built-in defaults.
struct RawConfig {
    #[serde(default)]
    base_colors: Option<Vec<RawBaseColor>>,
    #[serde(default)]
    lightness_steps: Option<IndexMap<u32, f64>>,
    #[serde(default)]
    background: Option<String>,
    #[serde(default)]
    correct_lightness: Option<bool>,
}

#[derive(Debug, Deserialize)]
/// JSON representation of a single base color inside the configuration file.
struct RawBaseColor {
    name: String,
    color: String,
    #[serde(default)]
    model: InterpolationModel,
    #[serde(default)]
    hue_correction: f64,
}

impl From<RawConfig> for AppConfig {
    fn from(value: RawConfig) -> Self {
        let defaults = PaletteConfig::default();
        let correct_lightness = value
            .correct_lightness
            .unwrap_or_else(|| defaults.correct_lightness());

        let base_colors = match value.base_colors {
            Some(raw) => load_base_colors(raw, correct_lightness),
            None => defaults.base_colors().to_vec(),
        };

        let steps = match value.lightness_steps {
            Some(raw) => LightnessStepTable::new(raw).unwrap_or_else(|err| {
                warn!(error = %err, "invalid lightness steps; using built-in table");
                defaults.steps().clone()
            }),
            None => defaults.steps().clone(),
        };

        let background = match value.background {
            Some(literal) => Color::parse(&literal).unwrap_or_else(|err| {
                warn!(error = %err, "invalid background; using white");
                defaults.background()
            }),
            None => defaults.background(),
        };

        // Names were de-duplicated while loading, so this only fails on programming errors.
        let palette = PaletteConfig::new(base_colors, steps, background, correct_lightness)
            .unwrap_or_else(|err| {
                warn!(error = %err, "inconsistent palette configuration; using defaults");
                defaults
            });
        Self { palette }
    }
}

/// Convert file entries, skipping invalid or duplicate ones so the rest still loads.
fn load_base_colors(raw: Vec<RawBaseColor>, correct_lightness: bool) -> Vec<BaseColor> {
    let mut base_colors: Vec<BaseColor> = Vec::with_capacity(raw.len());
    for entry in raw {
        if base_colors.iter().any(|base| base.name() == entry.name) {
            warn!(name = %entry.name, "duplicate base color in config; skipping");
            continue;
        }

        let built = Color::parse(&entry.color).and_then(|seed| {
            BaseColor::new(
                entry.name.clone(),
                seed,
                entry.model,
                entry.hue_correction,
                correct_lightness,
            )
        });
        match built {
            Ok(base) => base_colors.push(base),
            Err(err) => warn!(name = %entry.name, error = %err, "invalid base color in config; skipping"),
        }
    }
    base_colors
}

/// Resolve the configuration path taking the environment override into account.
fn resolve_config_path() -> PathBuf {
    env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

/// Corpus file requested through the environment, if any.
pub fn corpus_path() -> Option<PathBuf> {
    env::var_os(CORPUS_PATH_ENV)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
}
