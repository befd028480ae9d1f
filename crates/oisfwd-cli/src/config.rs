//! TOML job configuration.
//!
//! ```toml
//! ticker_config = "config/tickers.csv"
//! update_time_config = "config/update_times.csv"
//! market_data = "data/market.csv"
//! output_dir = "out"
//!
//! [bootstrap]
//! tolerance = 1e-12
//! max_iterations = 100
//!
//! [extraction]
//! horizon = "3Y"
//! step_days = 1
//! ```
//!
//! Relative paths are resolved against the directory holding the file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use oisfwd_curves::{BootstrapConfig, ExtractionConfig};
use oisfwd_engine::PipelineConfig;

/// Inputs, output location and numerics for `oisfwd run`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobSettings {
    /// CSV with header `Ticker,Currency,Term,Unit`
    #[serde(default = "default_ticker_config")]
    pub ticker_config: PathBuf,
    /// CSV with header `Currency,FirstUpdate,LastUpdate`
    #[serde(default = "default_update_time_config")]
    pub update_time_config: PathBuf,
    /// CSV with header `Date,Ticker,Value`
    #[serde(default = "default_market_data")]
    pub market_data: PathBuf,
    /// Directory for `curves.csv` and the dated copies
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Solver settings
    #[serde(default)]
    pub bootstrap: BootstrapConfig,
    /// Forward series settings
    #[serde(default)]
    pub extraction: ExtractionConfig,
}

fn default_ticker_config() -> PathBuf {
    PathBuf::from("ticker_config.csv")
}

fn default_update_time_config() -> PathBuf {
    PathBuf::from("update_time_config.csv")
}

fn default_market_data() -> PathBuf {
    PathBuf::from("market_data.csv")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("output")
}

impl Default for JobSettings {
    fn default() -> Self {
        Self {
            ticker_config: default_ticker_config(),
            update_time_config: default_update_time_config(),
            market_data: default_market_data(),
            output_dir: default_output_dir(),
            bootstrap: BootstrapConfig::default(),
            extraction: ExtractionConfig::default(),
        }
    }
}

impl JobSettings {
    /// Parses settings from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("invalid job configuration")
    }

    /// Reads a settings file and resolves its relative paths.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read job configuration {}", path.display()))?;
        let settings = Self::from_toml(&text)
            .with_context(|| format!("in {}", path.display()))?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        Ok(settings.relative_to(base))
    }

    /// Resolves relative paths against `base`.
    #[must_use]
    pub fn relative_to(mut self, base: &Path) -> Self {
        for path in [
            &mut self.ticker_config,
            &mut self.update_time_config,
            &mut self.market_data,
            &mut self.output_dir,
        ] {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
        self
    }

    /// Bootstrap and extraction settings for the pipeline.
    #[must_use]
    pub fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig {
            bootstrap: self.bootstrap,
            extraction: self.extraction,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oisfwd_core::Tenor;

    #[test]
    fn test_defaults_from_empty_file() {
        let settings = JobSettings::from_toml("").unwrap();
        assert_eq!(settings, JobSettings::default());
        assert_eq!(settings.extraction.horizon, Tenor::years(3));
        assert_eq!(settings.bootstrap.max_iterations, 100);
    }

    #[test]
    fn test_partial_sections() {
        let settings = JobSettings::from_toml(
            r#"
            output_dir = "/var/oisfwd"

            [bootstrap]
            max_iterations = 50

            [extraction]
            horizon = "2Y"
            "#,
        )
        .unwrap();

        assert_eq!(settings.output_dir, PathBuf::from("/var/oisfwd"));
        assert_eq!(settings.ticker_config, PathBuf::from("ticker_config.csv"));
        assert_eq!(settings.bootstrap.max_iterations, 50);
        assert!((settings.bootstrap.tolerance - 1e-12).abs() < 1e-18);
        assert_eq!(settings.extraction.horizon, Tenor::years(2));
        assert_eq!(settings.extraction.step_days, 1);
    }

    #[test]
    fn test_bad_horizon_rejected() {
        assert!(JobSettings::from_toml("[extraction]\nhorizon = \"3X\"").is_err());
    }

    #[test]
    fn test_relative_paths_resolved() {
        let settings = JobSettings::from_toml("output_dir = \"/abs/out\"")
            .unwrap()
            .relative_to(Path::new("/etc/oisfwd"));

        assert_eq!(settings.ticker_config, PathBuf::from("/etc/oisfwd/ticker_config.csv"));
        assert_eq!(settings.output_dir, PathBuf::from("/abs/out"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = JobSettings::load(Path::new("/nonexistent/job.toml")).unwrap_err();
        assert!(err.to_string().contains("cannot read job configuration"));
    }
}
