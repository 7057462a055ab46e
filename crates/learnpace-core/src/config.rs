//! learnpace configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::analysis::Analyzer;
use crate::scorer::{PaceScorer, PaceWeights};

/// Environment variable overriding `output_dir`.
pub const OUTPUT_DIR_ENV: &str = "LEARNPACE_OUTPUT_DIR";

/// Top-level learnpace configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearnpaceConfig {
    /// Scoring weights.
    #[serde(default)]
    pub weights: PaceWeights,
    /// Output directory for saved reports.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("./learnpace-results")
}

impl Default for LearnpaceConfig {
    fn default() -> Self {
        Self {
            weights: PaceWeights::default(),
            output_dir: default_output_dir(),
        }
    }
}

impl LearnpaceConfig {
    /// Build an analyzer from the configured weights.
    pub fn analyzer(&self) -> Result<Analyzer> {
        let scorer = PaceScorer::new(self.weights).context("invalid [weights] in config")?;
        Ok(Analyzer::new(scorer))
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `learnpace.toml` in the current directory
/// 2. `~/.config/learnpace/config.toml`
///
/// Environment variable override: `LEARNPACE_OUTPUT_DIR`.
pub fn load_config() -> Result<LearnpaceConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<LearnpaceConfig> {
    load_config_with(path, |key| std::env::var(key).ok())
}

/// Like [`load_config_from`], reading overrides through `env` instead of the
/// process environment.
pub fn load_config_with<F>(path: Option<&Path>, env: F) -> Result<LearnpaceConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("learnpace.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path(&env)
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            parse_config(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => LearnpaceConfig::default(),
    };

    if let Some(dir) = env(OUTPUT_DIR_ENV) {
        if !dir.trim().is_empty() {
            config.output_dir = PathBuf::from(dir);
        }
    }

    Ok(config)
}

/// Parse a TOML config string.
pub fn parse_config(content: &str) -> Result<LearnpaceConfig> {
    Ok(toml::from_str::<LearnpaceConfig>(content)?)
}

fn dirs_path<F: Fn(&str) -> Option<String>>(env: &F) -> Option<PathBuf> {
    env("HOME").map(|h| PathBuf::from(h).join(".config").join("learnpace"))
}
