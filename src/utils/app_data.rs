use crate::query::cover::CoverStrategy;
use crate::query::parser::{MissingGramPolicy, QueryOptions};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "gramrank";
const CONFIG_FILE: &str = "config.json";

/// Search configuration stored in the user config directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Gram width `m`
    #[serde(default = "default_gram_len")]
    pub gram_len: usize,

    /// Number of documents to report
    #[serde(default = "default_top_k")]
    pub top_k: usize,

    #[serde(default)]
    pub strategy: CoverStrategy,

    #[serde(default)]
    pub missing_grams: MissingGramPolicy,

    /// Canonicalize query terms like document text
    #[serde(default)]
    pub fold_query: bool,
}

fn default_gram_len() -> usize {
    3
}

fn default_top_k() -> usize {
    10
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            gram_len: default_gram_len(),
            top_k: default_top_k(),
            strategy: CoverStrategy::default(),
            missing_grams: MissingGramPolicy::default(),
            fold_query: false,
        }
    }
}

impl SearchConfig {
    /// Load from the default location, or return defaults if not found
    pub fn load() -> Result<Self> {
        match get_config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load from an explicit file, which must exist
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: SearchConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Save to an explicit file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;
        Ok(())
    }

    /// Query-time subset of the configuration
    pub fn query_options(&self) -> QueryOptions {
        QueryOptions {
            strategy: self.strategy,
            missing_grams: self.missing_grams,
            fold_query: self.fold_query,
        }
    }
}

/// Path of the default config file, if the platform has a config directory
pub fn get_config_path() -> Option<PathBuf> {
    let base = if cfg!(target_os = "macos") {
        dirs::home_dir().map(|h| h.join("Library").join("Application Support"))
    } else {
        // Linux/Unix: XDG_CONFIG_HOME or ~/.config; Windows: roaming AppData
        dirs::config_dir()
    };

    base.map(|dir| dir.join(APP_NAME).join(CONFIG_FILE))
}
