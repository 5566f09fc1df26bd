use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

const DEFAULT_FUND_URL_BASE: &str = "https://www.fundswap.com.tw/trade/funds/";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DisplayConfig {
    /// Rows shown for a search before the list is cut.
    pub max_results: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig { max_results: 20 }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RankingConfig {
    pub default_limit: usize,
    pub default_metric: String,
}

impl Default for RankingConfig {
    fn default() -> Self {
        RankingConfig {
            default_limit: 10,
            default_metric: "1y".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ComplementConfig {
    /// Funds listed under each suggestion, best 1-year return first.
    pub picks_per_suggestion: usize,
}

impl Default for ComplementConfig {
    fn default() -> Self {
        ComplementConfig {
            picks_per_suggestion: 3,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Fund catalog JSON. Defaults to `funds.json` in the data directory.
    pub data_path: Option<String>,
    #[serde(default = "default_fund_url_base")]
    pub fund_url_base: String,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub ranking: RankingConfig,
    #[serde(default)]
    pub complement: ComplementConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            data_path: None,
            fund_url_base: default_fund_url_base(),
            display: DisplayConfig::default(),
            ranking: RankingConfig::default(),
            complement: ComplementConfig::default(),
        }
    }
}

fn default_fund_url_base() -> String {
    DEFAULT_FUND_URL_BASE.to_string()
}

impl AppConfig {
    /// Loads the default config file, falling back to defaults when there is none.
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!(
                "No config at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("tw", "fundlens", "fundlens")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn dataset_path(&self) -> Result<PathBuf> {
        if let Some(custom_path) = &self.data_path {
            return Ok(PathBuf::from(custom_path));
        }
        let proj_dirs = ProjectDirs::from("tw", "fundlens", "fundlens")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.data_dir().join("funds.json"))
    }

    pub fn fund_url(&self, id: &str) -> String {
        format!("{}/{}/", self.fund_url_base.trim_end_matches('/'), id)
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }
}
