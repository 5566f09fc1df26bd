use super::FundSource;
use crate::core::FundRecord;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Catalog stored as a JSON array of fund records.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl FundSource for JsonFileSource {
    fn load(&self) -> Result<Vec<FundRecord>> {
        debug!("Reading fund catalog from {}", self.path.display());
        let file = File::open(&self.path)
            .with_context(|| format!("Failed to open fund catalog: {}", self.path.display()))?;
        let funds: Vec<FundRecord> = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse fund catalog: {}", self.path.display()))?;
        Ok(funds)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
