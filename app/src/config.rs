//! Application configuration
//!
//! Resolution order: command-line flags, then `VOLTUP_*` environment
//! variables (a `.env` file is loaded first), then defaults.

use std::path::PathBuf;
use voltup_core::Result;
use voltup_networking::{ApiConfig, Environment};

/// SQLite file holding the persisted session
pub const DATABASE_FILE: &str = "voltup.db";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub api: ApiConfig,
}

impl AppConfig {
    /// `data_dir` and `environment` come from the command line (clap also
    /// fills them from `VOLTUP_DATA_DIR` / `VOLTUP_ENV`)
    pub fn resolve(data_dir: Option<PathBuf>, environment: Option<&str>) -> Result<Self> {
        let environment = environment
            .filter(|e| !e.trim().is_empty())
            .map(str::parse::<Environment>)
            .transpose()?;

        Ok(Self {
            data_dir: data_dir.unwrap_or_else(default_data_dir),
            api: ApiConfig::from_env_with(environment)?,
        })
    }

    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join(DATABASE_FILE)
    }
}

/// Platform data directory, e.g. `~/.local/share/VoltUp`
pub fn default_data_dir() -> PathBuf {
    dirs_next::data_local_dir()
        .map(|p| p.join("VoltUp"))
        .unwrap_or_else(|| PathBuf::from("."))
}
