//! Where tally keeps its files
//!
//! Everything lives under one base directory: the settings file at the top
//! and the ledger CSV under `data/`. The base resolves from the
//! `TALLY_CLI_DATA_DIR` environment variable when set, otherwise from the
//! platform config location (XDG on Unix, `%APPDATA%` on Windows).

use std::path::{Path, PathBuf};

use crate::error::TallyError;

/// Resolved locations of the settings and ledger files
#[derive(Debug, Clone)]
pub struct TallyPaths {
    base_dir: PathBuf,
}

impl TallyPaths {
    /// Resolve the base directory from the environment
    ///
    /// # Errors
    ///
    /// Fails when no override is set and the platform config location
    /// cannot be determined.
    pub fn new() -> Result<Self, TallyError> {
        let base_dir = match std::env::var_os("TALLY_CLI_DATA_DIR") {
            Some(dir) => PathBuf::from(dir),
            None => default_base_dir()?,
        };
        Ok(Self { base_dir })
    }

    /// Point at an explicit base directory, bypassing the environment
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Directory holding the ledger file
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    pub fn ledger_file(&self) -> PathBuf {
        self.data_dir().join("ledger.csv")
    }

    /// Create the base and data directories if they are missing
    pub fn ensure_directories(&self) -> Result<(), TallyError> {
        let data_dir = self.data_dir();
        std::fs::create_dir_all(&data_dir)
            .map_err(|e| TallyError::Io(format!("Failed to create {}: {}", data_dir.display(), e)))
    }
}

#[cfg(not(windows))]
fn default_base_dir() -> Result<PathBuf, TallyError> {
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(xdg).join("tally-cli"));
    }
    let home = std::env::var_os("HOME")
        .ok_or_else(|| TallyError::Config("Could not determine home directory".into()))?;
    Ok(PathBuf::from(home).join(".config").join("tally-cli"))
}

#[cfg(windows)]
fn default_base_dir() -> Result<PathBuf, TallyError> {
    let appdata = std::env::var_os("APPDATA")
        .ok_or_else(|| TallyError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("tally-cli"))
}
