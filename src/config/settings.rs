//! User settings
//!
//! A small JSON file beside the data directory. Only display preferences
//! live here; nothing in it changes the ledger file format.

use serde::{Deserialize, Serialize};

use super::paths::TallyPaths;
use crate::error::TallyError;

/// Display preferences, persisted as `config.json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Bumped when the settings layout changes
    #[serde(default = "default_version")]
    pub schema_version: u32,

    /// Symbol printed in front of amounts
    #[serde(default = "default_symbol")]
    pub currency_symbol: String,
}

fn default_version() -> u32 {
    1
}

fn default_symbol() -> String {
    "$".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_version(),
            currency_symbol: default_symbol(),
        }
    }
}

impl Settings {
    /// Read the settings file, falling back to defaults when it is missing
    pub fn load_or_create(paths: &TallyPaths) -> Result<Self, TallyError> {
        let path = paths.settings_file();
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)
            .map_err(|e| TallyError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
        serde_json::from_str(&contents)
            .map_err(|e| TallyError::Config(format!("Failed to parse {}: {}", path.display(), e)))
    }

    /// Write the settings file, creating the directories first
    pub fn save(&self, paths: &TallyPaths) -> Result<(), TallyError> {
        paths.ensure_directories()?;

        let path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| TallyError::Config(format!("Failed to serialize settings: {}", e)))?;
        std::fs::write(&path, contents)
            .map_err(|e| TallyError::Io(format!("Failed to write {}: {}", path.display(), e)))
    }
}
