use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use urlbatch_core::Settings;
use urlbatch_engine::AtomicFileWriter;
use urlbatch_logging::{urlbatch_debug, urlbatch_info, urlbatch_warn};

pub const SETTINGS_FILENAME: &str = ".urlbatch_settings.ron";

/// Flat key-value settings kept in a RON file.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self {
            path: path.unwrap_or_else(|| PathBuf::from(SETTINGS_FILENAME)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads stored settings; a missing or broken file yields the defaults.
    pub fn load(&self) -> Settings {
        let content = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                urlbatch_debug!("No settings at {:?}, using defaults", self.path);
                return Settings::default();
            }
            Err(err) => {
                urlbatch_warn!("Failed to read settings from {:?}: {}", self.path, err);
                return Settings::default();
            }
        };

        match ron::from_str(&content) {
            Ok(settings) => settings,
            Err(err) => {
                urlbatch_warn!("Failed to parse settings from {:?}: {}", self.path, err);
                Settings::default()
            }
        }
    }

    pub fn save(&self, settings: &Settings) -> anyhow::Result<()> {
        let pretty = ron::ser::PrettyConfig::new();
        let content =
            ron::ser::to_string_pretty(settings, pretty).context("failed to serialize settings")?;
        AtomicFileWriter::new(self.path.clone())
            .write(&content)
            .with_context(|| format!("failed to write settings to {}", self.path.display()))?;
        urlbatch_info!("Saved settings to {:?}", self.path);
        Ok(())
    }

    /// Stores `file` as the last list used, leaving every other stored value alone.
    pub fn remember_last_file(&self, file: &Path) -> anyhow::Result<()> {
        let mut settings = self.load();
        if settings.last_file.as_deref() == Some(file) {
            return Ok(());
        }
        settings.last_file = Some(file.to_path_buf());
        self.save(&settings)
    }
}
