use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{DispatchConfig, SanitizePolicy};

pub const DEFAULT_BATCH_WARNING: u32 = 10;
pub const DEFAULT_DELAY_MS: u64 = 500;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown setting {0:?}")]
    UnknownKey(String),
    #[error("invalid value {value:?} for {key}: expected {expected}")]
    InvalidValue {
        key: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Keys accepted by [`Settings::get`] and [`Settings::set`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKey {
    BatchWarning,
    Delay,
    IgnoreDashes,
    Browser,
    LastFile,
}

impl SettingKey {
    pub const ALL: [SettingKey; 5] = [
        SettingKey::BatchWarning,
        SettingKey::Delay,
        SettingKey::IgnoreDashes,
        SettingKey::Browser,
        SettingKey::LastFile,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SettingKey::BatchWarning => "batch_warning",
            SettingKey::Delay => "delay",
            SettingKey::IgnoreDashes => "ignore_dashes",
            SettingKey::Browser => "browser",
            SettingKey::LastFile => "last_file",
        }
    }
}

impl FromStr for SettingKey {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SettingKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownKey(s.to_string()))
    }
}

/// User preferences. Loaded once at startup and passed explicitly to whoever needs them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub batch_warning: u32,
    pub delay_ms: u64,
    pub ignore_dashes: bool,
    /// Browser executable; the platform opener is used when unset.
    pub browser: Option<String>,
    pub last_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            batch_warning: DEFAULT_BATCH_WARNING,
            delay_ms: DEFAULT_DELAY_MS,
            ignore_dashes: true,
            browser: None,
            last_file: None,
        }
    }
}

impl Settings {
    pub fn dispatch_config(&self) -> DispatchConfig {
        DispatchConfig {
            batch_warning_threshold: self.batch_warning,
            inter_open_delay_ms: self.delay_ms,
        }
    }

    pub fn sanitize_policy(&self) -> SanitizePolicy {
        SanitizePolicy {
            ignore_dashes: self.ignore_dashes,
        }
    }

    /// String form of a setting; unset optional values read as the empty string.
    pub fn get(&self, key: &str) -> Result<String, ConfigError> {
        let value = match key.parse::<SettingKey>()? {
            SettingKey::BatchWarning => self.batch_warning.to_string(),
            SettingKey::Delay => self.delay_ms.to_string(),
            SettingKey::IgnoreDashes => self.ignore_dashes.to_string(),
            SettingKey::Browser => self.browser.clone().unwrap_or_default(),
            SettingKey::LastFile => self
                .last_file
                .as_ref()
                .map(|path| path.display().to_string())
                .unwrap_or_default(),
        };
        Ok(value)
    }

    /// Sets a setting from its string form. An empty value clears optional settings.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let key = key.parse::<SettingKey>()?;
        let value = value.trim();
        match key {
            SettingKey::BatchWarning => {
                self.batch_warning = parse_number(key, value, "a non-negative integer")?;
            }
            SettingKey::Delay => {
                self.delay_ms = parse_number(key, value, "milliseconds as a non-negative integer")?;
            }
            SettingKey::IgnoreDashes => self.ignore_dashes = parse_bool(key, value)?,
            SettingKey::Browser => {
                self.browser = (!value.is_empty()).then(|| value.to_string());
            }
            SettingKey::LastFile => {
                self.last_file = (!value.is_empty()).then(|| PathBuf::from(value));
            }
        }
        Ok(())
    }

    /// `(key, value)` pairs in a stable order, for listing.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        SettingKey::ALL
            .into_iter()
            .map(|key| {
                let value = self.get(key.as_str()).unwrap_or_default();
                (key.as_str(), value)
            })
            .collect()
    }
}

fn parse_number<T: FromStr>(
    key: SettingKey,
    value: &str,
    expected: &'static str,
) -> Result<T, ConfigError> {
    value.parse::<T>().map_err(|_| ConfigError::InvalidValue {
        key: key.as_str(),
        value: value.to_string(),
        expected,
    })
}

fn parse_bool(key: SettingKey, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key: key.as_str(),
            value: value.to_string(),
            expected: "true or false",
        }),
    }
}
