use std::path::PathBuf;

use crate::Settings;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    AskConfirmation { message: String },
    LaunchUrls { urls: Vec<String>, delay_ms: u64 },
    PersistSettings(Settings),
    RememberLastFile(PathBuf),
}
