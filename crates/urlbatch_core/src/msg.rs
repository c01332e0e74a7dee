use std::path::PathBuf;

use crate::{FilterSpec, Record, Settings};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// A link list was read and parsed.
    RecordsLoaded { path: PathBuf, records: Vec<Record> },
    /// Reading a link list failed.
    LoadFailed { path: PathBuf, message: String },
    /// User picked a different filter.
    FilterChanged(FilterSpec),
    /// User edited the preferences.
    SettingsChanged(Settings),
    /// Writing the settings file failed.
    SettingsSaveFailed { message: String },
    /// User asked to open the current selection.
    OpenClicked,
    /// Answer to a batch-size confirmation.
    ConfirmationAnswered(bool),
    /// The launcher opened one URL.
    UrlOpened { index: usize, url: String },
    /// The launch sequence ended, either fully or by cancellation.
    DispatchFinished { opened: usize, cancelled: bool },
    /// Fallback for placeholder wiring.
    NoOp,
}
