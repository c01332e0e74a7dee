use std::path::PathBuf;

use crate::{FilterSpec, Phase};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub phase: Phase,
    pub source: Option<PathBuf>,
    pub record_count: usize,
    pub filter: FilterSpec,
    /// URLs launched so far in the current or last run.
    pub opened: usize,
    /// Size of the current or last run.
    pub total: usize,
    pub status: Option<String>,
    pub last_error: Option<String>,
    pub dirty: bool,
}
