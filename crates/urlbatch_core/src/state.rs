use std::path::{Path, PathBuf};

use crate::view_model::AppViewModel;
use crate::{FilterSpec, Record, Settings};

/// Where the session is in the open-links flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    AwaitingConfirmation,
    Dispatching,
    Done,
}

impl Phase {
    /// True while a batch is waiting for confirmation or being opened.
    pub fn is_busy(self) -> bool {
        matches!(self, Phase::AwaitingConfirmation | Phase::Dispatching)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    settings: Settings,
    source: Option<PathBuf>,
    records: Vec<Record>,
    filter: FilterSpec,
    phase: Phase,
    pending: Vec<String>,
    opened: usize,
    total: usize,
    status: Option<String>,
    last_error: Option<String>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            phase: self.phase,
            source: self.source.clone(),
            record_count: self.records.len(),
            filter: self.filter.clone(),
            opened: self.opened,
            total: self.total,
            status: self.status.clone(),
            last_error: self.last_error.clone(),
            dirty: self.dirty,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn filter(&self) -> &FilterSpec {
        &self.filter
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns whether anything changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn load_records(&mut self, path: PathBuf, records: Vec<Record>) {
        self.status = Some(format!(
            "Loaded {} links from {}",
            records.len(),
            path.display()
        ));
        self.source = Some(path);
        self.records = records;
        self.last_error = None;
        self.phase = Phase::Idle;
        self.mark_dirty();
    }

    pub(crate) fn clear_records(&mut self) {
        self.source = None;
        self.records.clear();
        self.mark_dirty();
    }

    pub(crate) fn set_filter(&mut self, filter: FilterSpec) {
        self.filter = filter;
        self.last_error = None;
        self.mark_dirty();
    }

    pub(crate) fn set_settings(&mut self, settings: Settings) {
        self.settings = settings;
        self.mark_dirty();
    }

    pub(crate) fn remember_source(&mut self, path: PathBuf) {
        self.settings.last_file = Some(path);
    }

    pub(crate) fn set_status(&mut self, status: impl Into<String>) {
        self.status = Some(status.into());
        self.mark_dirty();
    }

    pub(crate) fn fail(&mut self, message: impl Into<String>) {
        self.report_error(message);
        self.phase = Phase::Idle;
    }

    /// Records an error without leaving the current phase.
    pub(crate) fn report_error(&mut self, message: impl Into<String>) {
        self.last_error = Some(message.into());
        self.mark_dirty();
    }

    pub(crate) fn await_confirmation(&mut self, urls: Vec<String>) {
        self.total = urls.len();
        self.opened = 0;
        self.pending = urls;
        self.phase = Phase::AwaitingConfirmation;
        self.last_error = None;
        self.mark_dirty();
    }

    pub(crate) fn take_pending(&mut self) -> Vec<String> {
        std::mem::take(&mut self.pending)
    }

    pub(crate) fn decline(&mut self) {
        self.pending.clear();
        self.phase = Phase::Idle;
        self.status = Some(format!("Cancelled opening {} links", self.total));
        self.total = 0;
        self.mark_dirty();
    }

    pub(crate) fn start_dispatch(&mut self, count: usize) {
        self.total = count;
        self.opened = 0;
        self.phase = Phase::Dispatching;
        self.last_error = None;
        self.status = Some(format!("Opening {count} links"));
        self.mark_dirty();
    }

    pub(crate) fn record_opened(&mut self, index: usize, url: &str) {
        self.opened = self.opened.max(index + 1);
        self.status = Some(format!("Opened {}/{}: {}", self.opened, self.total, url));
        self.mark_dirty();
    }

    pub(crate) fn finish_dispatch(&mut self, opened: usize, cancelled: bool) {
        self.opened = opened;
        self.phase = Phase::Done;
        self.status = Some(if cancelled {
            format!("Stopped after {} of {} links", opened, self.total)
        } else {
            format!("Opened {opened} links")
        });
        self.mark_dirty();
    }
}
