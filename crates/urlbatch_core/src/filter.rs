use std::fmt;

use thiserror::Error;

use crate::Record;

/// The active record selection. Only one kind of filter applies at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FilterSpec {
    /// Pass every record through.
    #[default]
    None,
    /// Case-insensitive substring of the comment.
    Phrase(String),
    /// Case-insensitive substring of the URL.
    Domain(String),
    /// 1-based, inclusive positions in the parsed record list.
    LineRange { start: usize, end: usize },
}

impl FilterSpec {
    /// Parses `START-END` (or a single `N`, meaning `N-N`) into a `LineRange`.
    ///
    /// Only the syntax is checked here; bounds are validated against the
    /// record count in [`apply_filter`].
    pub fn parse_range(text: &str) -> Result<Self, FilterError> {
        let invalid = || FilterError::InvalidRange(text.to_string());
        let (start, end) = match text.split_once('-') {
            Some((start, end)) => (start.trim(), end.trim()),
            None => (text.trim(), text.trim()),
        };
        let start = start.parse::<usize>().map_err(|_| invalid())?;
        let end = end.parse::<usize>().map_err(|_| invalid())?;
        Ok(Self::LineRange { start, end })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Phrase,
    Domain,
}

impl fmt::Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchKind::Phrase => write!(f, "comment"),
            MatchKind::Domain => write!(f, "url"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("line range {start}-{end} is outside 1-{len}")]
    Range {
        start: usize,
        end: usize,
        len: usize,
    },
    #[error("not a line range: {0:?} (expected START-END)")]
    InvalidRange(String),
    #[error("no {kind} contains {text:?}")]
    NoMatch { kind: MatchKind, text: String },
}

/// Applies `spec` to `records`, keeping their relative order.
pub fn apply_filter(records: &[Record], spec: &FilterSpec) -> Result<Vec<Record>, FilterError> {
    match spec {
        FilterSpec::None => Ok(records.to_vec()),
        FilterSpec::Phrase(text) => {
            let needle = text.to_lowercase();
            let matched: Vec<Record> = records
                .iter()
                .filter(|record| {
                    record
                        .comment()
                        .is_some_and(|comment| comment.contains(needle.as_str()))
                })
                .cloned()
                .collect();
            non_empty(matched, MatchKind::Phrase, text)
        }
        FilterSpec::Domain(text) => {
            let needle = text.to_lowercase();
            let matched: Vec<Record> = records
                .iter()
                .filter(|record| record.url().contains(needle.as_str()))
                .cloned()
                .collect();
            non_empty(matched, MatchKind::Domain, text)
        }
        FilterSpec::LineRange { start, end } => {
            let (start, end) = (*start, *end);
            if start < 1 || start > end || end > records.len() {
                return Err(FilterError::Range {
                    start,
                    end,
                    len: records.len(),
                });
            }
            Ok(records[start - 1..end].to_vec())
        }
    }
}

fn non_empty(
    matched: Vec<Record>,
    kind: MatchKind,
    text: &str,
) -> Result<Vec<Record>, FilterError> {
    if matched.is_empty() {
        Err(FilterError::NoMatch {
            kind,
            text: text.to_string(),
        })
    } else {
        Ok(matched)
    }
}
