use urlbatch_core::{AppViewModel, FilterSpec, Phase, Record};

/// The progress line for a view. Errors are left out; they end the command instead.
pub fn status_line(view: &AppViewModel) -> Option<String> {
    if view.last_error.is_some() {
        return None;
    }
    let status = view.status.as_deref()?;
    let line = match view.phase {
        Phase::Dispatching if view.total > 0 => {
            let percent = view.opened as f64 / view.total as f64 * 100.0;
            format!("[{percent:>3.0}%] {status}")
        }
        _ => status.to_string(),
    };
    Some(line)
}

pub fn describe_filter(filter: &FilterSpec) -> String {
    match filter {
        FilterSpec::None => "all links".to_string(),
        FilterSpec::Phrase(text) => format!("comment contains {text:?}"),
        FilterSpec::Domain(text) => format!("url contains {text:?}"),
        FilterSpec::LineRange { start, end } => format!("positions {start}-{end}"),
    }
}

pub fn list_row(record: &Record) -> String {
    match record.comment() {
        Some(comment) => format!("{:>5}  {}  {}", record.line(), record.url(), comment),
        None => format!("{:>5}  {}", record.line(), record.url()),
    }
}
