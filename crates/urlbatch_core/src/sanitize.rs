use crate::Record;

/// Suffix marking a disabled entry in a link list.
pub const DISABLED_MARKER: &str = "--";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SanitizePolicy {
    /// Drop marked entries instead of opening them with the marker removed.
    pub ignore_dashes: bool,
}

/// Removes empty URLs, then drops or unmarks `--` entries according to `policy`.
///
/// Running it twice gives the same result as running it once.
pub fn sanitize(records: Vec<Record>, policy: SanitizePolicy) -> Vec<Record> {
    records
        .into_iter()
        .filter(|record| !record.url().is_empty())
        .filter_map(|mut record| {
            if !record.url().ends_with(DISABLED_MARKER) {
                return Some(record);
            }
            if policy.ignore_dashes {
                return None;
            }
            let unmarked = strip_marker(record.url()).to_string();
            if unmarked.is_empty() {
                return None;
            }
            record.set_url(unmarked);
            Some(record)
        })
        .collect()
}

/// Strips `--` until the URL no longer ends with it; a lone trailing `-` stays.
fn strip_marker(url: &str) -> &str {
    let mut rest = url;
    while let Some(stripped) = rest.strip_suffix(DISABLED_MARKER) {
        rest = stripped;
    }
    rest
}
