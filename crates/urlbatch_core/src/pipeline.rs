use crate::{apply_filter, sanitize, FilterError, FilterSpec, Record, SanitizePolicy};

/// Filters then sanitizes, returning the records that would be opened.
pub fn select_records(
    records: &[Record],
    spec: &FilterSpec,
    policy: SanitizePolicy,
) -> Result<Vec<Record>, FilterError> {
    let selected = apply_filter(records, spec)?;
    Ok(sanitize(selected, policy))
}

/// The ordered URL list handed to the dispatch gate.
pub fn run_pipeline(
    records: &[Record],
    spec: &FilterSpec,
    policy: SanitizePolicy,
) -> Result<Vec<String>, FilterError> {
    Ok(select_records(records, spec, policy)?
        .into_iter()
        .map(Record::into_url)
        .collect())
}
