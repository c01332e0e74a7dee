use pretty_assertions::assert_eq;
use urlbatch_core::{parse_text, run_pipeline, sanitize, FilterSpec, Record, SanitizePolicy};

const IGNORE: SanitizePolicy = SanitizePolicy {
    ignore_dashes: true,
};
const STRIP: SanitizePolicy = SanitizePolicy {
    ignore_dashes: false,
};

fn urls(records: &[Record]) -> Vec<&str> {
    records.iter().map(Record::url).collect()
}

#[test]
fn ignore_dashes_drops_marked_entries() {
    let records = parse_text("a.com hello\nb.com--\tworld\nc.com");
    let got = sanitize(records, IGNORE);
    assert_eq!(urls(&got), vec!["a.com", "c.com"]);
}

#[test]
fn keep_dashes_strips_the_marker() {
    let records = parse_text("a.com hello\nb.com--\tworld\nc.com");
    let got = sanitize(records, STRIP);
    assert_eq!(urls(&got), vec!["a.com", "b.com", "c.com"]);
    assert_eq!(got[1].comment(), Some("world"));
}

#[test]
fn single_and_interior_dashes_are_untouched() {
    let records = parse_text("a-b.com\nc.com-\nd--e.com");
    let expected = vec!["a-b.com", "c.com-", "d--e.com"];
    assert_eq!(urls(&sanitize(records.clone(), STRIP)), expected);
    assert_eq!(urls(&sanitize(records, IGNORE)), expected);
}

#[test]
fn empty_urls_are_always_dropped() {
    let records = vec![
        Record::new("", None),
        Record::new("a.com", None),
        Record::new("--", None),
    ];
    assert_eq!(urls(&sanitize(records.clone(), STRIP)), vec!["a.com"]);
    assert_eq!(urls(&sanitize(records, IGNORE)), vec!["a.com"]);
}

#[test]
fn sanitize_is_idempotent() {
    let records = parse_text("a.com\nb.com--\nc.com---\nd.com----\ne.com-\n--\nf-.com--");
    for policy in [IGNORE, STRIP] {
        let once = sanitize(records.clone(), policy);
        let twice = sanitize(once.clone(), policy);
        assert_eq!(once, twice, "policy {policy:?}");
    }
    assert_eq!(
        urls(&sanitize(records, STRIP)),
        vec!["a.com", "b.com", "c.com-", "d.com", "e.com-", "f-.com"]
    );
}

#[test]
fn pipeline_filters_before_sanitizing() {
    let records = parse_text("a.com hello\nb.com--\tworld\nc.com");

    let urls = run_pipeline(&records, &FilterSpec::Domain("b".into()), STRIP).unwrap();
    assert_eq!(urls, vec!["b.com".to_string()]);

    let urls = run_pipeline(&records, &FilterSpec::Domain("b".into()), IGNORE).unwrap();
    assert!(urls.is_empty());

    let range = FilterSpec::LineRange { start: 2, end: 3 };
    let urls = run_pipeline(&records, &range, IGNORE).unwrap();
    assert_eq!(urls, vec!["c.com".to_string()]);
}
