use serde::Serialize;

/// One non-blank line of a link list: the URL token and an optional comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    url: String,
    comment: Option<String>,
    /// 1-based source line, 0 when the record was built by hand.
    line: usize,
}

impl Record {
    pub fn new(url: impl Into<String>, comment: Option<&str>) -> Self {
        Self {
            url: url.into(),
            comment: comment.map(ToOwned::to_owned),
            line: 0,
        }
    }

    pub fn at_line(mut self, line: usize) -> Self {
        self.line = line;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn into_url(self) -> String {
        self.url
    }

    pub(crate) fn set_url(&mut self, url: String) {
        self.url = url;
    }
}

/// Parses a whole link list. Blank lines produce no record; order follows the input.
pub fn parse_text(text: &str) -> Vec<Record> {
    text.lines()
        .enumerate()
        .filter_map(|(idx, raw)| parse_line(raw).map(|record| record.at_line(idx + 1)))
        .collect()
}

/// Parses one line as `<url> [whitespace <comment>]`, lower-casing both parts.
pub fn parse_line(raw: &str) -> Option<Record> {
    let line = raw.trim().to_lowercase();
    if line.is_empty() {
        return None;
    }

    let record = match line.split_once(char::is_whitespace) {
        Some((url, rest)) => {
            let comment = rest.trim_start().replace('\t', " ");
            Record {
                url: url.to_string(),
                comment: Some(comment),
                line: 0,
            }
        }
        None => Record {
            url: line,
            comment: None,
            line: 0,
        },
    };
    Some(record)
}
