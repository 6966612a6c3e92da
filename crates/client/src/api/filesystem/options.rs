use reqwest::header::RANGE;
use reqwest::RequestBuilder;

/// Per-request options forwarded to the server as headers, unmodified
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenOption {
    /// Byte range, `end` inclusive, open ended when `None`
    Range { start: u64, end: Option<u64> },
    Header { name: String, value: String },
}

impl OpenOption {
    pub fn header(&self) -> (String, String) {
        match self {
            OpenOption::Range { start, end } => {
                let end = end.map(|e| e.to_string()).unwrap_or_default();
                (RANGE.to_string(), format!("bytes={start}-{end}"))
            }
            OpenOption::Header { name, value } => (name.clone(), value.clone()),
        }
    }
}

pub(crate) fn apply_options(mut request: RequestBuilder, options: &[OpenOption]) -> RequestBuilder {
    for option in options {
        let (name, value) = option.header();
        request = request.header(name, value);
    }
    request
}
