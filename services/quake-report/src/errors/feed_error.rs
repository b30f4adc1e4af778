use thiserror::Error;

/// Everything that can go wrong between the feed endpoint and a record list.
/// None of these are fatal: the fetcher and parser log them and degrade to
/// fewer or no records.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("invalid request url `{url}`: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected response status {0}")]
    UnexpectedStatus(u16),

    #[error("malformed feed json: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("missing field `{field}` at {path}")]
    MissingField { field: &'static str, path: String },

    #[error("field `{field}` at {path} is not {expected}")]
    WrongType {
        field: &'static str,
        path: String,
        expected: &'static str,
    },
}
