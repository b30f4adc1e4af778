use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown parse policy `{0}` (expected `stop` or `skip`)")]
    UnknownParsePolicy(String),
}
