/// Crate error type.
///
/// Transport adapters map remote-API failures into [`Error::Remote`]; the
/// core re-raises them unchanged and never retries.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A wire payload failed to decode: malformed nested entity, or an
    /// entity span that does not fit its text.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid JSON, or a missing required field during deserialization.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// A call was attempted without a field the endpoint requires.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Failure reported by the remote API, propagated unchanged.
    #[error("remote error: {0}")]
    Remote(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
