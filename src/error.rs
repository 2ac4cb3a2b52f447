use thiserror::Error;

/// Errors produced by the OnAir client.
///
/// Every failure is returned to the caller as-is; the client never retries
/// or falls back internally. Decode variants keep the raw body text so the
/// caller can inspect what the server actually sent.
#[derive(Debug, Error)]
pub enum Error {
    /// Required credential or identifier missing/empty before any call.
    #[error("configuration error: {0}")]
    Config(String),

    /// Network-level failure (DNS, connect, timeout, broken transfer).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-2xx status. Distinguishes a rejected
    /// credential (401/403) from a malformed body, which the raw
    /// double-decode alone cannot do.
    #[error("http status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The top-level response envelope failed to decode.
    #[error("error decoding response envelope: {source}")]
    Envelope {
        source: serde_json::Error,
        body: String,
    },

    /// The envelope's `Content` did not match the requested resource shape.
    #[error("error decoding {resource} payload: {source}")]
    Payload {
        resource: &'static str,
        source: serde_json::Error,
        body: String,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
