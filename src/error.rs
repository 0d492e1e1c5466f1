// src/error.rs

use thiserror::Error;

/// Errors produced while fetching, persisting, or notifying about rosters.
#[derive(Debug, Error)]
pub enum MonitorError {
    /// An HTTP request failed or the client could not be built.
    #[error("http error: {0}")]
    Http(String),

    /// The roster API returned a body that is not JSON at all.
    #[error("payload error: {0}")]
    Payload(String),

    /// The persisted snapshot could not be read, parsed, or written.
    #[error("snapshot error: {0}")]
    Snapshot(String),

    /// Invalid configuration.
    #[error("config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, MonitorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_http() {
        let err = MonitorError::Http("connection refused".into());
        assert_eq!(err.to_string(), "http error: connection refused");
    }

    #[test]
    fn display_snapshot() {
        let err = MonitorError::Snapshot("corrupt file".into());
        assert_eq!(err.to_string(), "snapshot error: corrupt file");
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MonitorError>();
    }
}
