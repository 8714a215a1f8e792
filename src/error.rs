//! Bragi error types

/// Bragi error types
#[derive(Debug, thiserror::Error)]
pub enum BragiError {
    /// Producer-side call (`push_text`, `flush`, `end_input`) made after the
    /// stream transitioned to closed. Already-enqueued units stay consumable.
    #[error("stream is closed")]
    StreamClosed,

    #[error("configuration error: {0}")]
    Configuration(String),
}

/// Result type alias for Bragi operations
pub type Result<T> = std::result::Result<T, BragiError>;
