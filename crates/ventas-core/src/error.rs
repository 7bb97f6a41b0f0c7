use thiserror::Error;

/// Top-level error type for ventas.
#[derive(Debug, Error)]
pub enum VentasError {
    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// A chat message could not be decoded.
    #[error("message error: {0}")]
    Message(String),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
