//! Error types for audio2hex
//!
//! Defines module-specific error types using thiserror for clear error propagation.

use thiserror::Error;

/// Main error type for audio2hex
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid encoder configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Audio decoding errors
    #[error("Audio decode error: {0}")]
    Decode(String),

    /// Sample rate conversion errors
    #[error("Resample error: {0}")]
    Resample(String),

    /// Peak amplitude is zero, normalization is undefined
    #[error("Input audio is silent (peak amplitude is zero)")]
    SilentInput,

    /// File I/O errors
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type using audio2hex Error
pub type Result<T> = std::result::Result<T, Error>;
