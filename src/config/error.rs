//! Configuration error types.

use thiserror::Error;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A numeric environment variable could not be parsed.
    #[error("failed to parse {name}='{value}': {reason}")]
    InvalidValue {
        name: &'static str,
        value: String,
        reason: String,
    },

    /// The provider base URL is empty or not an http(s) URL.
    #[error("invalid provider base URL '{value}': must start with http:// or https://")]
    InvalidBaseUrl { value: String },

    /// A duration setting was zero.
    #[error("{name} must be greater than zero")]
    ZeroDuration { name: &'static str },

    /// Batch fan-out must allow at least one in-flight resolution.
    #[error("batch concurrency must be at least 1")]
    ZeroConcurrency,

    /// Selection threshold is negative, NaN, or infinite.
    #[error("invalid minimum confidence score {value}: must be a finite, non-negative number")]
    InvalidThreshold { value: f64 },
}
