//! Error types for the Healthy Coder calculators

use thiserror::Error;

/// Calculator error kinds
#[derive(Error, Debug)]
pub enum HealthError {
    /// The caller broke an input contract (negative minutes, missing profile field, ...)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The computation itself is undefined for the given values
    #[error("Arithmetic error: {0}")]
    Arithmetic(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl HealthError {
    /// Whether this is an input contract violation
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, HealthError::InvalidInput(_))
    }

    /// Whether this is an undefined arithmetic result
    pub fn is_arithmetic(&self) -> bool {
        matches!(self, HealthError::Arithmetic(_))
    }
}

/// Result alias used throughout the crate
pub type HealthResult<T> = Result<T, HealthError>;
