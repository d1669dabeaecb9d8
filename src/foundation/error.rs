/// Convenience result type used across asciigate.
pub type GateResult<T> = Result<T, GateError>;

/// Error taxonomy for the fallible edges of the crate.
///
/// Frame generation itself is total; only configuration loading and
/// validation can fail.
#[derive(thiserror::Error, Debug)]
pub enum GateError {
    /// Configuration values that cannot produce a well-formed gate.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error, such as a config file that cannot be read.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GateError {
    /// Build a [`GateError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`GateError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
