/// Convenience result type used across keyimage.
pub type KeyImageResult<T> = Result<T, KeyImageError>;

/// Top-level error taxonomy used by the generator, presentation and preview APIs.
#[derive(thiserror::Error, Debug)]
pub enum KeyImageError {
    /// A caller-supplied seed or container size outside the generator's contract.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Invalid configuration data (sprite sheet, preview settings).
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while rasterizing a preview.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl KeyImageError {
    /// Build a [`KeyImageError::InvalidArgument`] value.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Build a [`KeyImageError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`KeyImageError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`KeyImageError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// `true` for the argument-contract kind, the only failure of the core generator.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
