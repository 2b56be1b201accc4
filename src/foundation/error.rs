/// Crate-wide result alias.
pub type LogoResult<T> = Result<T, LogoError>;

/// Errors surfaced by the fallible edges of the crate: configuration, fonts, rasterization and
/// frame output. Blending and painting never fail.
#[derive(thiserror::Error, Debug)]
pub enum LogoError {
    /// Invalid user-provided value (configuration, dimensions, ranges).
    #[error("validation error: {0}")]
    Validation(String),

    /// Font registration or label shaping failed.
    #[error("text error: {0}")]
    Text(String),

    /// Rasterization failed.
    #[error("render error: {0}")]
    Render(String),

    /// JSON (de)serialization failed.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Filesystem access failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl LogoError {
    /// Build a [`LogoError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`LogoError::Text`].
    pub fn text(msg: impl Into<String>) -> Self {
        Self::Text(msg.into())
    }

    /// Build a [`LogoError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`LogoError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
