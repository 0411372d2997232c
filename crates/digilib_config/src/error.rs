//! Error types for manifest loading and validation.

/// Errors that can occur when loading or validating a `digilib.toml` manifest.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An I/O error occurred while reading the manifest.
    #[error("failed to read configuration: {0}")]
    IoError(#[from] std::io::Error),

    /// The TOML content could not be parsed.
    #[error("failed to parse configuration: {0}")]
    ParseError(String),

    /// A required field is missing from the manifest.
    #[error("missing required field: {0}")]
    MissingField(String),

    /// Two components share a name.
    #[error("duplicate component name '{0}'")]
    DuplicateComponent(String),

    /// A manifest value failed validation.
    #[error("validation error: {0}")]
    ValidationError(String),
}
