//! Manifest loading and validation.

use crate::error::ConfigError;
use crate::types::LibraryConfig;
use std::collections::HashSet;
use std::path::Path;

/// File name looked up by [`load_config`].
pub const MANIFEST_NAME: &str = "digilib.toml";

/// Loads and validates `<dir>/digilib.toml`.
pub fn load_config(dir: &Path) -> Result<LibraryConfig, ConfigError> {
    load_config_file(&dir.join(MANIFEST_NAME))
}

/// Loads and validates a manifest at an explicit path.
pub fn load_config_file(path: &Path) -> Result<LibraryConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    load_config_from_str(&content)
}

/// Parses and validates a manifest from a string.
pub fn load_config_from_str(content: &str) -> Result<LibraryConfig, ConfigError> {
    let config: LibraryConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Checks required fields and component name uniqueness.
///
/// Widths are checked later by [`resolve_components`](crate::resolve_components).
fn validate_config(config: &LibraryConfig) -> Result<(), ConfigError> {
    if config.library.name.is_empty() {
        return Err(ConfigError::MissingField("library.name".to_string()));
    }
    let mut seen = HashSet::new();
    for decl in &config.components {
        if decl.name.is_empty() {
            return Err(ConfigError::MissingField("components.name".to_string()));
        }
        if !seen.insert(decl.name.as_str()) {
            return Err(ConfigError::DuplicateComponent(decl.name.clone()));
        }
    }
    Ok(())
}
