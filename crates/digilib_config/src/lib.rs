//! Parsing and validation of `digilib.toml` component manifests.
//!
//! A manifest names a library and lists the components to synthesize. This
//! crate produces a strongly-typed [`LibraryConfig`] and resolves each
//! declaration into a validated [`ComponentSpec`](digilib_ir::ComponentSpec).

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod resolve;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_file, load_config_from_str, MANIFEST_NAME};
pub use resolve::{resolve_component, resolve_components, ResolvedComponent};
pub use types::*;
