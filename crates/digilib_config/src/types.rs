//! Manifest types deserialized from `digilib.toml`.

use digilib_ir::ComponentKind;
use serde::Deserialize;

/// The top-level manifest: library metadata, output settings, and the
/// components to synthesize.
#[derive(Debug, Deserialize)]
pub struct LibraryConfig {
    /// Library metadata.
    pub library: LibraryMeta,
    /// How synthesized components are reported.
    #[serde(default)]
    pub output: OutputConfig,
    /// Components in declaration order.
    #[serde(default)]
    pub components: Vec<ComponentDecl>,
}

/// Library metadata required in every manifest.
#[derive(Debug, Deserialize)]
pub struct LibraryMeta {
    /// The library name.
    pub name: String,
    /// The library version string.
    pub version: String,
    /// A brief description.
    #[serde(default)]
    pub description: String,
}

/// Report settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutputConfig {
    /// Report format.
    #[serde(default)]
    pub format: OutputFormat,
    /// Whether line names are printed as `<component>.<line>`.
    #[serde(default = "default_qualify_names")]
    pub qualify_names: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            qualify_names: default_qualify_names(),
        }
    }
}

fn default_qualify_names() -> bool {
    true
}

/// Report format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `line = term` per output, grouped by component.
    #[default]
    Text,
    /// A JSON array of component reports.
    Json,
}

/// One `[[components]]` entry.
///
/// Sized kinds take exactly one of `lines` (`N`) or `address_bits` (`n`);
/// adders take neither.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComponentDecl {
    /// Instance name, unique within the manifest.
    pub name: String,
    /// Component family.
    pub kind: ComponentKind,
    /// Channel count `N`.
    pub lines: Option<u64>,
    /// Address width `n`.
    pub address_bits: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_defaults() {
        let out = OutputConfig::default();
        assert_eq!(out.format, OutputFormat::Text);
        assert!(out.qualify_names);
    }

    #[test]
    fn parse_component_decl() {
        let decl: ComponentDecl = toml::from_str(
            r#"
name = "dec"
kind = "decoder"
address_bits = 3
"#,
        )
        .unwrap();
        assert_eq!(decl.kind, ComponentKind::Decoder);
        assert_eq!(decl.address_bits, Some(3));
        assert_eq!(decl.lines, None);
    }

    #[test]
    fn unknown_decl_field_rejected() {
        let result: Result<ComponentDecl, _> = toml::from_str(
            r#"
name = "m"
kind = "mux"
width = 4
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn unknown_kind_rejected() {
        let result: Result<ComponentDecl, _> = toml::from_str(
            r#"
name = "m"
kind = "comparator"
"#,
        );
        assert!(result.is_err());
    }
}
