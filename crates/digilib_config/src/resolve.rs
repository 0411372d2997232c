//! Turning manifest declarations into validated component specs.

use crate::error::ConfigError;
use crate::types::{ComponentDecl, LibraryConfig};
use digilib_ir::{ComponentSpec, Width};

/// A declaration whose kind and width have been validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedComponent {
    /// Instance name.
    pub name: String,
    /// Validated kind and width.
    pub spec: ComponentSpec,
}

/// Resolves every declaration in manifest order.
pub fn resolve_components(config: &LibraryConfig) -> Result<Vec<ResolvedComponent>, ConfigError> {
    config.components.iter().map(resolve_component).collect()
}

/// Resolves a single declaration.
///
/// Sized kinds need exactly one of `lines` or `address_bits`, and the value
/// must describe `N = 2^n` with `n >= 1`. Adders must not carry a width.
pub fn resolve_component(decl: &ComponentDecl) -> Result<ResolvedComponent, ConfigError> {
    let name = &decl.name;
    let kind = decl.kind;

    if !kind.is_sized() {
        if decl.lines.is_some() || decl.address_bits.is_some() {
            return Err(ConfigError::ValidationError(format!(
                "component '{name}' ({kind}) does not take a width"
            )));
        }
        return ComponentSpec::fixed(kind)
            .map(|spec| ResolvedComponent {
                name: name.clone(),
                spec,
            })
            .ok_or_else(|| ConfigError::ValidationError(format!("'{kind}' is not a fixed kind")));
    }

    let width = match (decl.lines, decl.address_bits) {
        (Some(lines), None) => Width::from_lines(lines),
        (None, Some(bits)) => Width::from_address_bits(bits),
        (Some(_), Some(_)) => {
            return Err(ConfigError::ValidationError(format!(
                "component '{name}' sets both lines and address_bits"
            )));
        }
        (None, None) => {
            return Err(ConfigError::MissingField(format!(
                "components.{name}.lines or components.{name}.address_bits"
            )));
        }
    }
    .map_err(|e| ConfigError::ValidationError(format!("component '{name}': {e}")))?;

    ComponentSpec::sized(kind, width)
        .map(|spec| ResolvedComponent {
            name: name.clone(),
            spec,
        })
        .ok_or_else(|| ConfigError::ValidationError(format!("'{kind}' is not a sized kind")))
}
