//! Named signal endpoints of a component.

use crate::ids::LineId;
use digilib_common::Ident;
use serde::{Deserialize, Serialize};

/// What a line does at the component boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineRole {
    /// A data input.
    Input,
    /// A select or address input.
    Select,
    /// An output driven by one equation.
    Output,
}

impl LineRole {
    /// Returns the lowercase role name.
    pub fn as_str(self) -> &'static str {
        match self {
            LineRole::Input => "input",
            LineRole::Select => "select",
            LineRole::Output => "output",
        }
    }
}

/// A boolean-valued line owned by one component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    /// The ID of this line within its component.
    pub id: LineId,
    /// The line name (`d0`, `s1`, `y`, `carry`, ...).
    pub name: Ident,
    /// Boundary role.
    pub role: LineRole,
    /// Position within its bus, for indexed lines like `d3`.
    pub index: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use digilib_common::Interner;

    #[test]
    fn role_names() {
        assert_eq!(LineRole::Input.as_str(), "input");
        assert_eq!(LineRole::Select.as_str(), "select");
        assert_eq!(LineRole::Output.as_str(), "output");
    }

    #[test]
    fn line_serde_roundtrip() {
        let line = Line {
            id: LineId::from_raw(3),
            name: Interner::new().get_or_intern("s1"),
            role: LineRole::Select,
            index: Some(1),
        };
        let json = serde_json::to_string(&line).unwrap();
        assert!(json.contains("\"select\""));
        let back: Line = serde_json::from_str(&json).unwrap();
        assert_eq!(back, line);
    }
}
