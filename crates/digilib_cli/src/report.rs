//! Resolved, name-level view of synthesized components for printing.

use std::fmt::Write as _;

use digilib_common::Interner;
use digilib_ir::{Component, ComponentKind, LineId};
use serde::Serialize;

use crate::ReportFormat;

/// One component as it appears in text and JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentReport {
    /// Instance name.
    pub name: String,
    /// Component family.
    pub kind: ComponentKind,
    /// Channel count, for sized kinds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lines: Option<u64>,
    /// Address width, for sized kinds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_bits: Option<u32>,
    /// Input line names.
    pub inputs: Vec<String>,
    /// Select/address line names, bit 0 first.
    pub selects: Vec<String>,
    /// Output line names.
    pub outputs: Vec<String>,
    /// Rendered `output = term` equations.
    pub equations: Vec<String>,
    /// Hex content hash.
    pub hash: String,
}

impl ComponentReport {
    /// Resolves a component's names. With `qualify`, every line prints as
    /// `<component>.<line>`.
    pub fn new(component: &Component, interner: &Interner, qualify: bool) -> Self {
        let name_of = |id: LineId| {
            if qualify {
                component.qualified_name(interner, id)
            } else {
                interner.resolve(component.line(id).name).to_string()
            }
        };
        let names = |ids: &[LineId]| ids.iter().map(|&id| name_of(id)).collect::<Vec<_>>();
        let width = component.spec.width();

        Self {
            name: interner.resolve(component.name).to_string(),
            kind: component.kind(),
            lines: width.map(|w| w.lines()),
            address_bits: width.map(|w| w.address_bits()),
            inputs: names(&component.inputs),
            selects: names(&component.selects),
            outputs: names(&component.outputs),
            equations: component.render_equations_with(&name_of),
            hash: component.content_hash.to_string(),
        }
    }
}

/// Formats reports in the requested format.
pub fn render(reports: &[ComponentReport], format: ReportFormat) -> Result<String, serde_json::Error> {
    match format {
        ReportFormat::Text => Ok(render_text(reports)),
        ReportFormat::Json => {
            let mut out = serde_json::to_string_pretty(reports)?;
            out.push('\n');
            Ok(out)
        }
    }
}

fn render_text(reports: &[ComponentReport]) -> String {
    let mut out = String::new();
    for (i, r) in reports.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = match (r.lines, r.address_bits) {
            (Some(lines), Some(bits)) => writeln!(
                out,
                "{} ({}, {lines} lines / {bits} address bits) [{}]",
                r.name, r.kind, r.hash
            ),
            _ => writeln!(out, "{} ({}) [{}]", r.name, r.kind, r.hash),
        };
        for (label, names) in [
            ("inputs", &r.inputs),
            ("selects", &r.selects),
            ("outputs", &r.outputs),
        ] {
            if !names.is_empty() {
                let _ = writeln!(out, "  {label:<8} {}", names.join(" "));
            }
        }
        for eq in &r.equations {
            let _ = writeln!(out, "  {eq}");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use digilib_ir::Width;

    fn mux2(interner: &Interner, qualify: bool) -> ComponentReport {
        let c = digilib_synth::mux(interner, "m", Width::from_lines(2).unwrap()).unwrap();
        ComponentReport::new(&c, interner, qualify)
    }

    #[test]
    fn unqualified_names() {
        let interner = Interner::new();
        let r = mux2(&interner, false);
        assert_eq!(r.inputs, ["d0", "d1"]);
        assert_eq!(r.selects, ["s0"]);
        assert_eq!(r.outputs, ["y"]);
        assert_eq!(r.lines, Some(2));
        assert_eq!(r.address_bits, Some(1));
        assert_eq!(r.hash.len(), 32);
    }

    #[test]
    fn qualified_names_reach_equations() {
        let interner = Interner::new();
        let r = mux2(&interner, true);
        assert_eq!(r.outputs, ["m.y"]);
        assert_eq!(
            r.equations,
            ["m.y = ((and(!m.s0) & m.d0) | (and(m.s0) & m.d1))"]
        );
    }

    #[test]
    fn text_layout() {
        let interner = Interner::new();
        let ha = digilib_synth::half_adder(&interner, "ha").unwrap();
        let r = ComponentReport::new(&ha, &interner, false);
        let text = render(std::slice::from_ref(&r), ReportFormat::Text).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], format!("ha (half_adder) [{}]", r.hash));
        assert_eq!(lines[1], "  inputs   x1 x2");
        assert_eq!(lines[2], "  outputs  sum carry");
        assert_eq!(lines[3], "  sum = (x1 ^ x2)");
        assert_eq!(lines[4], "  carry = (x1 & x2)");
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn json_fields() {
        let interner = Interner::new();
        let ha = digilib_synth::half_adder(&interner, "ha").unwrap();
        let reports = vec![
            ComponentReport::new(&ha, &interner, false),
            mux2(&interner, false),
        ];
        let json = render(&reports, ReportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["kind"], "half_adder");
        assert!(value[0].get("lines").is_none());
        assert_eq!(value[1]["kind"], "mux");
        assert_eq!(value[1]["address_bits"], 1);
        assert_eq!(value[1]["selects"][0], "s0");
    }
}
