//! `digilib table`: exhaustive truth table of one component.
//!
//! Rows enumerate every 0/1 assignment of the driven lines (inputs, then
//! selects). Row `r` drives line `k` with bit `k` of `r`.

use digilib_common::{BitPattern, Interner, Logic};
use digilib_ir::{Component, ComponentSpec};

use crate::{GlobalArgs, TableArgs};

/// Largest number of driven lines a table is printed for.
pub const MAX_TABLE_LINES: u64 = 12;

/// Runs the `digilib table` command. Returns exit code 0 on success.
pub fn run(args: &TableArgs, _global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let spec = args.component.spec()?;
    check_size(&spec)?;
    let interner = Interner::new();
    let component = digilib_synth::synthesize(&interner, &args.component.name(), &spec)?;
    for row in truth_table(&component, &interner)? {
        println!("{row}");
    }
    Ok(0)
}

/// Renders the header followed by one row per assignment.
pub fn truth_table(
    component: &Component,
    interner: &Interner,
) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    check_size(&component.spec)?;
    let driven = component.inputs.len() + component.selects.len();

    let name = |id| interner.resolve(component.line(id).name).to_string();
    let driven_names: Vec<String> = component
        .inputs
        .iter()
        .chain(&component.selects)
        .map(|&id| name(id))
        .collect();
    let output_names: Vec<String> = component.outputs.iter().map(|&id| name(id)).collect();
    let mut rows = vec![format!(
        "{} | {}",
        driven_names.join(" "),
        output_names.join(" ")
    )];

    let width = u32::try_from(driven)?;
    for r in 0..(1u64 << width) {
        let values = BitPattern::expand(r, width)?.to_logic();
        let (inputs, selects) = values.split_at(component.inputs.len());
        let outputs = component.evaluate(inputs, selects)?;
        rows.push(format!(
            "{} | {}",
            cells(&values, &driven_names),
            cells(&outputs, &output_names)
        ));
    }
    Ok(rows)
}

/// Refuses specs with more than [`MAX_TABLE_LINES`] driven lines.
fn check_size(spec: &ComponentSpec) -> Result<(), String> {
    let driven = spec.driven_lines();
    if driven > MAX_TABLE_LINES {
        return Err(format!(
            "{spec} has {driven} driven lines; truth tables are limited to {MAX_TABLE_LINES}"
        ));
    }
    Ok(())
}

/// Right-aligns each value under its column header.
fn cells(values: &[Logic], headers: &[String]) -> String {
    values
        .iter()
        .zip(headers)
        .map(|(v, h)| format!("{v:>width$}", width = h.len()))
        .collect::<Vec<_>>()
        .join(" ")
}
