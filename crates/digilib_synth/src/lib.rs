//! Combinational synthesis for the digilib component library.
//!
//! Each constructor validates its structural parameters, allocates named
//! lines, and synthesizes one boolean [`Equation`](digilib_ir::Equation) per
//! output:
//!
//! | constructor | lines |
//! |---|---|
//! | [`half_adder`] | `x1 x2` → `sum carry` |
//! | [`full_adder`] | `x1 x2 x3` → `sum carry` |
//! | [`mux`] | `d0..d{N-1}`, `s0..s{n-1}` → `y` |
//! | [`demux`] | `d`, `s0..s{n-1}` → `y0..y{N-1}` |
//! | [`encoder`] | `d0..d{N-1}` → `y0..y{n-1}` |
//! | [`decoder`] | `s0..s{n-1}` → `y0..y{N-1}` |
//!
//! Select and address line `k` always carries bit `k` of the channel index.
//!
//! # Usage
//!
//! ```ignore
//! use digilib_common::Interner;
//! use digilib_ir::Width;
//! let interner = Interner::new();
//! let mux4 = digilib_synth::mux(&interner, "mux4", Width::from_lines(4)?)?;
//! ```

#![warn(missing_docs)]

mod builder;
mod encode;
mod gates;
mod select;

use builder::ComponentBuilder;
use digilib_common::{Interner, LogicResult};
use digilib_ir::{Component, ComponentSpec, LineRole, Width};

/// Builds the component described by `spec`.
pub fn synthesize(interner: &Interner, name: &str, spec: &ComponentSpec) -> LogicResult<Component> {
    let component = match *spec {
        ComponentSpec::HalfAdder => half_adder(interner, name),
        ComponentSpec::FullAdder => full_adder(interner, name),
        ComponentSpec::Mux(width) => mux(interner, name, width),
        ComponentSpec::Demux(width) => demux(interner, name, width),
        ComponentSpec::Encoder(width) => encoder(interner, name, width),
        ComponentSpec::Decoder(width) => decoder(interner, name, width),
    }?;
    tracing::debug!(
        component = name,
        spec = %spec,
        lines = component.lines.len(),
        equations = component.equations.len(),
        "synthesized component"
    );
    Ok(component)
}

/// Two-input adder: `sum = x1 ^ x2`, `carry = x1 & x2`.
pub fn half_adder(interner: &Interner, name: &str) -> LogicResult<Component> {
    let mut b = ComponentBuilder::new(interner, name);
    let x1 = b.add_line("x1", LineRole::Input);
    let x2 = b.add_line("x2", LineRole::Input);
    let sum = b.add_line("sum", LineRole::Output);
    let carry = b.add_line("carry", LineRole::Output);
    let equations = gates::half_adder_equations(x1, x2, sum, carry)?;
    Ok(b.finish(ComponentSpec::HalfAdder, equations))
}

/// Three-input adder: `sum = x1 ^ x2 ^ x3`, `carry = majority(x1, x2, x3)`.
pub fn full_adder(interner: &Interner, name: &str) -> LogicResult<Component> {
    let mut b = ComponentBuilder::new(interner, name);
    let x1 = b.add_line("x1", LineRole::Input);
    let x2 = b.add_line("x2", LineRole::Input);
    let x3 = b.add_line("x3", LineRole::Input);
    let sum = b.add_line("sum", LineRole::Output);
    let carry = b.add_line("carry", LineRole::Output);
    let equations = gates::full_adder_equations(x1, x2, x3, sum, carry)?;
    Ok(b.finish(ComponentSpec::FullAdder, equations))
}

/// `N`-to-1 multiplexer: `y` follows `d_i` while the selects spell `i`.
pub fn mux(interner: &Interner, name: &str, width: Width) -> LogicResult<Component> {
    let mut b = ComponentBuilder::new(interner, name);
    let data = b.add_bus("d", LineRole::Input, width.lines());
    let selects = b.add_bus("s", LineRole::Select, u64::from(width.address_bits()));
    let y = b.add_line("y", LineRole::Output);
    let equations = select::mux_equations(&data, &selects, y)?;
    Ok(b.finish(ComponentSpec::Mux(width), equations))
}

/// 1-to-`N` demultiplexer: `y_i` follows `d` while the selects spell `i`,
/// every other output is 0.
pub fn demux(interner: &Interner, name: &str, width: Width) -> LogicResult<Component> {
    let mut b = ComponentBuilder::new(interner, name);
    let d = b.add_line("d", LineRole::Input);
    let selects = b.add_bus("s", LineRole::Select, u64::from(width.address_bits()));
    let outputs = b.add_bus("y", LineRole::Output, width.lines());
    let equations = select::demux_equations(d, &selects, &outputs)?;
    Ok(b.finish(ComponentSpec::Demux(width), equations))
}

/// `N`-to-`n` binary encoder.
///
/// Inputs are assumed one-hot: with `d_k` alone asserted, `y0..y{n-1}` carry
/// the bits of `k`. With several inputs asserted the outputs are the OR of
/// their codes; this is not checked.
pub fn encoder(interner: &Interner, name: &str, width: Width) -> LogicResult<Component> {
    let mut b = ComponentBuilder::new(interner, name);
    let data = b.add_bus("d", LineRole::Input, width.lines());
    let outputs = b.add_bus("y", LineRole::Output, u64::from(width.address_bits()));
    let equations = encode::encoder_equations(&data, &outputs)?;
    Ok(b.finish(ComponentSpec::Encoder(width), equations))
}

/// `n`-to-`N` binary decoder: exactly `y_i` is asserted while the address
/// lines spell `i`.
pub fn decoder(interner: &Interner, name: &str, width: Width) -> LogicResult<Component> {
    let mut b = ComponentBuilder::new(interner, name);
    let selects = b.add_bus("s", LineRole::Select, u64::from(width.address_bits()));
    let outputs = b.add_bus("y", LineRole::Output, width.lines());
    let equations = select::decoder_equations(&selects, &outputs)?;
    Ok(b.finish(ComponentSpec::Decoder(width), equations))
}
