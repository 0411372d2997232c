//! Grouped-accumulation synthesis for binary encoders.
//!
//! Output bit `j` is the OR of every data input whose index has bit `j` set.
//! This encodes correctly only for one-hot inputs; with several inputs
//! asserted the outputs carry the OR of their codes. The precondition is
//! left to the caller.

use digilib_common::{BitPattern, LogicResult};
use digilib_ir::{Equation, LineId, Term};

/// `y_j = OR { d_i : bit j of i is 1 }`, for `outputs.len()` bits.
pub(crate) fn encoder_equations(
    data: &[LineId],
    outputs: &[LineId],
) -> LogicResult<Vec<Equation>> {
    let width = outputs.len() as u32;
    let patterns = (0..data.len() as u64)
        .map(|i| BitPattern::expand(i, width))
        .collect::<LogicResult<Vec<_>>>()?;

    outputs
        .iter()
        .enumerate()
        .map(|(j, &y)| {
            let sources = data
                .iter()
                .zip(&patterns)
                .filter(|(_, pattern)| pattern.bit(j as u32))
                .map(|(&d, _)| Term::line(d));
            Ok(Equation::new(y, Term::or(sources)?))
        })
        .collect()
}
