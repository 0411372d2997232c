//! Selector-indexed synthesis for multiplexers, demultiplexers, and decoders.
//!
//! All three start from the same per-channel address match: for channel `i`,
//! the conjunction of every select line, inverted where bit `k` of `i` is
//! zero. Bit order comes from [`BitPattern::expand`], so channel `i` of a mux
//! and channel `i` of a demux of the same width answer to the same select
//! value.

use digilib_common::{BitPattern, LogicResult};
use digilib_ir::{Equation, LineId, Term};

/// Builds the term that is true exactly when `selects` spell out `index`.
///
/// `selects[k]` is compared against bit `k` of `index`.
pub(crate) fn address_match(selects: &[LineId], index: u64) -> LogicResult<Term> {
    let pattern = BitPattern::expand(index, selects.len() as u32)?;
    Term::and(selects.iter().zip(pattern.iter()).map(|(&line, bit)| {
        if bit {
            Term::line(line)
        } else {
            !Term::line(line)
        }
    }))
}

/// `y = OR_i (match_i & d_i)`.
pub(crate) fn mux_equations(
    data: &[LineId],
    selects: &[LineId],
    output: LineId,
) -> LogicResult<Vec<Equation>> {
    let products = data
        .iter()
        .enumerate()
        .map(|(i, &d)| Term::and([address_match(selects, i as u64)?, Term::line(d)]))
        .collect::<LogicResult<Vec<_>>>()?;
    Ok(vec![Equation::new(output, Term::or(products)?)])
}

/// `y_i = match_i & d`.
pub(crate) fn demux_equations(
    input: LineId,
    selects: &[LineId],
    outputs: &[LineId],
) -> LogicResult<Vec<Equation>> {
    outputs
        .iter()
        .enumerate()
        .map(|(i, &y)| {
            let value = Term::and([address_match(selects, i as u64)?, Term::line(input)])?;
            Ok(Equation::new(y, value))
        })
        .collect()
}

/// `y_i = match_i`.
pub(crate) fn decoder_equations(
    selects: &[LineId],
    outputs: &[LineId],
) -> LogicResult<Vec<Equation>> {
    outputs
        .iter()
        .enumerate()
        .map(|(i, &y)| Ok(Equation::new(y, address_match(selects, i as u64)?)))
        .collect()
}
