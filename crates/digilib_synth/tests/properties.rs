//! Behavioral properties of synthesized components, checked by exhaustive
//! evaluation over small widths.

use digilib_common::{BitPattern, Interner, Logic, LogicError};
use digilib_ir::{ComponentSpec, LineId, LineRole, Term, Width};
use digilib_synth::{decoder, demux, encoder, full_adder, half_adder, mux, synthesize};

use digilib_common::Logic::{One, X, Zero};

fn widths() -> impl Iterator<Item = Width> {
    (1..=4).map(|n| Width::from_address_bits(n).unwrap())
}

fn select_values(index: u64, width: Width) -> Vec<Logic> {
    BitPattern::expand(index, width.address_bits())
        .unwrap()
        .to_logic()
}

fn logic(bit: bool) -> Logic {
    Logic::from_bool(bit)
}

fn referenced_lines(term: &Term, out: &mut Vec<LineId>) {
    match term {
        Term::Line(id) => out.push(*id),
        Term::Not(inner) => referenced_lines(inner, out),
        Term::And(ops) | Term::Or(ops) | Term::Xor(ops) => {
            for t in ops {
                referenced_lines(t, out);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Multiplexer / demultiplexer
// ---------------------------------------------------------------------------

#[test]
fn mux_selects_addressed_channel() {
    let interner = Interner::new();
    for width in widths() {
        let m = mux(&interner, "m", width).unwrap();
        let n = width.lines();
        for s in 0..n {
            let selects = select_values(s, width);
            // Only channel s high, then every channel except s high.
            let one_hot: Vec<Logic> = (0..n).map(|i| logic(i == s)).collect();
            let one_cold: Vec<Logic> = (0..n).map(|i| logic(i != s)).collect();
            assert_eq!(m.evaluate(&one_hot, &selects).unwrap(), vec![One]);
            assert_eq!(m.evaluate(&one_cold, &selects).unwrap(), vec![Zero]);
        }
    }
}

#[test]
fn mux_of_demux_is_identity() {
    let interner = Interner::new();
    for width in widths() {
        let m = mux(&interner, "m", width).unwrap();
        let dm = demux(&interner, "dm", width).unwrap();
        for s in 0..width.lines() {
            let selects = select_values(s, width);
            for x in [Zero, One] {
                let routed = dm.evaluate(&[x], &selects).unwrap();
                for (i, &y) in routed.iter().enumerate() {
                    let expected = if i as u64 == s { x } else { Zero };
                    assert_eq!(y, expected, "width {width}, s = {s}, channel {i}");
                }
                assert_eq!(m.evaluate(&routed, &selects).unwrap(), vec![x]);
            }
        }
    }
}

#[test]
fn unknown_select_poisons_mux_output() {
    let interner = Interner::new();
    let m = mux(&interner, "m", Width::from_lines(2).unwrap()).unwrap();
    assert_eq!(m.evaluate(&[Zero, One], &[X]).unwrap(), vec![X]);
    // Both channels agree on 0, so the unknown select is masked.
    assert_eq!(m.evaluate(&[Zero, Zero], &[X]).unwrap(), vec![Zero]);
}

// ---------------------------------------------------------------------------
// Decoder / encoder
// ---------------------------------------------------------------------------

#[test]
fn decoder_asserts_exactly_the_addressed_output() {
    let interner = Interner::new();
    for width in widths() {
        let dec = decoder(&interner, "dec", width).unwrap();
        for address in 0..width.lines() {
            let outputs = dec.evaluate(&[], &select_values(address, width)).unwrap();
            let asserted: Vec<usize> = outputs
                .iter()
                .enumerate()
                .filter(|(_, v)| **v == One)
                .map(|(i, _)| i)
                .collect();
            assert_eq!(asserted, vec![address as usize], "width {width}");
            assert!(!outputs.contains(&X));
        }
    }
}

#[test]
fn encoder_recovers_one_hot_index() {
    let interner = Interner::new();
    for width in widths() {
        let enc = encoder(&interner, "enc", width).unwrap();
        for k in 0..width.lines() {
            let inputs: Vec<Logic> = (0..width.lines()).map(|i| logic(i == k)).collect();
            let code = enc.evaluate(&inputs, &[]).unwrap();
            assert_eq!(code, select_values(k, width), "width {width}, k = {k}");
        }
    }
}

#[test]
fn encoder_of_decoder_is_identity() {
    let interner = Interner::new();
    for width in widths() {
        let dec = decoder(&interner, "dec", width).unwrap();
        let enc = encoder(&interner, "enc", width).unwrap();
        for address in 0..width.lines() {
            let selects = select_values(address, width);
            let one_hot = dec.evaluate(&[], &selects).unwrap();
            assert_eq!(enc.evaluate(&one_hot, &[]).unwrap(), selects);
        }
    }
}

/// The encoder does not check its one-hot precondition: two asserted inputs
/// produce the OR of both codes.
#[test]
fn encoder_multi_hot_yields_or_of_codes() {
    let interner = Interner::new();
    let enc = encoder(&interner, "enc", Width::from_lines(4).unwrap()).unwrap();
    // d1 (01) and d2 (10) together read as 11.
    let code = enc.evaluate(&[Zero, One, One, Zero], &[]).unwrap();
    assert_eq!(code, vec![One, One]);
    // All inputs low is indistinguishable from d0 asserted.
    let none = enc.evaluate(&[Zero, Zero, Zero, Zero], &[]).unwrap();
    let d0 = enc.evaluate(&[One, Zero, Zero, Zero], &[]).unwrap();
    assert_eq!(none, d0);
}

// ---------------------------------------------------------------------------
// Adders
// ---------------------------------------------------------------------------

#[test]
fn half_adder_truth_table() {
    let interner = Interner::new();
    let ha = half_adder(&interner, "ha").unwrap();
    // (x1, x2) -> (sum, carry)
    let table = [
        ([Zero, Zero], [Zero, Zero]),
        ([One, Zero], [One, Zero]),
        ([Zero, One], [One, Zero]),
        ([One, One], [Zero, One]),
    ];
    for (inputs, expected) in table {
        assert_eq!(ha.evaluate(&inputs, &[]).unwrap(), expected, "{inputs:?}");
    }
}

#[test]
fn full_adder_is_parity_and_majority() {
    let interner = Interner::new();
    let fa = full_adder(&interner, "fa").unwrap();
    for bits in 0u8..8 {
        let x: Vec<bool> = (0..3).map(|k| (bits >> k) & 1 == 1).collect();
        let ones = x.iter().filter(|&&b| b).count();
        let inputs: Vec<Logic> = x.iter().map(|&b| logic(b)).collect();
        let outputs = fa.evaluate(&inputs, &[]).unwrap();
        let (sum, carry) = (outputs[0], outputs[1]);
        assert_eq!(sum, logic(ones % 2 == 1), "{x:?}");
        assert_eq!(carry, logic(ones >= 2), "{x:?}");
    }
    assert_eq!(fa.evaluate(&[One, One, One], &[]).unwrap(), vec![One, One]);
    assert_eq!(fa.evaluate(&[One, One, Zero], &[]).unwrap(), vec![Zero, One]);
}

// ---------------------------------------------------------------------------
// Validation and structure
// ---------------------------------------------------------------------------

#[test]
fn non_power_of_two_widths_are_rejected() {
    for lines in [3, 5, 6, 7] {
        assert_eq!(
            Width::from_lines(lines),
            Err(LogicError::InvalidWidth {
                param: "lines",
                value: lines
            })
        );
    }
    assert!(matches!(
        Width::from_address_bits(0),
        Err(LogicError::InvalidWidth { .. })
    ));
}

#[test]
fn bit_patterns_reassemble() {
    for n in 1..=8u32 {
        for i in 0..(1u64 << n) {
            let pattern = BitPattern::expand(i, n).unwrap();
            let rebuilt = pattern
                .iter()
                .rev()
                .fold(0u64, |acc, bit| acc * 2 + u64::from(bit));
            assert_eq!(rebuilt, i);
        }
    }
}

#[test]
fn equations_read_only_driven_lines() {
    let interner = Interner::new();
    let w = Width::from_lines(8).unwrap();
    for spec in [
        ComponentSpec::HalfAdder,
        ComponentSpec::FullAdder,
        ComponentSpec::Mux(w),
        ComponentSpec::Demux(w),
        ComponentSpec::Encoder(w),
        ComponentSpec::Decoder(w),
    ] {
        let c = synthesize(&interner, "c", &spec).unwrap();
        assert_eq!(c.equations.len(), c.outputs.len(), "{spec}");
        assert_eq!(
            spec.driven_lines(),
            (c.inputs.len() + c.selects.len()) as u64,
            "{spec}"
        );
        for eq in &c.equations {
            assert_eq!(c.line(eq.output).role, LineRole::Output);
            let mut read = Vec::new();
            referenced_lines(&eq.value, &mut read);
            for id in read {
                assert_ne!(c.line(id).role, LineRole::Output, "{spec}");
            }
        }
    }
}

#[test]
fn widest_decoder_and_demux_drive_every_output() {
    let interner = Interner::new();
    let w = Width::from_address_bits(Width::MAX_ADDRESS_BITS).unwrap();
    for c in [
        decoder(&interner, "dec", w).unwrap(),
        demux(&interner, "dm", w).unwrap(),
    ] {
        assert_eq!(c.outputs.len() as u64, w.lines());
        assert_eq!(c.equations.len(), c.outputs.len());
        let driven: Vec<_> = c.equations.iter().map(|eq| eq.output).collect();
        assert_eq!(driven, c.outputs);
    }
}

#[test]
fn concurrent_synthesis_shares_one_interner() {
    let interner = Interner::new();
    let w = Width::from_lines(16).unwrap();
    let hashes: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| mux(&interner, "m", w).unwrap().content_hash))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert!(hashes.windows(2).all(|pair| pair[0] == pair[1]));
}
