//! Fixed-formula arithmetic gates.

use digilib_common::LogicResult;
use digilib_ir::{Equation, LineId, Term};

/// `sum = x1 ^ x2`, `carry = x1 & x2`.
pub(crate) fn half_adder_equations(
    x1: LineId,
    x2: LineId,
    sum: LineId,
    carry: LineId,
) -> LogicResult<Vec<Equation>> {
    let (a, b) = (Term::line(x1), Term::line(x2));
    Ok(vec![
        Equation::new(sum, Term::xor([a.clone(), b.clone()])?),
        Equation::new(carry, Term::and([a, b])?),
    ])
}

/// `sum = x1 ^ x2 ^ x3`, `carry = (x3 & (x1 ^ x2)) | (x1 & x2)`.
pub(crate) fn full_adder_equations(
    x1: LineId,
    x2: LineId,
    x3: LineId,
    sum: LineId,
    carry: LineId,
) -> LogicResult<Vec<Equation>> {
    let (a, b, c) = (Term::line(x1), Term::line(x2), Term::line(x3));
    let half_sum = Term::xor([a.clone(), b.clone()])?;
    let carry_value = Term::or([
        Term::and([c.clone(), half_sum])?,
        Term::and([a.clone(), b.clone()])?,
    ])?;
    Ok(vec![
        Equation::new(sum, Term::xor([a, b, c])?),
        Equation::new(carry, carry_value),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use digilib_common::Logic;

    fn eval(eq: &Equation, vals: &[Logic]) -> Logic {
        eq.value.eval(&|id: LineId| vals[id.index()])
    }

    #[test]
    fn half_adder_formulas() {
        let [x1, x2, sum, carry] = [0, 1, 2, 3].map(LineId::from_raw);
        let eqs = half_adder_equations(x1, x2, sum, carry).unwrap();
        assert_eq!(eqs[0].output, sum);
        assert_eq!(eqs[1].output, carry);
        use Logic::*;
        assert_eq!(eval(&eqs[0], &[One, Zero]), One);
        assert_eq!(eval(&eqs[1], &[One, One]), One);
    }

    #[test]
    fn full_adder_carry_shape() {
        let [x1, x2, x3, sum, carry] = [0, 1, 2, 3, 4].map(LineId::from_raw);
        let eqs = full_adder_equations(x1, x2, x3, sum, carry).unwrap();
        let expected = Term::Or(vec![
            Term::And(vec![
                Term::line(x3),
                Term::Xor(vec![Term::line(x1), Term::line(x2)]),
            ]),
            Term::And(vec![Term::line(x1), Term::line(x2)]),
        ]);
        assert_eq!(eqs[1].value, expected);
        assert_eq!(
            eqs[0].value,
            Term::Xor(vec![Term::line(x1), Term::line(x2), Term::line(x3)])
        );
    }

    #[test]
    fn full_adder_with_unknown_carry_in() {
        let [x1, x2, x3, sum, carry] = [0, 1, 2, 3, 4].map(LineId::from_raw);
        let eqs = full_adder_equations(x1, x2, x3, sum, carry).unwrap();
        use Logic::*;
        // Both addends set: carry is known regardless of carry-in.
        assert_eq!(eval(&eqs[1], &[One, One, X]), One);
        assert_eq!(eval(&eqs[0], &[One, One, X]), X);
    }
}
