//! Output equations.

use crate::ids::LineId;
use crate::term::Term;
use serde::{Deserialize, Serialize};

/// Asserts that `output` always carries the value of `value`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equation {
    /// The driven output line.
    pub output: LineId,
    /// The term the output equals.
    pub value: Term,
}

impl Equation {
    /// Creates an equation binding `output` to `value`.
    pub fn new(output: LineId, value: Term) -> Self {
        Self { output, value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equation_construction() {
        let eq = Equation::new(LineId::from_raw(2), Term::line(LineId::from_raw(0)));
        assert_eq!(eq.output.as_raw(), 2);
        assert_eq!(eq.value, Term::Line(LineId::from_raw(0)));
    }
}
