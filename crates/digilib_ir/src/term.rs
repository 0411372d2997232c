//! Symbolic boolean terms.
//!
//! A [`Term`] is an immutable expression tree over component lines. Terms
//! are only ever built during synthesis; [`Term::eval`] interprets one over
//! three-state [`Logic`] values the same way the downstream modeling
//! framework does.

use crate::ids::LineId;
use digilib_common::{Logic, LogicError, LogicResult};
use serde::{Deserialize, Serialize};
use std::ops;

/// A variadic gate operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GateOp {
    /// Conjunction.
    And,
    /// Disjunction.
    Or,
    /// Parity.
    Xor,
}

impl GateOp {
    /// Returns the lowercase operator name.
    pub fn name(self) -> &'static str {
        match self {
            GateOp::And => "and",
            GateOp::Or => "or",
            GateOp::Xor => "xor",
        }
    }

    /// Returns the infix symbol used when rendering.
    pub fn symbol(self) -> &'static str {
        match self {
            GateOp::And => "&",
            GateOp::Or => "|",
            GateOp::Xor => "^",
        }
    }

    /// Folds operand values with this operator.
    ///
    /// A gate with no operands has no defined value and yields `X`.
    fn fold(self, mut values: impl Iterator<Item = Logic>) -> Logic {
        let Some(first) = values.next() else {
            return Logic::X;
        };
        match self {
            GateOp::And => values.fold(first, |acc, v| acc & v),
            GateOp::Or => values.fold(first, |acc, v| acc | v),
            GateOp::Xor => values.fold(first, |acc, v| acc ^ v),
        }
    }
}

/// A boolean expression node.
///
/// Gates are meant to be built through [`Term::and`], [`Term::or`] and
/// [`Term::xor`], which reject empty operand lists. A gate constructed
/// directly with no operands evaluates to `X`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Term {
    /// The value of a line.
    Line(LineId),
    /// Negation.
    Not(Box<Term>),
    /// Conjunction of one or more terms.
    And(Vec<Term>),
    /// Disjunction of one or more terms.
    Or(Vec<Term>),
    /// Parity of one or more terms.
    Xor(Vec<Term>),
}

impl Term {
    /// A reference to a line.
    pub fn line(id: LineId) -> Self {
        Term::Line(id)
    }

    /// Builds a gate over `operands`.
    ///
    /// A single operand is kept as a one-input gate. An empty operand list is
    /// rejected with [`LogicError::InvalidArity`].
    pub fn gate(op: GateOp, operands: impl IntoIterator<Item = Term>) -> LogicResult<Self> {
        let operands: Vec<Term> = operands.into_iter().collect();
        if operands.is_empty() {
            return Err(LogicError::InvalidArity { op: op.name() });
        }
        Ok(match op {
            GateOp::And => Term::And(operands),
            GateOp::Or => Term::Or(operands),
            GateOp::Xor => Term::Xor(operands),
        })
    }

    /// Conjunction of one or more terms.
    pub fn and(operands: impl IntoIterator<Item = Term>) -> LogicResult<Self> {
        Self::gate(GateOp::And, operands)
    }

    /// Disjunction of one or more terms.
    pub fn or(operands: impl IntoIterator<Item = Term>) -> LogicResult<Self> {
        Self::gate(GateOp::Or, operands)
    }

    /// Parity of one or more terms.
    pub fn xor(operands: impl IntoIterator<Item = Term>) -> LogicResult<Self> {
        Self::gate(GateOp::Xor, operands)
    }

    /// Evaluates the term, reading line values through `value_of`.
    pub fn eval(&self, value_of: &impl Fn(LineId) -> Logic) -> Logic {
        match self {
            Term::Line(id) => value_of(*id),
            Term::Not(inner) => !inner.eval(value_of),
            Term::And(ops) => GateOp::And.fold(ops.iter().map(|t| t.eval(value_of))),
            Term::Or(ops) => GateOp::Or.fold(ops.iter().map(|t| t.eval(value_of))),
            Term::Xor(ops) => GateOp::Xor.fold(ops.iter().map(|t| t.eval(value_of))),
        }
    }
}

impl ops::Not for Term {
    type Output = Term;

    fn not(self) -> Term {
        Term::Not(Box::new(self))
    }
}

impl From<LineId> for Term {
    fn from(id: LineId) -> Self {
        Term::Line(id)
    }
}
