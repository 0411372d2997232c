//! Synthesized components, the unit handed to the modeling framework.
//!
//! A [`Component`] owns its lines, grouped by role, and one [`Equation`] per
//! output line in output order. It is built once and never mutated.

use crate::arena::Arena;
use crate::equation::Equation;
use crate::ids::LineId;
use crate::line::{Line, LineRole};
use crate::spec::{ComponentKind, ComponentSpec};
use crate::term::{GateOp, Term};
use digilib_common::{ContentHash, Ident, Interner, Logic, LogicError, LogicResult};
use serde::{Deserialize, Serialize};

/// A named digital component: lines plus output equations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    /// The instance name.
    pub name: Ident,
    /// Kind and structural parameters.
    pub spec: ComponentSpec,
    /// Every line, in allocation order.
    pub lines: Arena<LineId, Line>,
    /// Data input lines, in bus order.
    pub inputs: Vec<LineId>,
    /// Select/address lines, bit 0 first.
    pub selects: Vec<LineId>,
    /// Output lines, in bus order.
    pub outputs: Vec<LineId>,
    /// One equation per output, ordered like `outputs`.
    pub equations: Vec<Equation>,
    /// Fingerprint of kind, line names, and equations.
    pub content_hash: ContentHash,
}

impl Component {
    /// Assembles a component from allocated lines and their equations.
    ///
    /// Lines are grouped by role in allocation order. Equations are reordered
    /// to follow the output lines they drive.
    pub fn new(
        name: Ident,
        spec: ComponentSpec,
        lines: Arena<LineId, Line>,
        mut equations: Vec<Equation>,
        interner: &Interner,
    ) -> Self {
        let by_role = |role: LineRole| -> Vec<LineId> {
            lines
                .iter()
                .filter(|(_, line)| line.role == role)
                .map(|(id, _)| id)
                .collect()
        };
        let inputs = by_role(LineRole::Input);
        let selects = by_role(LineRole::Select);
        let outputs = by_role(LineRole::Output);
        let mut rank = vec![usize::MAX; lines.len()];
        for (position, &output) in outputs.iter().enumerate() {
            rank[output.index()] = position;
        }
        equations.sort_by_key(|eq| rank.get(eq.output.index()).copied().unwrap_or(usize::MAX));

        let mut component = Self {
            name,
            spec,
            lines,
            inputs,
            selects,
            outputs,
            equations,
            content_hash: ContentHash::from_bytes(&[]),
        };
        component.content_hash = component.fingerprint(interner);
        component
    }

    /// The component family.
    pub fn kind(&self) -> ComponentKind {
        self.spec.kind()
    }

    /// Returns the line with the given ID.
    ///
    /// # Panics
    ///
    /// Panics if the ID does not belong to this component.
    pub fn line(&self, id: LineId) -> &Line {
        &self.lines[id]
    }

    /// Returns `<component>.<line>`, the name the framework exposes.
    pub fn qualified_name(&self, interner: &Interner, id: LineId) -> String {
        format!(
            "{}.{}",
            interner.resolve(self.name),
            interner.resolve(self.line(id).name)
        )
    }

    /// Drives inputs and selects positionally and evaluates every output.
    ///
    /// `inputs` and `selects` must match the component's line counts.
    /// Results follow output order.
    pub fn evaluate(&self, inputs: &[Logic], selects: &[Logic]) -> LogicResult<Vec<Logic>> {
        for (role, lines, values) in [
            ("input", &self.inputs, inputs),
            ("select", &self.selects, selects),
        ] {
            if lines.len() != values.len() {
                return Err(LogicError::DriveMismatch {
                    role,
                    expected: lines.len(),
                    actual: values.len(),
                });
            }
        }

        let mut table = vec![Logic::X; self.lines.len()];
        for (&id, &value) in self.inputs.iter().zip(inputs) {
            table[id.index()] = value;
        }
        for (&id, &value) in self.selects.iter().zip(selects) {
            table[id.index()] = value;
        }
        let value_of = |id: LineId| table.get(id.index()).copied().unwrap_or(Logic::X);

        Ok(self
            .equations
            .iter()
            .map(|eq| eq.value.eval(&value_of))
            .collect())
    }

    /// Renders every equation as `output = term`, in output order.
    ///
    /// Multi-operand gates print infix and parenthesized (`(a & !b)`);
    /// single-operand gates print as calls (`and(a)`).
    pub fn render_equations(&self, interner: &Interner) -> Vec<String> {
        self.render_equations_with(&|id| interner.resolve(self.line(id).name).to_string())
    }

    /// Like [`render_equations`](Self::render_equations), with line names
    /// supplied by `name_of`.
    pub fn render_equations_with(&self, name_of: &impl Fn(LineId) -> String) -> Vec<String> {
        self.equations
            .iter()
            .map(|eq| format!("{} = {}", name_of(eq.output), render_with(&eq.value, name_of)))
            .collect()
    }

    fn fingerprint(&self, interner: &Interner) -> ContentHash {
        let mut parts: Vec<String> = vec![self.spec.to_string()];
        parts.extend(
            self.lines
                .values()
                .map(|line| format!("{}:{}", line.role.as_str(), interner.resolve(line.name))),
        );
        parts.extend(self.render_equations(interner));
        ContentHash::from_parts(parts.iter().map(String::as_bytes))
    }
}

fn render_with(term: &Term, name_of: &impl Fn(LineId) -> String) -> String {
    match term {
        Term::Line(id) => name_of(*id),
        Term::Not(inner) => format!("!{}", render_with(inner, name_of)),
        Term::And(ops) => render_gate(GateOp::And, ops, name_of),
        Term::Or(ops) => render_gate(GateOp::Or, ops, name_of),
        Term::Xor(ops) => render_gate(GateOp::Xor, ops, name_of),
    }
}

fn render_gate(op: GateOp, operands: &[Term], name_of: &impl Fn(LineId) -> String) -> String {
    let parts: Vec<String> = operands.iter().map(|t| render_with(t, name_of)).collect();
    if parts.len() == 1 {
        format!("{}({})", op.name(), parts[0])
    } else {
        format!("({})", parts.join(&format!(" {} ", op.symbol())))
    }
}
