//! Line allocation for a component under construction.
//!
//! The [`ComponentBuilder`] hands out [`LineId`]s with the library's fixed
//! naming scheme (`d0..`, `s0..`, `y0..`) and assembles the finished
//! [`Component`] once equations exist.

use digilib_common::{Ident, Interner};
use digilib_ir::{Arena, Component, ComponentSpec, Equation, Line, LineId, LineRole};

/// A component whose lines are being allocated.
pub(crate) struct ComponentBuilder<'a> {
    interner: &'a Interner,
    name: Ident,
    lines: Arena<LineId, Line>,
}

impl<'a> ComponentBuilder<'a> {
    /// Starts a component called `name`.
    pub fn new(interner: &'a Interner, name: &str) -> Self {
        Self {
            interner,
            name: interner.get_or_intern(name),
            lines: Arena::new(),
        }
    }

    /// Allocates a single unindexed line.
    pub fn add_line(&mut self, name: &str, role: LineRole) -> LineId {
        let ident = self.interner.get_or_intern(name);
        self.push(ident, role, None)
    }

    /// Allocates `prefix0 .. prefix{count-1}` with consecutive bus indices.
    pub fn add_bus(&mut self, prefix: &str, role: LineRole, count: u64) -> Vec<LineId> {
        (0..count)
            .map(|i| {
                let ident = self.interner.intern_indexed(prefix, i);
                self.push(ident, role, Some(i as u32))
            })
            .collect()
    }

    fn push(&mut self, name: Ident, role: LineRole, index: Option<u32>) -> LineId {
        let id = self.lines.next_id();
        self.lines.alloc(Line {
            id,
            name,
            role,
            index,
        })
    }

    /// Finishes the component with one equation per output line.
    pub fn finish(self, spec: ComponentSpec, equations: Vec<Equation>) -> Component {
        Component::new(self.name, spec, self.lines, equations, self.interner)
    }
}
