//! The component representation shared by every digilib stage.
//!
//! This crate defines [`Line`], [`Term`], [`Equation`], [`ComponentSpec`], and
//! [`Component`]: the symbolic form in which synthesized digital components
//! are handed to an acausal modeling framework.

#![warn(missing_docs)]

pub mod arena;
pub mod component;
pub mod equation;
pub mod ids;
pub mod line;
pub mod spec;
pub mod term;

pub use arena::{Arena, ArenaId};
pub use component::Component;
pub use equation::Equation;
pub use ids::LineId;
pub use line::{Line, LineRole};
pub use spec::{ComponentKind, ComponentSpec, ParseKindError, Width};
pub use term::{GateOp, Term};
