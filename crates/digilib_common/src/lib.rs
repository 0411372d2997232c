//! Shared foundational types for the digilib component library.
//!
//! Provides three-state logic values, fixed-width bit patterns for channel
//! indices, interned names, content fingerprints, and the common error type.

#![warn(missing_docs)]

pub mod bits;
pub mod error;
pub mod hash;
pub mod ident;
pub mod logic;

pub use bits::{BitPattern, MAX_PATTERN_WIDTH};
pub use error::{LogicError, LogicResult};
pub use hash::ContentHash;
pub use ident::{Ident, Interner};
pub use logic::Logic;
