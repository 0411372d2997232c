//! Opaque ID newtypes for component entities.

use crate::arena::ArenaId;
use serde::{Deserialize, Serialize};

/// Opaque, copyable ID for a line within a component.
///
/// Line IDs are assigned densely in allocation order, so within one
/// component they double as positions in a value table.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub struct LineId(u32);

impl LineId {
    /// Creates an ID from a raw `u32` index.
    pub fn from_raw(index: u32) -> Self {
        Self(index)
    }

    /// Returns the raw `u32` index.
    pub fn as_raw(self) -> u32 {
        self.0
    }

    /// Returns the index as a `usize` for table lookups.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl ArenaId for LineId {
    fn from_raw(index: u32) -> Self {
        Self(index)
    }

    fn as_raw(self) -> u32 {
        self.0
    }
}
