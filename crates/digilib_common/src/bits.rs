//! Fixed-width binary expansion of channel indices.
//!
//! [`BitPattern::expand`] is the single place that decides bit order for the
//! whole library: position `k` of a pattern is bit `k` of the index
//! (little-endian), and it drives select/address line `k`. Multiplexers,
//! demultiplexers, encoders, and decoders all expand through it, so a mux and
//! a demux of the same width always agree on which channel a select value
//! names.

use crate::error::{LogicError, LogicResult};
use crate::logic::Logic;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Widest pattern that can be expanded from a `u64` index.
pub const MAX_PATTERN_WIDTH: u32 = 63;

/// The binary expansion of an index, exactly `width` bits long.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BitPattern {
    width: u32,
    value: u64,
}

impl BitPattern {
    /// Expands `index` into `width` bits, least-significant bit first.
    ///
    /// Fails with [`LogicError::OutOfRange`] unless `index < 2^width` and
    /// `width <= MAX_PATTERN_WIDTH`.
    pub fn expand(index: u64, width: u32) -> LogicResult<Self> {
        if width > MAX_PATTERN_WIDTH || index >> width != 0 {
            return Err(LogicError::OutOfRange { index, width });
        }
        Ok(Self {
            width,
            value: index,
        })
    }

    /// Returns the number of bits in the pattern.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns bit `position` (0 = least significant).
    ///
    /// # Panics
    ///
    /// Panics if `position >= self.width()`.
    pub fn bit(&self, position: u32) -> bool {
        assert!(
            position < self.width,
            "bit {position} out of bounds for width {}",
            self.width
        );
        (self.value >> position) & 1 != 0
    }

    /// Iterates over the bits from position 0 upwards.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = bool> + ExactSizeIterator + '_ {
        (0..self.width).map(move |k| self.bit(k))
    }

    /// Returns the bits as driven logic values, position 0 first.
    pub fn to_logic(&self) -> Vec<Logic> {
        self.iter().map(Logic::from_bool).collect()
    }
}

/// Prints the pattern most-significant bit first, like a binary literal.
impl fmt::Display for BitPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for k in (0..self.width).rev() {
            write!(f, "{}", if self.bit(k) { '1' } else { '0' })?;
        }
        Ok(())
    }
}

impl fmt::Debug for BitPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitPattern({}'b{self})", self.width)
    }
}
