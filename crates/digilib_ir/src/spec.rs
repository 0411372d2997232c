//! Structural parameters of a component.
//!
//! A [`Width`] can only be built from a valid power-of-two line count or a
//! positive address width, so holding one proves `N = 2^n, n >= 1`.

use digilib_common::{LogicError, LogicResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The component families the library can build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    /// Two-input adder producing `sum` and `carry`.
    HalfAdder,
    /// Three-input adder producing `sum` and `carry`.
    FullAdder,
    /// `N`-to-1 multiplexer.
    Mux,
    /// 1-to-`N` demultiplexer.
    Demux,
    /// `N`-to-`n` binary encoder.
    Encoder,
    /// `n`-to-`N` binary decoder.
    Decoder,
}

impl ComponentKind {
    /// Every kind, in declaration order.
    pub const ALL: [ComponentKind; 6] = [
        ComponentKind::HalfAdder,
        ComponentKind::FullAdder,
        ComponentKind::Mux,
        ComponentKind::Demux,
        ComponentKind::Encoder,
        ComponentKind::Decoder,
    ];

    /// Returns the snake_case name used in manifests and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            ComponentKind::HalfAdder => "half_adder",
            ComponentKind::FullAdder => "full_adder",
            ComponentKind::Mux => "mux",
            ComponentKind::Demux => "demux",
            ComponentKind::Encoder => "encoder",
            ComponentKind::Decoder => "decoder",
        }
    }

    /// Returns `true` if the kind takes a [`Width`].
    pub fn is_sized(self) -> bool {
        !matches!(self, ComponentKind::HalfAdder | ComponentKind::FullAdder)
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown component kind name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown component kind '{0}'")]
pub struct ParseKindError(pub String);

impl FromStr for ComponentKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ComponentKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| ParseKindError(s.to_string()))
    }
}

/// A validated channel count `N = 2^n` with `1 <= n <= MAX_ADDRESS_BITS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Width {
    address_bits: u32,
}

impl Width {
    /// Largest supported address width (65536 channels).
    pub const MAX_ADDRESS_BITS: u32 = 16;

    /// Validates a channel count `N`.
    pub fn from_lines(lines: u64) -> LogicResult<Self> {
        let invalid = LogicError::InvalidWidth {
            param: "lines",
            value: lines,
        };
        if !lines.is_power_of_two() || lines < 2 {
            return Err(invalid);
        }
        let address_bits = lines.trailing_zeros();
        if address_bits > Self::MAX_ADDRESS_BITS {
            return Err(invalid);
        }
        Ok(Self { address_bits })
    }

    /// Validates an address width `n`.
    pub fn from_address_bits(address_bits: u32) -> LogicResult<Self> {
        if address_bits == 0 || address_bits > Self::MAX_ADDRESS_BITS {
            return Err(LogicError::InvalidWidth {
                param: "address_bits",
                value: u64::from(address_bits),
            });
        }
        Ok(Self { address_bits })
    }

    /// The address width `n`.
    pub fn address_bits(self) -> u32 {
        self.address_bits
    }

    /// The channel count `N = 2^n`.
    pub fn lines(self) -> u64 {
        1 << self.address_bits
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} lines / {} address bits", self.lines(), self.address_bits)
    }
}

/// A component kind together with its structural parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "width", rename_all = "snake_case")]
pub enum ComponentSpec {
    /// Half adder.
    HalfAdder,
    /// Full adder.
    FullAdder,
    /// Multiplexer with `width.lines()` data inputs.
    Mux(Width),
    /// Demultiplexer with `width.lines()` outputs.
    Demux(Width),
    /// Encoder with `width.lines()` inputs and `width.address_bits()` outputs.
    Encoder(Width),
    /// Decoder with `width.address_bits()` address lines and `width.lines()` outputs.
    Decoder(Width),
}

impl ComponentSpec {
    /// Builds the spec for a fixed-arity kind; `None` for sized kinds.
    pub fn fixed(kind: ComponentKind) -> Option<Self> {
        match kind {
            ComponentKind::HalfAdder => Some(ComponentSpec::HalfAdder),
            ComponentKind::FullAdder => Some(ComponentSpec::FullAdder),
            _ => None,
        }
    }

    /// Builds the spec for a sized kind; `None` for fixed-arity kinds.
    pub fn sized(kind: ComponentKind, width: Width) -> Option<Self> {
        match kind {
            ComponentKind::Mux => Some(ComponentSpec::Mux(width)),
            ComponentKind::Demux => Some(ComponentSpec::Demux(width)),
            ComponentKind::Encoder => Some(ComponentSpec::Encoder(width)),
            ComponentKind::Decoder => Some(ComponentSpec::Decoder(width)),
            ComponentKind::HalfAdder | ComponentKind::FullAdder => None,
        }
    }

    /// The component family.
    pub fn kind(&self) -> ComponentKind {
        match self {
            ComponentSpec::HalfAdder => ComponentKind::HalfAdder,
            ComponentSpec::FullAdder => ComponentKind::FullAdder,
            ComponentSpec::Mux(_) => ComponentKind::Mux,
            ComponentSpec::Demux(_) => ComponentKind::Demux,
            ComponentSpec::Encoder(_) => ComponentKind::Encoder,
            ComponentSpec::Decoder(_) => ComponentKind::Decoder,
        }
    }

    /// The width, for sized kinds.
    pub fn width(&self) -> Option<Width> {
        match *self {
            ComponentSpec::HalfAdder | ComponentSpec::FullAdder => None,
            ComponentSpec::Mux(w)
            | ComponentSpec::Demux(w)
            | ComponentSpec::Encoder(w)
            | ComponentSpec::Decoder(w) => Some(w),
        }
    }

    /// Number of lines a caller drives: data inputs plus select or address
    /// lines. Known without synthesizing the component.
    pub fn driven_lines(&self) -> u64 {
        match *self {
            ComponentSpec::HalfAdder => 2,
            ComponentSpec::FullAdder => 3,
            ComponentSpec::Mux(w) => w.lines() + u64::from(w.address_bits()),
            ComponentSpec::Demux(w) => 1 + u64::from(w.address_bits()),
            ComponentSpec::Encoder(w) => w.lines(),
            ComponentSpec::Decoder(w) => u64::from(w.address_bits()),
        }
    }
}

impl fmt::Display for ComponentSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.width() {
            Some(w) => write!(f, "{} ({w})", self.kind()),
            None => write!(f, "{}", self.kind()),
        }
    }
}
