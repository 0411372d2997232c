//! Error and result types shared by the digital component library.

/// The standard result type for fallible construction and evaluation.
pub type LogicResult<T> = Result<T, LogicError>;

/// Errors raised while building or driving a digital component.
///
/// `InvalidWidth` and `DriveMismatch` are caller errors. `OutOfRange` and
/// `InvalidArity` indicate a bug in a synthesis routine; they are never caused
/// by a validated structural parameter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LogicError {
    /// A structural parameter is not a power of two, or the address width is zero.
    #[error("invalid {param} = {value}: N must be a power of 2 (N = 2^n, n >= 1)")]
    InvalidWidth {
        /// Which parameter was rejected (`"lines"` or `"address_bits"`).
        param: &'static str,
        /// The rejected value.
        value: u64,
    },

    /// A bit-expansion index does not fit the requested pattern width.
    #[error("index {index} is out of range for a {width}-bit pattern")]
    OutOfRange {
        /// The index that was expanded.
        index: u64,
        /// The requested pattern width.
        width: u32,
    },

    /// A variadic gate was built with no operands.
    #[error("{op} gate requires at least one operand")]
    InvalidArity {
        /// The gate name.
        op: &'static str,
    },

    /// The number of driven values does not match the component's lines.
    #[error("expected {expected} {role} values, got {actual}")]
    DriveMismatch {
        /// The line role being driven.
        role: &'static str,
        /// Number of lines with that role.
        expected: usize,
        /// Number of values supplied.
        actual: usize,
    },
}
