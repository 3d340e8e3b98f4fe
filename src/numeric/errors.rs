// ============================================================================
// Numeric Errors
// Error types for calculator operands and arithmetic
// ============================================================================

use std::fmt;

/// Errors that can occur while validating operands or evaluating an operation.
///
/// The `Display` text of every variant is the detail message the HTTP
/// boundary hands back to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Divisor was zero (including `0 ^ negative`)
    DivisionByZero,
    /// Operand outside the operation's domain (e.g. negative square root)
    InvalidOperand,
    /// Second operand required by a binary operation was not supplied
    MissingOperand,
    /// Operation tag not recognised
    UnknownOperation,
    /// Result is mathematically undefined (`0 ^ 0`, negative base with fractional exponent)
    UndefinedResult,
    /// Result exceeded the representable decimal range
    Overflow,
    /// Input string or value is invalid
    InvalidInput,
    /// Operand has more digits than the configured bounds allow
    PrecisionLoss,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::DivisionByZero => write!(f, "Division by zero is not allowed."),
            NumericError::InvalidOperand => {
                write!(f, "Square root of negative number is not allowed.")
            },
            NumericError::MissingOperand => {
                write!(f, "Operand b is required for this operation.")
            },
            NumericError::UnknownOperation => write!(f, "Unknown operation."),
            NumericError::UndefinedResult => {
                write!(f, "Result is undefined for these operands.")
            },
            NumericError::Overflow => write!(f, "Result is too large to represent."),
            NumericError::InvalidInput => write!(f, "Operand is not a valid number."),
            NumericError::PrecisionLoss => {
                write!(f, "Operand exceeds 30 digits or 10 decimal places.")
            },
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
