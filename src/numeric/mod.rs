// ============================================================================
// Numeric Module
// Bounded decimal operands and arithmetic error types
// ============================================================================
//
// This module provides:
// - Operand: decimal input bounded to 30 digits / 10 decimal places
// - parse_decimal: plain or scientific decimal literal parsing
// - NumericError: Error types for operand validation and evaluation
//
// Design principles:
// - No binary floating-point anywhere in the pipeline
// - All arithmetic returns Result (no panics)

mod errors;
mod operand;

pub use errors::{NumericError, NumericResult};
pub use operand::{parse_decimal, Operand};
