// ============================================================================
// Operation Tag
// Closed set of calculator operations
// ============================================================================

use crate::numeric::NumericError;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Arithmetic operation selected by the caller.
///
/// The wire tag is the lowercase variant name (`"add"`, `"sub"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Operation {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    /// Unary: only the first operand is used
    Sqrt,
}

impl Operation {
    /// Every operation, in UI order.
    pub const ALL: [Operation; 6] = [
        Operation::Add,
        Operation::Sub,
        Operation::Mul,
        Operation::Div,
        Operation::Pow,
        Operation::Sqrt,
    ];

    /// Wire tag used in query strings and JSON bodies.
    pub const fn tag(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Sub => "sub",
            Operation::Mul => "mul",
            Operation::Div => "div",
            Operation::Pow => "pow",
            Operation::Sqrt => "sqrt",
        }
    }

    /// Symbol shown in rendered expressions.
    pub const fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Sub => "−",
            Operation::Mul => "×",
            Operation::Div => "÷",
            Operation::Pow => "^",
            Operation::Sqrt => "√",
        }
    }

    pub const fn is_unary(self) -> bool {
        matches!(self, Operation::Sqrt)
    }
}

impl FromStr for Operation {
    type Err = NumericError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.tag() == s)
            .ok_or(NumericError::UnknownOperation)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tags() {
        for op in Operation::ALL {
            assert_eq!(op.tag().parse::<Operation>(), Ok(op));
        }
    }

    #[test]
    fn test_unknown_tag() {
        assert_eq!(
            "modulo".parse::<Operation>(),
            Err(NumericError::UnknownOperation)
        );
        assert_eq!("ADD".parse::<Operation>(), Err(NumericError::UnknownOperation));
    }

    #[test]
    fn test_symbols() {
        assert_eq!(Operation::Sub.symbol(), "−");
        assert_eq!(Operation::Sqrt.symbol(), "√");
        assert!(Operation::Sqrt.is_unary());
        assert!(!Operation::Pow.is_unary());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_tag() {
        let op: Operation = serde_json::from_str("\"div\"").unwrap();
        assert_eq!(op, Operation::Div);
        assert_eq!(serde_json::to_string(&Operation::Sqrt).unwrap(), "\"sqrt\"");
    }
}
