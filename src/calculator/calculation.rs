// ============================================================================
// Calculation
// An evaluated operation together with its human-readable expression
// ============================================================================

use super::{evaluate, Operation};
use crate::numeric::NumericResult;
use rust_decimal::Decimal;
use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

/// A successfully evaluated operation.
///
/// Operands and result are kept normalized (no trailing fractional zeros),
/// so `2.50 + 1` renders as `2.5 + 1 = 3.5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Calculation {
    pub a: Decimal,
    /// Always `None` for unary operations
    pub b: Option<Decimal>,
    pub op: Operation,
    pub result: Decimal,
}

impl Calculation {
    /// Evaluate `op` and capture the operands for rendering.
    ///
    /// # Errors
    /// Propagates every error of [`evaluate`].
    pub fn compute(a: Decimal, b: Option<Decimal>, op: Operation) -> NumericResult<Self> {
        let result = evaluate(a, b, op)?;
        let b = if op.is_unary() {
            None
        } else {
            b.map(|b| b.normalize())
        };

        Ok(Self {
            a: a.normalize(),
            b,
            op,
            result: result.normalize(),
        })
    }

    /// `"{a} {symbol} {b} = {result}"`, or `"√({a}) = {result}"` for square root.
    pub fn expression(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.b {
            Some(b) => write!(
                f,
                "{} {} {} = {}",
                self.a,
                self.op.symbol(),
                b,
                self.result
            ),
            None => write!(f, "{}({}) = {}", self.op.symbol(), self.a, self.result),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::NumericError;

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_binary_expression() {
        let calc = Calculation::compute(d("2.50"), Some(d("1")), Operation::Add).unwrap();
        assert_eq!(calc.expression(), "2.5 + 1 = 3.5");

        let calc = Calculation::compute(d("7"), Some(d("2")), Operation::Div).unwrap();
        assert_eq!(calc.expression(), "7 ÷ 2 = 3.5");

        let calc = Calculation::compute(d("3"), Some(d("4")), Operation::Sub).unwrap();
        assert_eq!(calc.expression(), "3 − 4 = -1");
    }

    #[test]
    fn test_unary_expression() {
        let calc = Calculation::compute(d("4"), None, Operation::Sqrt).unwrap();
        assert_eq!(calc.expression(), "√(4) = 2");
        assert_eq!(calc.result, d("2"));
    }

    #[test]
    fn test_unary_drops_second_operand() {
        let calc = Calculation::compute(d("16"), Some(d("9")), Operation::Sqrt).unwrap();
        assert_eq!(calc.b, None);
        assert_eq!(calc.expression(), "√(16) = 4");
    }

    #[test]
    fn test_errors_propagate() {
        assert_eq!(
            Calculation::compute(d("1"), Some(d("0")), Operation::Div),
            Err(NumericError::DivisionByZero)
        );
        assert_eq!(
            Calculation::compute(d("-4"), None, Operation::Sqrt),
            Err(NumericError::InvalidOperand)
        );
    }
}
