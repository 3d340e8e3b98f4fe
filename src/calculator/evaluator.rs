// ============================================================================
// Arithmetic Evaluator
// Pure dispatch from operation tag to decimal arithmetic
// ============================================================================

use super::Operation;
use crate::numeric::{NumericError, NumericResult};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, MathematicalOps};

/// Evaluate `op` over `a` and the optional second operand `b`.
///
/// All arithmetic stays in `Decimal` (28 significant digits of working
/// precision). `b` is required by every operation except [`Operation::Sqrt`],
/// which ignores it.
///
/// # Errors
/// - `MissingOperand` when a binary operation gets no `b`
/// - `DivisionByZero` for `a ÷ 0` and `0 ^ negative`
/// - `InvalidOperand` for the square root of a negative number
/// - `UndefinedResult` for `0 ^ 0` and a negative base with a fractional exponent
/// - `Overflow` when the result grows past the decimal range. Results that
///   shrink below it round to zero.
///
/// # Example
/// ```
/// use student_calc::calculator::{evaluate, Operation};
/// use rust_decimal::Decimal;
///
/// let r = evaluate(Decimal::from(10), Some(Decimal::from(4)), Operation::Div).unwrap();
/// assert_eq!(r, Decimal::new(25, 1));
/// ```
pub fn evaluate(a: Decimal, b: Option<Decimal>, op: Operation) -> NumericResult<Decimal> {
    match op {
        Operation::Add => a.checked_add(rhs(b)?).ok_or(NumericError::Overflow),
        Operation::Sub => a.checked_sub(rhs(b)?).ok_or(NumericError::Overflow),
        Operation::Mul => a.checked_mul(rhs(b)?).ok_or(NumericError::Overflow),
        Operation::Div => divide(a, rhs(b)?),
        Operation::Pow => power(a, rhs(b)?),
        Operation::Sqrt => square_root(a),
    }
}

#[inline]
fn rhs(b: Option<Decimal>) -> NumericResult<Decimal> {
    b.ok_or(NumericError::MissingOperand)
}

fn divide(a: Decimal, b: Decimal) -> NumericResult<Decimal> {
    if b.is_zero() {
        return Err(NumericError::DivisionByZero);
    }
    a.checked_div(b).ok_or(NumericError::Overflow)
}

fn power(base: Decimal, exponent: Decimal) -> NumericResult<Decimal> {
    if base.is_zero() {
        return if exponent.is_zero() {
            Err(NumericError::UndefinedResult)
        } else if exponent.is_sign_negative() {
            Err(NumericError::DivisionByZero)
        } else {
            Ok(Decimal::ZERO)
        };
    }

    if exponent.fract().is_zero() {
        // Integral exponents are exact repeated multiplication
        if let Some(exp) = exponent.to_i64() {
            return base
                .checked_powi(exp)
                .map_or_else(|| out_of_range(base, exponent), Ok);
        }
        return huge_integral_power(base, exponent);
    }

    if base.is_sign_negative() {
        return Err(NumericError::UndefinedResult);
    }
    base.checked_powd(exponent).map_or_else(|| out_of_range(base, exponent), Ok)
}

/// `base ^ exponent` for an integral exponent outside the `i64` range.
///
/// The magnitude is computed on `|base|`; an odd exponent keeps a negative sign.
fn huge_integral_power(base: Decimal, exponent: Decimal) -> NumericResult<Decimal> {
    let magnitude = if base.abs() == Decimal::ONE {
        Decimal::ONE
    } else {
        match base.abs().checked_powd(exponent) {
            Some(m) => m,
            None => out_of_range(base, exponent)?,
        }
    };

    let odd = !(exponent % Decimal::TWO).is_zero();
    if base.is_sign_negative() && odd && !magnitude.is_zero() {
        Ok(-magnitude)
    } else {
        Ok(magnitude)
    }
}

/// Classify a power that left the decimal range.
///
/// A shrinking magnitude rounds to zero at 28 digits; only growth is `Overflow`.
fn out_of_range(base: Decimal, exponent: Decimal) -> NumericResult<Decimal> {
    let shrinking = (base.abs() < Decimal::ONE) == exponent.is_sign_positive();
    if shrinking {
        Ok(Decimal::ZERO)
    } else {
        Err(NumericError::Overflow)
    }
}

fn square_root(a: Decimal) -> NumericResult<Decimal> {
    if a.is_zero() {
        return Ok(Decimal::ZERO);
    }
    if a.is_sign_negative() {
        return Err(NumericError::InvalidOperand);
    }
    a.sqrt().ok_or(NumericError::Overflow)
}
