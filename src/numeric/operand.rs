// ============================================================================
// Operand
// Bounded arbitrary-precision decimal accepted by the calculator
// ============================================================================

use super::errors::{NumericError, NumericResult};
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A decimal operand with bounded precision.
///
/// Mirrors a `decimal(max_digits = 30, decimal_places = 10)` column:
/// - at most 30 significant digits in total
/// - at most 10 digits after the decimal point
/// - therefore at most 20 digits before the decimal point
///
/// Trailing fractional zeros do not count, so `1.500000000000` is accepted.
///
/// # Example
/// ```
/// use student_calc::numeric::Operand;
///
/// let a: Operand = "12.5".parse().unwrap();
/// assert_eq!(a.to_string(), "12.5");
/// assert!("0.12345678901".parse::<Operand>().is_err()); // 11 decimals
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Decimal", into = "Decimal"))]
#[repr(transparent)]
pub struct Operand(Decimal);

impl Operand {
    /// Maximum number of significant digits
    pub const MAX_DIGITS: u32 = 30;

    /// Maximum number of fractional digits
    pub const MAX_DECIMAL_PLACES: u32 = 10;

    /// Validate a decimal against the operand bounds.
    ///
    /// # Errors
    /// Returns `PrecisionLoss` if any digit bound is exceeded.
    pub fn new(value: Decimal) -> NumericResult<Self> {
        let normalized = value.normalize();
        let decimals = normalized.scale();
        let digits = count_digits(normalized.mantissa().unsigned_abs()).max(decimals);
        let whole_digits = digits - decimals;

        if digits > Self::MAX_DIGITS
            || decimals > Self::MAX_DECIMAL_PLACES
            || whole_digits > Self::MAX_DIGITS - Self::MAX_DECIMAL_PLACES
        {
            return Err(NumericError::PrecisionLoss);
        }

        Ok(Self(value))
    }

    /// The underlying decimal value.
    #[inline]
    pub const fn value(self) -> Decimal {
        self.0
    }
}

/// Parse a decimal literal in plain (`12.5`) or scientific (`1.25e1`) notation.
///
/// No digit bounds are applied; use [`Operand`] for bounded input.
///
/// # Errors
/// Returns `InvalidInput` for empty or malformed text, for digit-group
/// separators (`1_000`) and for values outside the decimal range.
pub fn parse_decimal(s: &str) -> NumericResult<Decimal> {
    let s = s.trim();
    if s.is_empty() || s.contains('_') {
        return Err(NumericError::InvalidInput);
    }

    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .map_err(|_| NumericError::InvalidInput)
}

fn count_digits(mut n: u128) -> u32 {
    let mut digits = 1;
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    digits
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl TryFrom<Decimal> for Operand {
    type Error = NumericError;

    fn try_from(value: Decimal) -> NumericResult<Self> {
        Self::new(value)
    }
}

impl From<Operand> for Decimal {
    fn from(operand: Operand) -> Self {
        operand.0
    }
}

impl FromStr for Operand {
    type Err = NumericError;

    fn from_str(s: &str) -> NumericResult<Self> {
        parse_decimal(s).and_then(Self::new)
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}
