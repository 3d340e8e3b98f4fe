// ============================================================================
// Student & Calculator Services Library
// In-memory student records and an arbitrary-precision decimal calculator
// ============================================================================

//! # Student Calc
//!
//! Two small web services sharing one crate:
//!
//! - **Student API**: CRUD over an in-memory, insertion-ordered record list
//!   with sequential ids, plus server-rendered HTML pages.
//! - **Calculator API**: add, subtract, multiply, divide, power and square
//!   root over `rust_decimal` values, with an HTML form and a JSON endpoint.
//!
//! The arithmetic and the store are plain library code; the `server` feature
//! adds the axum routers and the `student-api` / `calculator-api` binaries.
//!
//! ## Example
//!
//! ```rust
//! use student_calc::prelude::*;
//! use rust_decimal::Decimal;
//!
//! // Evaluate an operation
//! let calc = Calculation::compute(Decimal::from(7), Some(Decimal::from(2)), Operation::Div)
//!     .unwrap();
//! assert_eq!(calc.expression(), "7 ÷ 2 = 3.5");
//!
//! // Errors are typed
//! let err = evaluate(Decimal::from(-1), None, Operation::Sqrt).unwrap_err();
//! assert_eq!(err, NumericError::InvalidOperand);
//!
//! // Store records
//! let store = StudentStore::new();
//! let alice = store.create(NewStudent::new("Alice", 20, "A"));
//! assert_eq!(alice.id, StudentId::new(1));
//! ```

pub mod calculator;
pub mod domain;
pub mod interfaces;
pub mod numeric;
pub mod store;

#[cfg(feature = "server")]
pub mod http;
#[cfg(feature = "logging")]
pub mod logging;

// Re-exports for convenience
pub mod prelude {
    pub use crate::calculator::{evaluate, Calculation, Operation};
    pub use crate::domain::{NewStudent, ServiceConfig, ServiceKind, Student, StudentId};
    pub use crate::interfaces::{EventHandler, LoggingEventHandler, NoOpEventHandler, StoreEvent};
    pub use crate::numeric::{NumericError, NumericResult, Operand};
    pub use crate::store::{StoreError, StoreResult, StudentStore};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_operand_through_evaluator() {
        let a: Operand = "1234567890.0123456789".parse().unwrap();
        let b: Operand = "0.0000000001".parse().unwrap();

        let calc = Calculation::compute(a.value(), Some(b.value()), Operation::Add).unwrap();
        assert_eq!(calc.result.to_string(), "1234567890.012345679");
    }

    #[test]
    fn test_unknown_tag_at_boundary() {
        let op = "percent".parse::<Operation>();
        assert_eq!(op, Err(NumericError::UnknownOperation));
    }

    #[test]
    fn test_store_lifecycle() {
        let store = StudentStore::with_event_handler(std::sync::Arc::new(LoggingEventHandler));

        let alice = store.create(NewStudent::new("Alice", 20, "A"));
        assert_eq!(store.get(StudentId::new(1)), Ok(alice.clone()));

        store.delete(alice.id).unwrap();
        assert_eq!(
            store.get(alice.id),
            Err(StoreError::NotFound(StudentId::new(1)))
        );
        assert!(store.is_empty());
    }

    #[test]
    fn test_sqrt_and_division_by_zero() {
        assert_eq!(
            evaluate(Decimal::from(4), None, Operation::Sqrt),
            Ok(Decimal::from(2))
        );
        assert_eq!(
            evaluate(Decimal::from(3), Some(Decimal::ZERO), Operation::Div),
            Err(NumericError::DivisionByZero)
        );
    }
}
