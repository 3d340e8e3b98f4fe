// ============================================================================
// Calculator Module
// Operation tags, the arithmetic evaluator and rendered calculations
// ============================================================================

mod calculation;
mod evaluator;
mod operation;

pub use calculation::Calculation;
pub use evaluator::evaluate;
pub use operation::Operation;
