// ============================================================================
// Store Module
// In-memory student record storage
// ============================================================================

mod errors;
mod student_store;

pub use errors::{StoreError, StoreResult};
pub use student_store::StudentStore;
