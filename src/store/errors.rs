// ============================================================================
// Store Errors
// ============================================================================

use crate::domain::StudentId;
use std::fmt;

/// Errors returned by [`super::StudentStore`] lookups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreError {
    /// No record carries the requested id
    NotFound(StudentId),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NotFound(_) => write!(f, "Student not found"),
        }
    }
}

impl std::error::Error for StoreError {}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            StoreError::NotFound(StudentId::new(3)).to_string(),
            "Student not found"
        );
    }
}
