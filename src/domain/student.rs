// ============================================================================
// Student Domain Model
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Value Objects
// ============================================================================

/// Sequential student identifier, assigned by the store starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct StudentId(u64);

impl StudentId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for StudentId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Entities
// ============================================================================

/// Client-supplied student fields.
///
/// Used for both create and full replacement. An `id` field in an incoming
/// body is ignored; the store owns identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NewStudent {
    pub name: String,
    pub age: u32,
    pub grade: String,
}

impl NewStudent {
    pub fn new(name: impl Into<String>, age: u32, grade: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            grade: grade.into(),
        }
    }

    /// Attach an identifier, producing a stored record.
    pub fn with_id(self, id: StudentId) -> Student {
        Student {
            id,
            name: self.name,
            age: self.age,
            grade: self.grade,
        }
    }
}

/// A stored student record.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub age: u32,
    pub grade: String,
}
