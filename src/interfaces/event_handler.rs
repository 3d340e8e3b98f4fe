// ============================================================================
// Event Handler Interface
// Defines the contract for handling record store events
// ============================================================================

use crate::domain::StudentId;
use chrono::{DateTime, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events emitted by the student store after each mutation
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StoreEvent {
    /// Record appended with a freshly assigned id
    Created {
        student_id: StudentId,
        timestamp: DateTime<Utc>,
    },

    /// Record replaced in place
    Updated {
        student_id: StudentId,
        timestamp: DateTime<Utc>,
    },

    /// Record removed
    Deleted {
        student_id: StudentId,
        timestamp: DateTime<Utc>,
    },
}

impl StoreEvent {
    pub fn student_id(&self) -> StudentId {
        match self {
            StoreEvent::Created { student_id, .. }
            | StoreEvent::Updated { student_id, .. }
            | StoreEvent::Deleted { student_id, .. } => *student_id,
        }
    }
}

/// Event handler trait for observing store mutations
/// Implementations can handle logging, auditing, notifications, etc.
pub trait EventHandler: Send + Sync {
    /// Handle a store event
    fn on_event(&self, event: StoreEvent);
}

/// No-op event handler for testing
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: StoreEvent) {
        // Do nothing
    }
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: StoreEvent) {
        tracing::debug!(student_id = %event.student_id(), "student store event: {:?}", event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_handler() {
        let handler = NoOpEventHandler;
        handler.on_event(StoreEvent::Created {
            student_id: StudentId::new(1),
            timestamp: Utc::now(),
        });
        // Should not panic
    }

    #[test]
    fn test_event_student_id() {
        let event = StoreEvent::Deleted {
            student_id: StudentId::new(7),
            timestamp: Utc::now(),
        };
        assert_eq!(event.student_id(), StudentId::new(7));
    }
}
