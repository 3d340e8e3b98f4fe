// ============================================================================
// Student Store
// In-memory ordered record list with sequential id assignment
// ============================================================================

use super::errors::{StoreError, StoreResult};
use crate::domain::{NewStudent, Student, StudentId};
use crate::interfaces::{EventHandler, NoOpEventHandler, StoreEvent};
use chrono::Utc;
use parking_lot::RwLock;
use std::sync::Arc;

#[derive(Debug, Default)]
struct Records {
    /// Records in insertion order
    students: Vec<Student>,
    /// Last id handed out; ids are never reused
    last_id: u64,
}

/// Thread-safe in-memory student store.
///
/// Lookups are linear scans over the insertion-ordered list. Id assignment
/// and append happen under the same write lock, so concurrent creates never
/// race on ids.
///
/// # Example
/// ```
/// use student_calc::domain::NewStudent;
/// use student_calc::store::StudentStore;
///
/// let store = StudentStore::new();
/// let alice = store.create(NewStudent::new("Alice", 20, "A"));
/// assert_eq!(alice.id.get(), 1);
/// assert_eq!(store.get(alice.id).unwrap().name, "Alice");
/// ```
pub struct StudentStore {
    records: RwLock<Records>,

    /// Event handler notified after every mutation
    event_handler: Arc<dyn EventHandler>,
}

impl StudentStore {
    /// Create an empty store that emits no events
    pub fn new() -> Self {
        Self::with_event_handler(Arc::new(NoOpEventHandler))
    }

    /// Create an empty store that reports mutations to `event_handler`
    pub fn with_event_handler(event_handler: Arc<dyn EventHandler>) -> Self {
        Self {
            records: RwLock::new(Records::default()),
            event_handler,
        }
    }

    /// Append a record under the next sequential id
    pub fn create(&self, new: NewStudent) -> Student {
        let student = {
            let mut records = self.records.write();
            records.last_id += 1;
            let student = new.with_id(StudentId::new(records.last_id));
            records.students.push(student.clone());
            student
        };

        self.event_handler.on_event(StoreEvent::Created {
            student_id: student.id,
            timestamp: Utc::now(),
        });
        student
    }

    /// All records in insertion order
    pub fn list(&self) -> Vec<Student> {
        self.records.read().students.clone()
    }

    pub fn get(&self, id: StudentId) -> StoreResult<Student> {
        self.records
            .read()
            .students
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    /// Replace every field of record `id`, keeping its id and position
    pub fn update(&self, id: StudentId, new: NewStudent) -> StoreResult<Student> {
        let student = {
            let mut records = self.records.write();
            let slot = records
                .students
                .iter_mut()
                .find(|s| s.id == id)
                .ok_or(StoreError::NotFound(id))?;
            *slot = new.with_id(id);
            slot.clone()
        };

        self.event_handler.on_event(StoreEvent::Updated {
            student_id: id,
            timestamp: Utc::now(),
        });
        Ok(student)
    }

    /// Remove record `id` and return it
    pub fn delete(&self, id: StudentId) -> StoreResult<Student> {
        let removed = {
            let mut records = self.records.write();
            let index = records
                .students
                .iter()
                .position(|s| s.id == id)
                .ok_or(StoreError::NotFound(id))?;
            records.students.remove(index)
        };

        self.event_handler.on_event(StoreEvent::Deleted {
            student_id: id,
            timestamp: Utc::now(),
        });
        Ok(removed)
    }

    pub fn len(&self) -> usize {
        self.records.read().students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for StudentStore {
    fn default() -> Self {
        Self::new()
    }
}
