// ============================================================================
// Domain Models Module
// Student records and service configuration
// ============================================================================

pub mod config;
pub mod student;

pub use config::{ServiceConfig, ServiceKind};
pub use student::{NewStudent, Student, StudentId};
