//! Course registration built on rosters and conflict-aware schedules.

pub mod api;
pub mod course;
pub mod registrar;
pub mod student;

pub use api::{list_rosters, submit_drop, submit_enrollment, EnrollmentRequest, EnrollmentResponse};
pub use course::Course;
pub use registrar::Registrar;
pub use student::Student;
