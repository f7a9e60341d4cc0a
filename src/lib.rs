//! # Bounded Roster
//!
//! Capacity-bounded collections and an enrollment engine built on them.
//!
//! The crate has three layers:
//!
//! - **Collections**: array- and node-backed lists with a logical capacity
//!   ceiling that reject absent and duplicate values, plus queue and stack
//!   adapters over either backend, a sorted list and a reorderable swap list.
//! - **Core**: an [`EnrollmentRoster`](core::EnrollmentRoster) that seats
//!   entities up to a cap, overflows into a FIFO waitlist and promotes the
//!   waitlist head when a seat frees up, and a
//!   [`ConflictAwareSchedule`](core::ConflictAwareSchedule) that refuses items
//!   whose meeting windows overlap.
//! - **Registration**: a [`Registrar`](registration::Registrar) context that
//!   owns a course catalog, one roster per course and the student directory.
//!
//! ## Parking and Promotion
//!
//! ```rust
//! use bounded_roster::config::RegistrarConfig;
//! use bounded_roster::core::{EnrollmentStatus, Meeting};
//! use bounded_roster::registration::{Course, Registrar};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut registrar = Registrar::new(RegistrarConfig::default())?;
//! let course = Course::new("CSC216", "Software Development", "001", 3, None,
//!     Meeting::parse("MW", 1330, 1445)?)?;
//! registrar.add_course(course, 10)?;
//!
//! for i in 0..11 {
//!     registrar.add_student(&format!("s{i}"), 18)?;
//! }
//! for i in 0..10 {
//!     assert_eq!(registrar.enroll(&format!("s{i}"), "CSC216", "001")?, EnrollmentStatus::Enrolled);
//! }
//! assert_eq!(registrar.enroll("s10", "CSC216", "001")?, EnrollmentStatus::Waitlisted);
//!
//! registrar.drop("s0", "CSC216", "001")?;
//! assert_eq!(registrar.student("s10")?.schedule().len(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! Logging goes through `tracing`; call [`util::init_tracing`] to install a
//! default subscriber.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Core enrollment abstractions, audit and error types.
pub mod core;
/// Capacity-bounded sequential containers.
pub mod collections;
/// Configuration models for rosters and the registrar.
pub mod config;
/// Builders to construct a registrar from configuration.
pub mod builders;
/// Course registration: catalog, students and request models.
pub mod registration;
/// Shared utilities.
pub mod util;
