//! Core enrollment abstractions: rosters, schedules, auditing and errors.

pub mod audit;
pub mod error;
pub mod roster;
pub mod schedule;

pub use audit::{
    build_audit_event, share_audit_sink, AuditAction, AuditEvent, AuditSink, InMemoryAuditSink,
    SharedAuditSink,
};
pub use error::{AppResult, CollectionError, RegistrationError, RosterError, ScheduleError};
pub use roster::{
    DropOutcome, Enrollee, EnrollmentRoster, EnrollmentStatus, Promotion, RosterLimits,
    RosterSnapshot,
};
pub use schedule::{
    ConflictAwareSchedule, DaySet, Meeting, Schedulable, TimeWindow, Weekday, DEFAULT_TITLE,
};
