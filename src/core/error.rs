//! Error types for collections, rosters, schedules, and registration.

use thiserror::Error;

/// Errors produced by the bounded collections.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectionError {
    /// An absent value was offered for storage.
    #[error("null value")]
    NullValue,
    /// An equal element is already stored.
    #[error("duplicate value")]
    DuplicateValue,
    /// Index outside the valid range for the operation.
    #[error("index {index} out of range for size {size}")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Size of the container at the time of the call.
        size: usize,
    },
    /// The container is at its logical capacity.
    #[error("capacity exceeded: {capacity}")]
    CapacityExceeded {
        /// Capacity that was hit.
        capacity: usize,
    },
    /// Requested capacity is smaller than the current size.
    #[error("invalid capacity {requested} for size {size}")]
    InvalidCapacity {
        /// Requested capacity.
        requested: usize,
        /// Size of the container at the time of the call.
        size: usize,
    },
    /// Dequeue or pop on an empty container.
    #[error("container is empty")]
    EmptyContainer,
}

/// Errors produced by an enrollment roster.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    /// No entity was supplied.
    #[error("null entity")]
    NullEntity,
    /// The entity already holds a seat.
    #[error("already enrolled")]
    AlreadyEnrolled,
    /// The entity is already on the waitlist.
    #[error("already waitlisted")]
    AlreadyWaitlisted,
    /// Roster and waitlist are both full.
    #[error("no room in roster or waitlist")]
    NoRoom,
    /// The entity is neither enrolled nor waitlisted.
    #[error("entity not found")]
    NotFound,
    /// Enrollment cap outside the configured bounds or below the roster size.
    #[error("invalid enrollment cap {requested} (allowed {min}..={max}, enrolled {enrolled})")]
    InvalidCapacity {
        /// Requested cap.
        requested: usize,
        /// Lower bound.
        min: usize,
        /// Upper bound.
        max: usize,
        /// Current roster size.
        enrolled: usize,
    },
    /// A backing collection rejected an operation the roster had already validated.
    #[error("roster invariant violated: {0}")]
    Internal(#[from] CollectionError),
}

/// Errors produced by a conflict-aware schedule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// No item was supplied.
    #[error("null item")]
    NullItem,
    /// An item with the same identity is already scheduled.
    #[error("already scheduled: {0}")]
    DuplicateItem(String),
    /// The item's meeting window overlaps an existing item.
    #[error("schedule conflict with {0}")]
    ScheduleConflict(String),
    /// Meeting days or times are malformed.
    #[error("invalid meeting days and times: {0}")]
    InvalidMeeting(String),
    /// Adding the item would exceed the owner's credit ceiling.
    #[error("credit limit {0} exceeded")]
    CreditLimit(u32),
    /// Schedule titles cannot be empty.
    #[error("invalid schedule title")]
    InvalidTitle,
    /// A backing collection rejected an operation the schedule had already validated.
    #[error("schedule invariant violated: {0}")]
    Internal(#[from] CollectionError),
}

/// Errors produced by the registrar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// No course with the given name and section.
    #[error("unknown course {name}-{section}")]
    UnknownCourse {
        /// Course name.
        name: String,
        /// Course section.
        section: String,
    },
    /// No student with the given id.
    #[error("unknown student {0}")]
    UnknownStudent(String),
    /// A course with the same name and section is already in the catalog.
    #[error("duplicate course {name}-{section}")]
    DuplicateCourse {
        /// Course name.
        name: String,
        /// Course section.
        section: String,
    },
    /// A student with the same id is already registered.
    #[error("duplicate student {0}")]
    DuplicateStudent(String),
    /// Credit value outside the allowed range.
    #[error("invalid credits {value} (allowed {min}..={max})")]
    InvalidCredits {
        /// Offered value.
        value: u32,
        /// Lower bound.
        min: u32,
        /// Upper bound.
        max: u32,
    },
    /// Course fields failed validation.
    #[error("invalid course: {0}")]
    InvalidCourse(String),
    /// Registrar configuration failed validation.
    #[error("config invalid: {0}")]
    InvalidConfig(String),
    /// The student's schedule cannot take the course.
    #[error("cannot add course: {0}")]
    CannotAdd(String),
    /// Roster-level failure.
    #[error(transparent)]
    Roster(#[from] RosterError),
    /// Schedule-level failure.
    #[error(transparent)]
    Schedule(#[from] ScheduleError),
    /// Catalog collection failure.
    #[error(transparent)]
    Collection(#[from] CollectionError),
}

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;
