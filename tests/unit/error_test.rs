//! Tests for error types

use bounded_roster::core::{CollectionError, RegistrationError, RosterError, ScheduleError};

#[test]
fn test_collection_error_messages() {
    let err = CollectionError::IndexOutOfRange { index: 3, size: 2 };
    assert_eq!(format!("{}", err), "index 3 out of range for size 2");
    let err = CollectionError::CapacityExceeded { capacity: 5 };
    assert_eq!(format!("{}", err), "capacity exceeded: 5");
}

#[test]
fn test_roster_internal_wraps_collection_error() {
    let err: RosterError = CollectionError::EmptyContainer.into();
    assert_eq!(err, RosterError::Internal(CollectionError::EmptyContainer));
    assert_eq!(format!("{}", err), "roster invariant violated: container is empty");
}

#[test]
fn test_registration_error_is_transparent_for_roster() {
    let err: RegistrationError = RosterError::NoRoom.into();
    assert_eq!(format!("{}", err), "no room in roster or waitlist");
}

#[test]
fn test_schedule_conflict_message() {
    let err = ScheduleError::ScheduleConflict("CSC216".to_string());
    assert_eq!(format!("{}", err), "schedule conflict with CSC216");
}
