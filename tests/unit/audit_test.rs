//! Tests for audit sink

use bounded_roster::core::{build_audit_event, AuditAction, AuditSink, InMemoryAuditSink};

#[test]
fn test_in_memory_audit_sink() {
    let mut sink = InMemoryAuditSink::new(10);

    let event = build_audit_event(
        "s1",
        "CSC216-001",
        AuditAction::Enroll,
        Some("seat 1".to_string()),
    );

    sink.record(event.clone());
    assert_eq!(sink.events().len(), 1);

    let events = sink.events();
    assert_eq!(events[0].event_id, event.event_id);
    assert_eq!(events[0].entity, "s1");
    assert_eq!(events[0].action, AuditAction::Enroll);
}

#[test]
fn test_audit_sink_overflow() {
    let mut sink = InMemoryAuditSink::new(2);

    sink.record(build_audit_event("s1", "r", AuditAction::Enroll, None));
    sink.record(build_audit_event("s2", "r", AuditAction::Waitlist, None));
    sink.record(build_audit_event("s3", "r", AuditAction::Waitlist, None));

    let events = sink.events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].entity, "s2");
    assert_eq!(events[1].entity, "s3");
}

#[test]
fn test_build_audit_event() {
    let event = build_audit_event(
        "s1",
        "CSC216-001",
        AuditAction::Promote,
        Some("schedule rejected course".to_string()),
    );

    assert_eq!(event.roster, "CSC216-001");
    assert_eq!(event.action, AuditAction::Promote);
    assert_eq!(event.detail, Some("schedule rejected course".to_string()));
    assert!(event.created_at_ms > 0);
    assert!(uuid::Uuid::parse_str(&event.event_id).is_ok());
}

#[test]
fn test_audit_event_serializes_action_snake_case() {
    let event = build_audit_event("s1", "r", AuditAction::LeaveWaitlist, None);
    let json = serde_json::to_value(&event).unwrap();
    assert_eq!(json["action"], "leave_waitlist");
}
