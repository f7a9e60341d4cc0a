//! Tests for builder modules

use bounded_roster::builders::RegistrarBuilder;
use bounded_roster::config::{RegistrarConfig, RosterConfig};
use bounded_roster::core::{AuditAction, InMemoryAuditSink, Meeting, RegistrationError};
use bounded_roster::registration::Course;

fn course(name: &str, section: &str) -> Course {
    Course::new(
        name,
        "Title",
        section,
        3,
        None,
        Meeting::parse("MW", 900, 1000).unwrap(),
    )
    .unwrap()
}

#[test]
fn test_builder_registers_courses_and_students() {
    let registrar = RegistrarBuilder::new(RegistrarConfig::default())
        .with_course(course("CSC216", "002"), 20)
        .with_course(course("CSC116", "001"), 10)
        .with_student("zking", 15)
        .build()
        .unwrap();

    assert_eq!(registrar.course_count(), 2);
    assert_eq!(registrar.student_count(), 1);
    let names: Vec<String> = registrar.catalog().map(ToString::to_string).collect();
    assert_eq!(names, vec!["CSC116-001", "CSC216-002"]);
}

#[test]
fn test_builder_rejects_invalid_config() {
    let config = RegistrarConfig {
        roster: RosterConfig {
            min_enrollment_cap: 0,
            ..RosterConfig::default()
        },
        ..RegistrarConfig::default()
    };
    let err = RegistrarBuilder::new(config).build().unwrap_err();
    assert!(matches!(err, RegistrationError::InvalidConfig(_)));
}

#[test]
fn test_builder_propagates_cap_errors() {
    let err = RegistrarBuilder::new(RegistrarConfig::default())
        .with_course(course("CSC216", "001"), 5)
        .build()
        .unwrap_err();
    assert!(matches!(err, RegistrationError::Roster(_)));
}

#[test]
fn test_builder_audit_reaches_rosters() {
    let sink = InMemoryAuditSink::new(8);
    let mut registrar = RegistrarBuilder::new(RegistrarConfig::default())
        .with_audit(Box::new(sink.clone()))
        .with_course(course("CSC216", "001"), 10)
        .with_student("zking", 15)
        .build()
        .unwrap();

    registrar.enroll("zking", "CSC216", "001").unwrap();
    registrar.drop("zking", "CSC216", "001").unwrap();
    assert_eq!(sink.actions(), vec![AuditAction::Enroll, AuditAction::Drop]);
    assert!(sink.events().iter().all(|e| e.roster == "CSC216-001"));
}
