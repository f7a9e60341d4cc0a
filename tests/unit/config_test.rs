//! Tests for configuration validation

use bounded_roster::config::{RegistrarConfig, RosterConfig};

#[test]
fn test_roster_config_defaults() {
    let cfg = RosterConfig::default();
    assert_eq!(cfg.min_enrollment_cap, 10);
    assert_eq!(cfg.max_enrollment_cap, 250);
    assert_eq!(cfg.waitlist_capacity, 10);
    assert!(cfg.validate().is_ok());
}

#[test]
fn test_roster_config_invalid_min() {
    let invalid = RosterConfig {
        min_enrollment_cap: 0,
        ..RosterConfig::default()
    };
    assert!(invalid.validate().is_err());
}

#[test]
fn test_roster_config_zero_waitlist_is_valid() {
    let cfg = RosterConfig {
        waitlist_capacity: 0,
        ..RosterConfig::default()
    };
    assert!(cfg.validate().is_ok());
}

#[test]
fn test_registrar_config_from_json() {
    let json = r#"{
        "roster": { "min_enrollment_cap": 2, "max_enrollment_cap": 40, "waitlist_capacity": 3 },
        "max_student_credits": 21
    }"#;
    let cfg = RegistrarConfig::from_json_str(json).unwrap();
    assert_eq!(cfg.roster.max_enrollment_cap, 40);
    assert_eq!(cfg.min_student_credits, 3);
    assert_eq!(cfg.max_student_credits, 21);
}

#[test]
fn test_registrar_config_from_json_rejects_bad_input() {
    assert!(RegistrarConfig::from_json_str("not json")
        .unwrap_err()
        .starts_with("parse error"));
    let json = r#"{ "min_student_credits": 10, "max_student_credits": 5 }"#;
    assert!(RegistrarConfig::from_json_str(json).is_err());
}

#[test]
fn test_registrar_config_round_trips_through_json() {
    let cfg = RegistrarConfig::default();
    let json = serde_json::to_string(&cfg).unwrap();
    assert_eq!(RegistrarConfig::from_json_str(&json).unwrap(), cfg);
}

const ENV_KEYS: [&str; 5] = [
    "ROSTER_MIN_CAP",
    "ROSTER_MAX_CAP",
    "ROSTER_WAITLIST_CAPACITY",
    "STUDENT_MIN_CREDITS",
    "STUDENT_MAX_CREDITS",
];

/// Serializes tests that mutate the roster variables in the process environment.
static ENV_LOCK: parking_lot::Mutex<()> = parking_lot::Mutex::new(());

fn with_env<R>(vars: &[(&str, &str)], body: impl FnOnce() -> R) -> R {
    let _guard = ENV_LOCK.lock();
    for key in ENV_KEYS {
        std::env::remove_var(key);
    }
    for (key, value) in vars {
        std::env::set_var(key, value);
    }
    let result = body();
    for key in ENV_KEYS {
        std::env::remove_var(key);
    }
    result
}

#[test]
fn test_registrar_config_from_env_defaults() {
    let cfg = with_env(&[], RegistrarConfig::from_env).unwrap();
    assert_eq!(cfg, RegistrarConfig::default());
}

#[test]
fn test_registrar_config_from_env_overrides() {
    let cfg = with_env(
        &[
            ("ROSTER_MIN_CAP", "2"),
            ("ROSTER_MAX_CAP", " 40 "),
            ("ROSTER_WAITLIST_CAPACITY", "0"),
            ("STUDENT_MAX_CREDITS", "21"),
        ],
        RegistrarConfig::from_env,
    )
    .unwrap();
    assert_eq!(cfg.roster.min_enrollment_cap, 2);
    assert_eq!(cfg.roster.max_enrollment_cap, 40);
    assert_eq!(cfg.roster.waitlist_capacity, 0);
    assert_eq!(cfg.min_student_credits, 3);
    assert_eq!(cfg.max_student_credits, 21);
}

#[test]
fn test_registrar_config_from_env_rejects_malformed_value() {
    let err = with_env(&[("ROSTER_MAX_CAP", "lots")], RegistrarConfig::from_env).unwrap_err();
    assert!(err.to_string().contains("ROSTER_MAX_CAP must be a number"));
}

#[test]
fn test_registrar_config_from_env_rejects_inverted_bounds() {
    let roster = with_env(
        &[("ROSTER_MIN_CAP", "50"), ("ROSTER_MAX_CAP", "20")],
        RegistrarConfig::from_env,
    );
    assert!(roster.is_err());

    let credits = with_env(
        &[("STUDENT_MIN_CREDITS", "12"), ("STUDENT_MAX_CREDITS", "6")],
        RegistrarConfig::from_env,
    );
    assert!(credits.is_err());
}
