//! Roster and registrar configuration structures.

use std::env;
use std::str::FromStr;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::core::AppResult;

/// Enrollment cap bounds and waitlist size applied to every roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    /// Smallest allowed enrollment cap.
    pub min_enrollment_cap: usize,
    /// Largest allowed enrollment cap.
    pub max_enrollment_cap: usize,
    /// Waitlist capacity per roster.
    pub waitlist_capacity: usize,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            min_enrollment_cap: 10,
            max_enrollment_cap: 250,
            waitlist_capacity: 10,
        }
    }
}

impl RosterConfig {
    /// Validate roster configuration values.
    pub fn validate(&self) -> Result<(), String> {
        if self.min_enrollment_cap == 0 {
            return Err("min_enrollment_cap must be greater than 0".into());
        }
        if self.max_enrollment_cap < self.min_enrollment_cap {
            return Err(format!(
                "max_enrollment_cap {} is below min_enrollment_cap {}",
                self.max_enrollment_cap, self.min_enrollment_cap
            ));
        }
        Ok(())
    }
}

/// Root registrar configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrarConfig {
    /// Per-roster settings.
    pub roster: RosterConfig,
    /// Smallest credit load a student may be registered with.
    pub min_student_credits: u32,
    /// Largest credit load a student may be registered with.
    pub max_student_credits: u32,
}

impl Default for RegistrarConfig {
    fn default() -> Self {
        Self {
            roster: RosterConfig::default(),
            min_student_credits: 3,
            max_student_credits: 18,
        }
    }
}

impl RegistrarConfig {
    /// Validate the roster section and the credit bounds.
    pub fn validate(&self) -> Result<(), String> {
        self.roster
            .validate()
            .map_err(|e| format!("roster invalid: {e}"))?;
        if self.min_student_credits == 0 {
            return Err("min_student_credits must be greater than 0".into());
        }
        if self.max_student_credits < self.min_student_credits {
            return Err(format!(
                "max_student_credits {} is below min_student_credits {}",
                self.max_student_credits, self.min_student_credits
            ));
        }
        Ok(())
    }

    /// Parse registrar configuration from a JSON string and validate.
    pub fn from_json_str(input: &str) -> Result<Self, String> {
        let cfg: Self = serde_json::from_str(input).map_err(|e| format!("parse error: {e}"))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Build configuration from the process environment, loading `.env` first.
    ///
    /// Unset variables keep their defaults. Recognized variables are
    /// `ROSTER_MIN_CAP`, `ROSTER_MAX_CAP`, `ROSTER_WAITLIST_CAPACITY`,
    /// `STUDENT_MIN_CREDITS` and `STUDENT_MAX_CREDITS`.
    pub fn from_env() -> AppResult<Self> {
        let _ = dotenvy::dotenv();
        let defaults = Self::default();
        let cfg = Self {
            roster: RosterConfig {
                min_enrollment_cap: env_or("ROSTER_MIN_CAP", defaults.roster.min_enrollment_cap)?,
                max_enrollment_cap: env_or("ROSTER_MAX_CAP", defaults.roster.max_enrollment_cap)?,
                waitlist_capacity: env_or(
                    "ROSTER_WAITLIST_CAPACITY",
                    defaults.roster.waitlist_capacity,
                )?,
            },
            min_student_credits: env_or("STUDENT_MIN_CREDITS", defaults.min_student_credits)?,
            max_student_credits: env_or("STUDENT_MAX_CREDITS", defaults.max_student_credits)?,
        };
        cfg.validate().map_err(anyhow::Error::msg)?;
        Ok(cfg)
    }
}

fn env_or<T>(key: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} must be a number, got `{raw}`")),
        Err(_) => Ok(default),
    }
}
