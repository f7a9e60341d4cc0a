//! Catalog course.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{Meeting, RegistrationError, Schedulable};

/// Smallest credit value a course may carry.
pub const MIN_CREDITS: u32 = 1;
/// Largest credit value a course may carry.
pub const MAX_CREDITS: u32 = 5;

/// A section of a course offered in the catalog.
///
/// Equality and ordering use name then section. On a schedule, two sections of
/// the same course count as duplicates because the schedule keys on name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    name: String,
    title: String,
    section: String,
    credits: u32,
    instructor_id: Option<String>,
    meeting: Meeting,
}

impl Course {
    /// Build and validate a course.
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        section: impl Into<String>,
        credits: u32,
        instructor_id: Option<String>,
        meeting: Meeting,
    ) -> Result<Self, RegistrationError> {
        let course = Self {
            name: name.into(),
            title: title.into(),
            section: section.into(),
            credits,
            instructor_id,
            meeting,
        };
        course.validate()?;
        Ok(course)
    }

    /// Check field rules, meeting included. Deserialized courses should be
    /// validated before use.
    pub fn validate(&self) -> Result<(), RegistrationError> {
        if self.name.trim().is_empty() {
            return Err(RegistrationError::InvalidCourse("empty name".into()));
        }
        if self.title.trim().is_empty() {
            return Err(RegistrationError::InvalidCourse("empty title".into()));
        }
        if self.section.len() != 3 || !self.section.bytes().all(|b| b.is_ascii_digit()) {
            return Err(RegistrationError::InvalidCourse(format!(
                "section `{}` must be three digits",
                self.section
            )));
        }
        if !(MIN_CREDITS..=MAX_CREDITS).contains(&self.credits) {
            return Err(RegistrationError::InvalidCredits {
                value: self.credits,
                min: MIN_CREDITS,
                max: MAX_CREDITS,
            });
        }
        self.meeting.validate()?;
        Ok(())
    }

    /// Course name, e.g. `CSC216`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Course title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Three-digit section.
    #[must_use]
    pub fn section(&self) -> &str {
        &self.section
    }

    /// Credit hours.
    #[must_use]
    pub const fn credits(&self) -> u32 {
        self.credits
    }

    /// Assigned instructor, if any.
    #[must_use]
    pub fn instructor_id(&self) -> Option<&str> {
        self.instructor_id.as_deref()
    }

    /// Assign or clear the instructor.
    pub fn set_instructor_id(&mut self, instructor_id: Option<String>) {
        self.instructor_id = instructor_id;
    }

    /// Whether this is the course `name`, section `section`.
    #[must_use]
    pub fn is(&self, name: &str, section: &str) -> bool {
        self.name == name && self.section == section
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.name, self.section)
    }
}

impl PartialEq for Course {
    fn eq(&self, other: &Self) -> bool {
        self.is(&other.name, &other.section)
    }
}

impl Eq for Course {}

impl PartialOrd for Course {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Course {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name
            .cmp(&other.name)
            .then_with(|| self.section.cmp(&other.section))
    }
}

impl Schedulable for Course {
    type Identity = str;

    fn identity(&self) -> &str {
        &self.name
    }

    fn meeting(&self) -> &Meeting {
        &self.meeting
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScheduleError;

    fn course(name: &str, section: &str, credits: u32) -> Result<Course, RegistrationError> {
        Course::new(
            name,
            "Software Development Fundamentals",
            section,
            credits,
            Some("sesmith5".into()),
            Meeting::parse("MW", 1330, 1445).unwrap(),
        )
    }

    #[test]
    fn test_validation() {
        assert!(course("CSC216", "001", 3).is_ok());
        assert!(matches!(
            course("CSC216", "001", 0),
            Err(RegistrationError::InvalidCredits { value: 0, .. })
        ));
        assert!(course("CSC216", "001", 6).is_err());
        assert!(course("CSC216", "01", 3).is_err());
        assert!(course("CSC216", "0a1", 3).is_err());
        assert!(course("", "001", 3).is_err());
    }

    #[test]
    fn test_order_and_equality_by_name_then_section() {
        let a = course("CSC216", "002", 3).unwrap();
        let b = course("CSC216", "001", 4).unwrap();
        let c = course("CSC116", "003", 3).unwrap();
        assert!(c < b && b < a);
        assert_eq!(b, course("CSC216", "001", 3).unwrap());
        assert_eq!(a.to_string(), "CSC216-002");
        assert_eq!(a.identity(), b.identity());
    }

    #[test]
    fn test_deserialized_meeting_is_checked() {
        let json = |days: &str, start: u16, end: u16| {
            format!(
                r#"{{"name":"CSC216","title":"Title","section":"001","credits":3,"instructor_id":null,"meeting":{{"Scheduled":{{"days":"{days}","start":{start},"end":{end}}}}}}}"#
            )
        };
        assert!(serde_json::from_str::<Course>(&json("MW", 1500, 900)).is_err());
        assert!(serde_json::from_str::<Course>(&json("MW", 2575, 9999)).is_err());

        // Zero times pass the window check but not the meeting rules.
        let zero: Course = serde_json::from_str(&json("MW", 0, 900)).unwrap();
        assert!(matches!(
            zero.validate(),
            Err(RegistrationError::Schedule(ScheduleError::InvalidMeeting(_)))
        ));

        let ok: Course = serde_json::from_str(&json("MW", 900, 1015)).unwrap();
        assert!(ok.validate().is_ok());
        assert_eq!(ok.meeting().to_string(), "MW 9:00AM-10:15AM");
    }
}
