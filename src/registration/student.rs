//! Student handle with a shared schedule.

use std::fmt;
use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use crate::core::{ConflictAwareSchedule, Enrollee, RegistrationError, ScheduleError};
use crate::registration::Course;

/// Cloneable handle to a registered student.
///
/// Clones share the same schedule, so a roster holding a clone can attach a
/// course on promotion and the registrar sees it. Equality is by id.
#[derive(Clone)]
pub struct Student {
    id: Arc<str>,
    max_credits: u32,
    schedule: Arc<Mutex<ConflictAwareSchedule<Course>>>,
}

impl Student {
    /// New student with an empty schedule. Credit bounds are checked by the registrar.
    #[must_use]
    pub fn new(id: impl Into<Arc<str>>, max_credits: u32) -> Self {
        Self {
            id: id.into(),
            max_credits,
            schedule: Arc::new(Mutex::new(ConflictAwareSchedule::new())),
        }
    }

    /// Student id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Credit ceiling.
    #[must_use]
    pub const fn max_credits(&self) -> u32 {
        self.max_credits
    }

    /// Lock the schedule.
    pub fn schedule(&self) -> MutexGuard<'_, ConflictAwareSchedule<Course>> {
        self.schedule.lock()
    }

    /// Credits currently on the schedule.
    #[must_use]
    pub fn scheduled_credits(&self) -> u32 {
        self.schedule().iter().map(Course::credits).sum()
    }

    /// Why `course` cannot go on the schedule, if it cannot.
    pub fn check_can_add(&self, course: &Course) -> Result<(), RegistrationError> {
        let schedule = self.schedule();
        if !schedule.can_add(course) {
            return Err(RegistrationError::CannotAdd(format!(
                "{course} is a duplicate of or conflicts with a scheduled course"
            )));
        }
        let total: u32 = schedule.iter().map(Course::credits).sum::<u32>() + course.credits();
        if total > self.max_credits {
            return Err(RegistrationError::CannotAdd(format!(
                "{course} would raise credits to {total}, above {}",
                self.max_credits
            )));
        }
        Ok(())
    }

    /// Whether `course` can go on the schedule.
    #[must_use]
    pub fn can_add(&self, course: &Course) -> bool {
        self.check_can_add(course).is_ok()
    }
}

impl PartialEq for Student {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Student {}

impl fmt::Debug for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Student")
            .field("id", &self.id)
            .field("max_credits", &self.max_credits)
            .finish_non_exhaustive()
    }
}

impl Enrollee for Student {
    type Course = Course;

    fn attach_to_schedule(&self, course: &Course) -> Result<(), ScheduleError> {
        let mut schedule = self.schedule();
        let total = schedule.iter().map(Course::credits).sum::<u32>() + course.credits();
        if total > self.max_credits {
            return Err(ScheduleError::CreditLimit(self.max_credits));
        }
        schedule.add(course.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Meeting;

    fn course(name: &str, days: &str, start: u16, end: u16, credits: u32) -> Course {
        Course::new(
            name,
            "Title",
            "001",
            credits,
            None,
            Meeting::parse(days, start, end).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_clones_share_schedule() {
        let student = Student::new("zking", 18);
        let handle = student.clone();
        handle
            .attach_to_schedule(&course("CSC216", "MW", 900, 1000, 3))
            .unwrap();
        assert_eq!(student.schedule().len(), 1);
        assert_eq!(student.scheduled_credits(), 3);
        assert_eq!(student, handle);
    }

    #[test]
    fn test_credit_ceiling() {
        let student = Student::new("zking", 4);
        student
            .attach_to_schedule(&course("CSC216", "MW", 900, 1000, 3))
            .unwrap();
        let heavy = course("MA141", "TH", 900, 1000, 2);
        assert!(!student.can_add(&heavy));
        assert!(matches!(
            student.check_can_add(&heavy),
            Err(RegistrationError::CannotAdd(_))
        ));
        assert!(student.attach_to_schedule(&heavy).is_err());
        assert!(student.can_add(&course("HESF101", "A", 0, 0, 1)));
    }

    #[test]
    fn test_conflict_blocks_add() {
        let student = Student::new("zking", 18);
        student
            .attach_to_schedule(&course("CSC216", "MW", 900, 1000, 3))
            .unwrap();
        assert!(!student.can_add(&course("MA141", "W", 1000, 1100, 3)));
        assert!(student.can_add(&course("MA141", "W", 1001, 1100, 3)));
    }
}
