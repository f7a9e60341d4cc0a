//! Registration context: catalog, rosters and student directory.

use std::collections::HashMap;
use std::fmt;

use crate::collections::SortedList;
use crate::config::RegistrarConfig;
use crate::core::{
    DropOutcome, Enrollee, EnrollmentRoster, EnrollmentStatus, RegistrationError, RosterError,
    RosterLimits, RosterSnapshot, SharedAuditSink,
};
use crate::registration::{Course, Student};

type CourseKey = (String, String);

fn key(name: &str, section: &str) -> CourseKey {
    (name.to_string(), section.to_string())
}

/// Owns the course catalog, one roster per catalog course, and every student.
pub struct Registrar {
    config: RegistrarConfig,
    catalog: SortedList<Course>,
    rosters: HashMap<CourseKey, EnrollmentRoster<Student>>,
    students: HashMap<String, Student>,
    audit: Option<SharedAuditSink>,
}

impl fmt::Debug for Registrar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registrar")
            .field("config", &self.config)
            .field("courses", &self.catalog.len())
            .field("students", &self.students.len())
            .field("audit", &self.audit.is_some())
            .finish()
    }
}

impl Registrar {
    /// Empty registrar. Fails if `config` does not validate.
    pub fn new(config: RegistrarConfig) -> Result<Self, RegistrationError> {
        config.validate().map_err(RegistrationError::InvalidConfig)?;
        Ok(Self {
            config,
            catalog: SortedList::new(),
            rosters: HashMap::new(),
            students: HashMap::new(),
            audit: None,
        })
    }

    /// Audit roster activity for courses added from now on.
    #[must_use]
    pub fn with_audit(mut self, audit: SharedAuditSink) -> Self {
        self.audit = Some(audit);
        self
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &RegistrarConfig {
        &self.config
    }

    /// Catalog in name-then-section order.
    pub fn catalog(&self) -> impl Iterator<Item = &Course> + '_ {
        self.catalog.iter()
    }

    /// Look up a catalog course.
    pub fn course(&self, name: &str, section: &str) -> Result<&Course, RegistrationError> {
        self.catalog
            .find(|course| course.is(name, section))
            .ok_or_else(|| unknown_course(name, section))
    }

    /// Look up a student.
    pub fn student(&self, id: &str) -> Result<&Student, RegistrationError> {
        self.students
            .get(id)
            .ok_or_else(|| RegistrationError::UnknownStudent(id.to_string()))
    }

    /// Roster for a catalog course.
    pub fn roster(
        &self,
        name: &str,
        section: &str,
    ) -> Result<&EnrollmentRoster<Student>, RegistrationError> {
        self.rosters
            .get(&key(name, section))
            .ok_or_else(|| unknown_course(name, section))
    }

    /// Number of catalog courses.
    #[must_use]
    pub fn course_count(&self) -> usize {
        self.catalog.len()
    }

    /// Number of registered students.
    #[must_use]
    pub fn student_count(&self) -> usize {
        self.students.len()
    }

    /// Add `course` to the catalog with a roster capped at `enrollment_cap`.
    pub fn add_course(
        &mut self,
        course: Course,
        enrollment_cap: usize,
    ) -> Result<(), RegistrationError> {
        course.validate()?;
        if self.catalog.contains(&course) {
            return Err(RegistrationError::DuplicateCourse {
                name: course.name().to_string(),
                section: course.section().to_string(),
            });
        }
        let limits = RosterLimits::from(&self.config.roster);
        let mut roster = EnrollmentRoster::new(course.clone(), enrollment_cap, limits)?;
        if let Some(audit) = self.audit.clone() {
            roster = roster.with_shared_audit(audit);
        }
        let course_key = key(course.name(), course.section());
        tracing::info!(course = %course, enrollment_cap, "course added");
        self.catalog.add(course)?;
        self.rosters.insert(course_key, roster);
        Ok(())
    }

    /// Remove a course, detaching it from every enrolled student's schedule.
    /// Returns whether the course existed.
    pub fn remove_course(&mut self, name: &str, section: &str) -> bool {
        let Some(course) = self.catalog.remove_where(|course| course.is(name, section)) else {
            return false;
        };
        if let Some(roster) = self.rosters.remove(&key(name, section)) {
            for student in roster.enrolled() {
                student.schedule().remove(&course);
            }
        }
        tracing::info!(course = %course, "course removed");
        true
    }

    /// Change a course's enrollment cap.
    pub fn set_enrollment_cap(
        &mut self,
        name: &str,
        section: &str,
        cap: usize,
    ) -> Result<(), RegistrationError> {
        let roster = self
            .rosters
            .get_mut(&key(name, section))
            .ok_or_else(|| unknown_course(name, section))?;
        roster.set_enrollment_cap(cap)?;
        Ok(())
    }

    /// Register a student with the given credit ceiling.
    pub fn add_student(
        &mut self,
        id: &str,
        max_credits: u32,
    ) -> Result<Student, RegistrationError> {
        let (min, max) = (self.config.min_student_credits, self.config.max_student_credits);
        if !(min..=max).contains(&max_credits) {
            return Err(RegistrationError::InvalidCredits {
                value: max_credits,
                min,
                max,
            });
        }
        if self.students.contains_key(id) {
            return Err(RegistrationError::DuplicateStudent(id.to_string()));
        }
        let student = Student::new(id, max_credits);
        self.students.insert(id.to_string(), student.clone());
        tracing::debug!(student = id, max_credits, "student added");
        Ok(student)
    }

    /// Enroll a student, or waitlist them when the course is full.
    ///
    /// The course goes on the student's schedule only when a seat is taken;
    /// waitlisted students receive it on promotion.
    pub fn enroll(
        &mut self,
        student_id: &str,
        name: &str,
        section: &str,
    ) -> Result<EnrollmentStatus, RegistrationError> {
        let student = self.student(student_id)?.clone();
        let course = self.course(name, section)?.clone();
        let roster = self
            .rosters
            .get_mut(&key(name, section))
            .ok_or_else(|| unknown_course(name, section))?;
        if roster.is_enrolled(&student) {
            return Err(RosterError::AlreadyEnrolled.into());
        }
        if roster.is_waitlisted(&student) {
            return Err(RosterError::AlreadyWaitlisted.into());
        }
        if let Err(err) = student.check_can_add(&course) {
            tracing::debug!(student = student_id, course = %course, "enrollment refused: {}", err);
            return Err(err);
        }
        let status = roster.enroll(student.clone())?;
        if status == EnrollmentStatus::Enrolled {
            student.attach_to_schedule(&course)?;
        }
        Ok(status)
    }

    /// Drop a student from a course's roster or waitlist and detach the course.
    pub fn drop(
        &mut self,
        student_id: &str,
        name: &str,
        section: &str,
    ) -> Result<DropOutcome<Student>, RegistrationError> {
        let student = self.student(student_id)?.clone();
        let roster = self
            .rosters
            .get_mut(&key(name, section))
            .ok_or_else(|| unknown_course(name, section))?;
        let outcome = roster.drop(&student)?;
        student.schedule().remove(roster.course());
        Ok(outcome)
    }

    /// Withdraw a student from every roster and waitlist and clear their
    /// schedule. Returns how many rosters they left.
    pub fn reset_schedule(&mut self, student_id: &str) -> Result<usize, RegistrationError> {
        let student = self.student(student_id)?.clone();
        let mut left = 0;
        for course in self.catalog.iter() {
            let Some(roster) = self.rosters.get_mut(&key(course.name(), course.section())) else {
                continue;
            };
            if roster.is_enrolled(&student) || roster.is_waitlisted(&student) {
                roster.drop(&student)?;
                left += 1;
            }
        }
        student.schedule().reset();
        tracing::info!(student = student_id, rosters = left, "schedule reset");
        Ok(left)
    }

    /// Occupancy of every roster, in catalog order.
    #[must_use]
    pub fn snapshots(&self) -> Vec<RosterSnapshot> {
        self.catalog
            .iter()
            .filter_map(|course| self.rosters.get(&key(course.name(), course.section())))
            .map(EnrollmentRoster::snapshot)
            .collect()
    }
}

fn unknown_course(name: &str, section: &str) -> RegistrationError {
    RegistrationError::UnknownCourse {
        name: name.to_string(),
        section: section.to_string(),
    }
}
