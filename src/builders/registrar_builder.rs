//! Builder that assembles a [`Registrar`] from configuration.

use crate::config::RegistrarConfig;
use crate::core::{share_audit_sink, AuditSink, RegistrationError, SharedAuditSink};
use crate::registration::{Course, Registrar};

/// Collects configuration, an audit sink, courses and students, then builds
/// a registrar in one validated step.
#[derive(Default)]
pub struct RegistrarBuilder {
    config: RegistrarConfig,
    audit: Option<SharedAuditSink>,
    courses: Vec<(Course, usize)>,
    students: Vec<(String, u32)>,
}

impl RegistrarBuilder {
    /// Start from `config`.
    #[must_use]
    pub fn new(config: RegistrarConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Audit every roster the registrar creates.
    #[must_use]
    pub fn with_audit(mut self, audit: Box<dyn AuditSink>) -> Self {
        self.audit = Some(share_audit_sink(audit));
        self
    }

    /// Add a catalog course with its enrollment cap.
    #[must_use]
    pub fn with_course(mut self, course: Course, enrollment_cap: usize) -> Self {
        self.courses.push((course, enrollment_cap));
        self
    }

    /// Register a student.
    #[must_use]
    pub fn with_student(mut self, id: impl Into<String>, max_credits: u32) -> Self {
        self.students.push((id.into(), max_credits));
        self
    }

    /// Validate the configuration and build the registrar.
    pub fn build(self) -> Result<Registrar, RegistrationError> {
        let mut registrar = Registrar::new(self.config)?;
        if let Some(audit) = self.audit {
            registrar = registrar.with_audit(audit);
        }
        for (course, cap) in self.courses {
            registrar.add_course(course, cap)?;
        }
        for (id, max_credits) in self.students {
            registrar.add_student(&id, max_credits)?;
        }
        tracing::info!(
            courses = registrar.course_count(),
            students = registrar.student_count(),
            "registrar built"
        );
        Ok(registrar)
    }
}
