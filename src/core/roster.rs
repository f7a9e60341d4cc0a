//! Capacity-limited enrollment roster with a FIFO waitlist.
//!
//! The roster holds up to `enrollment_cap` entities; overflow goes to a
//! bounded waitlist. Dropping an enrolled entity frees a seat that is filled
//! immediately from the head of the waitlist, and the promoted entity is told
//! about its new seat through [`Enrollee::attach_to_schedule`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::collections::{BoundedQueue, BoundedSequence, LinkedList, Queue};
use crate::config::RosterConfig;
use crate::core::audit::{
    build_audit_event, share_audit_sink, AuditAction, AuditSink, SharedAuditSink,
};
use crate::core::{RosterError, ScheduleError};

/// Entity that can hold a seat on a roster.
pub trait Enrollee: Clone + PartialEq + fmt::Debug {
    /// What the entity enrolls in.
    type Course: fmt::Display;

    /// Record `course` on the entity's own schedule after a waitlist promotion.
    fn attach_to_schedule(&self, course: &Self::Course) -> Result<(), ScheduleError>;
}

/// Bounds applied to a roster's enrollment cap and waitlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterLimits {
    /// Smallest allowed enrollment cap.
    pub min_enrollment_cap: usize,
    /// Largest allowed enrollment cap.
    pub max_enrollment_cap: usize,
    /// Fixed waitlist capacity.
    pub waitlist_capacity: usize,
}

impl Default for RosterLimits {
    fn default() -> Self {
        Self::from(&RosterConfig::default())
    }
}

impl From<&RosterConfig> for RosterLimits {
    fn from(config: &RosterConfig) -> Self {
        Self {
            min_enrollment_cap: config.min_enrollment_cap,
            max_enrollment_cap: config.max_enrollment_cap,
            waitlist_capacity: config.waitlist_capacity,
        }
    }
}

/// Where an accepted enrollment landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnrollmentStatus {
    /// A seat was taken.
    Enrolled,
    /// Appended to the waitlist.
    Waitlisted,
}

/// Waitlisted entity moved into a freed seat.
#[derive(Debug, Clone, PartialEq)]
pub struct Promotion<E> {
    /// The promoted entity.
    pub entity: E,
    /// Whether the entity's schedule accepted the course.
    pub attached: bool,
}

/// Result of a successful drop.
#[derive(Debug, Clone, PartialEq)]
pub enum DropOutcome<E> {
    /// An enrolled entity gave up its seat.
    Withdrawn {
        /// The entity removed from the roster.
        entity: E,
        /// Waitlist head promoted into the freed seat, if any.
        promoted: Option<Promotion<E>>,
    },
    /// A waitlisted entity left the waitlist.
    LeftWaitlist {
        /// The entity removed from the waitlist.
        entity: E,
    },
}

/// Serializable view of a roster's occupancy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterSnapshot {
    /// Display name of the course.
    pub course: String,
    /// Current enrollment cap.
    pub enrollment_cap: usize,
    /// Entities holding a seat.
    pub enrolled: usize,
    /// Free seats.
    pub open_seats: usize,
    /// Entities on the waitlist.
    pub waitlisted: usize,
    /// Waitlist capacity.
    pub waitlist_capacity: usize,
}

/// Roster for one course, generic over the roster backend `R` and the
/// waitlist backend `W`.
pub struct EnrollmentRoster<E, R = LinkedList<E>, W = LinkedList<E>>
where
    E: Enrollee,
{
    course: E::Course,
    limits: RosterLimits,
    enrollment_cap: usize,
    roster: R,
    waitlist: BoundedQueue<W, E>,
    audit: Option<SharedAuditSink>,
}

impl<E, R, W> fmt::Debug for EnrollmentRoster<E, R, W>
where
    E: Enrollee,
    R: BoundedSequence<E>,
    W: BoundedSequence<E>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnrollmentRoster")
            .field("course", &self.course.to_string())
            .field("enrollment_cap", &self.enrollment_cap)
            .field("enrolled", &self.roster.len())
            .field("waitlisted", &self.waitlist.len())
            .finish_non_exhaustive()
    }
}

impl<E, R, W> EnrollmentRoster<E, R, W>
where
    E: Enrollee,
    R: BoundedSequence<E>,
    W: BoundedSequence<E>,
{
    /// Create an empty roster for `course`.
    ///
    /// Fails with `InvalidCapacity` if `enrollment_cap` is outside
    /// `[limits.min_enrollment_cap, limits.max_enrollment_cap]`.
    pub fn new(
        course: E::Course,
        enrollment_cap: usize,
        limits: RosterLimits,
    ) -> Result<Self, RosterError> {
        check_cap(enrollment_cap, &limits, 0)?;
        Ok(Self {
            course,
            limits,
            enrollment_cap,
            roster: R::bounded(enrollment_cap),
            waitlist: BoundedQueue::new(limits.waitlist_capacity),
            audit: None,
        })
    }

    /// Attach an audit sink.
    #[must_use]
    pub fn with_audit(mut self, audit: Box<dyn AuditSink>) -> Self {
        self.audit = Some(share_audit_sink(audit));
        self
    }

    /// Attach an audit sink shared with other rosters.
    #[must_use]
    pub fn with_shared_audit(mut self, audit: SharedAuditSink) -> Self {
        self.audit = Some(audit);
        self
    }

    /// Course this roster belongs to.
    pub const fn course(&self) -> &E::Course {
        &self.course
    }

    /// Current enrollment cap.
    pub const fn enrollment_cap(&self) -> usize {
        self.enrollment_cap
    }

    /// Limits the roster was built with.
    pub const fn limits(&self) -> RosterLimits {
        self.limits
    }

    /// Change the enrollment cap.
    ///
    /// The new cap must lie inside the configured bounds and must not be
    /// below the number already enrolled. Raising the cap does not promote
    /// anyone from the waitlist.
    pub fn set_enrollment_cap(&mut self, cap: usize) -> Result<(), RosterError> {
        check_cap(cap, &self.limits, self.roster.len())?;
        self.roster.set_capacity(cap)?;
        tracing::info!(course = %self.course, cap, "enrollment cap changed");
        self.enrollment_cap = cap;
        Ok(())
    }

    /// Seats not yet taken.
    pub fn open_seats(&self) -> usize {
        self.enrollment_cap.saturating_sub(self.roster.len())
    }

    /// Number enrolled.
    pub fn enrolled_len(&self) -> usize {
        self.roster.len()
    }

    /// Number waitlisted.
    pub fn waitlist_len(&self) -> usize {
        self.waitlist.len()
    }

    /// Whether `entity` holds a seat.
    pub fn is_enrolled(&self, entity: &E) -> bool {
        self.roster.contains(entity)
    }

    /// Whether `entity` is on the waitlist.
    pub fn is_waitlisted(&self, entity: &E) -> bool {
        self.waitlist.contains(entity)
    }

    /// Enrolled entities in enrollment order.
    pub fn enrolled(&self) -> R::Iter<'_> {
        self.roster.iter()
    }

    /// Waitlisted entities, head first.
    pub fn waitlisted(&self) -> W::Iter<'_> {
        self.waitlist.as_sequence().iter()
    }

    /// Whether `entity` could be accepted right now, as a seat or a waitlist slot.
    pub fn can_enroll<'a>(&self, entity: impl Into<Option<&'a E>>) -> bool
    where
        E: 'a,
    {
        let Some(entity) = entity.into() else {
            return false;
        };
        if self.roster.contains(entity) || self.waitlist.contains(entity) {
            return false;
        }
        self.open_seats() > 0 || !self.waitlist.is_full()
    }

    /// Enroll `entity`, or waitlist it when every seat is taken.
    pub fn enroll(&mut self, entity: impl Into<Option<E>>) -> Result<EnrollmentStatus, RosterError> {
        let entity = entity.into().ok_or(RosterError::NullEntity)?;
        if self.roster.contains(&entity) {
            return Err(RosterError::AlreadyEnrolled);
        }
        if self.waitlist.contains(&entity) {
            return Err(RosterError::AlreadyWaitlisted);
        }

        if self.open_seats() > 0 {
            self.roster.push(entity)?;
            if let Ok(seated) = self.roster.get(self.roster.len() - 1) {
                self.record_audit(seated, AuditAction::Enroll, None);
            }
            tracing::info!(course = %self.course, enrolled = self.roster.len(), "seat taken");
            return Ok(EnrollmentStatus::Enrolled);
        }

        if self.waitlist.is_full() {
            tracing::debug!(course = %self.course, "roster and waitlist full");
            return Err(RosterError::NoRoom);
        }
        self.waitlist.enqueue(entity)?;
        if let Ok(queued) = self.waitlist.as_sequence().get(self.waitlist.len() - 1) {
            self.record_audit(queued, AuditAction::Waitlist, None);
        }
        tracing::info!(
            course = %self.course,
            position = self.waitlist.len(),
            "waitlisted"
        );
        Ok(EnrollmentStatus::Waitlisted)
    }

    /// Remove `entity` from the roster or the waitlist.
    ///
    /// When an enrolled entity leaves, the waitlist head takes its seat. If
    /// the promoted entity's schedule rejects the course, the promotion still
    /// stands and [`Promotion::attached`] is `false`. Absent entities fail
    /// with `NotFound` and change nothing.
    pub fn drop<'a>(
        &mut self,
        entity: impl Into<Option<&'a E>>,
    ) -> Result<DropOutcome<E>, RosterError>
    where
        E: 'a,
    {
        let entity = entity.into().ok_or(RosterError::NullEntity)?;

        if let Some(index) = self.roster.position(entity) {
            let removed = self.roster.remove_at(index)?;
            self.record_audit(&removed, AuditAction::Drop, None);
            tracing::info!(course = %self.course, "seat released");
            let promoted = self.promote_head()?;
            return Ok(DropOutcome::Withdrawn {
                entity: removed,
                promoted,
            });
        }

        if let Some(removed) = self.waitlist.remove_item(entity) {
            self.record_audit(&removed, AuditAction::LeaveWaitlist, None);
            tracing::info!(course = %self.course, "left waitlist");
            return Ok(DropOutcome::LeftWaitlist { entity: removed });
        }

        tracing::debug!(course = %self.course, ?entity, "drop of unknown entity");
        Err(RosterError::NotFound)
    }

    /// Occupancy summary.
    pub fn snapshot(&self) -> RosterSnapshot {
        RosterSnapshot {
            course: self.course.to_string(),
            enrollment_cap: self.enrollment_cap,
            enrolled: self.roster.len(),
            open_seats: self.open_seats(),
            waitlisted: self.waitlist.len(),
            waitlist_capacity: self.waitlist.capacity(),
        }
    }

    fn promote_head(&mut self) -> Result<Option<Promotion<E>>, RosterError> {
        if self.waitlist.is_empty() || self.open_seats() == 0 {
            return Ok(None);
        }
        let next = self.waitlist.dequeue()?;
        self.roster.push(next.clone())?;

        let attached = match next.attach_to_schedule(&self.course) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(
                    course = %self.course,
                    entity = ?next,
                    "promoted entity's schedule rejected the course: {}",
                    err
                );
                false
            }
        };
        let detail = (!attached).then(|| "schedule rejected course".to_string());
        self.record_audit(&next, AuditAction::Promote, detail);
        tracing::info!(course = %self.course, "promoted from waitlist");
        Ok(Some(Promotion {
            entity: next,
            attached,
        }))
    }

    fn record_audit(&self, entity: &E, action: AuditAction, detail: Option<String>) {
        if let Some(audit) = self.audit.as_ref() {
            audit.lock().record(build_audit_event(
                format!("{entity:?}"),
                self.course.to_string(),
                action,
                detail,
            ));
        }
    }
}

const fn check_cap(cap: usize, limits: &RosterLimits, enrolled: usize) -> Result<(), RosterError> {
    if cap < limits.min_enrollment_cap || cap > limits.max_enrollment_cap || cap < enrolled {
        return Err(RosterError::InvalidCapacity {
            requested: cap,
            min: limits.min_enrollment_cap,
            max: limits.max_enrollment_cap,
            enrolled,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collections::ArrayList;
    use crate::core::audit::InMemoryAuditSink;

    #[derive(Debug, Clone, PartialEq)]
    struct Pupil {
        id: &'static str,
        reject: bool,
    }

    impl Enrollee for Pupil {
        type Course = &'static str;

        fn attach_to_schedule(&self, course: &Self::Course) -> Result<(), ScheduleError> {
            if self.reject {
                Err(ScheduleError::ScheduleConflict((*course).to_string()))
            } else {
                Ok(())
            }
        }
    }

    const fn pupil(id: &'static str) -> Pupil {
        Pupil { id, reject: false }
    }

    fn limits() -> RosterLimits {
        RosterLimits {
            min_enrollment_cap: 1,
            max_enrollment_cap: 250,
            waitlist_capacity: 2,
        }
    }

    fn roster(cap: usize) -> EnrollmentRoster<Pupil> {
        EnrollmentRoster::new("CSC116-001", cap, limits()).unwrap()
    }

    #[test]
    fn test_new_rejects_cap_outside_bounds() {
        let err = EnrollmentRoster::<Pupil>::new("X", 0, limits()).unwrap_err();
        assert_eq!(
            err,
            RosterError::InvalidCapacity {
                requested: 0,
                min: 1,
                max: 250,
                enrolled: 0
            }
        );
        assert!(EnrollmentRoster::<Pupil>::new("X", 251, limits()).is_err());
    }

    #[test]
    fn test_enroll_then_waitlist_then_no_room() {
        let mut roster = roster(1);
        assert_eq!(roster.enroll(pupil("a")).unwrap(), EnrollmentStatus::Enrolled);
        assert_eq!(roster.enroll(pupil("b")).unwrap(), EnrollmentStatus::Waitlisted);
        assert_eq!(roster.enroll(pupil("c")).unwrap(), EnrollmentStatus::Waitlisted);
        assert_eq!(roster.enroll(pupil("d")), Err(RosterError::NoRoom));
        assert_eq!(roster.enroll(pupil("a")), Err(RosterError::AlreadyEnrolled));
        assert_eq!(roster.enroll(pupil("b")), Err(RosterError::AlreadyWaitlisted));
        assert_eq!(roster.enroll(None::<Pupil>), Err(RosterError::NullEntity));
        assert_eq!(roster.enrolled_len(), 1);
        assert_eq!(roster.waitlist_len(), 2);
    }

    #[test]
    fn test_can_enroll() {
        let mut roster = roster(1);
        assert!(roster.can_enroll(&pupil("a")));
        roster.enroll(pupil("a")).unwrap();
        assert!(!roster.can_enroll(&pupil("a")));
        assert!(roster.can_enroll(&pupil("b")));
        roster.enroll(pupil("b")).unwrap();
        roster.enroll(pupil("c")).unwrap();
        assert!(!roster.can_enroll(&pupil("b")));
        assert!(!roster.can_enroll(&pupil("d")));
        assert!(!roster.can_enroll(None::<&Pupil>));
    }

    #[test]
    fn test_drop_promotes_waitlist_head() {
        let mut roster = roster(1);
        for id in ["a", "b", "c"] {
            roster.enroll(pupil(id)).unwrap();
        }
        let outcome = roster.drop(&pupil("a")).unwrap();
        assert_eq!(
            outcome,
            DropOutcome::Withdrawn {
                entity: pupil("a"),
                promoted: Some(Promotion {
                    entity: pupil("b"),
                    attached: true
                }),
            }
        );
        assert!(roster.is_enrolled(&pupil("b")));
        let waiting: Vec<&str> = roster.waitlisted().map(|p| p.id).collect();
        assert_eq!(waiting, vec!["c"]);
    }

    #[test]
    fn test_drop_from_waitlist_and_not_found() {
        let mut roster = roster(1);
        for id in ["a", "b", "c"] {
            roster.enroll(pupil(id)).unwrap();
        }
        assert_eq!(
            roster.drop(&pupil("b")).unwrap(),
            DropOutcome::LeftWaitlist { entity: pupil("b") }
        );
        assert_eq!(roster.drop(&pupil("z")), Err(RosterError::NotFound));
        assert_eq!(roster.drop(None::<&Pupil>), Err(RosterError::NullEntity));
        assert_eq!(roster.enrolled_len(), 1);
        assert_eq!(roster.waitlist_len(), 1);
    }

    #[test]
    fn test_promotion_survives_rejecting_schedule() {
        let mut roster = roster(1);
        roster.enroll(pupil("a")).unwrap();
        roster
            .enroll(Pupil {
                id: "b",
                reject: true,
            })
            .unwrap();
        let DropOutcome::Withdrawn { promoted, .. } = roster.drop(&pupil("a")).unwrap() else {
            panic!("expected withdrawal");
        };
        let promoted = promoted.unwrap();
        assert!(!promoted.attached);
        assert!(roster.is_enrolled(&promoted.entity));
        assert_eq!(roster.waitlist_len(), 0);
    }

    #[test]
    fn test_set_enrollment_cap() {
        let mut roster = roster(2);
        roster.enroll(pupil("a")).unwrap();
        roster.enroll(pupil("b")).unwrap();
        roster.enroll(pupil("c")).unwrap();
        assert!(matches!(
            roster.set_enrollment_cap(1),
            Err(RosterError::InvalidCapacity { enrolled: 2, .. })
        ));
        roster.set_enrollment_cap(3).unwrap();
        assert_eq!(roster.open_seats(), 1);
        assert_eq!(roster.waitlist_len(), 1);
        assert_eq!(roster.enroll(pupil("d")).unwrap(), EnrollmentStatus::Enrolled);
    }

    #[test]
    fn test_array_backed_roster() {
        let mut roster: EnrollmentRoster<Pupil, ArrayList<Pupil>, ArrayList<Pupil>> =
            EnrollmentRoster::new("MA141-001", 2, limits()).unwrap();
        for id in ["a", "b", "c"] {
            roster.enroll(pupil(id)).unwrap();
        }
        roster.drop(&pupil("b")).unwrap();
        let seated: Vec<&str> = roster.enrolled().map(|p| p.id).collect();
        assert_eq!(seated, vec!["a", "c"]);
        let snap = roster.snapshot();
        assert_eq!(snap.enrolled, 2);
        assert_eq!(snap.open_seats, 0);
        assert_eq!(snap.waitlisted, 0);
        assert_eq!(snap.course, "MA141-001");
    }

    #[test]
    fn test_audit_records_each_transition() {
        let sink = InMemoryAuditSink::new(16);
        let mut roster = roster(1).with_audit(Box::new(sink.clone()));
        roster.enroll(pupil("a")).unwrap();
        roster.enroll(pupil("b")).unwrap();
        roster.enroll(pupil("c")).unwrap();
        roster.drop(&pupil("a")).unwrap();
        roster.drop(&pupil("c")).unwrap();
        assert_eq!(
            sink.actions(),
            vec![
                AuditAction::Enroll,
                AuditAction::Waitlist,
                AuditAction::Waitlist,
                AuditAction::Drop,
                AuditAction::Promote,
                AuditAction::LeaveWaitlist,
            ]
        );
        assert!(sink.events().iter().all(|e| e.roster == "CSC116-001"));
    }

    #[test]
    fn test_refused_enrollments_leave_no_audit_event() {
        let sink = InMemoryAuditSink::new(16);
        let mut roster = roster(1).with_audit(Box::new(sink.clone()));
        roster.enroll(pupil("a")).unwrap();
        roster.enroll(pupil("b")).unwrap();
        roster.enroll(pupil("c")).unwrap();

        assert_eq!(roster.enroll(pupil("a")), Err(RosterError::AlreadyEnrolled));
        assert_eq!(roster.enroll(pupil("b")), Err(RosterError::AlreadyWaitlisted));
        assert_eq!(roster.enroll(pupil("d")), Err(RosterError::NoRoom));
        assert_eq!(roster.enroll(None::<Pupil>), Err(RosterError::NullEntity));

        let events = sink.events();
        assert_eq!(events.len(), 3);
        assert!(events[0].entity.contains("\"a\""));
        assert!(events[2].entity.contains("\"c\""));
        assert_eq!(events[2].action, AuditAction::Waitlist);
    }
}
