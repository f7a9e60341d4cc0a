//! Audit sinks for roster activity.
//!
//! Rosters emit one [`AuditEvent`] per state change. The in-memory sink keeps
//! a bounded ring of recent events and can be cloned so a caller keeps a
//! handle to the buffer after handing the sink to a roster.

use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::util::clock::now_ms;

/// Roster state change recorded by an audit sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    /// Entity took a seat on enrollment.
    Enroll,
    /// Entity joined the waitlist.
    Waitlist,
    /// Enrolled entity withdrew.
    Drop,
    /// Waitlisted entity withdrew.
    LeaveWaitlist,
    /// Head of the waitlist moved into a freed seat.
    Promote,
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Enroll => "enroll",
            Self::Waitlist => "waitlist",
            Self::Drop => "drop",
            Self::LeaveWaitlist => "leave_waitlist",
            Self::Promote => "promote",
        })
    }
}

/// Audit event structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEvent {
    /// Event identifier (UUID v4).
    pub event_id: String,
    /// Entity the action applied to.
    pub entity: String,
    /// Roster the action happened on.
    pub roster: String,
    /// Action taken.
    pub action: AuditAction,
    /// Timestamp milliseconds.
    pub created_at_ms: u128,
    /// Additional context.
    pub detail: Option<String>,
}

/// Audit sink abstraction.
pub trait AuditSink: Send {
    /// Record an audit event.
    fn record(&mut self, event: AuditEvent);
}

/// Audit sink shared between a registrar and its rosters.
pub type SharedAuditSink = Arc<Mutex<Box<dyn AuditSink>>>;

/// Wrap a sink for sharing.
#[must_use]
pub fn share_audit_sink(sink: Box<dyn AuditSink>) -> SharedAuditSink {
    Arc::new(Mutex::new(sink))
}

/// In-memory audit sink for testing and dev.
///
/// Clones share the same buffer.
#[derive(Debug, Clone)]
pub struct InMemoryAuditSink {
    events: Arc<Mutex<VecDeque<AuditEvent>>>,
    max_events: usize,
}

impl InMemoryAuditSink {
    /// Create a new in-memory sink with a bounded buffer.
    #[must_use]
    pub fn new(max_events: usize) -> Self {
        Self {
            events: Arc::new(Mutex::new(VecDeque::with_capacity(max_events))),
            max_events,
        }
    }

    /// Retrieve a snapshot of stored events.
    #[must_use]
    pub fn events(&self) -> Vec<AuditEvent> {
        self.events.lock().iter().cloned().collect()
    }

    /// Actions of the stored events, oldest first.
    #[must_use]
    pub fn actions(&self) -> Vec<AuditAction> {
        self.events.lock().iter().map(|event| event.action).collect()
    }
}

impl AuditSink for InMemoryAuditSink {
    fn record(&mut self, event: AuditEvent) {
        let mut events = self.events.lock();
        if events.len() >= self.max_events {
            events.pop_front();
        }
        events.push_back(event);
    }
}

/// Helper to build an audit event with a fresh id and the current time.
pub fn build_audit_event(
    entity: impl Into<String>,
    roster: impl Into<String>,
    action: AuditAction,
    detail: Option<String>,
) -> AuditEvent {
    AuditEvent {
        event_id: uuid::Uuid::new_v4().to_string(),
        entity: entity.into(),
        roster: roster.into(),
        action,
        created_at_ms: now_ms(),
        detail,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_sink_is_bounded() {
        let sink = InMemoryAuditSink::new(2);
        let mut writer = sink.clone();
        for action in [AuditAction::Enroll, AuditAction::Waitlist, AuditAction::Drop] {
            writer.record(build_audit_event("s1", "CSC116-001", action, None));
        }
        assert_eq!(sink.actions(), vec![AuditAction::Waitlist, AuditAction::Drop]);
    }

    #[test]
    fn test_event_ids_are_unique() {
        let a = build_audit_event("s1", "r", AuditAction::Promote, None);
        let b = build_audit_event("s1", "r", AuditAction::Promote, None);
        assert_ne!(a.event_id, b.event_id);
        assert_eq!(AuditAction::LeaveWaitlist.to_string(), "leave_waitlist");
    }
}
