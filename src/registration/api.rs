//! API-facing request/response models for embedding the registrar in a service.

use serde::{Deserialize, Serialize};

use crate::core::{DropOutcome, EnrollmentStatus, RosterSnapshot};
use crate::registration::Registrar;

/// Enrollment or drop request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrollmentRequest {
    /// Student id.
    pub student_id: String,
    /// Course name.
    pub course_name: String,
    /// Course section.
    pub section: String,
}

/// Result of an enrollment or drop request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrollmentResponse {
    /// Where the student landed; `None` after a drop.
    pub status: Option<EnrollmentStatus>,
    /// Student promoted from the waitlist by a drop.
    pub promoted: Option<String>,
    /// Roster occupancy after the request.
    pub roster: RosterSnapshot,
}

/// Submit an enrollment request.
pub fn submit_enrollment(
    registrar: &mut Registrar,
    req: &EnrollmentRequest,
) -> Result<EnrollmentResponse, String> {
    let status = registrar
        .enroll(&req.student_id, &req.course_name, &req.section)
        .map_err(|e| e.to_string())?;
    Ok(EnrollmentResponse {
        status: Some(status),
        promoted: None,
        roster: snapshot(registrar, req)?,
    })
}

/// Submit a drop request.
pub fn submit_drop(
    registrar: &mut Registrar,
    req: &EnrollmentRequest,
) -> Result<EnrollmentResponse, String> {
    let outcome = registrar
        .drop(&req.student_id, &req.course_name, &req.section)
        .map_err(|e| e.to_string())?;
    let promoted = match outcome {
        DropOutcome::Withdrawn {
            promoted: Some(promotion),
            ..
        } => Some(promotion.entity.id().to_string()),
        _ => None,
    };
    Ok(EnrollmentResponse {
        status: None,
        promoted,
        roster: snapshot(registrar, req)?,
    })
}

/// List every roster's occupancy.
#[must_use]
pub fn list_rosters(registrar: &Registrar) -> Vec<RosterSnapshot> {
    registrar.snapshots()
}

fn snapshot(registrar: &Registrar, req: &EnrollmentRequest) -> Result<RosterSnapshot, String> {
    registrar
        .roster(&req.course_name, &req.section)
        .map(|roster| roster.snapshot())
        .map_err(|e| e.to_string())
}
