use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::{ErrorDto, ExerciseViolationDto};

/// Rule violations of the join request and membership workflow.
#[derive(Error, Debug)]
pub enum WorkflowError {
    /// A pending or approved request already exists for this member and gym.
    #[error("A join request for gym {gym_id} is already pending or approved")]
    DuplicateRequest { member_id: i32, gym_id: i32 },

    /// Decision other than `approved` or `rejected`.
    #[error("Invalid decision '{0}', expected 'approved' or 'rejected'")]
    InvalidDecision(String),

    /// Request already left the pending state.
    #[error("Join request {request_id} has already been {status}")]
    AlreadyDecided { request_id: i32, status: String },

    /// Membership activation attempted on a request that is not approved.
    #[error("Join request {request_id} must be approved first (current status: {status})")]
    NotApproved { request_id: i32, status: String },

    /// Member status other than `active`, `inactive` or `suspended`.
    #[error("Invalid status value '{0}'")]
    InvalidStatus(String),

    /// One or more exercises failed catalog or numeric validation.
    #[error("{} exercise(s) failed validation", .0.len())]
    InvalidExercises(Vec<ExerciseViolationDto>),
}

/// # Returns
/// - 400 Bad Request - `InvalidDecision`, `InvalidStatus`, `InvalidExercises` (with details)
/// - 409 Conflict - `DuplicateRequest`
/// - 412 Precondition Failed - `AlreadyDecided`, `NotApproved`
impl IntoResponse for WorkflowError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::DuplicateRequest { .. } => StatusCode::CONFLICT,
            Self::AlreadyDecided { .. } | Self::NotApproved { .. } => {
                StatusCode::PRECONDITION_FAILED
            }
            Self::InvalidDecision(_) | Self::InvalidStatus(_) | Self::InvalidExercises(_) => {
                StatusCode::BAD_REQUEST
            }
        };

        let message = self.to_string();
        let body = match self {
            Self::InvalidExercises(details) => ErrorDto {
                details: Some(details),
                ..ErrorDto::new(message)
            },
            _ => ErrorDto::new(message),
        };

        (status, Json(body)).into_response()
    }
}
