//! Join request domain models.

use chrono::{DateTime, Utc};

use crate::{
    model::{
        gym::GymSummaryDto,
        join_request::{JoinRequestDto, RequestStatus},
    },
    server::{error::AppError, model::user::UserSummary, util::parse::parse_stored},
};

#[derive(Debug, Clone, PartialEq)]
pub struct JoinRequest {
    pub id: i32,
    pub member_id: i32,
    pub gym_id: i32,
    pub status: RequestStatus,
    pub created_at: DateTime<Utc>,
    pub decided_at: Option<DateTime<Utc>>,
    pub decided_by: Option<i32>,
}

impl JoinRequest {
    pub fn from_entity(entity: entity::join_request::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            member_id: entity.member_id,
            gym_id: entity.gym_id,
            status: parse_stored("join_request.status", entity.status)?,
            created_at: entity.created_at,
            decided_at: entity.decided_at,
            decided_by: entity.decided_by,
        })
    }
}

/// Value of the unique `pending_key` column while a request is pending.
pub fn pending_key(member_id: i32, gym_id: i32) -> String {
    format!("{}:{}", member_id, gym_id)
}

/// A join request with the member and gym it links, as listed to callers.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinRequestView {
    pub request: JoinRequest,
    pub member: UserSummary,
    pub gym: GymSummaryDto,
}

impl JoinRequestView {
    pub fn into_dto(self) -> JoinRequestDto {
        JoinRequestDto {
            id: self.request.id,
            member: self.member.into_dto(),
            gym: self.gym,
            status: self.request.status,
            created_at: self.request.created_at,
            decided_at: self.request.decided_at,
        }
    }
}

/// Owner decision parsed from the request body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Approve,
    Reject,
}

impl Decision {
    /// Parses `approved` / `rejected`; anything else is `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "approved" => Some(Decision::Approve),
            "rejected" => Some(Decision::Reject),
            _ => None,
        }
    }

    pub fn status(&self) -> RequestStatus {
        match self {
            Decision::Approve => RequestStatus::Approved,
            Decision::Reject => RequestStatus::Rejected,
        }
    }
}
