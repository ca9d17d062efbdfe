//! Member record domain models and parameters.

use chrono::{DateTime, Months, NaiveDate, Utc};

use crate::{
    model::{
        gym::PlanDuration,
        member::{
            DietDay, ExercisePlan, GymMemberDto, HealthInfo, Measurement, MemberDto, MemberPlan,
            MemberStatus, StatusChange,
        },
    },
    server::{
        error::AppError,
        model::user::UserSummary,
        util::parse::{parse_document, parse_stored},
    },
};

/// Materialized membership of one user at one gym, created from an approved join request.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub id: i32,
    pub user_id: i32,
    pub gym_id: i32,
    pub join_request_id: i32,
    pub plan: MemberPlan,
    pub status: MemberStatus,
    /// Append-only; entries are never rewritten.
    pub status_history: Vec<StatusChange>,
    pub health_info: Option<HealthInfo>,
    pub measurements: Vec<Measurement>,
    pub exercise_plan: Option<ExercisePlan>,
    pub diet_plan: Vec<DietDay>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Member {
    /// Converts an entity model to a member domain model, decoding every sub-document.
    ///
    /// # Returns
    /// - `Ok(Member)` - The converted member
    /// - `Err(AppError::InternalErr)` - Unknown stored enum or corrupt JSON column
    pub fn from_entity(entity: entity::member::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            user_id: entity.user_id,
            gym_id: entity.gym_id,
            join_request_id: entity.join_request_id,
            plan: MemberPlan {
                name: entity.plan_name,
                duration: parse_stored("member.plan_duration", entity.plan_duration)?,
                start_date: entity.plan_start_date,
                end_date: entity.plan_end_date,
                price: entity.plan_price,
            },
            status: parse_stored("member.status", entity.status)?,
            status_history: parse_document("member.status_history", entity.status_history)?,
            health_info: entity
                .health_info
                .map(|value| parse_document("member.health_info", value))
                .transpose()?,
            measurements: parse_document("member.measurements", entity.measurements)?,
            exercise_plan: entity
                .exercise_plan
                .map(|value| parse_document("member.exercise_plan", value))
                .transpose()?,
            diet_plan: parse_document("member.diet_plan", entity.diet_plan)?,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> MemberDto {
        MemberDto {
            id: self.id,
            user_id: self.user_id,
            gym_id: self.gym_id,
            join_request_id: self.join_request_id,
            membership_plan: self.plan,
            status: self.status,
            status_history: self.status_history,
            health_info: self.health_info,
            measurements: self.measurements,
            exercise_plan: self.exercise_plan,
            diet_plan: self.diet_plan,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Roster view without health information.
    pub fn into_roster_dto(self, user: UserSummary) -> GymMemberDto {
        GymMemberDto {
            id: self.id,
            user: user.into_dto(),
            membership_plan: self.plan,
            status: self.status,
            created_at: self.created_at,
        }
    }
}

/// Computes the last day of a plan starting on `start`.
///
/// Calendar-aware: months are added rather than days, clamping to the end of shorter
/// months (2024-01-31 + 1 month = 2024-02-29).
pub fn plan_end_date(start: NaiveDate, duration: PlanDuration) -> NaiveDate {
    start
        .checked_add_months(Months::new(duration.months()))
        .unwrap_or(NaiveDate::MAX)
}

/// Parameters for creating or refreshing the member record of a join request.
#[derive(Debug, Clone)]
pub struct UpsertMemberParams {
    pub user_id: i32,
    pub gym_id: i32,
    pub join_request_id: i32,
    pub plan: MemberPlan,
    /// Replaces stored health information only when present.
    pub health_info: Option<HealthInfo>,
}

/// Membership activation input as received from the gym owner.
#[derive(Debug, Clone)]
pub struct ActivateMembershipParams {
    pub join_request_id: i32,
    pub plan_name: String,
    pub duration: PlanDuration,
    pub price: f64,
    pub start_date: Option<NaiveDate>,
    pub health_info: Option<HealthInfo>,
}

impl ActivateMembershipParams {
    pub fn from_dto(dto: crate::model::member::ActivateMembershipDto) -> Self {
        let details = dto.membership_details;
        Self {
            join_request_id: dto.join_request_id,
            plan_name: details.name.trim().to_string(),
            duration: details.duration,
            price: details.price,
            start_date: details.start_date,
            health_info: details.health_info,
        }
    }
}

/// Paginated roster of a gym.
#[derive(Debug, Clone)]
pub struct PaginatedGymMembers {
    pub members: Vec<(Member, UserSummary)>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedGymMembers {
    pub fn into_dto(self) -> crate::model::member::PaginatedGymMembersDto {
        crate::model::member::PaginatedGymMembersDto {
            members: self
                .members
                .into_iter()
                .map(|(member, user)| member.into_roster_dto(user))
                .collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
