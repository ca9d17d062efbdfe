use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

use crate::{
    model::{
        api::ErrorDto,
        member::{
            ActivateMembershipDto, AppendMeasurementDto, ExerciseCategoryDto, MemberDto,
            MemberStatusChangeDto, MembershipStatusDto, PaginatedGymMembersDto,
            UpdateDietPlanDto, UpdateExercisePlanDto, UpdateMemberStatusDto,
        },
        user::Role,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{exercise::catalog_dto, member::ActivateMembershipParams},
        service::member::MemberService,
        state::AppState,
    },
};

/// Tag for grouping member endpoints in OpenAPI documentation
pub static MEMBER_TAG: &str = "member";

const OWNER_OR_ADMIN: &[Role] = &[Role::GymOwner, Role::Admin];
/// Activation needs gym ownership, which admins do not have.
pub const ACTIVATE_ROLES: &[Role] = &[Role::GymOwner];
const MAX_ENTRIES: u64 = 100;

#[derive(Deserialize, IntoParams)]
pub struct GymMembersParams {
    /// Zero-indexed page number
    #[serde(default)]
    pub page: u64,
    /// Members per page
    #[serde(default = "default_entries")]
    pub entries: u64,
    /// Gym to list; required for admins, defaults to the owner's first gym
    #[serde(default)]
    pub gym_id: Option<i32>,
}

fn default_entries() -> u64 {
    10
}

/// Activate the membership of an approved join request.
///
/// Creates the member record on first call and refreshes its plan on later calls.
/// The end date is derived from the start date and plan duration. The member's role
/// becomes `member` and their gym affiliation is set.
///
/// # Access Control
/// - `gymOwner` - Must own the request's gym
///
/// # Returns
/// - `201 Created` - Member record created
/// - `200 OK` - Existing member record updated
/// - `400 Bad Request` - Invalid membership details
/// - `403 Forbidden` - Caller does not own the gym
/// - `404 Not Found` - Join request does not exist
/// - `412 Precondition Failed` - Join request is not approved
#[utoipa::path(
    post,
    path = "/members/add",
    tag = MEMBER_TAG,
    request_body = ActivateMembershipDto,
    responses(
        (status = 201, description = "Member record created", body = MemberDto),
        (status = 200, description = "Member record updated", body = MemberDto),
        (status = 400, description = "Invalid membership details", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller does not own the gym", body = ErrorDto),
        (status = 404, description = "Join request not found", body = ErrorDto),
        (status = 412, description = "Join request not approved", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn add_member(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<ActivateMembershipDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.tokens, &headers)
        .require(&[Permission::Role(ACTIVATE_ROLES)])?;

    payload.validate()?;

    let (member, created) = MemberService::new(&state.db)
        .activate(&caller, ActivateMembershipParams::from_dto(payload))
        .await?;

    let status = if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((status, Json(member.into_dto())))
}

/// List the members of a gym.
///
/// Paginated, newest first. Health information is omitted.
///
/// # Access Control
/// - `gymOwner` - Their own gyms only
/// - `admin` - Any gym, `gym_id` required
#[utoipa::path(
    get,
    path = "/members/gym-members",
    tag = MEMBER_TAG,
    params(GymMembersParams),
    responses(
        (status = 200, description = "Page of gym members", body = PaginatedGymMembersDto),
        (status = 400, description = "Admin did not name a gym or page out of range", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller does not own the gym", body = ErrorDto),
        (status = 404, description = "Gym not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_gym_members(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<GymMembersParams>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.tokens, &headers)
        .require(&[Permission::Role(OWNER_OR_ADMIN)])?;

    let page = MemberService::new(&state.db)
        .gym_members(
            &caller,
            params.gym_id,
            params.page,
            params.entries.clamp(1, MAX_ENTRIES),
        )
        .await?;

    Ok(Json(page.into_dto()))
}

/// Get the caller's own membership status.
///
/// # Returns
/// - `200 OK` - Status, plan and gym of the latest membership
/// - `404 Not Found` - Caller has no membership
#[utoipa::path(
    get,
    path = "/members/status",
    tag = MEMBER_TAG,
    responses(
        (status = 200, description = "Own membership", body = MembershipStatusDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not a member", body = ErrorDto),
        (status = 404, description = "No membership found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_own_status(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.tokens, &headers)
        .require(&[Permission::Role(&[Role::Member])])?;

    let status = MemberService::new(&state.db).own_status(&caller).await?;

    Ok(Json(status))
}

/// Change a member's status.
///
/// The transition is appended to the member's status history.
///
/// # Access Control
/// - `gymOwner` - Must own the member's gym
/// - `admin`
#[utoipa::path(
    put,
    path = "/members/update-status",
    tag = MEMBER_TAG,
    request_body = UpdateMemberStatusDto,
    responses(
        (status = 200, description = "Status changed", body = MemberStatusChangeDto),
        (status = 400, description = "Invalid status", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller does not own the gym", body = ErrorDto),
        (status = 404, description = "Member not found", body = ErrorDto),
        (status = 409, description = "Member modified concurrently", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_member_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UpdateMemberStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.tokens, &headers)
        .require(&[Permission::Role(OWNER_OR_ADMIN)])?;

    let member = MemberService::new(&state.db)
        .update_status(&caller, payload.member_id, &payload.status, payload.reason)
        .await?;

    Ok(Json(MemberStatusChangeDto {
        member_id: member.id,
        status: member.status,
        history_length: member.status_history.len(),
        updated_at: member.updated_at,
    }))
}

/// Replace a member's weekly exercise plan.
///
/// Every exercise must name a catalog exercise of its muscle group. All offending
/// exercises are reported in `details` and nothing is stored.
///
/// # Access Control
/// - `gymOwner` - Must own the member's gym
#[utoipa::path(
    put,
    path = "/members/exercise-plan",
    tag = MEMBER_TAG,
    request_body = UpdateExercisePlanDto,
    responses(
        (status = 200, description = "Exercise plan stored", body = MemberDto),
        (status = 400, description = "Invalid exercises", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller does not own the gym", body = ErrorDto),
        (status = 404, description = "Member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_exercise_plan(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UpdateExercisePlanDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.tokens, &headers)
        .require(&[Permission::Role(&[Role::GymOwner])])?;

    let member = MemberService::new(&state.db)
        .update_exercise_plan(&caller, payload.member_id, payload.workout_plan)
        .await?;

    Ok(Json(member.into_dto()))
}

/// Replace a member's diet plan.
///
/// Day totals not supplied are summed from the meal items.
///
/// # Access Control
/// - `gymOwner` - Must own the member's gym
#[utoipa::path(
    put,
    path = "/members/diet-plan",
    tag = MEMBER_TAG,
    request_body = UpdateDietPlanDto,
    responses(
        (status = 200, description = "Diet plan stored", body = MemberDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller does not own the gym", body = ErrorDto),
        (status = 404, description = "Member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_diet_plan(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UpdateDietPlanDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.tokens, &headers)
        .require(&[Permission::Role(&[Role::GymOwner])])?;

    let member = MemberService::new(&state.db)
        .update_diet_plan(&caller, payload.member_id, payload.diet_plan)
        .await?;

    Ok(Json(member.into_dto()))
}

/// Append a measurement snapshot to a member's log.
///
/// # Access Control
/// - `gymOwner` - Must own the member's gym
#[utoipa::path(
    put,
    path = "/members/measurements",
    tag = MEMBER_TAG,
    request_body = AppendMeasurementDto,
    responses(
        (status = 200, description = "Measurement appended", body = MemberDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller does not own the gym", body = ErrorDto),
        (status = 404, description = "Member not found", body = ErrorDto),
        (status = 409, description = "Member modified concurrently", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn append_measurement(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<AppendMeasurementDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.tokens, &headers)
        .require(&[Permission::Role(&[Role::GymOwner])])?;

    let member = MemberService::new(&state.db)
        .append_measurement(&caller, payload.member_id, payload.measurements)
        .await?;

    Ok(Json(member.into_dto()))
}

/// Get the exercise catalog.
#[utoipa::path(
    get,
    path = "/members/exercise-categories",
    tag = MEMBER_TAG,
    responses(
        (status = 200, description = "Exercise catalog by muscle group", body = Vec<ExerciseCategoryDto>)
    ),
)]
pub async fn get_exercise_categories() -> impl IntoResponse {
    Json(catalog_dto())
}

/// Get a member record.
///
/// # Access Control
/// - The member themself, the owner of the member's gym, or an admin
#[utoipa::path(
    get,
    path = "/members/{id}",
    tag = MEMBER_TAG,
    params(
        ("id" = i32, Path, description = "Member ID")
    ),
    responses(
        (status = 200, description = "Member record", body = MemberDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_member(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.tokens, &headers).require(&[])?;

    let member = MemberService::new(&state.db).get_by_id(&caller, id).await?;

    Ok(Json(member.into_dto()))
}

/// Get the latest member record of a user.
#[utoipa::path(
    get,
    path = "/members/by-user/{user_id}",
    tag = MEMBER_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Member record", body = MemberDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_member_by_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.tokens, &headers).require(&[])?;

    let member = MemberService::new(&state.db)
        .get_by_user(&caller, user_id)
        .await?;

    Ok(Json(member.into_dto()))
}

/// Get the member record created from a join request.
#[utoipa::path(
    get,
    path = "/members/by-join-request/{join_request_id}",
    tag = MEMBER_TAG,
    params(
        ("join_request_id" = i32, Path, description = "Join request ID")
    ),
    responses(
        (status = 200, description = "Member record", body = MemberDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_member_by_join_request(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(join_request_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.tokens, &headers).require(&[])?;

    let member = MemberService::new(&state.db)
        .get_by_join_request(&caller, join_request_id)
        .await?;

    Ok(Json(member.into_dto()))
}
