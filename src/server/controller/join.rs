use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        join_request::{JoinRequestDto, ProcessJoinRequestDto, SubmitJoinRequestDto},
        user::Role,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::join_request::JoinRequestService,
        state::AppState,
    },
};

/// Tag for grouping join request endpoints in OpenAPI documentation
pub static JOIN_TAG: &str = "join";

/// Submit a request to join a gym.
///
/// # Access Control
/// - `member` - Gym owners and admins cannot join gyms
///
/// # Returns
/// - `201 Created` - Pending request created
/// - `404 Not Found` - Gym does not exist
/// - `409 Conflict` - A pending or approved request already exists
#[utoipa::path(
    post,
    path = "/join/request",
    tag = JOIN_TAG,
    request_body = SubmitJoinRequestDto,
    responses(
        (status = 201, description = "Join request submitted", body = JoinRequestDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not a member", body = ErrorDto),
        (status = 404, description = "Gym not found", body = ErrorDto),
        (status = 409, description = "Request already pending or approved", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn submit_request(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<SubmitJoinRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.tokens, &headers)
        .require(&[Permission::Role(&[Role::Member])])?;

    let view = JoinRequestService::new(&state.db)
        .submit(&caller, payload.gym_id)
        .await?;

    Ok((StatusCode::CREATED, Json(view.into_dto())))
}

/// Approve or reject a pending join request.
///
/// Approval points the member's gym affiliation at the gym. Membership itself is
/// created by `POST /members/add`.
///
/// # Access Control
/// - `gymOwner` - Must own the request's gym
///
/// # Returns
/// - `200 OK` - Request decided
/// - `400 Bad Request` - Status is not `approved` or `rejected`
/// - `403 Forbidden` - Caller does not own the gym
/// - `404 Not Found` - Request does not exist
/// - `412 Precondition Failed` - Request was already decided
#[utoipa::path(
    post,
    path = "/join/process",
    tag = JOIN_TAG,
    request_body = ProcessJoinRequestDto,
    responses(
        (status = 200, description = "Join request decided", body = JoinRequestDto),
        (status = 400, description = "Invalid decision", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller does not own the gym", body = ErrorDto),
        (status = 404, description = "Join request not found", body = ErrorDto),
        (status = 412, description = "Join request already decided", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn process_request(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<ProcessJoinRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.tokens, &headers)
        .require(&[Permission::Role(&[Role::GymOwner])])?;

    let view = JoinRequestService::new(&state.db)
        .decide(&caller, payload.request_id, &payload.status)
        .await?;

    Ok(Json(view.into_dto()))
}

/// List the join requests visible to the caller.
///
/// Members get their own requests, gym owners the requests for gyms they own and
/// admins every request. Newest first.
#[utoipa::path(
    get,
    path = "/join/requests",
    tag = JOIN_TAG,
    responses(
        (status = 200, description = "Join requests", body = Vec<JoinRequestDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_requests(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.tokens, &headers).require(&[])?;

    let views = JoinRequestService::new(&state.db).list(&caller).await?;

    Ok(Json(
        views
            .into_iter()
            .map(|v| v.into_dto())
            .collect::<Vec<_>>(),
    ))
}
