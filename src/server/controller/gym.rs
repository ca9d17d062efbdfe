use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    model::{
        api::ErrorDto,
        gym::{GymDetailsDto, GymDto},
        user::Role,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            gym::{CreateGymParams, GymDetails},
            user::UserSummary,
        },
        service::gym::GymService,
        state::AppState,
    },
};

/// Tag for grouping gym endpoints in OpenAPI documentation
pub static GYM_TAG: &str = "gym";

/// List all gyms.
///
/// Public listing ordered by name.
#[utoipa::path(
    get,
    path = "/gyms",
    tag = GYM_TAG,
    responses(
        (status = 200, description = "All gyms", body = Vec<GymDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_gyms(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let gyms = GymService::new(&state.db).list().await?;

    Ok(Json(
        gyms.into_iter()
            .map(|g| g.into_dto(None))
            .collect::<Vec<_>>(),
    ))
}

/// Get a gym with its owner.
///
/// # Returns
/// - `200 OK` - Gym detail including owner `{id, name, email}`
/// - `404 Not Found` - No gym with this ID
#[utoipa::path(
    get,
    path = "/gyms/{id}",
    tag = GYM_TAG,
    params(
        ("id" = i32, Path, description = "Gym ID")
    ),
    responses(
        (status = 200, description = "Gym detail", body = GymDto),
        (status = 404, description = "Gym not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_gym(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let Some((gym, owner)) = GymService::new(&state.db).get_with_owner(id).await? else {
        return Err(AppError::NotFound("Gym not found".to_string()));
    };

    Ok(Json(gym.into_dto(Some(owner))))
}

/// Get the gyms owned by a user.
///
/// # Access Control
/// - Any authenticated user
#[utoipa::path(
    get,
    path = "/gyms/owner/{user_id}",
    tag = GYM_TAG,
    params(
        ("user_id" = i32, Path, description = "Owner user ID")
    ),
    responses(
        (status = 200, description = "Gyms owned by the user", body = Vec<GymDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_gyms_by_owner(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[])?;

    let gyms = GymService::new(&state.db).get_by_owner(user_id).await?;

    Ok(Json(
        gyms.into_iter()
            .map(|g| g.into_dto(None))
            .collect::<Vec<_>>(),
    ))
}

/// Create a gym.
///
/// The caller becomes its owner. Their gym affiliation is set when they had none.
///
/// # Access Control
/// - `gymOwner`
///
/// # Returns
/// - `201 Created` - The created gym
/// - `400 Bad Request` - Invalid gym details
/// - `403 Forbidden` - Caller is not a gym owner
#[utoipa::path(
    post,
    path = "/gyms",
    tag = GYM_TAG,
    request_body = GymDetailsDto,
    responses(
        (status = 201, description = "Gym created", body = GymDto),
        (status = 400, description = "Invalid gym details", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not a gym owner", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_gym(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<GymDetailsDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.tokens, &headers)
        .require(&[Permission::Role(&[Role::GymOwner])])?;

    payload.validate()?;

    let gym = GymService::new(&state.db)
        .create(CreateGymParams {
            owner_id: caller.id,
            details: GymDetails::from_dto(payload),
        })
        .await?;

    let owner = UserSummary {
        id: caller.id,
        name: caller.name,
        email: caller.email,
    };

    Ok((StatusCode::CREATED, Json(gym.into_dto(Some(owner)))))
}
