use axum::{extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse, Json};
use validator::Validate;

use crate::{
    model::{
        api::ErrorDto,
        user::{LoginDto, LoginResponseDto, RegisterDto, RegisterResponseDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::user::RegisterParams,
        service::auth::AuthService,
        state::AppState,
        util::parse::normalize_email,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new account.
///
/// Creates a member or gym owner account. Gym owners may include `gymDetails` to
/// register their gym in the same request. The admin role cannot be self-registered.
///
/// # Returns
/// - `201 Created` - Account created
/// - `400 Bad Request` - Validation failed or role not allowed
/// - `409 Conflict` - Email already registered
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created", body = RegisterResponseDto),
        (status = 400, description = "Invalid registration data", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(mut payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.email = normalize_email(&payload.email);
    payload.validate()?;

    let registration = AuthService::new(&state.db)
        .register(RegisterParams::from_dto(payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponseDto {
            message: "User registered successfully".to_string(),
            user_id: registration.user.id,
            gym_id: registration.gym.map(|g| g.id),
        }),
    ))
}

/// Log in with email and password.
///
/// # Returns
/// - `200 OK` - Bearer token and user profile
/// - `401 Unauthorized` - Unknown email or wrong password
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = LoginResponseDto),
        (status = 400, description = "Missing email or password", body = ErrorDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let (token, user) = AuthService::new(&state.db)
        .login(&state.tokens, &payload.email, &payload.password)
        .await?;

    Ok(Json(LoginResponseDto {
        token,
        user: user.into_dto(),
    }))
}

/// Resolve the caller from their bearer token.
///
/// # Returns
/// - `200 OK` - Current user profile
/// - `401 Unauthorized` - Missing, malformed or expired token
/// - `404 Not Found` - Account no longer exists
#[utoipa::path(
    get,
    path = "/auth/verify",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn verify(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.tokens, &headers).require(&[])?;

    let user = AuthService::new(&state.db).verify(&caller).await?;

    Ok(Json(user.into_dto()))
}
