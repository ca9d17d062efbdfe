use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{api, gym, join_request, member, user},
    server::{
        controller::{
            auth as auth_controller, gym as gym_controller, health as health_controller,
            join as join_controller, member as member_controller,
        },
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health_controller::health,
        auth_controller::register,
        auth_controller::login,
        auth_controller::verify,
        gym_controller::list_gyms,
        gym_controller::get_gym,
        gym_controller::get_gyms_by_owner,
        gym_controller::create_gym,
        join_controller::submit_request,
        join_controller::process_request,
        join_controller::list_requests,
        member_controller::add_member,
        member_controller::get_gym_members,
        member_controller::get_own_status,
        member_controller::update_member_status,
        member_controller::update_exercise_plan,
        member_controller::update_diet_plan,
        member_controller::append_measurement,
        member_controller::get_exercise_categories,
        member_controller::get_member,
        member_controller::get_member_by_user,
        member_controller::get_member_by_join_request,
    ),
    components(
        schemas(
            api::ErrorDto,
            api::ExerciseViolationDto,
            api::HealthDto,
            user::Role,
            user::UserDto,
            user::UserSummaryDto,
            user::RegisterDto,
            user::RegisterResponseDto,
            user::LoginDto,
            user::LoginResponseDto,
            gym::GymDto,
            gym::GymDetailsDto,
            gym::GymSummaryDto,
            join_request::RequestStatus,
            join_request::JoinRequestDto,
            join_request::SubmitJoinRequestDto,
            join_request::ProcessJoinRequestDto,
            member::MemberDto,
            member::GymMemberDto,
            member::PaginatedGymMembersDto,
            member::MembershipStatusDto,
            member::ActivateMembershipDto,
            member::UpdateMemberStatusDto,
            member::MemberStatusChangeDto,
            member::UpdateExercisePlanDto,
            member::UpdateDietPlanDto,
            member::AppendMeasurementDto,
            member::ExerciseCategoryDto,
        )
    ),
    tags(
        (name = "health", description = "Service health"),
        (name = "auth", description = "Registration, login and token verification"),
        (name = "gym", description = "Gym facilities"),
        (name = "join", description = "Join request workflow"),
        (name = "member", description = "Membership records and plans"),
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_controller::health))
        .route("/auth/register", post(auth_controller::register))
        .route("/auth/login", post(auth_controller::login))
        .route("/auth/verify", get(auth_controller::verify))
        .route(
            "/gyms",
            get(gym_controller::list_gyms).post(gym_controller::create_gym),
        )
        .route("/gyms/owner/{user_id}", get(gym_controller::get_gyms_by_owner))
        .route("/gyms/{id}", get(gym_controller::get_gym))
        .route("/join/request", post(join_controller::submit_request))
        .route("/join/process", post(join_controller::process_request))
        .route("/join/requests", get(join_controller::list_requests))
        .route("/members/add", post(member_controller::add_member))
        .route("/members/gym-members", get(member_controller::get_gym_members))
        .route("/members/status", get(member_controller::get_own_status))
        .route(
            "/members/update-status",
            put(member_controller::update_member_status),
        )
        .route(
            "/members/exercise-plan",
            put(member_controller::update_exercise_plan),
        )
        .route("/members/diet-plan", put(member_controller::update_diet_plan))
        .route(
            "/members/measurements",
            put(member_controller::append_measurement),
        )
        .route(
            "/members/exercise-categories",
            get(member_controller::get_exercise_categories),
        )
        .route(
            "/members/by-user/{user_id}",
            get(member_controller::get_member_by_user),
        )
        .route(
            "/members/by-join-request/{join_request_id}",
            get(member_controller::get_member_by_join_request),
        )
        .route("/members/{id}", get(member_controller::get_member))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
}
