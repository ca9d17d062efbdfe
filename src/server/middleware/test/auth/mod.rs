use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
use chrono::Duration;

use crate::{
    model::user::Role,
    server::{
        error::{auth::AuthError, AppError},
        middleware::auth::{AuthGuard, Permission},
        model::user::AuthUser,
        service::token::TokenService,
    },
};

mod require;

const SECRET: &str = "guard-test-secret";

fn user(role: Role) -> AuthUser {
    AuthUser {
        id: 11,
        name: "Casey".to_string(),
        email: "casey@example.com".to_string(),
        role,
        gym_id: None,
    }
}

fn headers_with(value: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
    headers
}

fn bearer(tokens: &TokenService, role: Role) -> HeaderMap {
    let token = tokens.issue(&user(role)).unwrap();
    headers_with(&format!("Bearer {}", token))
}
