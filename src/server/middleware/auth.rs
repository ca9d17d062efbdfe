use axum::http::{header::AUTHORIZATION, HeaderMap};

use crate::{
    model::user::Role,
    server::{
        error::{auth::AuthError, AppError},
        model::user::AuthUser,
        service::token::TokenService,
    },
};

pub enum Permission {
    /// Caller's role must be one of the listed roles.
    Role(&'static [Role]),
}

/// Bearer token gate for handlers.
///
/// Handlers construct a guard from the request headers and call `require` with the
/// permissions of the route; the caller's identity comes from the token alone.
pub struct AuthGuard<'a> {
    tokens: &'a TokenService,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(tokens: &'a TokenService, headers: &'a HeaderMap) -> Self {
        Self { tokens, headers }
    }

    /// Authenticates the caller and checks every permission.
    ///
    /// # Returns
    /// - `Ok(AuthUser)` - Token valid and all permissions satisfied
    /// - `Err(AuthError::MissingHeader | InvalidHeaderFormat | EmptyToken)` - Malformed header
    /// - `Err(AuthError::TokenExpired | InvalidToken)` - Token rejected
    /// - `Err(AuthError::AccessDenied)` - Role not allowed
    pub fn require(&self, permissions: &[Permission]) -> Result<AuthUser, AppError> {
        let token = self.bearer_token()?;
        let user = self.tokens.verify(token)?;

        for permission in permissions {
            match permission {
                Permission::Role(roles) => {
                    if !roles.contains(&user.role) {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            format!("role {} not in {:?}", user.role, roles),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }

    fn bearer_token(&self) -> Result<&'a str, AuthError> {
        let header = self
            .headers
            .get(AUTHORIZATION)
            .ok_or(AuthError::MissingHeader)?
            .to_str()
            .map_err(|_| AuthError::InvalidHeaderFormat)?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or(AuthError::InvalidHeaderFormat)?
            .trim();

        if token.is_empty() {
            return Err(AuthError::EmptyToken);
        }

        Ok(token)
    }
}
