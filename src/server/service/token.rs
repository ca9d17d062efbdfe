//! Bearer token issuing and verification.
//!
//! Tokens are HS256 JWTs signed with the configured secret. They carry the caller's
//! identity and role so the access gate never has to touch the database.

use std::sync::Arc;

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::{
    model::user::Role,
    server::{
        error::{auth::AuthError, internal::InternalError, AppError},
        model::user::AuthUser,
    },
};

/// Default token lifetime.
pub const TOKEN_VALIDITY_DAYS: i64 = 7;

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: i32,
    name: String,
    email: String,
    role: Role,
    gym_id: Option<i32>,
    iat: i64,
    exp: i64,
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self {
            id: claims.sub,
            name: claims.name,
            email: claims.email,
            role: claims.role,
            gym_id: claims.gym_id,
        }
    }
}

/// Signs and verifies bearer tokens.
///
/// Cheap to clone; keys are shared behind an `Arc`.
#[derive(Clone)]
pub struct TokenService {
    keys: Arc<Keys>,
    validity: Duration,
}

struct Keys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenService {
    pub fn new(secret: &str) -> Self {
        Self::with_validity(secret, Duration::days(TOKEN_VALIDITY_DAYS))
    }

    pub fn with_validity(secret: &str, validity: Duration) -> Self {
        Self {
            keys: Arc::new(Keys {
                encoding: EncodingKey::from_secret(secret.as_bytes()),
                decoding: DecodingKey::from_secret(secret.as_bytes()),
            }),
            validity,
        }
    }

    /// Issues a token for the given identity.
    ///
    /// # Returns
    /// - `Ok(String)` - The encoded token
    /// - `Err(AppError::InternalErr(TokenEncoding))` - Signing failed
    pub fn issue(&self, user: &AuthUser) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role,
            gym_id: user.gym_id,
            iat: now.timestamp(),
            exp: (now + self.validity).timestamp(),
        };

        encode(&Header::default(), &claims, &self.keys.encoding)
            .map_err(|e| InternalError::TokenEncoding(e).into())
    }

    /// Verifies a token and returns the identity it carries.
    ///
    /// # Returns
    /// - `Ok(AuthUser)` - Signature valid and token not expired
    /// - `Err(AuthError::TokenExpired)` - Token expired
    /// - `Err(AuthError::InvalidToken)` - Malformed token or bad signature
    pub fn verify(&self, token: &str) -> Result<AuthUser, AuthError> {
        let data = decode::<Claims>(token, &self.keys.decoding, &Validation::default()).map_err(
            |e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken(e.to_string()),
            },
        )?;

        Ok(data.claims.into())
    }
}
