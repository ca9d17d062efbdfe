//! User domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::user::{Role, UserDto, UserSummaryDto},
    server::{error::AppError, util::parse::parse_stored},
};

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    /// Normalized (trimmed, lowercase) email address.
    pub email: String,
    /// Argon2id PHC string.
    pub password_hash: String,
    pub role: Role,
    /// Affiliated gym for members, owned gym for gym owners.
    pub gym_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model.
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(AppError::InternalErr(ParseStoredValue))` - Stored role is unknown
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            password_hash: entity.password_hash,
            role: parse_stored("user.role", entity.role)?,
            gym_id: entity.gym_id,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
            role: self.role,
            gym_id: self.gym_id,
        }
    }

    pub fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

/// Public identity of a user, as embedded in other resources.
#[derive(Debug, Clone, PartialEq)]
pub struct UserSummary {
    pub id: i32,
    pub name: String,
    pub email: String,
}

impl UserSummary {
    pub fn from_entity(entity: &entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name.clone(),
            email: entity.email.clone(),
        }
    }

    /// Placeholder for a reference whose user row is gone.
    pub fn unknown(id: i32) -> Self {
        Self {
            id,
            name: format!("Unknown User ({})", id),
            email: String::new(),
        }
    }

    pub fn into_dto(self) -> UserSummaryDto {
        UserSummaryDto {
            id: self.id,
            name: self.name,
            email: self.email,
        }
    }
}

/// Caller identity decoded from a verified bearer token.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthUser {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub gym_id: Option<i32>,
}

impl AuthUser {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

impl From<&User> for AuthUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role,
            gym_id: user.gym_id,
        }
    }
}

/// Parameters for inserting a user row.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub gym_id: Option<i32>,
}

/// Parameters for self-registration, password still in plaintext.
#[derive(Debug, Clone)]
pub struct RegisterParams {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub gym: Option<crate::server::model::gym::GymDetails>,
}

impl RegisterParams {
    pub fn from_dto(dto: crate::model::user::RegisterDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            email: dto.email,
            password: dto.password,
            role: dto.role,
            gym: dto
                .gym_details
                .map(crate::server::model::gym::GymDetails::from_dto),
        }
    }
}

/// Outcome of a successful registration.
#[derive(Debug, Clone)]
pub struct Registration {
    pub user: User,
    pub gym: Option<crate::server::model::gym::Gym>,
}
