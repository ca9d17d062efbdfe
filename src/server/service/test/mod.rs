use crate::{model::user::Role, server::model::user::AuthUser};

mod member;

/// Builds the caller identity a verified token would yield for a stored user.
fn caller(user: &entity::user::Model) -> AuthUser {
    AuthUser {
        id: user.id,
        name: user.name.clone(),
        email: user.email.clone(),
        role: user.role.parse::<Role>().unwrap(),
        gym_id: user.gym_id,
    }
}
