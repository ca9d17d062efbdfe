//! Registration, login and account bootstrap.

use sea_orm::{DatabaseConnection, DbErr, SqlErr, TransactionTrait};

use crate::{
    model::user::Role,
    server::{
        data::{gym::GymRepository, user::UserRepository},
        error::{auth::AuthError, AppError},
        model::{
            gym::{CreateGymParams, Gym},
            user::{AuthUser, CreateUserParams, RegisterParams, Registration, User},
        },
        service::token::TokenService,
        util::{
            parse::normalize_email,
            password::{hash_password, verify_password},
        },
    },
};

/// Service for local email/password accounts.
///
/// Owns the user lifecycle up to token issuance: self-registration (optionally with a
/// gym for owners), credential checks, and the bootstrap admin account.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new account.
    ///
    /// Gym owners may register their gym in the same call; the user, the gym and the
    /// user's gym affiliation are written in one transaction so a failed gym insert
    /// leaves no orphaned account behind.
    ///
    /// # Returns
    /// - `Ok(Registration)` - The created user and gym, if any
    /// - `Err(AppError::BadRequest)` - Admin role requested, or gym details from a member
    /// - `Err(AppError::Conflict)` - Email already registered
    pub async fn register(&self, params: RegisterParams) -> Result<Registration, AppError> {
        if params.role == Role::Admin {
            return Err(AppError::BadRequest("Invalid role".to_string()));
        }
        if params.gym.is_some() && params.role != Role::GymOwner {
            return Err(AppError::BadRequest(
                "Only gym owners can register a gym".to_string(),
            ));
        }

        let email = normalize_email(&params.email);
        if UserRepository::new(self.db)
            .find_by_email(&email)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict("User already exists".to_string()));
        }

        let password_hash = hash_password(&params.password)?;

        let txn = self.db.begin().await?;

        let user_repo = UserRepository::new(&txn);
        let mut user = user_repo
            .create(CreateUserParams {
                name: params.name,
                email,
                password_hash,
                role: params.role,
                gym_id: None,
            })
            .await
            .map_err(email_conflict)?;

        let gym = match params.gym {
            Some(details) => {
                let gym = GymRepository::new(&txn)
                    .create(CreateGymParams {
                        owner_id: user.id,
                        details,
                    })
                    .await?;
                user_repo.set_gym(user.id, gym.id).await?;
                user.gym_id = Some(gym.id);
                Some(gym)
            }
            None => None,
        };

        txn.commit().await?;

        tracing::info!(user_id = user.id, role = %params.role, "Registered user");

        Ok(Registration {
            user: User::from_entity(user)?,
            gym: gym.map(Gym::from_entity).transpose()?,
        })
    }

    /// Checks credentials and issues a bearer token.
    ///
    /// Unknown email and wrong password are indistinguishable to the caller.
    ///
    /// # Returns
    /// - `Ok((token, user))` - Signed token and the authenticated user
    /// - `Err(AuthError::InvalidCredentials)` - Email unknown or password wrong
    pub async fn login(
        &self,
        tokens: &TokenService,
        email: &str,
        password: &str,
    ) -> Result<(String, User), AppError> {
        let email = normalize_email(email);

        let Some(model) = UserRepository::new(self.db).find_by_email(&email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &model.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        let user = User::from_entity(model)?;
        let token = tokens.issue(&AuthUser::from(&user))?;

        tracing::debug!(user_id = user.id, "User logged in");

        Ok((token, user))
    }

    /// Reloads the caller's profile from the database.
    ///
    /// # Returns
    /// - `Ok(User)` - Current profile
    /// - `Err(AuthError::UserNotInDatabase)` - Account was removed after the token was issued
    pub async fn verify(&self, caller: &AuthUser) -> Result<User, AppError> {
        let model = UserRepository::new(self.db)
            .find_by_id(caller.id)
            .await?
            .ok_or(AuthError::UserNotInDatabase(caller.id))?;

        User::from_entity(model)
    }

    /// Ensures an admin account exists for the given email.
    ///
    /// Creates the account with the given password when missing, otherwise promotes the
    /// existing account without touching its password.
    pub async fn ensure_admin(&self, email: &str, password: &str) -> Result<User, AppError> {
        let email = normalize_email(email);
        let repo = UserRepository::new(self.db);

        if let Some(existing) = repo.find_by_email(&email).await? {
            if existing.role != Role::Admin.as_str() {
                repo.set_role(existing.id, Role::Admin).await?;
                tracing::info!(user_id = existing.id, "Promoted bootstrap account to admin");
            }

            let refreshed = repo
                .find_by_id(existing.id)
                .await?
                .ok_or(AuthError::UserNotInDatabase(existing.id))?;

            return User::from_entity(refreshed);
        }

        let model = repo
            .create(CreateUserParams {
                name: "Administrator".to_string(),
                email,
                password_hash: hash_password(password)?,
                role: Role::Admin,
                gym_id: None,
            })
            .await?;

        tracing::info!(user_id = model.id, "Created bootstrap admin account");

        User::from_entity(model)
    }
}

/// Maps a unique violation on the email column to a conflict.
fn email_conflict(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            AppError::Conflict("User already exists".to_string())
        }
        _ => err.into(),
    }
}
