//! Join request factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for join requests between a member and a gym.
///
/// Defaults to `pending`. Pending requests get the `"{member}:{gym}"` pending key so
/// the uniqueness constraint behaves as it does for requests submitted through the API.
pub struct JoinRequestFactory<'a> {
    db: &'a DatabaseConnection,
    member_id: i32,
    gym_id: i32,
    status: String,
    decided_by: Option<i32>,
}

impl<'a> JoinRequestFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, member_id: i32, gym_id: i32) -> Self {
        Self {
            db,
            member_id,
            gym_id,
            status: "pending".to_string(),
            decided_by: None,
        }
    }

    /// Sets the stored status string (`pending`, `approved` or `rejected`).
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn decided_by(mut self, decided_by: Option<i32>) -> Self {
        self.decided_by = decided_by;
        self
    }

    pub async fn build(self) -> Result<entity::join_request::Model, DbErr> {
        let now = Utc::now();
        let pending = self.status == "pending";

        entity::join_request::ActiveModel {
            member_id: ActiveValue::Set(self.member_id),
            gym_id: ActiveValue::Set(self.gym_id),
            status: ActiveValue::Set(self.status),
            pending_key: ActiveValue::Set(
                pending.then(|| format!("{}:{}", self.member_id, self.gym_id)),
            ),
            created_at: ActiveValue::Set(now),
            decided_at: ActiveValue::Set((!pending).then_some(now)),
            decided_by: ActiveValue::Set(self.decided_by),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending join request.
pub async fn create_join_request(
    db: &DatabaseConnection,
    member_id: i32,
    gym_id: i32,
) -> Result<entity::join_request::Model, DbErr> {
    JoinRequestFactory::new(db, member_id, gym_id).build().await
}
