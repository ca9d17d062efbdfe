//! Member record factory.

use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::json;

/// Factory for materialized member records.
///
/// Defaults to an active `Basic` Monthly plan running 2024-01-15 to 2024-02-15 with
/// empty histories, measurements and diet.
pub struct MemberFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    gym_id: i32,
    join_request_id: i32,
    status: String,
}

impl<'a> MemberFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, user_id: i32, gym_id: i32, join_request_id: i32) -> Self {
        Self {
            db,
            user_id,
            gym_id,
            join_request_id,
            status: "active".to_string(),
        }
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub async fn build(self) -> Result<entity::member::Model, DbErr> {
        let now = Utc::now();
        let start = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap_or_default();
        let end = NaiveDate::from_ymd_opt(2024, 2, 15).unwrap_or_default();

        entity::member::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            gym_id: ActiveValue::Set(self.gym_id),
            join_request_id: ActiveValue::Set(self.join_request_id),
            plan_name: ActiveValue::Set("Basic".to_string()),
            plan_duration: ActiveValue::Set("Monthly".to_string()),
            plan_start_date: ActiveValue::Set(start),
            plan_end_date: ActiveValue::Set(end),
            plan_price: ActiveValue::Set(30.0),
            status: ActiveValue::Set(self.status),
            status_history: ActiveValue::Set(json!([])),
            health_info: ActiveValue::Set(None),
            measurements: ActiveValue::Set(json!([])),
            exercise_plan: ActiveValue::Set(None),
            diet_plan: ActiveValue::Set(json!([])),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active member record for an approved request.
pub async fn create_member(
    db: &DatabaseConnection,
    request: &entity::join_request::Model,
) -> Result<entity::member::Model, DbErr> {
    MemberFactory::new(db, request.member_id, request.gym_id, request.id)
        .build()
        .await
}
