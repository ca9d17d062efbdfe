//! Gym factory for creating test gym entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::{json, Value};

/// Factory for creating test gyms owned by a given user.
///
/// Defaults to an active gym in Springfield open on weekdays with two plans:
/// `Basic` (Monthly, 30.0) and `Premium` (Annual, 300.0).
pub struct GymFactory<'a> {
    db: &'a DatabaseConnection,
    owner_id: i32,
    name: String,
    city: String,
    amenities: Value,
    membership_plans: Value,
    is_active: bool,
}

impl<'a> GymFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, owner_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            owner_id,
            name: format!("Gym {}", id),
            city: "Springfield".to_string(),
            amenities: json!(["Cardio Equipment", "Weight Training"]),
            membership_plans: json!([
                { "name": "Basic", "price": 30.0, "duration": "Monthly" },
                { "name": "Premium", "price": 300.0, "duration": "Annual" }
            ]),
            is_active: true,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    pub fn amenities(mut self, amenities: Value) -> Self {
        self.amenities = amenities;
        self
    }

    /// Replaces the plan catalog; expects a JSON array of `{name, price, duration}`.
    pub fn membership_plans(mut self, membership_plans: Value) -> Self {
        self.membership_plans = membership_plans;
        self
    }

    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub async fn build(self) -> Result<entity::gym::Model, DbErr> {
        entity::gym::ActiveModel {
            name: ActiveValue::Set(self.name),
            owner_id: ActiveValue::Set(self.owner_id),
            street: ActiveValue::Set("1 Main Street".to_string()),
            city: ActiveValue::Set(self.city),
            state: ActiveValue::Set("IL".to_string()),
            zip_code: ActiveValue::Set("62701".to_string()),
            phone: ActiveValue::Set("555-0100".to_string()),
            contact_email: ActiveValue::Set("front-desk@example.com".to_string()),
            amenities: ActiveValue::Set(self.amenities),
            open_time: ActiveValue::Set("06:00".to_string()),
            close_time: ActiveValue::Set("22:00".to_string()),
            days_open: ActiveValue::Set(json!([
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday"
            ])),
            membership_plans: ActiveValue::Set(self.membership_plans),
            is_active: ActiveValue::Set(self.is_active),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a gym with default values for the given owner.
pub async fn create_gym(
    db: &DatabaseConnection,
    owner_id: i32,
) -> Result<entity::gym::Model, DbErr> {
    GymFactory::new(db, owner_id).build().await
}
