//! Gym data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::gym::CreateGymParams;

pub struct GymRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GymRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a gym, storing amenities, open days and plans as JSON columns.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created gym
    /// - `Err(DbErr::Json)` - A sub-document could not be encoded
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateGymParams) -> Result<entity::gym::Model, DbErr> {
        let details = params.details;

        entity::gym::ActiveModel {
            name: ActiveValue::Set(details.name),
            owner_id: ActiveValue::Set(params.owner_id),
            street: ActiveValue::Set(details.address.street),
            city: ActiveValue::Set(details.address.city),
            state: ActiveValue::Set(details.address.state),
            zip_code: ActiveValue::Set(details.address.zip_code),
            phone: ActiveValue::Set(details.contact.phone),
            contact_email: ActiveValue::Set(details.contact.email),
            amenities: ActiveValue::Set(to_json(&details.amenities)?),
            open_time: ActiveValue::Set(details.operating_hours.open_time),
            close_time: ActiveValue::Set(details.operating_hours.close_time),
            days_open: ActiveValue::Set(to_json(&details.operating_hours.days_open)?),
            membership_plans: ActiveValue::Set(to_json(&details.membership_plans)?),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::gym::Model>, DbErr> {
        entity::prelude::Gym::find_by_id(id).one(self.db).await
    }

    /// Gets every gym ordered by name.
    pub async fn get_all(&self) -> Result<Vec<entity::gym::Model>, DbErr> {
        entity::prelude::Gym::find()
            .order_by_asc(entity::gym::Column::Name)
            .order_by_asc(entity::gym::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets gyms owned by a user, oldest first.
    pub async fn get_by_owner(&self, owner_id: i32) -> Result<Vec<entity::gym::Model>, DbErr> {
        entity::prelude::Gym::find()
            .filter(entity::gym::Column::OwnerId.eq(owner_id))
            .order_by_asc(entity::gym::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_ids(&self, ids: Vec<i32>) -> Result<Vec<entity::gym::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Gym::find()
            .filter(entity::gym::Column::Id.is_in(ids))
            .all(self.db)
            .await
    }
}

pub(super) fn to_json<T: serde::Serialize>(value: &T) -> Result<serde_json::Value, DbErr> {
    serde_json::to_value(value).map_err(|e| DbErr::Json(e.to_string()))
}
