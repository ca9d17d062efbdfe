//! Join request data repository.
//!
//! At most one pending request per (member, gym) is guaranteed by the unique
//! `pending_key` column: it holds `"{member}:{gym}"` while pending and is cleared when
//! the request is decided.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::{model::join_request::RequestStatus, server::model::join_request::pending_key};

pub struct JoinRequestRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> JoinRequestRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a pending request.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created request
    /// - `Err(DbErr)` - Database error; a unique constraint violation means another
    ///   pending request for the same member and gym already exists
    pub async fn create(
        &self,
        member_id: i32,
        gym_id: i32,
    ) -> Result<entity::join_request::Model, DbErr> {
        entity::join_request::ActiveModel {
            member_id: ActiveValue::Set(member_id),
            gym_id: ActiveValue::Set(gym_id),
            status: ActiveValue::Set(RequestStatus::Pending.as_str().to_string()),
            pending_key: ActiveValue::Set(Some(pending_key(member_id, gym_id))),
            created_at: ActiveValue::Set(Utc::now()),
            decided_at: ActiveValue::Set(None),
            decided_by: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::join_request::Model>, DbErr> {
        entity::prelude::JoinRequest::find_by_id(id).one(self.db).await
    }

    /// Finds the newest pending or approved request for a member and gym.
    pub async fn find_open(
        &self,
        member_id: i32,
        gym_id: i32,
    ) -> Result<Option<entity::join_request::Model>, DbErr> {
        entity::prelude::JoinRequest::find()
            .filter(entity::join_request::Column::MemberId.eq(member_id))
            .filter(entity::join_request::Column::GymId.eq(gym_id))
            .filter(entity::join_request::Column::Status.is_in([
                RequestStatus::Pending.as_str(),
                RequestStatus::Approved.as_str(),
            ]))
            .order_by_desc(entity::join_request::Column::CreatedAt)
            .one(self.db)
            .await
    }

    /// Moves a pending request to a terminal status.
    ///
    /// The update only matches while the row is still pending, so of two concurrent
    /// decisions exactly one succeeds.
    ///
    /// # Returns
    /// - `Ok(true)` - This call decided the request
    /// - `Ok(false)` - Request missing or no longer pending
    pub async fn decide(
        &self,
        id: i32,
        status: RequestStatus,
        decided_by: i32,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::JoinRequest::update_many()
            .col_expr(
                entity::join_request::Column::Status,
                Expr::value(status.as_str()),
            )
            .col_expr(
                entity::join_request::Column::PendingKey,
                Expr::value(Option::<String>::None),
            )
            .col_expr(entity::join_request::Column::DecidedAt, Expr::value(Utc::now()))
            .col_expr(entity::join_request::Column::DecidedBy, Expr::value(decided_by))
            .filter(entity::join_request::Column::Id.eq(id))
            .filter(entity::join_request::Column::Status.eq(RequestStatus::Pending.as_str()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Requests submitted by a member, newest first.
    pub async fn get_by_member(
        &self,
        member_id: i32,
    ) -> Result<Vec<entity::join_request::Model>, DbErr> {
        entity::prelude::JoinRequest::find()
            .filter(entity::join_request::Column::MemberId.eq(member_id))
            .order_by_desc(entity::join_request::Column::CreatedAt)
            .order_by_desc(entity::join_request::Column::Id)
            .all(self.db)
            .await
    }

    /// Requests addressed to any of the given gyms, newest first.
    pub async fn get_by_gyms(
        &self,
        gym_ids: Vec<i32>,
    ) -> Result<Vec<entity::join_request::Model>, DbErr> {
        if gym_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::JoinRequest::find()
            .filter(entity::join_request::Column::GymId.is_in(gym_ids))
            .order_by_desc(entity::join_request::Column::CreatedAt)
            .order_by_desc(entity::join_request::Column::Id)
            .all(self.db)
            .await
    }

    /// Every request, newest first.
    pub async fn get_all(&self) -> Result<Vec<entity::join_request::Model>, DbErr> {
        entity::prelude::JoinRequest::find()
            .order_by_desc(entity::join_request::Column::CreatedAt)
            .order_by_desc(entity::join_request::Column::Id)
            .all(self.db)
            .await
    }
}
