//! Member record data repository.
//!
//! Sub-documents (status history, health info, measurements, exercise and diet plans)
//! live in JSON columns and are always written whole. The append-only ones (status
//! history, measurements) are written conditionally on the `updated_at` they were
//! read at.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::{Expr, OnConflict},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::member::{DietDay, ExercisePlan, Measurement, MemberStatus, StatusChange},
    server::{data::gym::to_json, model::member::UpsertMemberParams},
};

pub struct MemberRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MemberRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::member::Model>, DbErr> {
        entity::prelude::Member::find_by_id(id).one(self.db).await
    }

    pub async fn find_by_join_request_id(
        &self,
        join_request_id: i32,
    ) -> Result<Option<entity::member::Model>, DbErr> {
        entity::prelude::Member::find()
            .filter(entity::member::Column::JoinRequestId.eq(join_request_id))
            .one(self.db)
            .await
    }

    /// Most recently created member record of a user.
    pub async fn find_latest_by_user(
        &self,
        user_id: i32,
    ) -> Result<Option<entity::member::Model>, DbErr> {
        entity::prelude::Member::find()
            .filter(entity::member::Column::UserId.eq(user_id))
            .order_by_desc(entity::member::Column::CreatedAt)
            .order_by_desc(entity::member::Column::Id)
            .one(self.db)
            .await
    }

    /// Creates or refreshes the member record of a join request.
    ///
    /// Conflicts on `join_request_id` update the plan and affiliation in place. Status,
    /// history, measurements and plans survive a refresh; health info is replaced only
    /// when provided.
    ///
    /// # Returns
    /// - `Ok((Model, true))` - A new record was created
    /// - `Ok((Model, false))` - The existing record was updated
    /// - `Err(DbErr)` - Database error
    pub async fn upsert(
        &self,
        params: UpsertMemberParams,
    ) -> Result<(entity::member::Model, bool), DbErr> {
        let created = self
            .find_by_join_request_id(params.join_request_id)
            .await?
            .is_none();

        let now = Utc::now();
        let has_health_info = params.health_info.is_some();
        let health_info = params
            .health_info
            .as_ref()
            .map(to_json)
            .transpose()?;

        let mut update_columns = vec![
            entity::member::Column::UserId,
            entity::member::Column::GymId,
            entity::member::Column::PlanName,
            entity::member::Column::PlanDuration,
            entity::member::Column::PlanStartDate,
            entity::member::Column::PlanEndDate,
            entity::member::Column::PlanPrice,
            entity::member::Column::UpdatedAt,
        ];
        if has_health_info {
            update_columns.push(entity::member::Column::HealthInfo);
        }

        let model = entity::prelude::Member::insert(entity::member::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            gym_id: ActiveValue::Set(params.gym_id),
            join_request_id: ActiveValue::Set(params.join_request_id),
            plan_name: ActiveValue::Set(params.plan.name),
            plan_duration: ActiveValue::Set(params.plan.duration.as_str().to_string()),
            plan_start_date: ActiveValue::Set(params.plan.start_date),
            plan_end_date: ActiveValue::Set(params.plan.end_date),
            plan_price: ActiveValue::Set(params.plan.price),
            status: ActiveValue::Set(MemberStatus::Active.as_str().to_string()),
            status_history: ActiveValue::Set(to_json(&Vec::<StatusChange>::new())?),
            health_info: ActiveValue::Set(health_info),
            measurements: ActiveValue::Set(to_json(&Vec::<Measurement>::new())?),
            exercise_plan: ActiveValue::Set(None),
            diet_plan: ActiveValue::Set(to_json(&Vec::<DietDay>::new())?),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::member::Column::JoinRequestId)
                .update_columns(update_columns)
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok((model, created))
    }

    /// Persists a new status together with the full, already appended history.
    ///
    /// The write only matches while `updated_at` still holds the value the history was
    /// read at, so a concurrent append is never overwritten.
    ///
    /// # Arguments
    /// - `read_at` - `updated_at` of the record the history was built from
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The updated member
    /// - `Ok(None)` - Member missing or modified since it was read
    pub async fn update_status(
        &self,
        id: i32,
        read_at: DateTime<Utc>,
        status: MemberStatus,
        history: &[StatusChange],
    ) -> Result<Option<entity::member::Model>, DbErr> {
        let result = entity::prelude::Member::update_many()
            .col_expr(entity::member::Column::Status, Expr::value(status.as_str()))
            .col_expr(
                entity::member::Column::StatusHistory,
                Expr::value(to_json(&history)?),
            )
            .col_expr(entity::member::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::member::Column::Id.eq(id))
            .filter(entity::member::Column::UpdatedAt.eq(read_at))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.find_by_id(id).await
    }

    pub async fn set_exercise_plan(
        &self,
        id: i32,
        plan: &ExercisePlan,
    ) -> Result<entity::member::Model, DbErr> {
        entity::member::ActiveModel {
            id: ActiveValue::Unchanged(id),
            exercise_plan: ActiveValue::Set(Some(to_json(plan)?)),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .update(self.db)
        .await
    }

    pub async fn set_diet_plan(
        &self,
        id: i32,
        plan: &[DietDay],
    ) -> Result<entity::member::Model, DbErr> {
        entity::member::ActiveModel {
            id: ActiveValue::Unchanged(id),
            diet_plan: ActiveValue::Set(to_json(&plan)?),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .update(self.db)
        .await
    }

    /// Persists the measurement log after an append.
    ///
    /// Conditional on `updated_at` like [`Self::update_status`].
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The updated member
    /// - `Ok(None)` - Member missing or modified since it was read
    pub async fn set_measurements(
        &self,
        id: i32,
        read_at: DateTime<Utc>,
        measurements: &[Measurement],
    ) -> Result<Option<entity::member::Model>, DbErr> {
        let result = entity::prelude::Member::update_many()
            .col_expr(
                entity::member::Column::Measurements,
                Expr::value(to_json(&measurements)?),
            )
            .col_expr(entity::member::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::member::Column::Id.eq(id))
            .filter(entity::member::Column::UpdatedAt.eq(read_at))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.find_by_id(id).await
    }

    /// Gets one page of a gym's members, newest first.
    ///
    /// # Arguments
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Members per page
    ///
    /// # Returns
    /// - `Ok((members, total))` - The page and the total member count of the gym
    pub async fn get_by_gym_paginated(
        &self,
        gym_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::member::Model>, u64), DbErr> {
        let paginator = entity::prelude::Member::find()
            .filter(entity::member::Column::GymId.eq(gym_id))
            .order_by_desc(entity::member::Column::CreatedAt)
            .order_by_desc(entity::member::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let members = paginator.fetch_page(page).await?;

        Ok((members, total))
    }
}
