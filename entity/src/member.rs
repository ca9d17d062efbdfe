use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "member")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub gym_id: i32,
    #[sea_orm(unique)]
    pub join_request_id: i32,
    pub plan_name: String,
    /// One of `Monthly`, `Quarterly` or `Annual`.
    pub plan_duration: String,
    pub plan_start_date: Date,
    pub plan_end_date: Date,
    pub plan_price: f64,
    /// One of `active`, `inactive` or `suspended`.
    pub status: String,
    /// Append-only JSON array of status transitions.
    pub status_history: Json,
    pub health_info: Option<Json>,
    /// JSON array of measurement snapshots, oldest first.
    pub measurements: Json,
    pub exercise_plan: Option<Json>,
    /// JSON array of per-day diet entries.
    pub diet_plan: Json,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::gym::Entity",
        from = "Column::GymId",
        to = "super::gym::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Gym,
    #[sea_orm(
        belongs_to = "super::join_request::Entity",
        from = "Column::JoinRequestId",
        to = "super::join_request::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    JoinRequest,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::gym::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Gym.def()
    }
}

impl Related<super::join_request::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::JoinRequest.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
