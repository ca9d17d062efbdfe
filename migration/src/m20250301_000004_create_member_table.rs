use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250301_000001_create_user_table::User, m20250301_000002_create_gym_table::Gym,
    m20250301_000003_create_join_request_table::JoinRequest,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Member::Table)
                    .if_not_exists()
                    .col(pk_auto(Member::Id))
                    .col(integer(Member::UserId))
                    .col(integer(Member::GymId))
                    .col(integer_uniq(Member::JoinRequestId))
                    .col(string(Member::PlanName))
                    .col(string(Member::PlanDuration))
                    .col(date(Member::PlanStartDate))
                    .col(date(Member::PlanEndDate))
                    .col(double(Member::PlanPrice))
                    .col(string(Member::Status))
                    .col(json(Member::StatusHistory))
                    .col(json_null(Member::HealthInfo))
                    .col(json(Member::Measurements))
                    .col(json_null(Member::ExercisePlan))
                    .col(json(Member::DietPlan))
                    .col(
                        timestamp_with_time_zone(Member::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Member::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_member_user_id")
                            .from(Member::Table, Member::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_member_gym_id")
                            .from(Member::Table, Member::GymId)
                            .to(Gym::Table, Gym::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_member_join_request_id")
                            .from(Member::Table, Member::JoinRequestId)
                            .to(JoinRequest::Table, JoinRequest::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Member::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Member {
    Table,
    Id,
    UserId,
    GymId,
    JoinRequestId,
    PlanName,
    PlanDuration,
    PlanStartDate,
    PlanEndDate,
    PlanPrice,
    Status,
    StatusHistory,
    HealthInfo,
    Measurements,
    ExercisePlan,
    DietPlan,
    CreatedAt,
    UpdatedAt,
}
