use sea_orm_migration::{prelude::*, schema::*};

use super::{m20250301_000001_create_user_table::User, m20250301_000002_create_gym_table::Gym};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(JoinRequest::Table)
                    .if_not_exists()
                    .col(pk_auto(JoinRequest::Id))
                    .col(integer(JoinRequest::MemberId))
                    .col(integer(JoinRequest::GymId))
                    .col(string(JoinRequest::Status))
                    // NULLs never collide, so only pending rows take part in the constraint
                    .col(string_null(JoinRequest::PendingKey).unique_key())
                    .col(
                        timestamp_with_time_zone(JoinRequest::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_with_time_zone_null(JoinRequest::DecidedAt))
                    .col(integer_null(JoinRequest::DecidedBy))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_join_request_member_id")
                            .from(JoinRequest::Table, JoinRequest::MemberId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_join_request_gym_id")
                            .from(JoinRequest::Table, JoinRequest::GymId)
                            .to(Gym::Table, Gym::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_join_request_member_gym")
                    .table(JoinRequest::Table)
                    .col(JoinRequest::MemberId)
                    .col(JoinRequest::GymId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(JoinRequest::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum JoinRequest {
    Table,
    Id,
    MemberId,
    GymId,
    Status,
    PendingKey,
    CreatedAt,
    DecidedAt,
    DecidedBy,
}
