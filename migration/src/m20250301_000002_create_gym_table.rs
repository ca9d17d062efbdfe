use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Gym::Table)
                    .if_not_exists()
                    .col(pk_auto(Gym::Id))
                    .col(string(Gym::Name))
                    .col(integer(Gym::OwnerId))
                    .col(string(Gym::Street))
                    .col(string(Gym::City))
                    .col(string(Gym::State))
                    .col(string(Gym::ZipCode))
                    .col(string(Gym::Phone))
                    .col(string(Gym::ContactEmail))
                    .col(json(Gym::Amenities))
                    .col(string(Gym::OpenTime))
                    .col(string(Gym::CloseTime))
                    .col(json(Gym::DaysOpen))
                    .col(json(Gym::MembershipPlans))
                    .col(boolean(Gym::IsActive).default(true))
                    .col(
                        timestamp_with_time_zone(Gym::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_gym_owner_id")
                            .from(Gym::Table, Gym::OwnerId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_gym_owner_id")
                    .table(Gym::Table)
                    .col(Gym::OwnerId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Gym::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Gym {
    Table,
    Id,
    Name,
    OwnerId,
    Street,
    City,
    State,
    ZipCode,
    Phone,
    ContactEmail,
    Amenities,
    OpenTime,
    CloseTime,
    DaysOpen,
    MembershipPlans,
    IsActive,
    CreatedAt,
}
