use sea_orm_migration::{prelude::*, schema::*};

use super::m20260101_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Streak::Table)
                    .if_not_exists()
                    .col(integer(Streak::UserId))
                    .col(date(Streak::StreakDate))
                    .col(double(Streak::HoursCompleted))
                    .col(integer(Streak::TasksCompleted))
                    .col(
                        timestamp_with_time_zone(Streak::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .name("pk_streak")
                            .col(Streak::UserId)
                            .col(Streak::StreakDate),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_streak_user_id")
                            .from(Streak::Table, Streak::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Streak::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Streak {
    Table,
    UserId,
    StreakDate,
    HoursCompleted,
    TasksCompleted,
    CreatedAt,
}
