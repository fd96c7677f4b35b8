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
                    .table(UserProfile::Table)
                    .if_not_exists()
                    .col(integer(UserProfile::UserId).primary_key())
                    .col(json_null(UserProfile::StudyingTopics))
                    .col(text_null(UserProfile::Goals))
                    .col(json_null(UserProfile::FocusAreas))
                    .col(double_null(UserProfile::DailyHoursTarget))
                    .col(boolean(UserProfile::OnboardingCompleted).default(false))
                    .col(
                        timestamp_with_time_zone(UserProfile::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(UserProfile::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_profile_user_id")
                            .from(UserProfile::Table, UserProfile::UserId)
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
            .drop_table(Table::drop().table(UserProfile::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserProfile {
    Table,
    UserId,
    StudyingTopics,
    Goals,
    FocusAreas,
    DailyHoursTarget,
    OnboardingCompleted,
    CreatedAt,
    UpdatedAt,
}
