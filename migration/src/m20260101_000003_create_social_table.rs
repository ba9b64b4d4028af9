use sea_orm_migration::{prelude::*, schema::*};

use super::m20260101_000002_create_profile_table::Profile;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Social::Table)
                    .if_not_exists()
                    .col(string_len(Social::Id, 21).primary_key())
                    .col(string_len(Social::ProfileId, 21))
                    .col(string_len(Social::Platform, 32))
                    .col(string_len(Social::Url, 256))
                    .col(
                        timestamp(Social::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_social_profile_id")
                            .from(Social::Table, Social::ProfileId)
                            .to(Profile::Table, Profile::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_social_profile_platform")
                    .table(Social::Table)
                    .col(Social::ProfileId)
                    .col(Social::Platform)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Social::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Social {
    Table,
    Id,
    ProfileId,
    Platform,
    Url,
    CreatedAt,
}
