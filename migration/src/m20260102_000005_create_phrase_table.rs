use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Phrase::Table)
                    .if_not_exists()
                    .col(string_len(Phrase::Id, 21).primary_key())
                    .col(text(Phrase::Content))
                    .col(string_len_null(Phrase::Source, 100))
                    .col(
                        timestamp(Phrase::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Phrase::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Phrase {
    Table,
    Id,
    Content,
    Source,
    CreatedAt,
}
