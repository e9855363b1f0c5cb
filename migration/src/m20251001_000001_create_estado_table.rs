use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Estado::Table)
                    .if_not_exists()
                    .col(pk_auto(Estado::IdEstado))
                    .col(string(Estado::Nome))
                    .col(string(Estado::Sigla))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Estado::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Estado {
    Table,
    IdEstado,
    Nome,
    Sigla,
}
