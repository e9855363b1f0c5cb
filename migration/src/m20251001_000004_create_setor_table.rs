use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Setor::Table)
                    .if_not_exists()
                    .col(pk_auto(Setor::IdSetor))
                    .col(string(Setor::Nome))
                    .col(integer(Setor::IdUnidade))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Setor::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Setor {
    Table,
    IdSetor,
    Nome,
    IdUnidade,
}
