use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Lora::Table)
                    .if_not_exists()
                    .col(pk_auto(Lora::IdLora))
                    .col(integer(Lora::NumeroLora))
                    .col(integer(Lora::Moto))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Lora::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Lora {
    Table,
    IdLora,
    NumeroLora,
    Moto,
}
