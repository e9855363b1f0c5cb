use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Moto::Table)
                    .if_not_exists()
                    .col(pk_auto(Moto::IdMoto))
                    .col(string(Moto::Modelo))
                    .col(string(Moto::Placa))
                    .col(string(Moto::Status))
                    .col(date_time(Moto::DataCadastro))
                    .col(date_time(Moto::DataAtualizacao))
                    .col(integer(Moto::IdSetor))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Moto::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Moto {
    Table,
    IdMoto,
    Modelo,
    Placa,
    Status,
    DataCadastro,
    DataAtualizacao,
    IdSetor,
}
