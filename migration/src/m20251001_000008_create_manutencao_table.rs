use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Manutencao::Table)
                    .if_not_exists()
                    .col(pk_auto(Manutencao::IdManutencao))
                    .col(integer(Manutencao::IdMoto))
                    .col(string(Manutencao::Descricao))
                    .col(date_time(Manutencao::DataManutencao))
                    .col(double(Manutencao::CustoEstimado))
                    .col(string(Manutencao::Tipo))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Manutencao::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Manutencao {
    Table,
    IdManutencao,
    IdMoto,
    Descricao,
    DataManutencao,
    CustoEstimado,
    Tipo,
}
