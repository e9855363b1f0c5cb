use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(HistoricoManutencao::Table)
                    .if_not_exists()
                    .col(pk_auto(HistoricoManutencao::IdMovimentacao))
                    .col(integer(HistoricoManutencao::IdMoto))
                    .col(integer(HistoricoManutencao::IdSetorOrigem))
                    .col(integer(HistoricoManutencao::IdSetorDestino))
                    .col(date_time(HistoricoManutencao::DataMovimento))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(HistoricoManutencao::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum HistoricoManutencao {
    Table,
    IdMovimentacao,
    IdMoto,
    IdSetorOrigem,
    IdSetorDestino,
    DataMovimento,
}
