use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DefeitoMoto::Table)
                    .if_not_exists()
                    .col(pk_auto(DefeitoMoto::IdDefeitoMoto))
                    .col(integer(DefeitoMoto::IdMoto))
                    .col(integer(DefeitoMoto::IdDefeito))
                    .col(date_time(DefeitoMoto::DataRegistro))
                    .col(date_time(DefeitoMoto::DataAtualizacao))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DefeitoMoto::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DefeitoMoto {
    Table,
    IdDefeitoMoto,
    IdMoto,
    IdDefeito,
    DataRegistro,
    DataAtualizacao,
}
