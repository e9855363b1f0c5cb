use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Localizacao::Table)
                    .if_not_exists()
                    .col(pk_auto(Localizacao::IdLocalizacao))
                    .col(double(Localizacao::Latitude))
                    .col(double(Localizacao::Longitude))
                    .col(integer(Localizacao::IdMoto))
                    .col(integer(Localizacao::IdSetor))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Localizacao::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Localizacao {
    Table,
    IdLocalizacao,
    Latitude,
    Longitude,
    IdMoto,
    IdSetor,
}
