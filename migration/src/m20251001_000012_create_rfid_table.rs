use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Rfid::Table)
                    .if_not_exists()
                    .col(pk_auto(Rfid::IdRfid))
                    .col(integer(Rfid::NumeroRfid))
                    .col(integer(Rfid::IdMoto))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Rfid::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Rfid {
    Table,
    IdRfid,
    NumeroRfid,
    IdMoto,
}
