//! Database migrations for the fleet management schema.
//!
//! Tables are created in dependency order. References between tables are
//! intentionally not declared as database foreign keys: existence checks run
//! in the service layer before each write, and deletes never cascade.

pub use sea_orm_migration::prelude::*;

mod m20251001_000001_create_estado_table;
mod m20251001_000002_create_cidade_table;
mod m20251001_000003_create_unidade_table;
mod m20251001_000004_create_setor_table;
mod m20251001_000005_create_moto_table;
mod m20251001_000006_create_defeito_table;
mod m20251001_000007_create_defeito_moto_table;
mod m20251001_000008_create_manutencao_table;
mod m20251001_000009_create_historico_manutencao_table;
mod m20251001_000010_create_localizacao_table;
mod m20251001_000011_create_lora_table;
mod m20251001_000012_create_rfid_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251001_000001_create_estado_table::Migration),
            Box::new(m20251001_000002_create_cidade_table::Migration),
            Box::new(m20251001_000003_create_unidade_table::Migration),
            Box::new(m20251001_000004_create_setor_table::Migration),
            Box::new(m20251001_000005_create_moto_table::Migration),
            Box::new(m20251001_000006_create_defeito_table::Migration),
            Box::new(m20251001_000007_create_defeito_moto_table::Migration),
            Box::new(m20251001_000008_create_manutencao_table::Migration),
            Box::new(m20251001_000009_create_historico_manutencao_table::Migration),
            Box::new(m20251001_000010_create_localizacao_table::Migration),
            Box::new(m20251001_000011_create_lora_table::Migration),
            Box::new(m20251001_000012_create_rfid_table::Migration),
        ]
    }
}
