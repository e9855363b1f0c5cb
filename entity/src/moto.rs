use sea_orm::entity::prelude::*;

/// Motorcycle tracked by the fleet. `id_setor` references `setor`; the
/// reference is validated by the service layer rather than a database
/// constraint, so a deleted sector leaves the value dangling.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "moto")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id_moto: i32,
    pub modelo: String,
    pub placa: String,
    pub status: String,
    pub data_cadastro: ChronoDateTime,
    pub data_atualizacao: ChronoDateTime,
    pub id_setor: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
