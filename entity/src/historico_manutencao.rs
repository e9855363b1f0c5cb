use sea_orm::entity::prelude::*;

/// Movement history entry recording a motorcycle transfer between sectors.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "historico_manutencao")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id_movimentacao: i32,
    pub id_moto: i32,
    pub id_setor_origem: i32,
    pub id_setor_destino: i32,
    pub data_movimento: ChronoDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
