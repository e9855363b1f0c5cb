use sea_orm::entity::prelude::*;

/// Maintenance record for a motorcycle.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "manutencao")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id_manutencao: i32,
    pub id_moto: i32,
    pub descricao: String,
    pub data_manutencao: ChronoDateTime,
    pub custo_estimado: f64,
    pub tipo: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
