use sea_orm::entity::prelude::*;

/// GPS location sample reported for a motorcycle in a sector.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "localizacao")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id_localizacao: i32,
    pub latitude: f64,
    pub longitude: f64,
    pub id_moto: i32,
    pub id_setor: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
