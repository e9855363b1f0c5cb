use sea_orm::entity::prelude::*;

/// Sector within a unit where motorcycles are parked or serviced.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "setor")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id_setor: i32,
    pub nome: String,
    pub id_unidade: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
