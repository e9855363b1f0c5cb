use sea_orm::entity::prelude::*;

/// Operational unit (branch) located in a city.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "unidade")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id_unidade: i32,
    pub nome: String,
    pub id_cidade: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
