use sea_orm::entity::prelude::*;

/// City, belonging to a state.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "cidade")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id_cidade: i32,
    pub nome: String,
    pub id_estado: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
