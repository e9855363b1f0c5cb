use sea_orm::entity::prelude::*;

/// Brazilian state. `sigla` is the two-letter abbreviation (SP, RJ, ...).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "estado")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id_estado: i32,
    pub nome: String,
    pub sigla: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
