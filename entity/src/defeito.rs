use sea_orm::entity::prelude::*;

/// Defect catalog entry, linked to motorcycles through `defeito_moto`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "defeito")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id_defeito: i32,
    pub nome: String,
    pub descricao: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
