use sea_orm::entity::prelude::*;

/// Association between a motorcycle and a reported defect.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "defeito_moto")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id_defeito_moto: i32,
    pub id_moto: i32,
    pub id_defeito: i32,
    pub data_registro: ChronoDateTime,
    pub data_atualizacao: ChronoDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
