use sea_orm::entity::prelude::*;

/// RFID tag attached to a motorcycle.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "rfid")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id_rfid: i32,
    pub numero_rfid: i32,
    pub id_moto: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
