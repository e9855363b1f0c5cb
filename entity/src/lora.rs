use sea_orm::entity::prelude::*;

/// LoRa tracking device. `moto` holds the assigned motorcycle id, with `0`
/// meaning the device is not attached to any motorcycle.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "lora")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id_lora: i32,
    pub numero_lora: i32,
    pub moto: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
