//! Unit factory for creating test unit entities.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Creates a unit in the given city with a generated unique name.
pub async fn create_unidade(
    db: &DatabaseConnection,
    id_cidade: i32,
) -> Result<entity::unidade::Model, DbErr> {
    entity::unidade::ActiveModel {
        nome: ActiveValue::Set(format!("Unidade {}", next_id())),
        id_cidade: ActiveValue::Set(id_cidade),
        ..Default::default()
    }
    .insert(db)
    .await
}
