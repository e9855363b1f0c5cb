//! City factory for creating test city entities.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Creates a city in the given state with a generated unique name.
pub async fn create_cidade(
    db: &DatabaseConnection,
    id_estado: i32,
) -> Result<entity::cidade::Model, DbErr> {
    create_cidade_with_nome(db, id_estado, format!("Cidade {}", next_id())).await
}

/// Creates a city in the given state with a specific name.
pub async fn create_cidade_with_nome(
    db: &DatabaseConnection,
    id_estado: i32,
    nome: impl Into<String>,
) -> Result<entity::cidade::Model, DbErr> {
    entity::cidade::ActiveModel {
        nome: ActiveValue::Set(nome.into()),
        id_estado: ActiveValue::Set(id_estado),
        ..Default::default()
    }
    .insert(db)
    .await
}
