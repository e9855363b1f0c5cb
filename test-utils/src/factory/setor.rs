//! Sector factory for creating test sector entities.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Creates a sector in the given unit with a generated unique name.
pub async fn create_setor(
    db: &DatabaseConnection,
    id_unidade: i32,
) -> Result<entity::setor::Model, DbErr> {
    create_setor_with_nome(db, id_unidade, format!("Setor {}", next_id())).await
}

/// Creates a sector in the given unit with a specific name.
pub async fn create_setor_with_nome(
    db: &DatabaseConnection,
    id_unidade: i32,
    nome: impl Into<String>,
) -> Result<entity::setor::Model, DbErr> {
    entity::setor::ActiveModel {
        nome: ActiveValue::Set(nome.into()),
        id_unidade: ActiveValue::Set(id_unidade),
        ..Default::default()
    }
    .insert(db)
    .await
}
