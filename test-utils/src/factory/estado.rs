//! State factory for creating test state entities.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Creates a state with default values.
///
/// Defaults:
/// - nome: `"Estado {id}"` where id is auto-incremented
/// - sigla: a unique two-character-style marker `"E{id}"`
pub async fn create_estado(db: &DatabaseConnection) -> Result<entity::estado::Model, DbErr> {
    let id = next_id();

    entity::estado::ActiveModel {
        nome: ActiveValue::Set(format!("Estado {id}")),
        sigla: ActiveValue::Set(format!("E{id}")),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a state with a specific abbreviation.
pub async fn create_estado_with_sigla(
    db: &DatabaseConnection,
    sigla: impl Into<String>,
) -> Result<entity::estado::Model, DbErr> {
    let id = next_id();

    entity::estado::ActiveModel {
        nome: ActiveValue::Set(format!("Estado {id}")),
        sigla: ActiveValue::Set(sigla.into()),
        ..Default::default()
    }
    .insert(db)
    .await
}
