//! Defect catalog factory for creating test defect entities.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Creates a catalog defect with a generated unique name.
pub async fn create_defeito(db: &DatabaseConnection) -> Result<entity::defeito::Model, DbErr> {
    let id = next_id();

    entity::defeito::ActiveModel {
        nome: ActiveValue::Set(format!("Defeito {id}")),
        descricao: ActiveValue::Set(format!("Descricao do defeito {id}")),
        ..Default::default()
    }
    .insert(db)
    .await
}
