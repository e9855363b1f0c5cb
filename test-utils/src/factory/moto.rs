//! Motorcycle factory for creating test motorcycle entities.
//!
//! Provides a builder pattern for creating motorcycle entities with default
//! values that can be overridden as needed for specific test scenarios.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test motorcycles with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::moto::MotoFactory;
///
/// let moto = MotoFactory::new(&db, setor.id_setor)
///     .placa("ABC1D23")
///     .modelo("Sport 110i")
///     .status("MANUTENCAO")
///     .build()
///     .await?;
/// ```
pub struct MotoFactory<'a> {
    db: &'a DatabaseConnection,
    modelo: String,
    placa: String,
    status: String,
    id_setor: i32,
}

impl<'a> MotoFactory<'a> {
    /// Creates a new MotoFactory with default values.
    ///
    /// Defaults:
    /// - modelo: `"Moto {id}"` where id is auto-incremented
    /// - placa: `"TST{id:04}"` (unique per factory call)
    /// - status: `"DISPONIVEL"`
    pub fn new(db: &'a DatabaseConnection, id_setor: i32) -> Self {
        let id = next_id();
        Self {
            db,
            modelo: format!("Moto {id}"),
            placa: format!("TST{id:04}"),
            status: "DISPONIVEL".to_string(),
            id_setor,
        }
    }

    pub fn modelo(mut self, modelo: impl Into<String>) -> Self {
        self.modelo = modelo.into();
        self
    }

    pub fn placa(mut self, placa: impl Into<String>) -> Self {
        self.placa = placa.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn id_setor(mut self, id_setor: i32) -> Self {
        self.id_setor = id_setor;
        self
    }

    /// Builds and inserts the motorcycle entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::moto::Model)` - Created motorcycle entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::moto::Model, DbErr> {
        let now = Utc::now().naive_utc();

        entity::moto::ActiveModel {
            modelo: ActiveValue::Set(self.modelo),
            placa: ActiveValue::Set(self.placa),
            status: ActiveValue::Set(self.status),
            data_cadastro: ActiveValue::Set(now),
            data_atualizacao: ActiveValue::Set(now),
            id_setor: ActiveValue::Set(self.id_setor),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a motorcycle in the given sector with default values.
///
/// Shorthand for `MotoFactory::new(db, id_setor).build().await`.
pub async fn create_moto(
    db: &DatabaseConnection,
    id_setor: i32,
) -> Result<entity::moto::Model, DbErr> {
    MotoFactory::new(db, id_setor).build().await
}
