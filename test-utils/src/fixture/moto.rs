//! Motorcycle fixtures for creating in-memory test data.

use chrono::{NaiveDate, NaiveDateTime};
use entity::moto;

/// Default test plate.
pub const DEFAULT_PLACA: &str = "ABC1D23";

/// Default test model name.
pub const DEFAULT_MODELO: &str = "Sport 110i";

/// Default test status.
pub const DEFAULT_STATUS: &str = "DISPONIVEL";

/// Fixed timestamp used by fixtures so serialization output is stable.
pub fn default_timestamp() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 1, 15)
        .unwrap()
        .and_hms_opt(12, 30, 0)
        .unwrap()
}

/// Creates a motorcycle entity model with default values, without touching
/// the database.
///
/// # Default Values
/// - id_moto: `1`
/// - modelo: `"Sport 110i"`
/// - placa: `"ABC1D23"`
/// - status: `"DISPONIVEL"`
/// - data_cadastro / data_atualizacao: 2025-01-15 12:30:00
/// - id_setor: `1`
pub fn entity() -> moto::Model {
    moto::Model {
        id_moto: 1,
        modelo: DEFAULT_MODELO.to_string(),
        placa: DEFAULT_PLACA.to_string(),
        status: DEFAULT_STATUS.to_string(),
        data_cadastro: default_timestamp(),
        data_atualizacao: default_timestamp(),
        id_setor: 1,
    }
}

/// Creates a motorcycle entity model with a specific id, keeping the other
/// defaults.
pub fn entity_with_id(id_moto: i32) -> moto::Model {
    moto::Model { id_moto, ..entity() }
}
