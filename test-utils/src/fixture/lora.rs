//! LoRa device fixtures for creating in-memory test data.

use entity::lora;

/// Default device number.
pub const DEFAULT_NUMERO_LORA: i32 = 4521;

/// Creates an unassigned LoRa device entity model (stored assignment `0`),
/// without touching the database.
pub fn entity() -> lora::Model {
    lora::Model {
        id_lora: 1,
        numero_lora: DEFAULT_NUMERO_LORA,
        moto: 0,
    }
}

/// Creates a LoRa device entity model assigned to the given motorcycle.
pub fn entity_assigned(moto: i32) -> lora::Model {
    lora::Model { moto, ..entity() }
}
