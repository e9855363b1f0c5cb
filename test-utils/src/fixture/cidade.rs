//! City fixtures for creating in-memory test data.

use entity::cidade;

/// Default test city name.
pub const DEFAULT_NOME: &str = "Cidade Teste";

/// Creates a city entity model with default values, without touching the
/// database.
///
/// # Default Values
/// - id_cidade: `1`
/// - nome: `"Cidade Teste"`
/// - id_estado: `1`
pub fn entity() -> cidade::Model {
    cidade::Model {
        id_cidade: 1,
        nome: DEFAULT_NOME.to_string(),
        id_estado: 1,
    }
}

/// Creates a city entity model with a specific id, keeping the other
/// defaults.
pub fn entity_with_id(id_cidade: i32) -> cidade::Model {
    cidade::Model {
        id_cidade,
        ..entity()
    }
}
