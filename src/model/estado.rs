//! State DTOs and list filters.

use serde::{Deserialize, Serialize};

use crate::model::{
    api::Link,
    page::{active_text, item_links, FilterEncoder, FilterQuery},
};

pub const BASE_PATH: &str = "/estados";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EstadoDto {
    pub id_estado: i32,
    pub nome: String,
    pub sigla: String,
    pub links: Vec<Link>,
}

impl EstadoDto {
    pub fn from_entity(model: entity::estado::Model) -> Self {
        Self {
            links: item_links(BASE_PATH, model.id_estado),
            id_estado: model.id_estado,
            nome: model.nome,
            sigla: model.sigla,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstadoInput {
    pub nome: String,
    pub sigla: String,
}

/// Single optional filter: case-insensitive equality on the state
/// abbreviation (`sigla=sp` matches `SP`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstadoFilter {
    pub sigla: Option<String>,
}

impl FilterEncoder for EstadoFilter {
    fn encode(&self, query: &mut FilterQuery) {
        if let Some(sigla) = active_text(&self.sigla) {
            query.push_text("sigla", sigla);
        }
    }
}
