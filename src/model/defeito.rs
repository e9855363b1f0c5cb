//! Defect catalog DTOs and list filters.

use serde::{Deserialize, Serialize};

use crate::model::{
    api::Link,
    page::{active_text, item_links, FilterEncoder, FilterQuery},
};

pub const BASE_PATH: &str = "/defeitos";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DefeitoDto {
    pub id_defeito: i32,
    pub nome: String,
    pub descricao: String,
    pub links: Vec<Link>,
}

impl DefeitoDto {
    pub fn from_entity(model: entity::defeito::Model) -> Self {
        Self {
            links: item_links(BASE_PATH, model.id_defeito),
            id_defeito: model.id_defeito,
            nome: model.nome,
            descricao: model.descricao,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefeitoInput {
    pub nome: String,
    pub descricao: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefeitoFilter {
    pub nome: Option<String>,
}

impl FilterEncoder for DefeitoFilter {
    fn encode(&self, query: &mut FilterQuery) {
        if let Some(nome) = active_text(&self.nome) {
            query.push_text("nome", nome);
        }
    }
}
