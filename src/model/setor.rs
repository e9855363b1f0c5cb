//! Sector DTOs and list filters.

use serde::{Deserialize, Serialize};

use crate::model::{
    api::Link,
    page::{active_text, item_links, FilterEncoder, FilterQuery},
};

pub const BASE_PATH: &str = "/setores";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetorDto {
    pub id_setor: i32,
    pub nome: String,
    pub id_unidade: i32,
    pub links: Vec<Link>,
}

impl SetorDto {
    pub fn from_entity(model: entity::setor::Model) -> Self {
        Self {
            links: item_links(BASE_PATH, model.id_setor),
            id_setor: model.id_setor,
            nome: model.nome,
            id_unidade: model.id_unidade,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetorInput {
    pub nome: String,
    pub id_unidade: i32,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetorFilter {
    pub unidade_id: Option<i32>,
    pub nome: Option<String>,
}

impl FilterEncoder for SetorFilter {
    fn encode(&self, query: &mut FilterQuery) {
        if let Some(unidade_id) = self.unidade_id {
            query.push_id("unidadeId", unidade_id);
        }
        if let Some(nome) = active_text(&self.nome) {
            query.push_text("nome", nome);
        }
    }
}
