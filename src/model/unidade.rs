//! Unit DTOs and list filters.

use serde::{Deserialize, Serialize};

use crate::model::{
    api::Link,
    page::{active_text, item_links, FilterEncoder, FilterQuery},
};

pub const BASE_PATH: &str = "/unidades";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnidadeDto {
    pub id_unidade: i32,
    pub nome: String,
    pub id_cidade: i32,
    pub links: Vec<Link>,
}

impl UnidadeDto {
    pub fn from_entity(model: entity::unidade::Model) -> Self {
        Self {
            links: item_links(BASE_PATH, model.id_unidade),
            id_unidade: model.id_unidade,
            nome: model.nome,
            id_cidade: model.id_cidade,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnidadeInput {
    pub nome: String,
    pub id_cidade: i32,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnidadeFilter {
    pub cidade_id: Option<i32>,
    pub nome: Option<String>,
}

impl FilterEncoder for UnidadeFilter {
    fn encode(&self, query: &mut FilterQuery) {
        if let Some(cidade_id) = self.cidade_id {
            query.push_id("cidadeId", cidade_id);
        }
        if let Some(nome) = active_text(&self.nome) {
            query.push_text("nome", nome);
        }
    }
}
