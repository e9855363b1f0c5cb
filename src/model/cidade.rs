//! City DTOs and list filters.

use serde::{Deserialize, Serialize};

use crate::model::{
    api::Link,
    page::{active_text, item_links, FilterEncoder, FilterQuery},
};

pub const BASE_PATH: &str = "/cidades";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CidadeDto {
    pub id_cidade: i32,
    pub nome: String,
    pub id_estado: i32,
    pub links: Vec<Link>,
}

impl CidadeDto {
    pub fn from_entity(model: entity::cidade::Model) -> Self {
        Self {
            links: item_links(BASE_PATH, model.id_cidade),
            id_cidade: model.id_cidade,
            nome: model.nome,
            id_estado: model.id_estado,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CidadeInput {
    pub nome: String,
    pub id_estado: i32,
}

/// Optional list filters: substring match on `nome`, exact match on
/// `estadoId`. Link query strings encode them in that order.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CidadeFilter {
    pub nome: Option<String>,
    pub estado_id: Option<i32>,
}

impl FilterEncoder for CidadeFilter {
    fn encode(&self, query: &mut FilterQuery) {
        if let Some(nome) = active_text(&self.nome) {
            query.push_text("nome", nome);
        }
        if let Some(estado_id) = self.estado_id {
            query.push_id("estadoId", estado_id);
        }
    }
}
