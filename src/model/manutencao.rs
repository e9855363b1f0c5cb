//! Maintenance record DTOs and list filters.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::{
    api::Link,
    page::{active_text, item_links, FilterEncoder, FilterQuery},
};

pub const BASE_PATH: &str = "/manutencoes";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManutencaoDto {
    pub id_manutencao: i32,
    pub descricao: String,
    pub data_manutencao: NaiveDateTime,
    pub custo_estimado: f64,
    pub tipo: String,
    pub id_moto: i32,
    pub links: Vec<Link>,
}

impl ManutencaoDto {
    pub fn from_entity(model: entity::manutencao::Model) -> Self {
        Self {
            links: item_links(BASE_PATH, model.id_manutencao),
            id_manutencao: model.id_manutencao,
            descricao: model.descricao,
            data_manutencao: model.data_manutencao,
            custo_estimado: model.custo_estimado,
            tipo: model.tipo,
            id_moto: model.id_moto,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManutencaoInput {
    pub id_moto: i32,
    pub descricao: String,
    pub data_manutencao: NaiveDateTime,
    pub custo_estimado: f64,
    pub tipo: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManutencaoFilter {
    pub moto_id: Option<i32>,
    pub tipo: Option<String>,
}

impl FilterEncoder for ManutencaoFilter {
    fn encode(&self, query: &mut FilterQuery) {
        if let Some(moto_id) = self.moto_id {
            query.push_id("motoId", moto_id);
        }
        if let Some(tipo) = active_text(&self.tipo) {
            query.push_text("tipo", tipo);
        }
    }
}
