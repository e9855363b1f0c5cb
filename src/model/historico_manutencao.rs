//! Movement history DTOs and list filters.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::{
    api::Link,
    page::{item_links, FilterEncoder, FilterQuery},
};

pub const BASE_PATH: &str = "/historicos";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricoManutencaoDto {
    pub id_movimentacao: i32,
    pub id_moto: i32,
    pub id_setor_origem: i32,
    pub id_setor_destino: i32,
    pub data_movimento: NaiveDateTime,
    pub links: Vec<Link>,
}

impl HistoricoManutencaoDto {
    pub fn from_entity(model: entity::historico_manutencao::Model) -> Self {
        Self {
            links: item_links(BASE_PATH, model.id_movimentacao),
            id_movimentacao: model.id_movimentacao,
            id_moto: model.id_moto,
            id_setor_origem: model.id_setor_origem,
            id_setor_destino: model.id_setor_destino,
            data_movimento: model.data_movimento,
        }
    }
}

/// Create/update payload. The motorcycle and both sector references are
/// validated against the store before any write.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricoManutencaoInput {
    pub id_moto: i32,
    pub id_setor_origem: i32,
    pub id_setor_destino: i32,
    pub data_movimento: NaiveDateTime,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricoManutencaoFilter {
    pub moto_id: Option<i32>,
    pub setor_origem_id: Option<i32>,
    pub setor_destino_id: Option<i32>,
}

impl FilterEncoder for HistoricoManutencaoFilter {
    fn encode(&self, query: &mut FilterQuery) {
        if let Some(moto_id) = self.moto_id {
            query.push_id("motoId", moto_id);
        }
        if let Some(setor_origem_id) = self.setor_origem_id {
            query.push_id("setorOrigemId", setor_origem_id);
        }
        if let Some(setor_destino_id) = self.setor_destino_id {
            query.push_id("setorDestinoId", setor_destino_id);
        }
    }
}
