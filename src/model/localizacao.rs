//! Location sample DTOs and list filters.

use serde::{Deserialize, Serialize};

use crate::model::{
    api::Link,
    page::{item_links, FilterEncoder, FilterQuery},
};

pub const BASE_PATH: &str = "/localizacoes";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizacaoDto {
    pub id_localizacao: i32,
    pub latitude: f64,
    pub longitude: f64,
    pub id_moto: i32,
    pub id_setor: i32,
    pub links: Vec<Link>,
}

impl LocalizacaoDto {
    pub fn from_entity(model: entity::localizacao::Model) -> Self {
        Self {
            links: item_links(BASE_PATH, model.id_localizacao),
            id_localizacao: model.id_localizacao,
            latitude: model.latitude,
            longitude: model.longitude,
            id_moto: model.id_moto,
            id_setor: model.id_setor,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizacaoInput {
    pub latitude: f64,
    pub longitude: f64,
    pub id_moto: i32,
    pub id_setor: i32,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizacaoFilter {
    pub moto_id: Option<i32>,
    pub setor_id: Option<i32>,
}

impl FilterEncoder for LocalizacaoFilter {
    fn encode(&self, query: &mut FilterQuery) {
        if let Some(moto_id) = self.moto_id {
            query.push_id("motoId", moto_id);
        }
        if let Some(setor_id) = self.setor_id {
            query.push_id("setorId", setor_id);
        }
    }
}
