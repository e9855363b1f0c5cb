//! Motorcycle defect report DTOs and list filters.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::{
    api::Link,
    page::{item_links, FilterEncoder, FilterQuery},
};

pub const BASE_PATH: &str = "/defeitos-moto";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DefeitoMotoDto {
    pub id_defeito_moto: i32,
    pub id_moto: i32,
    pub id_defeito: i32,
    pub data_registro: NaiveDateTime,
    pub data_atualizacao: Option<NaiveDateTime>,
    pub links: Vec<Link>,
}

impl DefeitoMotoDto {
    pub fn from_entity(model: entity::defeito_moto::Model) -> Self {
        Self {
            links: item_links(BASE_PATH, model.id_defeito_moto),
            id_defeito_moto: model.id_defeito_moto,
            id_moto: model.id_moto,
            id_defeito: model.id_defeito,
            data_registro: model.data_registro,
            data_atualizacao: Some(model.data_atualizacao),
        }
    }
}

/// Create/update payload. Both the motorcycle and the defect reference are
/// validated against the store before any write. Absent timestamps default
/// server-side instead of failing deserialization.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefeitoMotoInput {
    pub id_moto: i32,
    pub id_defeito: i32,
    pub data_registro: Option<NaiveDateTime>,
    pub data_atualizacao: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefeitoMotoFilter {
    pub moto_id: Option<i32>,
    pub defeito_id: Option<i32>,
}

impl FilterEncoder for DefeitoMotoFilter {
    fn encode(&self, query: &mut FilterQuery) {
        if let Some(moto_id) = self.moto_id {
            query.push_id("motoId", moto_id);
        }
        if let Some(defeito_id) = self.defeito_id {
            query.push_id("defeitoId", defeito_id);
        }
    }
}
