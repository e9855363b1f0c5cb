//! Motorcycle DTOs and list filters.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::{
    api::Link,
    page::{active_text, item_links, FilterEncoder, FilterQuery},
};

pub const BASE_PATH: &str = "/motos";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MotoDto {
    pub id_moto: i32,
    pub modelo: String,
    pub placa: String,
    pub status: String,
    pub id_setor: i32,
    pub data_cadastro: NaiveDateTime,
    pub data_atualizacao: NaiveDateTime,
    pub links: Vec<Link>,
}

impl MotoDto {
    pub fn from_entity(model: entity::moto::Model) -> Self {
        Self {
            links: item_links(BASE_PATH, model.id_moto),
            id_moto: model.id_moto,
            modelo: model.modelo,
            placa: model.placa,
            status: model.status,
            id_setor: model.id_setor,
            data_cadastro: model.data_cadastro,
            data_atualizacao: model.data_atualizacao,
        }
    }
}

/// Create/update payload. The sector reference is validated against the
/// store before any write. Absent timestamps default server-side on create
/// and are ignored on update.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MotoInput {
    pub modelo: String,
    pub placa: String,
    pub status: String,
    pub data_cadastro: Option<NaiveDateTime>,
    pub data_atualizacao: Option<NaiveDateTime>,
    pub id_setor: i32,
}

/// Optional list filters: substring match on `placa`, `modelo`, and
/// `status`, exact match on `setorId`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MotoFilter {
    pub placa: Option<String>,
    pub modelo: Option<String>,
    pub status: Option<String>,
    pub setor_id: Option<i32>,
}

impl FilterEncoder for MotoFilter {
    fn encode(&self, query: &mut FilterQuery) {
        if let Some(placa) = active_text(&self.placa) {
            query.push_text("placa", placa);
        }
        if let Some(modelo) = active_text(&self.modelo) {
            query.push_text("modelo", modelo);
        }
        if let Some(status) = active_text(&self.status) {
            query.push_text("status", status);
        }
        if let Some(setor_id) = self.setor_id {
            query.push_id("setorId", setor_id);
        }
    }
}
