//! LoRa device DTOs and list filters.
//!
//! The stored `moto` column uses `0` as an "unassigned" sentinel; the DTO
//! renders it as `null`. The device number is stored as an integer but
//! exposed as a string, and its list filter matches a substring of the
//! decimal rendering.

use serde::{Deserialize, Serialize};

use crate::model::{
    api::Link,
    page::{active_text, item_links, FilterEncoder, FilterQuery},
};

pub const BASE_PATH: &str = "/lora";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoraDto {
    pub id_lora: i32,
    pub numero_lora: String,
    pub moto: Option<i32>,
    pub links: Vec<Link>,
}

impl LoraDto {
    pub fn from_entity(model: entity::lora::Model) -> Self {
        Self {
            links: item_links(BASE_PATH, model.id_lora),
            id_lora: model.id_lora,
            numero_lora: model.numero_lora.to_string(),
            moto: (model.moto != 0).then_some(model.moto),
        }
    }
}

/// Create/update payload. An absent or zero `moto` means the device is
/// unassigned and skips motorcycle validation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoraInput {
    pub numero_lora: i32,
    pub moto: Option<i32>,
}

impl LoraInput {
    /// Stored representation of the assignment (`0` when unassigned).
    pub fn moto_or_zero(&self) -> i32 {
        self.moto.unwrap_or(0)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoraFilter {
    pub moto_id: Option<i32>,
    pub numero_lora: Option<String>,
}

impl FilterEncoder for LoraFilter {
    fn encode(&self, query: &mut FilterQuery) {
        if let Some(moto_id) = self.moto_id {
            query.push_id("motoId", moto_id);
        }
        if let Some(numero_lora) = active_text(&self.numero_lora) {
            query.push_text("numeroLora", numero_lora);
        }
    }
}
