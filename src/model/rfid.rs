//! RFID tag DTOs and list filters.
//!
//! Like LoRa devices, the tag number is stored as an integer but exposed as
//! a string, and its list filter matches a substring of the decimal
//! rendering.

use serde::{Deserialize, Serialize};

use crate::model::{
    api::Link,
    page::{active_text, item_links, FilterEncoder, FilterQuery},
};

pub const BASE_PATH: &str = "/rfid";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RfidDto {
    pub id_rfid: i32,
    pub numero_rfid: String,
    pub id_moto: i32,
    pub links: Vec<Link>,
}

impl RfidDto {
    pub fn from_entity(model: entity::rfid::Model) -> Self {
        Self {
            links: item_links(BASE_PATH, model.id_rfid),
            id_rfid: model.id_rfid,
            numero_rfid: model.numero_rfid.to_string(),
            id_moto: model.id_moto,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RfidInput {
    pub numero_rfid: i32,
    pub id_moto: i32,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RfidFilter {
    pub moto_id: Option<i32>,
    pub numero_rfid: Option<String>,
}

impl FilterEncoder for RfidFilter {
    fn encode(&self, query: &mut FilterQuery) {
        if let Some(moto_id) = self.moto_id {
            query.push_id("motoId", moto_id);
        }
        if let Some(numero_rfid) = active_text(&self.numero_rfid) {
            query.push_text("numeroRfid", numero_rfid);
        }
    }
}
