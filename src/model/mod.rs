//! Externally visible API types.
//!
//! Each resource module defines its DTO (the JSON projection returned to
//! clients, carrying hypermedia links), its create/update input payload, and
//! its filter struct for list queries. The `page` module holds the shared
//! pagination and link-generation core used by every list endpoint.

pub mod api;
pub mod cidade;
pub mod defeito;
pub mod defeito_moto;
pub mod estado;
pub mod historico_manutencao;
pub mod localizacao;
pub mod lora;
pub mod manutencao;
pub mod moto;
pub mod page;
pub mod rfid;
pub mod setor;
pub mod unidade;

#[cfg(test)]
mod test;
