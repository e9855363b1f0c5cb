//! Request handlers for the REST API.
//!
//! Handlers extract pagination, filter, path, and body data, delegate to the
//! matching service, and translate the outcome into a status code: 200 with
//! a body for reads, 201 with a `Location` header for creates, 204 for
//! updates and deletes. Unknown query parameters are ignored; `page` and
//! `pageSize` are clamped rather than rejected.

pub mod cidade;
pub mod defeito;
pub mod defeito_moto;
pub mod estado;
pub mod historico_manutencao;
pub mod localizacao;
pub mod lora;
pub mod manutencao;
pub mod moto;
pub mod rfid;
pub mod setor;
pub mod unidade;
