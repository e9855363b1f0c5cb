//! Service layer implementing the business rules on top of the repositories.
//!
//! Services validate referenced entities before writes, map missing rows to
//! `NotFound`, and assemble paginated response envelopes with navigation
//! links. Controllers stay thin: they extract request data, call one service
//! method, and translate the result into a status code.

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

#[cfg(test)]
mod test;
