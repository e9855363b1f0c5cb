//! Data repositories for database operations.
//!
//! Each resource has a repository struct holding a reference to the database
//! connection. Repositories translate list filters into query conditions,
//! apply them before counting and slicing, and convert between input models
//! and entity active models at the infrastructure boundary. Referential
//! checks live in the service layer; repositories only expose the `exists`
//! primitives the services build on.

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
