//! SeaORM entity models for the fleet management database.
//!
//! One module per table. Column names mirror the original Portuguese domain
//! vocabulary (moto, setor, unidade, cidade, estado, and so on) since routes
//! and payload field names are derived from them.

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

pub mod prelude {
    pub use super::cidade::Entity as Cidade;
    pub use super::defeito::Entity as Defeito;
    pub use super::defeito_moto::Entity as DefeitoMoto;
    pub use super::estado::Entity as Estado;
    pub use super::historico_manutencao::Entity as HistoricoManutencao;
    pub use super::localizacao::Entity as Localizacao;
    pub use super::lora::Entity as Lora;
    pub use super::manutencao::Entity as Manutencao;
    pub use super::moto::Entity as Moto;
    pub use super::rfid::Entity as Rfid;
    pub use super::setor::Entity as Setor;
    pub use super::unidade::Entity as Unidade;
}
