//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with
//! sensible defaults, reducing boilerplate in tests. Factories insert rows
//! into the database and handle foreign key relationships, so a test can ask
//! for a motorcycle and get the whole reference chain behind it.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let estado = factory::estado::create_estado(&db).await?;
//!     let cidade = factory::cidade::create_cidade(&db, estado.id_estado).await?;
//!
//!     // Create with all dependencies
//!     let (estado, cidade, unidade, setor, moto) =
//!         factory::helpers::create_moto_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! The motorcycle factory supports a builder pattern for custom values:
//!
//! ```rust,ignore
//! let moto = factory::moto::MotoFactory::new(&db, setor.id_setor)
//!     .placa("ABC1D23")
//!     .status("MANUTENCAO")
//!     .build()
//!     .await?;
//! ```

pub mod cidade;
pub mod defeito;
pub mod estado;
pub mod helpers;
pub mod moto;
pub mod setor;
pub mod unidade;

// Re-export commonly used factory functions for concise usage
pub use cidade::create_cidade;
pub use defeito::create_defeito;
pub use estado::create_estado;
pub use helpers::create_moto_with_dependencies;
pub use moto::create_moto;
pub use setor::create_setor;
pub use unidade::create_unidade;
