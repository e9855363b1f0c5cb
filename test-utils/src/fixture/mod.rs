//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixture functions create in-memory entity models for unit tests that
//! exercise DTO conversion and link generation without persistence. Unlike
//! factories, fixtures do NOT insert data into the database.

pub mod cidade;
pub mod lora;
pub mod moto;

pub use cidade::entity as cidade_entity;
pub use lora::entity as lora_entity;
pub use moto::entity as moto_entity;
