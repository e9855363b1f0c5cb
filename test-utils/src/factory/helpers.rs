//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
///
/// This atomic counter ensures each factory-created entity gets unique
/// identifying fields to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a motorcycle with its full reference chain.
///
/// This is a convenience method that creates:
/// 1. Estado
/// 2. Cidade (in the estado)
/// 3. Unidade (in the cidade)
/// 4. Setor (in the unidade)
/// 5. Moto (in the setor)
///
/// All entities are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Returns
/// - `Ok((estado, cidade, unidade, setor, moto))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_moto_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::estado::Model,
        entity::cidade::Model,
        entity::unidade::Model,
        entity::setor::Model,
        entity::moto::Model,
    ),
    DbErr,
> {
    let estado = crate::factory::estado::create_estado(db).await?;
    let cidade = crate::factory::cidade::create_cidade(db, estado.id_estado).await?;
    let unidade = crate::factory::unidade::create_unidade(db, cidade.id_cidade).await?;
    let setor = crate::factory::setor::create_setor(db, unidade.id_unidade).await?;
    let moto = crate::factory::moto::create_moto(db, setor.id_setor).await?;

    Ok((estado, cidade, unidade, setor, moto))
}

/// Creates a sector with its reference chain, without a motorcycle.
///
/// # Returns
/// - `Ok((estado, cidade, unidade, setor))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_setor_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::estado::Model,
        entity::cidade::Model,
        entity::unidade::Model,
        entity::setor::Model,
    ),
    DbErr,
> {
    let estado = crate::factory::estado::create_estado(db).await?;
    let cidade = crate::factory::cidade::create_cidade(db, estado.id_estado).await?;
    let unidade = crate::factory::unidade::create_unidade(db, cidade.id_cidade).await?;
    let setor = crate::factory::setor::create_setor(db, unidade.id_unidade).await?;

    Ok((estado, cidade, unidade, setor))
}
