use super::*;

/// Tests the existence check used for referential validation.
///
/// Expected: Ok(true) for an existing row, Ok(false) otherwise
#[tokio::test]
async fn exists_reflects_presence() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_moto_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, _, moto) = factory::create_moto_with_dependencies(db).await?;

    let repo = MotoRepository::new(db);

    assert!(repo.exists(moto.id_moto).await?);
    assert!(!repo.exists(moto.id_moto + 100).await?);

    Ok(())
}
