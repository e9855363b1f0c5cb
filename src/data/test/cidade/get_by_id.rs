use super::*;

/// Tests getting a city by id.
///
/// Expected: Ok(Some) for an existing row
#[tokio::test]
async fn gets_city_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Estado)
        .with_table(Cidade)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let estado = factory::create_estado(db).await?;
    let cidade = factory::create_cidade(db, estado.id_estado).await?;

    let repo = CidadeRepository::new(db);
    let found = repo.get_by_id(cidade.id_cidade).await?;

    assert_eq!(found, Some(cidade));

    Ok(())
}

/// Tests getting a nonexistent city by id.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_city() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Estado)
        .with_table(Cidade)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CidadeRepository::new(db);
    let found = repo.get_by_id(999).await?;

    assert!(found.is_none());

    Ok(())
}
