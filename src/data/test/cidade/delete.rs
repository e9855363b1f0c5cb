use super::*;

/// Tests deleting a city.
///
/// Expected: Ok, and the row is no longer found
#[tokio::test]
async fn deletes_city() -> Result<(), DbErr> {
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
    repo.delete(cidade.id_cidade).await?;

    assert!(repo.get_by_id(cidade.id_cidade).await?.is_none());

    Ok(())
}

/// Tests the existence check used for referential validation.
///
/// Expected: Ok(true) for an existing row, Ok(false) otherwise
#[tokio::test]
async fn exists_reflects_presence() -> Result<(), DbErr> {
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

    assert!(repo.exists(cidade.id_cidade).await?);
    assert!(!repo.exists(cidade.id_cidade + 100).await?);

    Ok(())
}
