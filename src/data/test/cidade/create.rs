use super::*;

/// Tests creating a city.
///
/// Expected: Ok with a generated id and persisted fields
#[tokio::test]
async fn creates_city() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Estado)
        .with_table(Cidade)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let estado = factory::create_estado(db).await?;

    let repo = CidadeRepository::new(db);
    let created = repo
        .create(CidadeInput {
            nome: "Curitiba".to_string(),
            id_estado: estado.id_estado,
        })
        .await?;

    assert!(created.id_cidade > 0);
    assert_eq!(created.nome, "Curitiba");
    assert_eq!(created.id_estado, estado.id_estado);

    let fetched = repo.get_by_id(created.id_cidade).await?;
    assert_eq!(fetched, Some(created));

    Ok(())
}
