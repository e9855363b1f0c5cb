use super::*;

/// Tests creating a city whose state reference exists.
///
/// Expected: Ok with the full item link set on the DTO
#[tokio::test]
async fn creates_city_with_valid_estado() -> Result<(), AppError> {
    let test = TestBuilder::new().with_geo_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let estado = factory::create_estado(db).await?;

    let service = CidadeService::new(db);
    let dto = service
        .create(CidadeInput {
            nome: "Curitiba".to_string(),
            id_estado: estado.id_estado,
        })
        .await?;

    assert_eq!(dto.nome, "Curitiba");
    assert_eq!(dto.id_estado, estado.id_estado);

    let rels: Vec<&str> = dto.links.iter().map(|link| link.rel.as_str()).collect();
    assert_eq!(rels, vec!["self", "update", "delete", "all"]);

    Ok(())
}

/// Tests creating a city referencing a nonexistent state.
///
/// Expected: Err(BadRequest) naming the missing state
#[tokio::test]
async fn rejects_unknown_estado() -> Result<(), AppError> {
    let test = TestBuilder::new().with_geo_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = CidadeService::new(db);
    let result = service
        .create(CidadeInput {
            nome: "Curitiba".to_string(),
            id_estado: 99,
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::BadRequest(msg)) if msg == "Estado com Id 99 não encontrado."
    ));

    Ok(())
}
