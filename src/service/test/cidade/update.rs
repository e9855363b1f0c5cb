use super::*;

/// Tests that updating a city re-validates the state reference only when
/// the payload changes it. The referenced state is deleted first, so the
/// update can only succeed if validation is skipped.
///
/// Expected: Ok when the state id stays the same
#[tokio::test]
async fn skips_estado_validation_when_unchanged() -> Result<(), AppError> {
    let test = TestBuilder::new().with_geo_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let estado = factory::create_estado(db).await?;
    let cidade = factory::create_cidade(db, estado.id_estado).await?;

    crate::data::estado::EstadoRepository::new(db)
        .delete(estado.id_estado)
        .await?;

    let service = CidadeService::new(db);
    service
        .update(
            cidade.id_cidade,
            CidadeInput {
                nome: "Nome Novo".to_string(),
                id_estado: estado.id_estado,
            },
        )
        .await?;

    let updated = service.get_by_id(cidade.id_cidade).await?;
    assert_eq!(updated.nome, "Nome Novo");

    Ok(())
}

/// Tests updating a city to reference a nonexistent state.
///
/// Expected: Err(BadRequest) naming the missing state
#[tokio::test]
async fn rejects_changed_estado_that_does_not_exist() -> Result<(), AppError> {
    let test = TestBuilder::new().with_geo_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let estado = factory::create_estado(db).await?;
    let cidade = factory::create_cidade(db, estado.id_estado).await?;

    let service = CidadeService::new(db);
    let result = service
        .update(
            cidade.id_cidade,
            CidadeInput {
                nome: cidade.nome.clone(),
                id_estado: estado.id_estado + 50,
            },
        )
        .await;

    let expected = format!("Estado com Id {} não encontrado.", estado.id_estado + 50);
    assert!(matches!(
        result,
        Err(AppError::BadRequest(msg)) if msg == expected
    ));

    Ok(())
}

/// Tests updating a city that does not exist.
///
/// Expected: Err(NotFound) naming the missing city
#[tokio::test]
async fn rejects_missing_city() -> Result<(), AppError> {
    let test = TestBuilder::new().with_geo_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let estado = factory::create_estado(db).await?;

    let service = CidadeService::new(db);
    let result = service
        .update(
            42,
            CidadeInput {
                nome: "Curitiba".to_string(),
                id_estado: estado.id_estado,
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::NotFound(msg)) if msg == "Cidade com Id 42 não encontrada."
    ));

    Ok(())
}
