use super::*;

fn input_for(id_moto: i32) -> ManutencaoInput {
    ManutencaoInput {
        id_moto,
        descricao: "Troca de óleo".to_string(),
        data_manutencao: NaiveDate::from_ymd_opt(2025, 3, 10)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap(),
        custo_estimado: 150.0,
        tipo: "PREVENTIVA".to_string(),
    }
}

/// Tests creating a maintenance record for an existing motorcycle.
///
/// Expected: Ok with the record echoed back
#[tokio::test]
async fn creates_record_for_existing_moto() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, _, moto) = factory::create_moto_with_dependencies(db).await?;

    let service = ManutencaoService::new(db);
    let dto = service.create(input_for(moto.id_moto)).await?;

    assert_eq!(dto.id_moto, moto.id_moto);
    assert_eq!(dto.tipo, "PREVENTIVA");
    assert_eq!(dto.custo_estimado, 150.0);

    Ok(())
}

/// Tests creating a maintenance record for a nonexistent motorcycle.
///
/// Expected: Err(BadRequest) naming the missing motorcycle
#[tokio::test]
async fn rejects_unknown_moto() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ManutencaoService::new(db);
    let result = service.create(input_for(66)).await;

    assert!(matches!(
        result,
        Err(AppError::BadRequest(msg)) if msg == "Moto com Id 66 não encontrada."
    ));

    Ok(())
}
