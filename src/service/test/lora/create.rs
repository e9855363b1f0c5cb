use super::*;

/// Tests creating an unassigned device.
///
/// Expected: Ok with a null assignment and no motorcycle lookup
#[tokio::test]
async fn creates_unassigned_device_without_validation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_moto_tables()
        .with_table(Lora)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = LoraService::new(db);
    let dto = service
        .create(LoraInput {
            numero_lora: 4521,
            moto: None,
        })
        .await?;

    assert_eq!(dto.numero_lora, "4521");
    assert_eq!(dto.moto, None);

    Ok(())
}

/// Tests that an explicit zero assignment behaves like an absent one.
///
/// Expected: Ok with a null assignment
#[tokio::test]
async fn treats_zero_assignment_as_unassigned() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_moto_tables()
        .with_table(Lora)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = LoraService::new(db);
    let dto = service
        .create(LoraInput {
            numero_lora: 4521,
            moto: Some(0),
        })
        .await?;

    assert_eq!(dto.moto, None);

    Ok(())
}

/// Tests creating a device assigned to a nonexistent motorcycle.
///
/// Expected: Err(BadRequest) naming the missing motorcycle
#[tokio::test]
async fn rejects_unknown_moto_assignment() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_moto_tables()
        .with_table(Lora)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = LoraService::new(db);
    let result = service
        .create(LoraInput {
            numero_lora: 4521,
            moto: Some(77),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::BadRequest(msg)) if msg == "Moto com Id 77 não encontrada."
    ));

    Ok(())
}

/// Tests creating a device assigned to an existing motorcycle.
///
/// Expected: Ok with the assignment echoed back
#[tokio::test]
async fn creates_device_assigned_to_existing_moto() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_moto_tables()
        .with_table(Lora)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, _, moto) = factory::create_moto_with_dependencies(db).await?;

    let service = LoraService::new(db);
    let dto = service
        .create(LoraInput {
            numero_lora: 4521,
            moto: Some(moto.id_moto),
        })
        .await?;

    assert_eq!(dto.moto, Some(moto.id_moto));

    Ok(())
}
