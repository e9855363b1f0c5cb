use super::*;

/// Tests reassigning a device to a nonexistent motorcycle.
///
/// Expected: Err(BadRequest) naming the missing motorcycle
#[tokio::test]
async fn rejects_reassignment_to_unknown_moto() -> Result<(), AppError> {
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

    let result = service
        .update(
            dto.id_lora,
            LoraInput {
                numero_lora: 4521,
                moto: Some(88),
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::BadRequest(msg)) if msg == "Moto com Id 88 não encontrada."
    ));

    Ok(())
}

/// Tests unassigning a device.
///
/// Expected: Ok with the assignment rendered as null afterwards
#[tokio::test]
async fn unassigns_device_without_validation() -> Result<(), AppError> {
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

    service
        .update(
            dto.id_lora,
            LoraInput {
                numero_lora: 4521,
                moto: None,
            },
        )
        .await?;

    let updated = service.get_by_id(dto.id_lora).await?;
    assert_eq!(updated.moto, None);

    Ok(())
}

/// Tests updating a device that does not exist.
///
/// Expected: Err(NotFound) naming the missing device
#[tokio::test]
async fn rejects_missing_device() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_moto_tables()
        .with_table(Lora)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = LoraService::new(db);
    let result = service
        .update(
            5,
            LoraInput {
                numero_lora: 4521,
                moto: None,
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::NotFound(msg)) if msg == "Lora com Id 5 não encontrado."
    ));

    Ok(())
}
