use super::*;

/// Tests that the `numeroLora` filter matches a substring of the number's
/// decimal rendering.
///
/// Expected: Ok with only the devices whose number contains the digits
#[tokio::test]
async fn filters_devices_by_numero_substring() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Lora).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LoraRepository::new(db);
    let target = repo
        .create(LoraInput {
            numero_lora: 4521,
            moto: None,
        })
        .await?;
    repo.create(LoraInput {
        numero_lora: 9900,
        moto: None,
    })
    .await?;

    let filter = LoraFilter {
        numero_lora: Some("52".to_string()),
        ..Default::default()
    };

    let (models, total) = repo
        .get_paginated(&filter, &PageRequest::new(1, 10))
        .await?;

    assert_eq!(total, 1);
    assert_eq!(models[0].id_lora, target.id_lora);

    Ok(())
}

/// Tests that the `motoId` filter matches the stored assignment exactly.
///
/// Expected: Ok with only the device assigned to that motorcycle
#[tokio::test]
async fn filters_devices_by_moto_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Lora).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LoraRepository::new(db);
    let target = repo
        .create(LoraInput {
            numero_lora: 1111,
            moto: Some(3),
        })
        .await?;
    repo.create(LoraInput {
        numero_lora: 2222,
        moto: None,
    })
    .await?;

    let filter = LoraFilter {
        moto_id: Some(3),
        ..Default::default()
    };

    let (models, total) = repo
        .get_paginated(&filter, &PageRequest::new(1, 10))
        .await?;

    assert_eq!(total, 1);
    assert_eq!(models[0].id_lora, target.id_lora);

    Ok(())
}
