use super::*;

/// Tests creating an unassigned device.
///
/// Expected: Ok with the assignment column stored as `0`
#[tokio::test]
async fn stores_zero_for_unassigned_device() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Lora).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LoraRepository::new(db);
    let created = repo
        .create(LoraInput {
            numero_lora: 4521,
            moto: None,
        })
        .await?;

    assert_eq!(created.numero_lora, 4521);
    assert_eq!(created.moto, 0);

    Ok(())
}

/// Tests creating a device assigned to a motorcycle.
///
/// Expected: Ok with the assignment stored as given
#[tokio::test]
async fn stores_assignment_when_given() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Lora).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LoraRepository::new(db);
    let created = repo
        .create(LoraInput {
            numero_lora: 4521,
            moto: Some(7),
        })
        .await?;

    assert_eq!(created.moto, 7);

    Ok(())
}
