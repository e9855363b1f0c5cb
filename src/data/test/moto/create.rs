use super::*;

use chrono::NaiveDate;

/// Tests creating a motorcycle without timestamps in the payload.
///
/// Expected: Ok with both timestamps defaulted to the same current time
#[tokio::test]
async fn defaults_timestamps_when_absent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_moto_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, setor) = factory::helpers::create_setor_with_dependencies(db).await?;

    let repo = MotoRepository::new(db);
    let created = repo
        .create(MotoInput {
            modelo: "Sport 110i".to_string(),
            placa: "ABC1D23".to_string(),
            status: "DISPONIVEL".to_string(),
            data_cadastro: None,
            data_atualizacao: None,
            id_setor: setor.id_setor,
        })
        .await?;

    assert_eq!(created.data_cadastro, created.data_atualizacao);

    Ok(())
}

/// Tests creating a motorcycle with explicit timestamps.
///
/// Expected: Ok with the payload values stored as given
#[tokio::test]
async fn keeps_explicit_timestamps() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_moto_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, setor) = factory::helpers::create_setor_with_dependencies(db).await?;

    let given = NaiveDate::from_ymd_opt(2024, 6, 1)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap();

    let repo = MotoRepository::new(db);
    let created = repo
        .create(MotoInput {
            modelo: "Sport 110i".to_string(),
            placa: "DEF4G56".to_string(),
            status: "DISPONIVEL".to_string(),
            data_cadastro: Some(given),
            data_atualizacao: Some(given),
            id_setor: setor.id_setor,
        })
        .await?;

    assert_eq!(created.data_cadastro, given);
    assert_eq!(created.data_atualizacao, given);

    Ok(())
}
