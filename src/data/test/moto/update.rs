use super::*;

use chrono::NaiveDate;

/// Tests that updating a motorcycle keeps its registration date and stamps
/// a fresh modification date.
///
/// Expected: Ok with `data_cadastro` unchanged and `data_atualizacao` newer
#[tokio::test]
async fn update_preserves_data_cadastro() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_moto_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, setor, moto) = factory::create_moto_with_dependencies(db).await?;

    let stale = NaiveDate::from_ymd_opt(2020, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    let input = MotoInput {
        modelo: "Sport 110i".to_string(),
        placa: "NOV4B56".to_string(),
        status: "MANUTENCAO".to_string(),
        data_cadastro: Some(stale),
        data_atualizacao: Some(stale),
        id_setor: setor.id_setor,
    };

    let repo = MotoRepository::new(db);
    let updated = repo.update(moto.clone(), input).await?;

    assert_eq!(updated.modelo, "Sport 110i");
    assert_eq!(updated.placa, "NOV4B56");
    assert_eq!(updated.status, "MANUTENCAO");
    assert_eq!(updated.data_cadastro, moto.data_cadastro);
    assert_ne!(updated.data_atualizacao, stale);
    assert!(updated.data_atualizacao >= moto.data_atualizacao);

    Ok(())
}
