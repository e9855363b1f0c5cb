use super::*;

/// Tests that the `placa` filter matches substrings of the plate.
///
/// Expected: Ok with only the motorcycle whose plate contains the term
#[tokio::test]
async fn filters_motos_by_placa_substring() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_moto_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, setor, _) = factory::create_moto_with_dependencies(db).await?;
    let target = MotoFactory::new(db, setor.id_setor)
        .placa("XYZ9A87")
        .build()
        .await?;

    let filter = MotoFilter {
        placa: Some("YZ9".to_string()),
        ..Default::default()
    };

    let repo = MotoRepository::new(db);
    let (models, total) = repo
        .get_paginated(&filter, &PageRequest::new(1, 10))
        .await?;

    assert_eq!(total, 1);
    assert_eq!(models[0].id_moto, target.id_moto);

    Ok(())
}

/// Tests that the `setorId` filter is an exact match.
///
/// Expected: Ok with only the motorcycles assigned to that sector
#[tokio::test]
async fn filters_motos_by_setor_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_moto_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, unidade, setor1, moto1) = factory::create_moto_with_dependencies(db).await?;
    let setor2 = factory::create_setor(db, unidade.id_unidade).await?;
    factory::create_moto(db, setor2.id_setor).await?;

    let filter = MotoFilter {
        setor_id: Some(setor1.id_setor),
        ..Default::default()
    };

    let repo = MotoRepository::new(db);
    let (models, total) = repo
        .get_paginated(&filter, &PageRequest::new(1, 10))
        .await?;

    assert_eq!(total, 1);
    assert_eq!(models[0].id_moto, moto1.id_moto);

    Ok(())
}

/// Tests combining the `modelo` and `status` filters.
///
/// Expected: Ok with only the motorcycle matching both filters
#[tokio::test]
async fn combines_modelo_and_status_filters() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_moto_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, setor, _) = factory::create_moto_with_dependencies(db).await?;
    MotoFactory::new(db, setor.id_setor)
        .modelo("Sport 110i")
        .status("MANUTENCAO")
        .build()
        .await?;
    let target = MotoFactory::new(db, setor.id_setor)
        .modelo("Sport 110i")
        .status("DISPONIVEL")
        .build()
        .await?;

    let filter = MotoFilter {
        modelo: Some("Sport".to_string()),
        status: Some("DISPON".to_string()),
        ..Default::default()
    };

    let repo = MotoRepository::new(db);
    let (models, total) = repo
        .get_paginated(&filter, &PageRequest::new(1, 10))
        .await?;

    assert_eq!(total, 1);
    assert_eq!(models[0].id_moto, target.id_moto);

    Ok(())
}

/// Tests that the filtered total drives pagination, not the table size.
///
/// Expected: Ok with a full first page and the filtered count as total
#[tokio::test]
async fn counts_only_filtered_motos() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_moto_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, setor, _) = factory::create_moto_with_dependencies(db).await?;
    for _ in 0..3 {
        MotoFactory::new(db, setor.id_setor)
            .status("ALUGADA")
            .build()
            .await?;
    }

    let filter = MotoFilter {
        status: Some("ALUGADA".to_string()),
        ..Default::default()
    };

    let repo = MotoRepository::new(db);
    let (models, total) = repo.get_paginated(&filter, &PageRequest::new(1, 2)).await?;

    assert_eq!(models.len(), 2);
    assert_eq!(total, 3);

    Ok(())
}
