use super::*;

/// Tests getting one page of cities without filters.
///
/// Expected: Ok with all cities and the unfiltered total
#[tokio::test]
async fn gets_all_cities_without_filters() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Estado)
        .with_table(Cidade)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let estado = factory::create_estado(db).await?;
    for _ in 0..3 {
        factory::create_cidade(db, estado.id_estado).await?;
    }

    let repo = CidadeRepository::new(db);
    let (models, total) = repo
        .get_paginated(&CidadeFilter::default(), &PageRequest::new(1, 10))
        .await?;

    assert_eq!(models.len(), 3);
    assert_eq!(total, 3);

    Ok(())
}

/// Tests that the `nome` filter matches substrings.
///
/// Expected: Ok with only the cities whose name contains the term
#[tokio::test]
async fn filters_cities_by_nome_substring() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Estado)
        .with_table(Cidade)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let estado = factory::create_estado(db).await?;
    factory::cidade::create_cidade_with_nome(db, estado.id_estado, "São Paulo").await?;
    factory::cidade::create_cidade_with_nome(db, estado.id_estado, "São José").await?;
    factory::cidade::create_cidade_with_nome(db, estado.id_estado, "Campinas").await?;

    let filter = CidadeFilter {
        nome: Some("São".to_string()),
        estado_id: None,
    };

    let repo = CidadeRepository::new(db);
    let (models, total) = repo
        .get_paginated(&filter, &PageRequest::new(1, 10))
        .await?;

    assert_eq!(total, 2);
    assert!(models.iter().all(|c| c.nome.contains("São")));

    Ok(())
}

/// Tests that the `estadoId` filter is an exact match and is applied before
/// counting.
///
/// Expected: Ok with only the matching state's cities and filtered total
#[tokio::test]
async fn filters_cities_by_estado_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Estado)
        .with_table(Cidade)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let estado1 = factory::create_estado(db).await?;
    let estado2 = factory::create_estado(db).await?;
    factory::create_cidade(db, estado1.id_estado).await?;
    factory::create_cidade(db, estado1.id_estado).await?;
    factory::create_cidade(db, estado2.id_estado).await?;

    let filter = CidadeFilter {
        nome: None,
        estado_id: Some(estado1.id_estado),
    };

    let repo = CidadeRepository::new(db);
    let (models, total) = repo
        .get_paginated(&filter, &PageRequest::new(1, 10))
        .await?;

    assert_eq!(total, 2);
    assert!(models.iter().all(|c| c.id_estado == estado1.id_estado));

    Ok(())
}

/// Tests pagination slicing with a page size smaller than the collection.
///
/// Expected: Ok with non-overlapping slices ordered by primary key
#[tokio::test]
async fn paginates_cities_correctly() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Estado)
        .with_table(Cidade)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let estado = factory::create_estado(db).await?;
    for _ in 0..5 {
        factory::create_cidade(db, estado.id_estado).await?;
    }

    let repo = CidadeRepository::new(db);

    let (page1, total) = repo
        .get_paginated(&CidadeFilter::default(), &PageRequest::new(1, 2))
        .await?;
    assert_eq!(page1.len(), 2);
    assert_eq!(total, 5);

    let (page3, total) = repo
        .get_paginated(&CidadeFilter::default(), &PageRequest::new(3, 2))
        .await?;
    assert_eq!(page3.len(), 1);
    assert_eq!(total, 5);

    assert!(page1[0].id_cidade < page1[1].id_cidade);
    assert_ne!(page1[0].id_cidade, page3[0].id_cidade);

    Ok(())
}

/// Tests requesting a page past the end of the collection.
///
/// Expected: Ok with an empty slice but the real total
#[tokio::test]
async fn returns_empty_slice_past_last_page() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Estado)
        .with_table(Cidade)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let estado = factory::create_estado(db).await?;
    factory::create_cidade(db, estado.id_estado).await?;

    let repo = CidadeRepository::new(db);
    let (models, total) = repo
        .get_paginated(&CidadeFilter::default(), &PageRequest::new(9, 10))
        .await?;

    assert!(models.is_empty());
    assert_eq!(total, 1);

    Ok(())
}

/// Tests requesting an absurdly large page number.
///
/// Expected: Ok with an empty slice and the real total, no overflow in the
/// paginator's offset arithmetic
#[tokio::test]
async fn handles_huge_page_number() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Estado)
        .with_table(Cidade)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let estado = factory::create_estado(db).await?;
    for _ in 0..3 {
        factory::create_cidade(db, estado.id_estado).await?;
    }

    let repo = CidadeRepository::new(db);
    let (models, total) = repo
        .get_paginated(&CidadeFilter::default(), &PageRequest::new(i64::MAX, 100))
        .await?;

    assert!(models.is_empty());
    assert_eq!(total, 3);

    Ok(())
}
