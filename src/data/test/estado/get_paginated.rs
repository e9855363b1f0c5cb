use super::*;

/// Tests that the `sigla` filter matches regardless of case.
///
/// Expected: Ok with the matching state even for lowercase input
#[tokio::test]
async fn filters_by_sigla_case_insensitively() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Estado).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::estado::create_estado_with_sigla(db, "SP").await?;
    factory::estado::create_estado_with_sigla(db, "RJ").await?;

    let filter = EstadoFilter {
        sigla: Some("sp".to_string()),
    };

    let repo = EstadoRepository::new(db);
    let (models, total) = repo
        .get_paginated(&filter, &PageRequest::new(1, 10))
        .await?;

    assert_eq!(total, 1);
    assert_eq!(models[0].sigla, "SP");

    Ok(())
}

/// Tests that the `sigla` filter is an equality match, not a substring one.
///
/// Expected: Ok with no rows for a partial abbreviation
#[tokio::test]
async fn sigla_filter_requires_full_match() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Estado).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::estado::create_estado_with_sigla(db, "SP").await?;

    let filter = EstadoFilter {
        sigla: Some("S".to_string()),
    };

    let repo = EstadoRepository::new(db);
    let (models, total) = repo
        .get_paginated(&filter, &PageRequest::new(1, 10))
        .await?;

    assert!(models.is_empty());
    assert_eq!(total, 0);

    Ok(())
}

/// Tests that a blank `sigla` filter is ignored.
///
/// Expected: Ok with all states
#[tokio::test]
async fn ignores_blank_sigla_filter() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Estado).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::estado::create_estado_with_sigla(db, "SP").await?;
    factory::estado::create_estado_with_sigla(db, "RJ").await?;

    let filter = EstadoFilter {
        sigla: Some("   ".to_string()),
    };

    let repo = EstadoRepository::new(db);
    let (_, total) = repo
        .get_paginated(&filter, &PageRequest::new(1, 10))
        .await?;

    assert_eq!(total, 2);

    Ok(())
}
