use super::*;

/// Tests that the `nome` filter matches substrings of the defect name.
///
/// Expected: Ok with only the defects whose name contains the term
#[tokio::test]
async fn filters_defects_by_nome_substring() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Defeito)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let target = factory::create_defeito(db).await?;
    factory::create_defeito(db).await?;

    let filter = DefeitoFilter {
        nome: Some(target.nome.clone()),
    };

    let repo = DefeitoRepository::new(db);
    let (models, total) = repo
        .get_paginated(&filter, &PageRequest::new(1, 10))
        .await?;

    assert_eq!(total, 1);
    assert_eq!(models[0].id_defeito, target.id_defeito);

    Ok(())
}

/// Tests listing defects without filters.
///
/// Expected: Ok with every row and the table count as total
#[tokio::test]
async fn gets_all_defects_without_filters() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Defeito)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_defeito(db).await?;
    factory::create_defeito(db).await?;

    let repo = DefeitoRepository::new(db);
    let (models, total) = repo
        .get_paginated(&DefeitoFilter::default(), &PageRequest::new(1, 10))
        .await?;

    assert_eq!(models.len(), 2);
    assert_eq!(total, 2);

    Ok(())
}
