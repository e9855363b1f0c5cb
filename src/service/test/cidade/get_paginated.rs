use super::*;

/// Tests the list envelope for a first page with more rows to come.
///
/// Expected: Ok with filtered totals, `self`/`next`/`last` page links, and
/// no `all` link on the items
#[tokio::test]
async fn builds_envelope_and_links_for_first_page() -> Result<(), AppError> {
    let test = TestBuilder::new().with_geo_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let estado = factory::create_estado(db).await?;
    for _ in 0..3 {
        factory::create_cidade(db, estado.id_estado).await?;
    }

    let service = CidadeService::new(db);
    let response = service
        .get_paginated(CidadeFilter::default(), PageRequest::new(1, 2))
        .await?;

    assert_eq!(response.data.len(), 2);
    assert_eq!(response.page, 1);
    assert_eq!(response.page_size, 2);
    assert_eq!(response.total_count, 3);
    assert_eq!(response.total_pages, 2);
    assert!(response.has_next_page);
    assert!(!response.has_previous_page);

    let rels: Vec<&str> = response
        .links
        .iter()
        .map(|link| link.rel.as_str())
        .collect();
    assert_eq!(rels, vec!["self", "next", "last"]);

    for dto in &response.data {
        assert!(dto.links.iter().all(|link| link.rel != "all"));
    }

    Ok(())
}

/// Tests that navigation links re-encode the active filters.
///
/// Expected: Ok with the filter parameters appended to every href
#[tokio::test]
async fn navigation_links_carry_active_filters() -> Result<(), AppError> {
    let test = TestBuilder::new().with_geo_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let estado = factory::create_estado(db).await?;
    factory::cidade::create_cidade_with_nome(db, estado.id_estado, "São Paulo").await?;

    let filter = CidadeFilter {
        nome: Some("São".to_string()),
        estado_id: Some(estado.id_estado),
    };

    let service = CidadeService::new(db);
    let response = service.get_paginated(filter, PageRequest::new(1, 10)).await?;

    assert_eq!(response.links.len(), 1);
    assert_eq!(
        response.links[0].href,
        format!(
            "/cidades?page=1&pageSize=10&nome=S%C3%A3o&estadoId={}",
            estado.id_estado
        )
    );

    Ok(())
}
