use super::*;

/// Tests the link set on the first of several pages.
///
/// Expected: `self`, `next`, `last` in that order
#[test]
fn first_page_links_forward_only() {
    let request = PageRequest::new(1, 10);
    let links = page_links("/motos", &request, 3, &CidadeFilter::default());

    let rels: Vec<&str> = links.iter().map(|link| link.rel.as_str()).collect();
    assert_eq!(rels, vec!["self", "next", "last"]);

    assert_eq!(links[0].href, "/motos?page=1&pageSize=10");
    assert_eq!(links[1].href, "/motos?page=2&pageSize=10");
    assert_eq!(links[2].href, "/motos?page=3&pageSize=10");
}

/// Tests the link set on the last of several pages.
///
/// Expected: `self`, `first`, `previous` in that order
#[test]
fn last_page_links_backward_only() {
    let request = PageRequest::new(3, 10);
    let links = page_links("/motos", &request, 3, &CidadeFilter::default());

    let rels: Vec<&str> = links.iter().map(|link| link.rel.as_str()).collect();
    assert_eq!(rels, vec!["self", "first", "previous"]);

    assert_eq!(links[1].href, "/motos?page=1&pageSize=10");
    assert_eq!(links[2].href, "/motos?page=2&pageSize=10");
}

/// Tests the link set on a middle page.
///
/// Expected: all five relations in fixed order
#[test]
fn middle_page_links_both_ways() {
    let request = PageRequest::new(2, 10);
    let links = page_links("/motos", &request, 3, &CidadeFilter::default());

    let rels: Vec<&str> = links.iter().map(|link| link.rel.as_str()).collect();
    assert_eq!(rels, vec!["self", "first", "previous", "next", "last"]);
}

/// Tests the link set for an empty collection.
///
/// Expected: only `self`
#[test]
fn empty_collection_links_to_itself() {
    let request = PageRequest::new(1, 10);
    let links = page_links("/motos", &request, 0, &CidadeFilter::default());

    assert_eq!(links.len(), 1);
    assert_eq!(links[0].rel, "self");
    assert_eq!(links[0].href, "/motos?page=1&pageSize=10");
}

/// Tests filter re-encoding into every href.
///
/// Expected: percent-encoded text first, then the id, after the page pair
#[test]
fn hrefs_re_encode_active_filters() {
    let filter = CidadeFilter {
        nome: Some("A B".to_string()),
        estado_id: Some(3),
    };

    let request = PageRequest::new(1, 10);
    let links = page_links("/cidades", &request, 2, &filter);

    assert_eq!(
        links[0].href,
        "/cidades?page=1&pageSize=10&nome=A%20B&estadoId=3"
    );
    assert_eq!(
        links[1].href,
        "/cidades?page=2&pageSize=10&nome=A%20B&estadoId=3"
    );
}

/// Tests that link generation is a pure function of its inputs.
///
/// Expected: two calls with identical inputs produce identical link sets
#[test]
fn identical_inputs_produce_identical_links() {
    let filter = CidadeFilter {
        nome: Some("São Paulo".to_string()),
        estado_id: Some(3),
    };
    let request = PageRequest::new(2, 10);

    let first = page_links("/cidades", &request, 3, &filter);
    let second = page_links("/cidades", &request, 3, &filter);

    assert_eq!(first, second);
}

/// Tests that a generated query string parses back into the values that
/// produced it.
///
/// Expected: decoded pairs match the request and the originating filter
#[test]
fn generated_query_pairs_round_trip() {
    let filter = CidadeFilter {
        nome: Some("São Paulo".to_string()),
        estado_id: Some(3),
    };
    let request = PageRequest::new(2, 10);

    let links = page_links("/cidades", &request, 3, &filter);
    let query = links[0].href.split_once('?').unwrap().1;

    let pairs: Vec<(&str, String)> = query
        .split('&')
        .map(|pair| {
            let (name, value) = pair.split_once('=').unwrap();
            (name, urlencoding::decode(value).unwrap().into_owned())
        })
        .collect();

    let value_of = |name: &str| {
        pairs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.clone())
            .unwrap()
    };

    assert_eq!(value_of("page").parse::<u64>().unwrap(), request.page());
    assert_eq!(
        value_of("pageSize").parse::<u64>().unwrap(),
        request.page_size()
    );
    assert_eq!(Some(value_of("nome")), filter.nome);
    assert_eq!(value_of("estadoId").parse::<i32>().ok(), filter.estado_id);
}

/// Tests that blank text filters are left out of the hrefs.
///
/// Expected: only the page pair in the query string
#[test]
fn blank_text_filter_is_not_encoded() {
    let filter = CidadeFilter {
        nome: Some("   ".to_string()),
        estado_id: None,
    };

    let request = PageRequest::new(1, 10);
    let links = page_links("/cidades", &request, 1, &filter);

    assert_eq!(links[0].href, "/cidades?page=1&pageSize=10");
}
