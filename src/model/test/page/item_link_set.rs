use super::*;

/// Tests the fixed item-level link set.
///
/// Expected: `self`/`update`/`delete` on the item URI plus `all` on the
/// collection, with matching verbs
#[test]
fn builds_item_links_in_fixed_order() {
    let links = item_links("/motos", 7);

    let summary: Vec<(&str, &str, &str)> = links
        .iter()
        .map(|link| (link.rel.as_str(), link.href.as_str(), link.method.as_str()))
        .collect();

    assert_eq!(
        summary,
        vec![
            ("self", "/motos/7", "GET"),
            ("update", "/motos/7", "PUT"),
            ("delete", "/motos/7", "DELETE"),
            ("all", "/motos", "GET"),
        ]
    );
}
