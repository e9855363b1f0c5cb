use super::*;

/// Tests the envelope metadata on a middle page.
///
/// Expected: both navigation flags set
#[test]
fn sets_flags_on_middle_page() {
    let request = PageRequest::new(2, 10);
    let response = PaginatedResponse::new(vec![0u8; 10], &request, 25, Vec::new());

    assert_eq!(response.page, 2);
    assert_eq!(response.page_size, 10);
    assert_eq!(response.total_count, 25);
    assert_eq!(response.total_pages, 3);
    assert!(response.has_next_page);
    assert!(response.has_previous_page);
}

/// Tests the envelope for an empty filtered collection.
///
/// Expected: zero pages and no navigation in either direction
#[test]
fn empty_collection_has_zero_pages() {
    let request = PageRequest::new(1, 10);
    let response = PaginatedResponse::new(Vec::<u8>::new(), &request, 0, Vec::new());

    assert_eq!(response.total_pages, 0);
    assert!(!response.has_next_page);
    assert!(!response.has_previous_page);
}

/// Tests a request past the last page.
///
/// Expected: empty data with populated metadata, previous page available
#[test]
fn page_past_the_end_keeps_metadata() {
    let request = PageRequest::new(9, 10);
    let response = PaginatedResponse::new(Vec::<u8>::new(), &request, 25, Vec::new());

    assert!(response.data.is_empty());
    assert_eq!(response.total_pages, 3);
    assert!(!response.has_next_page);
    assert!(response.has_previous_page);
}
