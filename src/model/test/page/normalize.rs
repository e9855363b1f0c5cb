use super::*;

/// Tests the defaults applied when the query string carries no values.
///
/// Expected: page 1 with a page size of 10
#[test]
fn applies_defaults_for_absent_parameters() {
    let request = PageRequest::from(PageQuery::default());

    assert_eq!(request.page(), 1);
    assert_eq!(request.page_size(), 10);
}

/// Tests clamping of out-of-range values.
///
/// Expected: page floors at 1 and page size caps at 100
#[test]
fn clamps_out_of_range_values() {
    let request = PageRequest::from(PageQuery {
        page: Some(-5),
        page_size: Some(500),
    });

    assert_eq!(request.page(), 1);
    assert_eq!(request.page_size(), 100);
}

/// Tests that a zero page size floors at 1.
///
/// Expected: page size 1
#[test]
fn floors_zero_page_size() {
    let request = PageRequest::new(1, 0);

    assert_eq!(request.page_size(), 1);
}

/// Tests the offset of the first retained row.
///
/// Expected: (page - 1) * pageSize
#[test]
fn computes_row_offset() {
    assert_eq!(PageRequest::new(1, 10).offset(), 0);
    assert_eq!(PageRequest::new(3, 10).offset(), 20);
}

/// Tests the offset for an absurdly large page number.
///
/// Expected: saturates at u64::MAX instead of overflowing
#[test]
fn saturates_offset_for_huge_page() {
    let request = PageRequest::new(i64::MAX, 100);

    assert_eq!(request.offset(), u64::MAX);
}

/// Tests the paginator index cap for pages past the end.
///
/// Expected: in-range pages map to `page - 1`; anything past the end is
/// capped at one past the last page, even for huge page numbers
#[test]
fn caps_fetch_page_index_past_the_end() {
    assert_eq!(PageRequest::new(2, 10).fetch_page_index(25), 1);
    assert_eq!(PageRequest::new(3, 10).fetch_page_index(25), 2);
    assert_eq!(PageRequest::new(9, 10).fetch_page_index(25), 3);
    assert_eq!(PageRequest::new(i64::MAX, 100).fetch_page_index(25), 1);
    assert_eq!(PageRequest::new(i64::MAX, 100).fetch_page_index(0), 0);
}

/// Tests the page count for a filtered total.
///
/// Expected: ceiling division, zero pages for an empty collection
#[test]
fn computes_total_pages() {
    let request = PageRequest::new(1, 10);

    assert_eq!(request.total_pages(0), 0);
    assert_eq!(request.total_pages(10), 1);
    assert_eq!(request.total_pages(11), 2);
}
