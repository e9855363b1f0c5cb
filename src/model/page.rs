//! Shared pagination and hypermedia-link core for list endpoints.
//!
//! Every list endpoint goes through the same pipeline: raw `page`/`pageSize`
//! query values are clamped into a [`PageRequest`], the repository applies
//! the resource's filters before counting and slicing, and the service wraps
//! the page in a [`PaginatedResponse`] whose navigation links re-encode the
//! active filters through the resource's [`FilterEncoder`] implementation.
//!
//! Link generation is a pure function of `(page, pageSize, totalPages,
//! filters)`: identical inputs produce byte-identical output.

use serde::{Deserialize, Serialize};

use crate::model::api::Link;

/// Page size applied when the query string carries no `pageSize`.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Upper bound for `pageSize`; larger requests are clamped, never rejected.
pub const MAX_PAGE_SIZE: i64 = 100;

/// Raw pagination query parameters as sent by the client.
///
/// Values deserialize as signed integers so that out-of-range input (zero,
/// negative, oversized) reaches the clamping logic instead of failing
/// deserialization.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

/// Normalized pagination request.
///
/// Invariants: `page >= 1` and `1 <= page_size <= 100`. Construction never
/// fails; inputs outside those ranges are clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u64,
    page_size: u64,
}

impl PageRequest {
    pub fn new(page: i64, page_size: i64) -> Self {
        Self {
            page: page.max(1) as u64,
            page_size: page_size.clamp(1, MAX_PAGE_SIZE) as u64,
        }
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    /// Index of the first retained row in the filtered collection.
    /// Saturates instead of overflowing when `page` is absurdly large.
    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.page_size)
    }

    /// Zero-based page index handed to the paginator, capped at one past the
    /// last page of `total_count` rows. A request far beyond the end still
    /// yields an empty slice; the cap keeps the paginator's internal offset
    /// arithmetic from overflowing on huge `page` values.
    pub fn fetch_page_index(&self, total_count: u64) -> u64 {
        (self.page - 1).min(self.total_pages(total_count))
    }

    /// Number of pages needed for `total_count` rows; zero when the filtered
    /// collection is empty.
    pub fn total_pages(&self, total_count: u64) -> u64 {
        total_count.div_ceil(self.page_size)
    }
}

impl From<PageQuery> for PageRequest {
    fn from(query: PageQuery) -> Self {
        Self::new(
            query.page.unwrap_or(1),
            query.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        )
    }
}

/// Paginated response envelope shared by all list endpoints.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub page: u64,
    pub page_size: u64,
    pub total_count: u64,
    pub total_pages: u64,
    pub has_next_page: bool,
    pub has_previous_page: bool,
    pub links: Vec<Link>,
}

impl<T> PaginatedResponse<T> {
    /// Assembles the envelope metadata from the normalized request and the
    /// filtered total. A `page` past the last page yields an empty `data`
    /// slice with fully populated metadata, never an error.
    pub fn new(data: Vec<T>, request: &PageRequest, total_count: u64, links: Vec<Link>) -> Self {
        let total_pages = request.total_pages(total_count);

        Self {
            data,
            page: request.page(),
            page_size: request.page_size(),
            total_count,
            total_pages,
            has_next_page: request.page() < total_pages,
            has_previous_page: request.page() > 1,
            links,
        }
    }
}

/// Accumulates `&name=value` pairs re-encoding a resource's active filters
/// into link query strings.
///
/// Pairs are appended in the order the resource's [`FilterEncoder`] emits
/// them, after `page` and `pageSize`. Text values are percent-encoded
/// (space becomes `%20`); ids are rendered as plain decimal.
#[derive(Debug, Default)]
pub struct FilterQuery {
    buf: String,
}

impl FilterQuery {
    pub fn push_text(&mut self, name: &str, value: &str) {
        self.buf.push('&');
        self.buf.push_str(name);
        self.buf.push('=');
        self.buf.push_str(&urlencoding::encode(value));
    }

    pub fn push_id(&mut self, name: &str, value: i32) {
        self.buf.push('&');
        self.buf.push_str(name);
        self.buf.push('=');
        self.buf.push_str(&value.to_string());
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }
}

/// Capability implemented by each resource's filter struct: append the
/// currently active filters to a link query string.
///
/// Implementations must skip absent integer filters and absent or
/// blank/whitespace-only text filters, and must always emit parameters in
/// the resource's fixed order so link output stays deterministic.
pub trait FilterEncoder {
    fn encode(&self, query: &mut FilterQuery);
}

/// Text filter activity test: blank and whitespace-only values behave as if
/// the parameter had not been sent at all. Returns the original (untrimmed)
/// value when active.
pub fn active_text(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|text| !text.trim().is_empty())
}

/// Builds the fixed item-level link set for one resource row: `self`,
/// `update`, and `delete` on the item URI plus `all` on the collection.
///
/// Inside a list response the `all` entry is stripped by the service (it
/// duplicates the page's own `self` link); the standalone get-by-id
/// representation keeps all four.
pub fn item_links(base: &str, id: i32) -> Vec<Link> {
    vec![
        Link::new("self", format!("{base}/{id}"), "GET"),
        Link::new("update", format!("{base}/{id}"), "PUT"),
        Link::new("delete", format!("{base}/{id}"), "DELETE"),
        Link::new("all", base, "GET"),
    ]
}

/// Builds the page-level navigation link set.
///
/// Always `self`; `first` and `previous` only when there is a previous page;
/// `next` and `last` only when there is a following one — in exactly that
/// order. Every href carries `page`, `pageSize`, and the re-encoded active
/// filters.
pub fn page_links<F: FilterEncoder>(
    base: &str,
    request: &PageRequest,
    total_pages: u64,
    filters: &F,
) -> Vec<Link> {
    let mut query = FilterQuery::default();
    filters.encode(&mut query);

    let page = request.page();
    let page_size = request.page_size();
    let filter = query.as_str();
    let href = |target: u64| format!("{base}?page={target}&pageSize={page_size}{filter}");

    let mut links = vec![Link::new("self", href(page), "GET")];

    if page > 1 {
        links.push(Link::new("first", href(1), "GET"));
        links.push(Link::new("previous", href(page - 1), "GET"));
    }

    if page < total_pages {
        links.push(Link::new("next", href(page + 1), "GET"));
        links.push(Link::new("last", href(total_pages), "GET"));
    }

    links
}
