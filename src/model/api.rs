use serde::{Deserialize, Serialize};

/// JSON error body returned by all failing endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorDto {
    pub error: String,
}

/// Hypermedia link attached to DTOs and paginated responses.
///
/// `rel` names the relation (`self`, `update`, `delete`, `all`, `first`,
/// `previous`, `next`, `last`), `href` is a service-relative URI, and
/// `method` is the HTTP verb to use when following the link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub rel: String,
    pub href: String,
    pub method: String,
}

impl Link {
    pub fn new(
        rel: impl Into<String>,
        href: impl Into<String>,
        method: impl Into<String>,
    ) -> Self {
        Self {
            rel: rel.into(),
            href: href.into(),
            method: method.into(),
        }
    }
}
