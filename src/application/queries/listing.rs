// src/application/queries/listing.rs
use crate::domain::shared::{PageRequest, pagination::PER_PAGE};

/// Blank search terms mean "no filter".
pub(crate) fn normalize_search(search: Option<String>) -> Option<String> {
    search
        .map(|term| term.trim().to_string())
        .filter(|term| !term.is_empty())
}

pub(crate) fn page_request(page: u32) -> PageRequest {
    PageRequest::new(page, PER_PAGE)
}
