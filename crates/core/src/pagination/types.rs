use serde::{Deserialize, Serialize};

/// Zero-based index of a page in a paginated listing.
pub type PageKey = u32;

/// One page of results as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageEntry<T> {
    #[serde(alias = "data")]
    pub items: Vec<T>,
    #[serde(alias = "totalPages")]
    pub total_pages: u32,
    #[serde(
        default,
        alias = "totalItems",
        skip_serializing_if = "Option::is_none"
    )]
    pub total_items: Option<u64>,
}

impl<T> PageEntry<T> {
    /// Creates a page with the given items and total page count.
    pub fn new(items: Vec<T>, total_pages: u32) -> Self {
        Self {
            items,
            total_pages,
            total_items: None,
        }
    }

    /// Sets the total number of items across all pages.
    pub fn with_total_items(mut self, total_items: u64) -> Self {
        self.total_items = Some(total_items);
        self
    }

    /// Returns true if a page exists after `key`.
    pub fn has_next(&self, key: PageKey) -> bool {
        key.saturating_add(1) < self.total_pages
    }

    /// Returns true if this page has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
