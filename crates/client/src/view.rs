//! Paginated listing views.
//!
//! A view owns one [`PagedCache`] for its whole lifetime and reads through it:
//! a page already seen is served from memory, anything else is fetched and
//! stored. Dropping the view drops the cache. Views are driven from a single
//! logical flow (`&mut self`); overlapping requests for the same page are not
//! deduplicated.

use async_trait::async_trait;
use tracing::debug;
use walletwise_core::finance::Transaction;
use walletwise_core::pagination::{PageEntry, PageKey, PagedCache};

use crate::error::{ClientError, Result};

/// Source of pages for a listing view.
#[async_trait]
pub trait PageFetcher<T>: Send + Sync {
    /// Retrieves page `key` from the backend.
    async fn fetch_page(&self, key: PageKey) -> Result<PageEntry<T>>;
}

/// A paginated listing backed by a per-view page cache.
#[derive(Debug)]
pub struct ListView<T, F> {
    fetcher: F,
    cache: PagedCache<T>,
    current: Option<PageKey>,
}

/// The transaction history listing.
pub type TransactionListView<F> = ListView<Transaction, F>;

impl<T, F> ListView<T, F>
where
    F: PageFetcher<T>,
{
    /// Creates a view with an empty cache.
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            cache: PagedCache::new(),
            current: None,
        }
    }

    /// Returns page `key`, fetching it only if it has not been seen yet.
    ///
    /// A failed fetch is returned as-is and leaves the cache untouched.
    pub async fn load_page(&mut self, key: PageKey) -> Result<&PageEntry<T>> {
        if self.cache.contains(key) {
            debug!(page = key, "page cache hit");
        } else {
            debug!(page = key, "page cache miss");
            let page = self.fetcher.fetch_page(key).await?;
            self.cache.put(key, page);
        }
        self.current = Some(key);

        self.cache.get(key).ok_or_else(|| {
            ClientError::InvalidResponse(format!("page {} missing after load", key))
        })
    }

    /// Loads the page after the current one, if the last loaded page says
    /// there is one.
    pub async fn next_page(&mut self) -> Result<Option<&PageEntry<T>>> {
        let next = match self.current {
            None => 0,
            Some(current) => match self.cache.get(current) {
                Some(page) if page.has_next(current) => current + 1,
                _ => return Ok(None),
            },
        };
        self.load_page(next).await.map(Some)
    }

    /// Loads the page before the current one. Returns None on the first page.
    pub async fn previous_page(&mut self) -> Result<Option<&PageEntry<T>>> {
        match self.current {
            Some(current) if current > 0 => self.load_page(current - 1).await.map(Some),
            _ => Ok(None),
        }
    }

    /// The page most recently loaded.
    pub fn current_page(&self) -> Option<PageKey> {
        self.current
    }

    /// Total page count reported by the current page.
    pub fn total_pages(&self) -> Option<u32> {
        self.current
            .and_then(|key| self.cache.get(key))
            .map(|page| page.total_pages)
    }

    /// Page indices currently held in the cache, ascending.
    pub fn cached_pages(&self) -> Vec<PageKey> {
        self.cache.keys()
    }

    /// Forgets every cached page, as if the view had just been created.
    pub fn reset(&mut self) {
        self.cache.clear();
        self.current = None;
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }
}
