mod cache;
mod types;

pub use cache::PagedCache;
pub use types::{PageEntry, PageKey};
