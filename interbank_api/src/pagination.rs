//! Paged retrieval shared by every listing endpoint.
//!
//! Each listing response type implements [`Paginated`], which normalizes the
//! family-specific envelope into a [`Page`]. [`fetch_all`] then walks pages
//! starting at index 0 until the most recently fetched page says there are no
//! more, flattening the items in arrival order.

use std::future::Future;

use serde::de::DeserializeOwned;

use crate::Error;

/// Page size used when a listing is fully materialized.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// One slice of an ordered result set.
#[derive(Clone, Debug, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Number of pages in the whole result set. Zero means the set is empty.
    pub total_pages: u32,
    /// Zero-based index of this page.
    pub current_page: u32,
}

impl<T> Page<T> {
    pub fn empty(current_page: u32) -> Self {
        Self {
            items: Vec::new(),
            total_pages: 0,
            current_page,
        }
    }

    /// Whether a page after this one exists.
    pub fn has_more(&self) -> bool {
        self.current_page.saturating_add(1) < self.total_pages
    }
}

/// A listing response envelope that can be normalized into a [`Page`].
pub trait Paginated: DeserializeOwned {
    type Item;

    /// Query key carrying the zero-based page index.
    const PAGE_PARAM: &'static str;

    /// Query key carrying the page size.
    const PAGE_SIZE_PARAM: &'static str;

    /// Converts the envelope into a page. `requested` is the page index the
    /// request asked for; envelopes that do not echo it back use it as-is.
    fn into_page(self, requested: u32) -> Page<Self::Item>;
}

/// Fetches every page and returns all items in page order.
///
/// `fetch_page` is called with 0, 1, 2, ... and the loop stops once the page
/// index reaches the `total_pages` reported by the latest page. Any failure
/// aborts the walk and nothing fetched so far is returned.
pub async fn fetch_all<T, F, Fut>(mut fetch_page: F) -> Result<Vec<T>, Error>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<Page<T>, Error>>,
{
    let mut items = Vec::new();
    let mut page_index = 0u32;
    loop {
        let page = fetch_page(page_index).await?;
        tracing::debug!(
            "Fetched page {} of {} ({} items)",
            page_index + 1,
            page.total_pages,
            page.items.len()
        );
        if page.total_pages == 0 {
            break;
        }
        items.extend(page.items);
        page_index += 1;
        if page_index >= page.total_pages {
            break;
        }
    }
    Ok(items)
}
