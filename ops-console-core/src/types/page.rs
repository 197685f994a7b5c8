//! Paginated list state

/// Number of pages needed for `total_records` at `page_size` per page.
///
/// `0` when there are no records. A zero `page_size` is treated as 1 to
/// keep the math total; callers clamp sizes before issuing requests.
#[must_use]
pub fn total_pages(total_records: u64, page_size: u32) -> u32 {
    let page_size = u64::from(page_size.max(1));
    let pages = total_records.div_ceil(page_size);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// One page of a resource list plus its pagination bookkeeping.
///
/// `page` tracks the page the user asked for, not a clamped value: the
/// console deliberately keeps the current page number after a delete empties
/// a trailing page (see [`CrudPanelController::remove`]).
///
/// [`CrudPanelController::remove`]: crate::CrudPanelController::remove
#[derive(Debug, Clone)]
pub struct ListPage<T> {
    /// Records in the current page.
    pub items: Vec<T>,
    /// Total number of records across all pages.
    pub total_records: u64,
    /// Current page number (1-indexed).
    pub page: u32,
    /// Page size used for the last load.
    pub page_size: u32,
}

impl<T> ListPage<T> {
    /// Empty first page at the given page size.
    #[must_use]
    pub fn empty(page_size: u32) -> Self {
        Self {
            items: Vec::new(),
            total_records: 0,
            page: 1,
            page_size,
        }
    }

    /// Number of pages at the current size; `0` when the list is empty.
    #[must_use]
    pub fn total_pages(&self) -> u32 {
        total_pages(self.total_records, self.page_size)
    }
}
