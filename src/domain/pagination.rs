use serde::{Deserialize, Serialize};

/// Pagination block for list responses.
///
/// Any serializable value can be passed as pagination metadata; this type is
/// the shape the API documents by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    // ---
    pub current_page: u32,
    pub page_size: u32,
    pub total_pages: u32,
    pub total_records: u64,
}

impl Pagination {
    // ---
    /// Derives `total_pages` from the record count. A zero page size yields
    /// zero pages.
    pub fn new(current_page: u32, page_size: u32, total_records: u64) -> Self {
        // ---
        let total_pages = if page_size == 0 {
            0
        } else {
            total_records.div_ceil(u64::from(page_size))
        };

        Self {
            current_page,
            page_size,
            total_pages: u32::try_from(total_pages).unwrap_or(u32::MAX),
            total_records,
        }
    }

    /// Zero-based offset of the first record on the current page.
    pub fn offset(&self) -> usize {
        // ---
        let page = self.current_page.saturating_sub(1) as usize;
        page.saturating_mul(self.page_size as usize)
    }
}
