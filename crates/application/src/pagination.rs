use serde::{Deserialize, Serialize};

/// Users shown per page unless configured otherwise.
pub const DEFAULT_USERS_PAGE_SIZE: usize = 6;

/// One-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number, starting at 1.
    pub page: usize,
    /// Rows per page.
    pub page_size: usize,
}

impl PageRequest {
    /// Creates a request, clamping page and size to at least 1.
    #[must_use]
    pub fn new(page: usize, page_size: usize) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1, DEFAULT_USERS_PAGE_SIZE)
    }
}

/// Slice of a list together with paging totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Rows on this page.
    pub items: Vec<T>,
    /// Page number, starting at 1.
    pub page: usize,
    /// Rows per page.
    pub page_size: usize,
    /// Rows across all pages.
    pub total_items: usize,
    /// Number of pages.
    pub total_pages: usize,
}

/// Returns `ceil(total_items / page_size)`.
#[must_use]
pub fn page_count(total_items: usize, page_size: usize) -> usize {
    total_items.div_ceil(page_size.max(1))
}

/// Cuts one page out of `items`. Pages past the end come back empty.
#[must_use]
pub fn paginate<T>(items: Vec<T>, request: PageRequest) -> Page<T> {
    let request = PageRequest::new(request.page, request.page_size);
    let total_items = items.len();
    let start = (request.page - 1).saturating_mul(request.page_size);

    Page {
        items: items
            .into_iter()
            .skip(start)
            .take(request.page_size)
            .collect(),
        page: request.page,
        page_size: request.page_size,
        total_items,
        total_pages: page_count(total_items, request.page_size),
    }
}

/// Entry of the page strip under a paginated list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "page", rename_all = "snake_case")]
pub enum PageMarker {
    /// Clickable page number.
    Page(usize),
    /// Gap between the first page and the window.
    StartEllipsis,
    /// Gap between the window and the last page.
    EndEllipsis,
}

/// Builds the page strip: first page, current page ±1, last page, with
/// ellipses over the gaps.
///
/// A current page past the end is drawn as the last page.
#[must_use]
pub fn visible_pages(current_page: usize, total_pages: usize) -> Vec<PageMarker> {
    let mut markers = vec![PageMarker::Page(1)];

    let current_page = current_page.clamp(1, total_pages.max(1));
    let range_start = current_page.saturating_sub(1).max(2);
    let range_end = current_page
        .saturating_add(1)
        .min(total_pages.saturating_sub(1));

    if range_start > 2 {
        markers.push(PageMarker::StartEllipsis);
    }

    markers.extend((range_start..=range_end).map(PageMarker::Page));

    if range_end < total_pages.saturating_sub(1) {
        markers.push(PageMarker::EndEllipsis);
    }

    if total_pages > 1 {
        markers.push(PageMarker::Page(total_pages));
    }

    markers
}
