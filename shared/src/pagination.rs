//! Client-side pagination over an in-memory list.

/// Number of events shown per page.
pub const PAGE_SIZE: usize = 4;

/// Number of pages needed for `len` items, `0` for an empty list.
pub fn page_count(len: usize, page_size: usize) -> usize {
    let per_page = page_size.max(1);
    len.div_ceil(per_page)
}

/// Items visible on the 1-based `page`.
///
/// Pages outside the list produce an empty slice instead of panicking.
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let per_page = page_size.max(1);
    let start = per_page.saturating_mul(page.max(1) - 1);
    if start >= items.len() {
        return &[];
    }
    let end = usize::min(start.saturating_add(per_page), items.len());
    &items[start..end]
}

/// 1-based page cursor. Never drops below 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    page: usize,
}

impl Default for PageCursor {
    fn default() -> Self {
        Self {
            page: 1,
        }
    }
}

impl PageCursor {
    /// Current page.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Back to the first page.
    pub fn reset(&mut self) {
        self.page = 1;
    }

    /// Step back one page; no-op on page 1.
    pub fn prev(&mut self) {
        if self.page > 1 {
            self.page -= 1;
        }
    }

    /// Step forward one page; no-op on the last page.
    pub fn next(&mut self, total_pages: usize) {
        if self.page < total_pages {
            self.page += 1;
        }
    }

    /// Pull the cursor back into `[1, max(1, total_pages)]`.
    pub fn clamp_to(&mut self, total_pages: usize) {
        self.page = self.page.max(1).min(total_pages.max(1));
    }

    /// The "Prev" control is disabled on the first page.
    pub fn prev_disabled(&self) -> bool {
        self.page <= 1
    }

    /// The "Next" control is disabled on the last page, or when there are
    /// no pages at all.
    pub fn next_disabled(&self, total_pages: usize) -> bool {
        total_pages == 0 || self.page >= total_pages
    }
}
