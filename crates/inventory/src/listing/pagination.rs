use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

/// What the previous/next controls may do for the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageControls {
    pub visible: bool,
    pub previous_enabled: bool,
    pub next_enabled: bool,
}

impl Pagination {
    /// `requested_page` is clamped into `1..=max(total_pages, 1)`.
    pub fn new(total_items: usize, page_size: usize, requested_page: usize) -> Self {
        let page_size = page_size.max(1);
        let total_pages = total_items.div_ceil(page_size);
        let page = requested_page.clamp(1, total_pages.max(1));

        Self {
            page,
            page_size,
            total_items,
            total_pages,
        }
    }

    pub fn range(&self) -> Range<usize> {
        let start = ((self.page - 1) * self.page_size).min(self.total_items);
        let end = (start + self.page_size).min(self.total_items);
        start..end
    }

    pub fn is_first(&self) -> bool {
        self.page <= 1
    }

    pub fn is_last(&self) -> bool {
        self.page >= self.total_pages
    }

    pub fn controls(&self) -> PageControls {
        PageControls {
            visible: self.total_pages > 1,
            previous_enabled: !self.is_first(),
            next_enabled: !self.is_last(),
        }
    }
}
