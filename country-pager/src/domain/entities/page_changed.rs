//! Page-changed event payload.

use core::ops::Range;

use crate::domain::value_objects::{PageNumber, PaginationConfig};

/// Emitted to the listener whenever the current page changes.
///
/// Purely informational: it carries everything a caller needs to slice its
/// own record sequence without holding on to the controller.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageChangedEvent {
    /// The page now shown.
    pub current_page: PageNumber,
    /// Total number of pages.
    pub total_pages: usize,
    /// Records per page.
    pub page_limit: usize,
    /// Total number of records.
    pub total_records: usize,
}

impl PageChangedEvent {
    /// Build the event for `current_page` under `config`.
    pub const fn new(config: &PaginationConfig, current_page: PageNumber) -> Self {
        Self {
            current_page,
            total_pages: config.total_pages(),
            page_limit: config.page_limit(),
            total_records: config.total_records(),
        }
    }

    /// Offset of the first record on the current page.
    #[inline]
    pub const fn offset(&self) -> usize {
        self.current_page.index().saturating_mul(self.page_limit)
    }

    /// Index range of the current page within a sequence of `len` records.
    ///
    /// Both ends are clamped to `len`, so an offset past the end gives an
    /// empty range.
    ///
    /// # Examples
    ///
    /// ```
    /// use country_pager::domain::{PageChangedEvent, PageNumber, PaginationConfig};
    ///
    /// let config = PaginationConfig::try_new(100, 18, 1).unwrap();
    /// let event = PageChangedEvent::new(&config, PageNumber::new(6));
    /// assert_eq!(event.range(100), 90..100);
    /// assert_eq!(event.range(50), 50..50);
    /// ```
    pub fn range(&self, len: usize) -> Range<usize> {
        let start = self.offset().min(len);
        let end = self.offset().saturating_add(self.page_limit).min(len);
        start..end
    }
}
