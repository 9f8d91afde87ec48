//! DataSlicer domain service - the records visible on a page.

use crate::domain::entities::PageChangedEvent;

/// Pure slicing of a caller-owned record sequence.
#[derive(Debug, Clone, Copy, Default)]
pub struct DataSlicer;

impl DataSlicer {
    /// Records on the page described by `event`.
    ///
    /// Takes `records[offset..offset + page_limit]` where
    /// `offset = (current_page - 1) * page_limit`, clamped to the bounds of
    /// `records`. An offset past the end yields an empty slice.
    ///
    /// # Examples
    ///
    /// ```
    /// use country_pager::domain::{DataSlicer, PageChangedEvent, PageNumber, PaginationConfig};
    ///
    /// let records: Vec<u32> = (0..40).collect();
    /// let config = PaginationConfig::try_new(40, 18, 1).unwrap();
    ///
    /// let event = PageChangedEvent::new(&config, PageNumber::new(3));
    /// assert_eq!(DataSlicer::slice(&records, &event), &[36, 37, 38, 39]);
    /// ```
    #[inline]
    pub fn slice<'a, T>(records: &'a [T], event: &PageChangedEvent) -> &'a [T] {
        &records[event.range(records.len())]
    }
}
