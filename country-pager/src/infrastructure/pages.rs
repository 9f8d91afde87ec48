//! Iteration over every page of a record sequence.

use crate::domain::{DataSlicer, PageChangedEvent, PageNumber, PaginationConfig};

/// Iterator yielding each page's event and records, first page to last.
///
/// Concatenating the yielded slices gives back the input sequence.
///
/// # Examples
///
/// ```
/// use country_pager::domain::PaginationConfig;
/// use country_pager::infrastructure::Pages;
///
/// let records: Vec<u32> = (0..40).collect();
/// let config = PaginationConfig::try_new(records.len(), 18, 1).unwrap();
///
/// let sizes: Vec<usize> = Pages::new(&records, config).map(|(_, page)| page.len()).collect();
/// assert_eq!(sizes, vec![18, 18, 4]);
/// ```
#[derive(Debug, Clone)]
pub struct Pages<'a, T> {
    records: &'a [T],
    config: PaginationConfig,
    next: PageNumber,
}

impl<'a, T> Pages<'a, T> {
    /// Iterate over `records` split according to `config`.
    pub fn new(records: &'a [T], config: PaginationConfig) -> Self {
        Self {
            records,
            config,
            next: PageNumber::FIRST,
        }
    }
}

impl<'a, T> Iterator for Pages<'a, T> {
    type Item = (PageChangedEvent, &'a [T]);

    fn next(&mut self) -> Option<Self::Item> {
        if self.next.value() > self.config.total_pages() {
            return None;
        }

        let event = PageChangedEvent::new(&self.config, self.next);
        self.next = self.next.next();
        Some((event, DataSlicer::slice(self.records, &event)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.config.total_pages() + 1).saturating_sub(self.next.value());
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Pages<'_, T> {}
