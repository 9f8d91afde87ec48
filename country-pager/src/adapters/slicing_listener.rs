//! Listener adapter that keeps the visible record slice in step with the page.

use alloc::vec::Vec;
use core::ops::Range;

use crate::domain::{
    DataSlicer, PageChangedEvent, PageChangedListener, PaginationConfig, PaginationConfigError,
    PaginationController,
};

/// Owns the full record sequence and the range visible on the current page.
///
/// The range is updated inside [`on_page_changed`](PageChangedListener::on_page_changed),
/// so by the time a navigation call returns the visible records already
/// match the page indicator.
///
/// # Examples
///
/// ```
/// use country_pager::adapters::SlicingListener;
///
/// let records: Vec<u32> = (1..=100).collect();
/// let mut controller = SlicingListener::new(records).paginate(18, 1).unwrap();
///
/// controller.goto(6);
/// assert_eq!(controller.listener().visible(), &[91, 92, 93, 94, 95, 96, 97, 98, 99, 100]);
/// ```
#[derive(Debug, Clone)]
pub struct SlicingListener<T> {
    records: Vec<T>,
    visible: Range<usize>,
    last_event: Option<PageChangedEvent>,
}

impl<T> SlicingListener<T> {
    /// Wrap a record sequence; nothing is visible until the first event.
    pub fn new(records: Vec<T>) -> Self {
        Self {
            records,
            visible: 0..0,
            last_event: None,
        }
    }

    /// Start a pagination session over the wrapped records.
    ///
    /// The total record count is taken from the sequence itself.
    ///
    /// # Errors
    ///
    /// Returns an error if `page_limit` is zero.
    pub fn paginate(
        self,
        page_limit: usize,
        page_neighbours: usize,
    ) -> Result<PaginationController<Self>, PaginationConfigError> {
        let config = PaginationConfig::try_new(self.records.len(), page_limit, page_neighbours)?;
        Ok(PaginationController::with_listener(config, self))
    }

    /// Records on the current page.
    #[inline]
    pub fn visible(&self) -> &[T] {
        &self.records[self.visible.clone()]
    }

    /// Index range of the current page within [`records`](Self::records).
    #[inline]
    pub fn visible_range(&self) -> Range<usize> {
        self.visible.clone()
    }

    /// All records.
    #[inline]
    pub fn records(&self) -> &[T] {
        &self.records
    }

    /// The most recent event, or None if none has arrived yet.
    #[inline]
    pub const fn last_event(&self) -> Option<&PageChangedEvent> {
        self.last_event.as_ref()
    }
}

impl<T> PageChangedListener for SlicingListener<T> {
    fn on_page_changed(&mut self, event: &PageChangedEvent) {
        let visible = DataSlicer::slice(&self.records, event);
        let start = event.range(self.records.len()).start;
        self.visible = start..start + visible.len();
        self.last_event = Some(*event);
        trace!("slice: {} records at {:?}", visible.len(), self.visible);
    }
}
