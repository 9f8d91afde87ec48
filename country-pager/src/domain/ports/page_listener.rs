//! PageChangedListener port - secondary (driven) port for page-change delivery.
//!
//! The controller notifies exactly one listener, synchronously, at the end of
//! every navigation that changes the current page. Adapters implement this
//! trait to keep their view of the data in step with the page indicator.

use crate::domain::entities::PageChangedEvent;

/// Port receiving page-changed notifications.
///
/// This is a **secondary (driven) port** in hexagonal architecture terms.
/// The controller depends on this abstraction; callers plug in a concrete
/// listener (a slicing adapter, a closure, or the no-op default).
///
/// ```text
/// ┌──────────────────────────┐
/// │   PaginationController   │
/// └────────────┬─────────────┘
///              │ notifies
///              ▼
/// ┌──────────────────────────┐
/// │  PageChangedListener     │  ◄── This trait
/// └────────────┬─────────────┘
///              │ implemented by
///              ▼
/// ┌──────────────────────────┐
/// │  SlicingListener, FnMut  │
/// └──────────────────────────┘
/// ```
///
/// # Examples
///
/// ```
/// use country_pager::domain::{PageChangedEvent, PageChangedListener};
///
/// struct Recorder(Vec<usize>);
///
/// impl PageChangedListener for Recorder {
///     fn on_page_changed(&mut self, event: &PageChangedEvent) {
///         self.0.push(event.current_page.value());
///     }
/// }
/// ```
pub trait PageChangedListener {
    /// Called once per page change, before the navigation call returns.
    fn on_page_changed(&mut self, event: &PageChangedEvent);
}

/// Listener that ignores every event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoopListener;

impl PageChangedListener for NoopListener {
    #[inline]
    fn on_page_changed(&mut self, _event: &PageChangedEvent) {}
}

impl<F> PageChangedListener for F
where
    F: FnMut(&PageChangedEvent),
{
    #[inline]
    fn on_page_changed(&mut self, event: &PageChangedEvent) {
        self(event)
    }
}
