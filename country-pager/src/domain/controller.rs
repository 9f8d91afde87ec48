//! PaginationController domain service - navigation state and notification.
//!
//! The controller owns the only piece of mutable state in the pagination
//! system, the current page. Every navigation clamps its target into the
//! valid page range, and every change is reported to the listener port before
//! the call returns.

use crate::domain::{
    entities::{Navigation, PageChangedEvent, PageWindow},
    ports::{NoopListener, PageChangedListener},
    value_objects::{PageNumber, PaginationConfig},
    window::PageWindowCalculator,
};

/// Domain service driving one pagination session.
///
/// # Business Rules
///
/// - The current page always lies in `1..=max(total_pages, 1)`
/// - Out-of-range requests are clamped, never rejected
/// - The listener sees one event on construction (if there is anything to
///   show) and one per navigation that actually moves the current page
///
/// # Examples
///
/// ```
/// use country_pager::domain::{PageChangedEvent, PaginationConfig, PaginationController};
///
/// let config = PaginationConfig::try_new(500, 18, 1).unwrap();
/// let mut pages = Vec::new();
/// let mut controller = PaginationController::with_listener(config, |event: &PageChangedEvent| {
///     pages.push(event.current_page.value())
/// });
///
/// controller.goto(15);
/// controller.move_right();
/// drop(controller);
///
/// assert_eq!(pages, vec![1, 15, 18]);
/// ```
#[derive(Debug)]
pub struct PaginationController<L: PageChangedListener = NoopListener> {
    config: PaginationConfig,
    current: PageNumber,
    listener: L,
}

impl PaginationController<NoopListener> {
    /// Create a controller whose events go nowhere.
    ///
    /// Useful when the caller only pulls windows and never slices records.
    pub fn new(config: PaginationConfig) -> Self {
        Self::with_listener(config, NoopListener)
    }
}

impl<L: PageChangedListener> PaginationController<L> {
    /// Create a controller on page 1 and notify `listener` of it.
    ///
    /// No event is emitted when there are no records.
    pub fn with_listener(config: PaginationConfig, listener: L) -> Self {
        let mut controller = Self {
            config,
            current: PageNumber::FIRST,
            listener,
        };

        debug!(
            "pagination: {} records, {} per page, {} pages",
            config.total_records(),
            config.page_limit(),
            config.total_pages()
        );

        if config.total_pages() > 0 {
            controller.notify();
        }

        controller
    }

    /// Go to `page`, clamped into the valid range.
    ///
    /// Page 0 (and anything below the first page) lands on page 1.
    ///
    /// Returns the emitted event, or None if the current page did not change.
    pub fn goto(&mut self, page: usize) -> Option<PageChangedEvent> {
        let target = self.clamp(page);

        if target == self.current {
            return None;
        }

        debug!("pagination: {} -> {} (requested {})", self.current, target, page);
        self.current = target;
        Some(self.notify())
    }

    /// Jump one full window to the left.
    pub fn move_left(&mut self) -> Option<PageChangedEvent> {
        let target = self
            .current
            .value()
            .saturating_sub(self.config.window_stride());
        self.goto(target)
    }

    /// Jump one full window to the right.
    pub fn move_right(&mut self) -> Option<PageChangedEvent> {
        let target = self
            .current
            .value()
            .saturating_add(self.config.window_stride());
        self.goto(target)
    }

    /// Apply a navigation request from the rendering side.
    pub fn navigate(&mut self, navigation: Navigation) -> Option<PageChangedEvent> {
        match navigation {
            Navigation::Goto(page) => self.goto(page.value()),
            Navigation::MoveLeft => self.move_left(),
            Navigation::MoveRight => self.move_right(),
        }
    }

    /// The page-link window for the current page.
    pub fn current_window(&self) -> PageWindow {
        PageWindowCalculator::window(&self.config, self.current)
    }

    /// Same as [`current_window`](Self::current_window); recomputation is pure.
    #[inline]
    pub fn recompute_window(&self) -> PageWindow {
        self.current_window()
    }

    /// The event describing the current state, without emitting it.
    #[inline]
    pub const fn event(&self) -> PageChangedEvent {
        PageChangedEvent::new(&self.config, self.current)
    }

    /// Get the current page.
    #[inline]
    pub const fn current_page(&self) -> PageNumber {
        self.current
    }

    /// Get the total number of pages.
    #[inline]
    pub const fn total_pages(&self) -> usize {
        self.config.total_pages()
    }

    /// Get the session configuration.
    #[inline]
    pub const fn config(&self) -> &PaginationConfig {
        &self.config
    }

    /// Check if the current page is the first one.
    #[inline]
    pub fn is_first_page(&self) -> bool {
        self.current == PageNumber::FIRST
    }

    /// Check if the current page is the last one (or there are no pages).
    #[inline]
    pub fn is_last_page(&self) -> bool {
        self.current.value() >= self.total_pages()
    }

    /// Get the listener.
    #[inline]
    pub const fn listener(&self) -> &L {
        &self.listener
    }

    /// Get mutable access to the listener.
    #[inline]
    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    /// Consume the controller, returning its listener.
    pub fn into_listener(self) -> L {
        self.listener
    }

    fn clamp(&self, page: usize) -> PageNumber {
        PageNumber::new(page.clamp(1, self.total_pages().max(1)))
    }

    fn notify(&mut self) -> PageChangedEvent {
        let event = self.event();
        self.listener.on_page_changed(&event);
        event
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::PageToken;

    fn recording(
        total_records: usize,
        page_limit: usize,
        page_neighbours: usize,
    ) -> PaginationController<impl FnMut(&PageChangedEvent)> {
        let config = PaginationConfig::try_new(total_records, page_limit, page_neighbours).unwrap();
        let mut seen = Vec::new();
        PaginationController::with_listener(config, move |event: &PageChangedEvent| {
            seen.push(*event);
        })
    }

    fn counting(config: PaginationConfig) -> PaginationController<Counter> {
        PaginationController::with_listener(config, Counter::default())
    }

    #[derive(Debug, Default)]
    struct Counter {
        events: Vec<PageChangedEvent>,
    }

    impl PageChangedListener for Counter {
        fn on_page_changed(&mut self, event: &PageChangedEvent) {
            self.events.push(*event);
        }
    }

    #[test]
    fn test_initial_event() {
        let controller = counting(PaginationConfig::try_new(500, 18, 1).unwrap());
        let events = &controller.listener().events;
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].current_page, PageNumber::FIRST);
        assert_eq!(events[0].total_pages, 28);
        assert_eq!(events[0].page_limit, 18);
        assert_eq!(events[0].total_records, 500);
    }

    #[test]
    fn test_no_event_without_records() {
        let mut controller = counting(PaginationConfig::try_new(0, 18, 1).unwrap());
        assert_eq!(controller.total_pages(), 0);
        assert!(controller.current_window().is_empty());
        assert_eq!(controller.goto(5), None);
        assert_eq!(controller.move_right(), None);
        assert_eq!(controller.current_page(), PageNumber::FIRST);
        assert!(controller.listener().events.is_empty());
    }

    #[test]
    fn test_goto_clamps_high() {
        let mut controller = counting(PaginationConfig::try_new(500, 18, 1).unwrap());
        let event = controller.goto(28 + 100).unwrap();
        assert_eq!(event.current_page.value(), 28);
        assert_eq!(controller.current_page().value(), 28);
        assert!(controller.is_last_page());
    }

    // The browser widget this replaces clamped with a floor of 0, letting page 0 through
    // as a transient value. Page 0 is not a page, so the floor here is 1.
    #[test]
    fn test_goto_zero_lands_on_first_page() {
        let mut controller = counting(PaginationConfig::try_new(500, 18, 1).unwrap());
        controller.goto(10);
        let event = controller.goto(0).unwrap();
        assert_eq!(event.current_page, PageNumber::FIRST);
        assert!(controller.is_first_page());
    }

    #[test]
    fn test_goto_same_page_is_silent() {
        let mut controller = counting(PaginationConfig::try_new(500, 18, 1).unwrap());
        assert_eq!(controller.goto(1), None);
        assert!(controller.goto(3).is_some());
        assert_eq!(controller.goto(3), None);
        assert_eq!(controller.listener().events.len(), 2);
    }

    #[test]
    fn test_move_by_window_stride() {
        let mut controller = counting(PaginationConfig::try_new(500, 18, 1).unwrap());
        controller.goto(15);

        assert_eq!(controller.move_right().unwrap().current_page.value(), 18);
        assert_eq!(controller.move_left().unwrap().current_page.value(), 15);
        assert_eq!(controller.move_left().unwrap().current_page.value(), 12);
    }

    #[test]
    fn test_move_clamps_at_ends() {
        let mut controller = counting(PaginationConfig::try_new(500, 18, 2).unwrap());
        assert_eq!(controller.move_left(), None);

        controller.goto(26);
        assert_eq!(controller.move_right().unwrap().current_page.value(), 28);
        assert_eq!(controller.move_right(), None);

        controller.goto(3);
        assert_eq!(controller.move_left().unwrap().current_page.value(), 1);
    }

    #[test]
    fn test_huge_neighbour_count_moves_to_ends() {
        let mut controller = counting(PaginationConfig::try_new(100, 1, usize::MAX).unwrap());
        assert_eq!(controller.current_window().len(), 100);

        assert_eq!(controller.move_right().unwrap().current_page.value(), 100);
        assert_eq!(controller.move_right(), None);
        assert_eq!(controller.move_left().unwrap().current_page, PageNumber::FIRST);
    }

    #[test]
    fn test_navigate_from_tokens() {
        let mut controller = counting(PaginationConfig::try_new(500, 18, 1).unwrap());
        controller.goto(15);

        let window = controller.current_window();
        assert!(window.has_left_spill());
        controller.navigate(PageToken::LeftEllipsis.navigation());
        assert_eq!(controller.current_page().value(), 12);

        controller.navigate(PageToken::page(28).navigation());
        assert_eq!(controller.current_page().value(), 28);

        controller.navigate(PageToken::RightEllipsis.navigation());
        assert_eq!(controller.current_page().value(), 28);
    }

    #[test]
    fn test_window_idempotent() {
        let mut controller = recording(500, 18, 1);
        for page in 1..=28 {
            controller.goto(page);
            assert_eq!(controller.current_window(), controller.recompute_window());
        }
    }

    #[test]
    fn test_single_page() {
        let mut controller = counting(PaginationConfig::try_new(18, 18, 1).unwrap());
        assert_eq!(controller.total_pages(), 1);
        assert!(controller.is_first_page());
        assert!(controller.is_last_page());
        assert_eq!(controller.move_right(), None);
        assert_eq!(controller.listener().events.len(), 1);
    }

    #[test]
    fn test_into_listener() {
        let mut controller = counting(PaginationConfig::try_new(100, 18, 1).unwrap());
        controller.goto(4);
        controller.goto(6);
        let counter = controller.into_listener();
        let pages: Vec<_> = counter.events.iter().map(|e| e.current_page.value()).collect();
        assert_eq!(pages, vec![1, 4, 6]);
    }
}
