//! Domain entities for the pagination system.
//!
//! Entities here are produced by the domain services and handed to callers:
//! the tokens of a page-link bar, the window that groups them, and the event
//! emitted when the current page changes.

mod page_changed;
mod page_token;
mod page_window;

pub use page_changed::PageChangedEvent;
pub use page_token::{Navigation, PageToken};
pub use page_window::PageWindow;
