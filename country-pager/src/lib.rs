//! Windowed pagination with hexagonal architecture.
//!
//! This crate turns a record count into a compact bar of page links and a
//! slice of records for the active page, structured using hexagonal
//! architecture (ports and adapters pattern).
//!
//! # Architecture
//!
//! ## Domain Layer (`domain`)
//! Pure pagination logic with no infrastructure dependencies:
//! - **Entities**: `PageToken`, `PageWindow`, `PageChangedEvent`
//! - **Value Objects**: `PageNumber`, `PaginationConfig`
//! - **Services**: `PageWindowCalculator`, `PaginationController`, `DataSlicer`
//! - **Ports**: `PageChangedListener` interface
//!
//! ## Adapter Layer (`adapters`)
//! - **`SlicingListener`**: Implements `PageChangedListener` over an owned record list
//!
//! ## Infrastructure Layer (`infrastructure`)
//! - **`Pages`**: Iterates over every page of a record slice
//!
//! # Quick Start
//!
//! ```
//! use country_pager::{PageToken, SlicingListener};
//!
//! let countries: Vec<u32> = (0..500).collect();
//! let mut controller = SlicingListener::new(countries).paginate(18, 1).unwrap();
//!
//! controller.goto(15);
//! assert_eq!(controller.listener().visible().first(), Some(&252));
//!
//! let window = controller.current_window();
//! assert_eq!(window.tokens().first(), Some(&PageToken::page(1)));
//! assert_eq!(window.tokens().last(), Some(&PageToken::page(28)));
//! ```
//!
//! # Features
//!
//! - `log`: Enable logging through the `log` facade (default)
//! - `serde`: Derive `Serialize`/`Deserialize` for the public value types

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[macro_use]
mod macros;

// Core layers
pub mod domain;
pub mod adapters;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use domain::{
    DataSlicer, Navigation, NoopListener, PageChangedEvent, PageChangedListener, PageNumber,
    PageToken, PageWindow, PageWindowCalculator, PaginationConfig, PaginationConfigError,
    PaginationController, DEFAULT_PAGE_LIMIT, DEFAULT_PAGE_NEIGHBOURS,
};

pub use adapters::SlicingListener;

pub use infrastructure::Pages;
