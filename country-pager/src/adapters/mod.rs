//! Adapter layer - Concrete implementations of the domain's ports.
//!
//! ```text
//!     ┌──────────────────────────────────┐
//!     │      Domain Layer                │
//!     │  - PaginationController          │
//!     │  - PageChangedListener (port)    │
//!     └────────────┬─────────────────────┘
//!                  │
//!                  │ implements
//!                  ▼
//!     ┌──────────────────────────────────┐
//!     │      Adapter Layer               │  ◄── This module
//!     │  - SlicingListener               │
//!     └──────────────────────────────────┘
//! ```
//!
//! # Available Adapters
//!
//! - **`SlicingListener`**: Holds the records and the slice for the current page

mod slicing_listener;

pub use slicing_listener::SlicingListener;
