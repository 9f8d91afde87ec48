//! Domain layer - Pure pagination logic with zero infrastructure dependencies.
//!
//! The domain layer contains:
//! - **Entities**: What the services hand out (`PageToken`, `PageWindow`, `PageChangedEvent`)
//! - **Value Objects**: Immutable validated data (`PageNumber`, `PaginationConfig`)
//! - **Domain Services**: `PageWindowCalculator`, `PaginationController`, `DataSlicer`
//! - **Ports**: Interfaces to the outside world (`PageChangedListener`)
//!
//! # Hexagonal Architecture
//!
//! ```text
//!     ┌──────────────────────────────────┐
//!     │      Domain Layer (Core)         │
//!     │                                  │
//!     │  ┌────────────────────────────┐  │
//!     │  │  Entities & Value Objects  │  │
//!     │  │  - PageToken, PageNumber   │  │
//!     │  └────────────────────────────┘  │
//!     │              ▲                   │
//!     │              │                   │
//!     │  ┌────────────────────────────┐  │
//!     │  │    Domain Services         │  │
//!     │  │    - PageWindowCalculator  │  │
//!     │  │    - PaginationController  │  │
//!     │  │    - DataSlicer            │  │
//!     │  └────────────────────────────┘  │
//!     │              │                   │
//!     │              ▼                   │
//!     │  ┌────────────────────────────┐  │
//!     │  │    Ports (Interfaces)      │  │
//!     │  │    - PageChangedListener   │  │
//!     │  └────────────────────────────┘  │
//!     └──────────────────────────────────┘
//!                    ▲
//!                    │ implemented by
//!                    │
//!     ┌──────────────────────────────────┐
//!     │      Adapter Layer               │
//!     │  - SlicingListener               │
//!     └──────────────────────────────────┘
//! ```
//!
//! # Examples
//!
//! ```
//! use country_pager::domain::{PageToken, PaginationConfig, PaginationController};
//!
//! let config = PaginationConfig::try_new(500, 18, 1).unwrap();
//! let mut controller = PaginationController::new(config);
//!
//! controller.goto(15);
//! let window = controller.current_window();
//! assert_eq!(window.tokens()[1], PageToken::LeftEllipsis);
//! ```

pub mod entities;
pub mod value_objects;
pub mod ports;

mod controller;
mod slicer;
mod window;

// Re-export commonly used types
pub use entities::{Navigation, PageChangedEvent, PageToken, PageWindow};
pub use value_objects::{
    PageNumber, PaginationConfig, PaginationConfigError, DEFAULT_PAGE_LIMIT,
    DEFAULT_PAGE_NEIGHBOURS,
};
pub use ports::{NoopListener, PageChangedListener};
pub use controller::PaginationController;
pub use slicer::DataSlicer;
pub use window::PageWindowCalculator;
