//! Pagination configuration value object.

use super::PageNumber;

/// Records shown per page when the caller does not choose a size.
pub const DEFAULT_PAGE_LIMIT: usize = 30;

/// Neighbours rendered on each side of the current page by default.
pub const DEFAULT_PAGE_NEIGHBOURS: usize = 0;

/// Configuration for one pagination session.
///
/// Defines how a record set is split into pages:
/// - Total number of records
/// - Records per page (`page_limit`, always positive)
/// - Page links shown on each side of the current page (`page_neighbours`)
///
/// A config is immutable; changing any field means starting a new session.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawPaginationConfig"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationConfig {
    total_records: usize,
    page_limit: usize,
    page_neighbours: usize,
}

impl PaginationConfig {
    /// Create a configuration with the default page limit and neighbour count.
    ///
    /// # Examples
    ///
    /// ```
    /// use country_pager::domain::{PaginationConfig, DEFAULT_PAGE_LIMIT};
    ///
    /// let config = PaginationConfig::new(250);
    /// assert_eq!(config.page_limit(), DEFAULT_PAGE_LIMIT);
    /// assert_eq!(config.total_pages(), 9);
    /// ```
    pub const fn new(total_records: usize) -> Self {
        Self {
            total_records,
            page_limit: DEFAULT_PAGE_LIMIT,
            page_neighbours: DEFAULT_PAGE_NEIGHBOURS,
        }
    }

    /// Create a fully specified configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if `page_limit` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use country_pager::domain::PaginationConfig;
    ///
    /// let config = PaginationConfig::try_new(100, 18, 1).unwrap();
    /// assert_eq!(config.total_pages(), 6);
    ///
    /// assert!(PaginationConfig::try_new(100, 0, 1).is_err());
    /// ```
    pub const fn try_new(
        total_records: usize,
        page_limit: usize,
        page_neighbours: usize,
    ) -> Result<Self, PaginationConfigError> {
        if page_limit == 0 {
            return Err(PaginationConfigError::ZeroPageLimit);
        }

        Ok(Self {
            total_records,
            page_limit,
            page_neighbours,
        })
    }

    /// Replace the page limit.
    ///
    /// # Errors
    ///
    /// Returns an error if `page_limit` is zero.
    pub const fn with_page_limit(self, page_limit: usize) -> Result<Self, PaginationConfigError> {
        Self::try_new(self.total_records, page_limit, self.page_neighbours)
    }

    /// Replace the neighbour count.
    pub const fn with_page_neighbours(self, page_neighbours: usize) -> Self {
        Self {
            page_neighbours,
            ..self
        }
    }

    /// Get the total number of records.
    #[inline]
    pub const fn total_records(&self) -> usize {
        self.total_records
    }

    /// Get the number of records per page.
    #[inline]
    pub const fn page_limit(&self) -> usize {
        self.page_limit
    }

    /// Get the number of neighbours on each side of the current page.
    #[inline]
    pub const fn page_neighbours(&self) -> usize {
        self.page_neighbours
    }

    /// Number of pages needed to hold every record; 0 when there are no records.
    #[inline]
    pub const fn total_pages(&self) -> usize {
        self.total_records.div_ceil(self.page_limit)
    }

    /// Distance covered by one window jump (`page_neighbours * 2 + 1`).
    ///
    /// Saturates, so a huge neighbour count jumps straight to a terminal page.
    #[inline]
    pub const fn window_stride(&self) -> usize {
        self.page_neighbours.saturating_mul(2).saturating_add(1)
    }

    /// Offset of the first record on `page`.
    ///
    /// # Examples
    ///
    /// ```
    /// use country_pager::domain::{PageNumber, PaginationConfig};
    ///
    /// let config = PaginationConfig::try_new(100, 18, 1).unwrap();
    /// assert_eq!(config.page_offset(PageNumber::new(3)), 36);
    /// ```
    #[inline]
    pub const fn page_offset(&self, page: PageNumber) -> usize {
        page.index().saturating_mul(self.page_limit)
    }
}

/// Unvalidated wire form, checked by `try_new` on the way in.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawPaginationConfig {
    total_records: usize,
    page_limit: usize,
    page_neighbours: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<RawPaginationConfig> for PaginationConfig {
    type Error = PaginationConfigError;

    fn try_from(raw: RawPaginationConfig) -> Result<Self, Self::Error> {
        Self::try_new(raw.total_records, raw.page_limit, raw.page_neighbours)
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self::new(0)
    }
}

/// Errors that can occur when creating a PaginationConfig.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationConfigError {
    /// Page limit is zero.
    ZeroPageLimit,
}

impl core::fmt::Display for PaginationConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ZeroPageLimit => write!(f, "Page limit must be at least 1"),
        }
    }
}

impl core::error::Error for PaginationConfigError {}
