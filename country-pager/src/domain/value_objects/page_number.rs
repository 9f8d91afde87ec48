//! Type-safe page number value object.

use core::fmt;

/// A 1-based page number.
///
/// Keeps page numbers apart from record counts and offsets, which share the
/// same integer type but mean different things.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageNumber(usize);

impl PageNumber {
    /// The first page.
    pub const FIRST: Self = Self(1);

    /// Create a new page number.
    ///
    /// # Examples
    ///
    /// ```
    /// use country_pager::domain::PageNumber;
    ///
    /// let page = PageNumber::new(3);
    /// assert_eq!(page.value(), 3);
    /// ```
    #[inline]
    pub const fn new(value: usize) -> Self {
        Self(value)
    }

    /// Get the underlying value.
    #[inline]
    pub const fn value(self) -> usize {
        self.0
    }

    /// Zero-based index of this page, saturating at 0.
    #[inline]
    pub const fn index(self) -> usize {
        self.0.saturating_sub(1)
    }

    /// Get the next page number.
    #[inline]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Page({})", self.0)
    }
}
