//! Page token entity - one slot of a rendered page-link bar.

use crate::domain::value_objects::PageNumber;

/// A single slot in the page-link bar.
///
/// A window is a sequence of tokens: concrete page numbers plus at most one
/// marker on each side standing in for pages that are not shown individually.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", content = "number", rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageToken {
    /// A link to a concrete page.
    Page(PageNumber),
    /// Pages hidden between page 1 and the window.
    LeftEllipsis,
    /// Pages hidden between the window and the last page.
    RightEllipsis,
}

impl PageToken {
    /// Shorthand for a `Page` token.
    #[inline]
    pub const fn page(number: usize) -> Self {
        Self::Page(PageNumber::new(number))
    }

    /// Get the page number, or None for a marker.
    #[inline]
    pub const fn page_number(&self) -> Option<PageNumber> {
        match self {
            Self::Page(number) => Some(*number),
            _ => None,
        }
    }

    /// Check if this token is one of the two ellipsis markers.
    #[inline]
    pub const fn is_ellipsis(&self) -> bool {
        matches!(self, Self::LeftEllipsis | Self::RightEllipsis)
    }

    /// The navigation a click on this token triggers.
    ///
    /// Markers jump a whole window rather than going to a fixed page.
    ///
    /// # Examples
    ///
    /// ```
    /// use country_pager::domain::{Navigation, PageNumber, PageToken};
    ///
    /// assert_eq!(PageToken::page(4).navigation(), Navigation::Goto(PageNumber::new(4)));
    /// assert_eq!(PageToken::LeftEllipsis.navigation(), Navigation::MoveLeft);
    /// assert_eq!(PageToken::RightEllipsis.navigation(), Navigation::MoveRight);
    /// ```
    pub const fn navigation(&self) -> Navigation {
        match self {
            Self::Page(number) => Navigation::Goto(*number),
            Self::LeftEllipsis => Navigation::MoveLeft,
            Self::RightEllipsis => Navigation::MoveRight,
        }
    }
}

/// A navigation request coming from the rendering side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// Jump to a specific page.
    Goto(PageNumber),
    /// Jump one full window to the left.
    MoveLeft,
    /// Jump one full window to the right.
    MoveRight,
}
