//! PageWindow entity - the token sequence computed for one page.

use alloc::vec::Vec;

use super::PageToken;
use crate::domain::value_objects::PageNumber;

/// The page-link bar computed for a given current page.
///
/// Produced fresh on every recomputation and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    current: PageNumber,
    tokens: Vec<PageToken>,
}

impl PageWindow {
    /// Wrap a token sequence computed for `current`.
    pub fn new(current: PageNumber, tokens: Vec<PageToken>) -> Self {
        Self { current, tokens }
    }

    /// The page this window was computed for.
    #[inline]
    pub const fn current(&self) -> PageNumber {
        self.current
    }

    /// All tokens, in render order.
    #[inline]
    pub fn tokens(&self) -> &[PageToken] {
        &self.tokens
    }

    /// Check if there is nothing to render (no records).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Number of slots in the bar.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Concrete page numbers, skipping the markers.
    pub fn pages(&self) -> impl Iterator<Item = PageNumber> + '_ {
        self.tokens.iter().filter_map(PageToken::page_number)
    }

    /// Check if the window hides pages on its left.
    pub fn has_left_spill(&self) -> bool {
        self.tokens.contains(&PageToken::LeftEllipsis)
    }

    /// Check if the window hides pages on its right.
    pub fn has_right_spill(&self) -> bool {
        self.tokens.contains(&PageToken::RightEllipsis)
    }

    /// Check if `token` is the link for the current page.
    #[inline]
    pub fn is_active(&self, token: &PageToken) -> bool {
        token.page_number() == Some(self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_accessors() {
        let window = PageWindow::new(
            PageNumber::new(3),
            vec![
                PageToken::page(1),
                PageToken::page(2),
                PageToken::page(3),
                PageToken::page(4),
                PageToken::RightEllipsis,
                PageToken::page(10),
            ],
        );

        assert_eq!(window.len(), 6);
        assert!(!window.is_empty());
        assert!(!window.has_left_spill());
        assert!(window.has_right_spill());
        assert!(window.is_active(&PageToken::page(3)));
        assert!(!window.is_active(&PageToken::page(4)));
        assert_eq!(
            window.pages().map(PageNumber::value).collect::<Vec<_>>(),
            vec![1, 2, 3, 4, 10]
        );
    }
}
