//! PageWindowCalculator domain service - which page links to render.
//!
//! ```text
//! (1) « {4 5} [6] {7 8} » (10)
//!
//! (x)    terminal pages, always visible
//! [x]    current page
//! {x..}  page neighbours
//! « »    ellipsis markers for hidden pages
//! ```

use alloc::vec::Vec;

use crate::domain::{
    entities::{PageToken, PageWindow},
    value_objects::{PageNumber, PaginationConfig},
};

/// Pure calculator for the page-link window.
///
/// The window keeps a near-constant number of slots wherever the current page
/// sits: when only one side spills, the slots that side's marker would free
/// are filled with extra page numbers on the other side.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageWindowCalculator;

impl PageWindowCalculator {
    /// Number of concrete page slots: both terminals, the current page and
    /// `page_neighbours` on each side.
    ///
    /// Saturates; a window wider than any page count renders every page.
    #[inline]
    pub const fn total_numbers(page_neighbours: usize) -> usize {
        page_neighbours.saturating_mul(2).saturating_add(3)
    }

    /// Slots including the two ellipsis markers.
    ///
    /// Up to this many pages are always rendered in full.
    #[inline]
    pub const fn total_blocks(page_neighbours: usize) -> usize {
        Self::total_numbers(page_neighbours).saturating_add(2)
    }

    /// Compute the token sequence for `current_page`.
    ///
    /// `current_page` is clamped into `1..=total_pages` first, so the result
    /// is defined for every input. Zero pages gives an empty sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use country_pager::domain::{PageToken, PageWindowCalculator};
    ///
    /// let tokens = PageWindowCalculator::compute(28, 15, 1);
    /// assert_eq!(
    ///     tokens,
    ///     vec![
    ///         PageToken::page(1),
    ///         PageToken::LeftEllipsis,
    ///         PageToken::page(14),
    ///         PageToken::page(15),
    ///         PageToken::page(16),
    ///         PageToken::RightEllipsis,
    ///         PageToken::page(28),
    ///     ]
    /// );
    /// ```
    pub fn compute(total_pages: usize, current_page: usize, page_neighbours: usize) -> Vec<PageToken> {
        let total_numbers = Self::total_numbers(page_neighbours);
        let total_blocks = Self::total_blocks(page_neighbours);

        // Truncating would not shorten the bar
        if total_pages <= total_blocks {
            trace!("window: {} pages fit in {} blocks", total_pages, total_blocks);
            return page_range(1, total_pages);
        }

        let current_page = current_page.clamp(1, total_pages);
        let start_page = current_page.saturating_sub(page_neighbours).max(2);
        let end_page = current_page.saturating_add(page_neighbours).min(total_pages - 1);

        let pages = page_range(start_page, end_page);
        let has_left_spill = start_page > 2;
        let has_right_spill = total_pages - end_page > 1;
        // pages.len() <= page_neighbours * 2 + 1, so this never underflows
        let spill_offset = total_numbers - (pages.len() + 1);

        let mut tokens = Vec::with_capacity(total_blocks);
        tokens.push(PageToken::page(1));

        match (has_left_spill, has_right_spill) {
            // (1) « {5 6} [7] {8 9} (10)
            (true, false) => {
                tokens.push(PageToken::LeftEllipsis);
                tokens.extend(page_range(start_page.saturating_sub(spill_offset), start_page - 1));
                tokens.extend(pages);
            }
            // (1) {2 3} [4] {5 6} » (10)
            (false, true) => {
                tokens.extend(pages);
                tokens.extend(page_range(end_page + 1, end_page + spill_offset));
                tokens.push(PageToken::RightEllipsis);
            }
            // (1) « {4 5} [6] {7 8} » (10)
            _ => {
                tokens.push(PageToken::LeftEllipsis);
                tokens.extend(pages);
                tokens.push(PageToken::RightEllipsis);
            }
        }

        tokens.push(PageToken::page(total_pages));

        trace!(
            "window: page {} of {} -> {} tokens (left spill: {}, right spill: {})",
            current_page,
            total_pages,
            tokens.len(),
            has_left_spill,
            has_right_spill
        );

        tokens
    }

    /// Compute the window for `current` under `config`.
    pub fn window(config: &PaginationConfig, current: PageNumber) -> PageWindow {
        let tokens = Self::compute(
            config.total_pages(),
            current.value(),
            config.page_neighbours(),
        );
        PageWindow::new(current, tokens)
    }
}

/// Inclusive run of page tokens; empty when `from > to`.
fn page_range(from: usize, to: usize) -> Vec<PageToken> {
    (from..=to).map(PageToken::page).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(tokens: &[PageToken]) -> String {
        tokens
            .iter()
            .map(|token| match token {
                PageToken::Page(n) => n.value().to_string(),
                PageToken::LeftEllipsis => "<".to_string(),
                PageToken::RightEllipsis => ">".to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn test_block_counts() {
        assert_eq!(PageWindowCalculator::total_numbers(0), 3);
        assert_eq!(PageWindowCalculator::total_blocks(0), 5);
        assert_eq!(PageWindowCalculator::total_numbers(1), 5);
        assert_eq!(PageWindowCalculator::total_blocks(1), 7);
    }

    #[test]
    fn test_no_pages() {
        assert!(PageWindowCalculator::compute(0, 1, 1).is_empty());
    }

    #[test]
    fn test_full_range_when_it_fits() {
        assert_eq!(render(&PageWindowCalculator::compute(1, 1, 1)), "1");
        assert_eq!(render(&PageWindowCalculator::compute(6, 3, 1)), "1 2 3 4 5 6");
        assert_eq!(render(&PageWindowCalculator::compute(7, 7, 1)), "1 2 3 4 5 6 7");
    }

    #[test]
    fn test_right_spill_only() {
        assert_eq!(render(&PageWindowCalculator::compute(10, 1, 1)), "1 2 3 4 5 > 10");
        assert_eq!(render(&PageWindowCalculator::compute(10, 3, 1)), "1 2 3 4 5 > 10");
        assert_eq!(render(&PageWindowCalculator::compute(10, 4, 2)), "1 2 3 4 5 6 7 > 10");
    }

    #[test]
    fn test_left_spill_only() {
        assert_eq!(render(&PageWindowCalculator::compute(10, 10, 1)), "1 < 6 7 8 9 10");
        assert_eq!(render(&PageWindowCalculator::compute(10, 8, 1)), "1 < 6 7 8 9 10");
        assert_eq!(render(&PageWindowCalculator::compute(10, 7, 2)), "1 < 4 5 6 7 8 9 10");
    }

    #[test]
    fn test_both_spills() {
        assert_eq!(render(&PageWindowCalculator::compute(10, 6, 2)), "1 < 4 5 6 7 8 > 10");
        assert_eq!(render(&PageWindowCalculator::compute(28, 15, 1)), "1 < 14 15 16 > 28");
    }

    #[test]
    fn test_zero_neighbours() {
        assert_eq!(render(&PageWindowCalculator::compute(10, 1, 0)), "1 2 3 > 10");
        assert_eq!(render(&PageWindowCalculator::compute(10, 5, 0)), "1 < 5 > 10");
        assert_eq!(render(&PageWindowCalculator::compute(10, 10, 0)), "1 < 8 9 10");
    }

    #[test]
    fn test_huge_neighbour_counts_render_everything() {
        assert_eq!(PageWindowCalculator::total_blocks(usize::MAX), usize::MAX);
        assert_eq!(PageWindowCalculator::total_numbers(usize::MAX / 2), usize::MAX);

        let expected: Vec<PageToken> = (1..=100).map(PageToken::page).collect();
        assert_eq!(PageWindowCalculator::compute(100, 1, usize::MAX / 2), expected);
        assert_eq!(PageWindowCalculator::compute(100, 50, usize::MAX), expected);

        let config = PaginationConfig::try_new(100, 1, usize::MAX).unwrap();
        let window = PageWindowCalculator::window(&config, PageNumber::FIRST);
        assert_eq!(window.len(), 100);
        assert!(!window.has_left_spill() && !window.has_right_spill());
    }

    #[test]
    fn test_out_of_range_current_is_clamped() {
        assert_eq!(
            PageWindowCalculator::compute(28, 0, 1),
            PageWindowCalculator::compute(28, 1, 1)
        );
        assert_eq!(
            PageWindowCalculator::compute(28, 500, 1),
            PageWindowCalculator::compute(28, 28, 1)
        );
    }

    #[test]
    fn test_window_wraps_tokens() {
        let config = PaginationConfig::try_new(500, 18, 1).unwrap();
        let window = PageWindowCalculator::window(&config, PageNumber::new(15));
        assert_eq!(window.current(), PageNumber::new(15));
        assert_eq!(window.tokens(), PageWindowCalculator::compute(28, 15, 1).as_slice());
    }
}
