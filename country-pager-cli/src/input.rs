//! Parsing of commands typed in browse mode.
//!
//! # Command Notation
//!
//! - `n`, `next`, `»` - jump one window right
//! - `p`, `prev`, `«` - jump one window left
//! - `first` / `last` - jump to a terminal page
//! - `<number>` - go to that page
//! - `q`, `quit` - leave browse mode
//!
//! An empty line redraws the current page.

use anyhow::{bail, Context, Result};
use country_pager::{Navigation, PageNumber};

/// A parsed browse-mode command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Navigate somewhere.
    Navigate(Navigation),
    /// Jump to the last page (its number depends on the session).
    Last,
    /// Print the current page again.
    Redraw,
    /// Leave browse mode.
    Quit,
}

impl Input {
    /// Parse one line of user input.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// assert_eq!(Input::parse("n")?, Input::Navigate(Navigation::MoveRight));
    /// assert_eq!(Input::parse("12")?, Input::Navigate(Navigation::Goto(PageNumber::new(12))));
    /// ```
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim();

        let input = match line.to_ascii_lowercase().as_str() {
            "" => Input::Redraw,
            "n" | "next" | "»" | ">" => Input::Navigate(Navigation::MoveRight),
            "p" | "prev" | "«" | "<" => Input::Navigate(Navigation::MoveLeft),
            "first" => Input::Navigate(Navigation::Goto(PageNumber::FIRST)),
            "last" => Input::Last,
            "q" | "quit" | "exit" => Input::Quit,
            other if other.starts_with(|c: char| c.is_ascii_digit()) => {
                let page: usize = other
                    .parse()
                    .with_context(|| format!("Not a page number: {}", line))?;
                Input::Navigate(Navigation::Goto(PageNumber::new(page)))
            }
            _ => bail!("Unknown command: {} (try n, p, first, last, a page number or q)", line),
        };

        Ok(input)
    }
}
