//! Plain-text rendering of the header, the card grid and the page-link bar.

use std::fmt::Write;

use country_pager::{PageChangedEvent, PageToken, PageWindow};

use crate::country::Country;

/// Inner width of a card, in characters.
pub const CARD_WIDTH: usize = 30;

/// Header line: record count, plus the page indicator once a page is active.
pub fn header(total: usize, event: Option<&PageChangedEvent>) -> String {
    match event {
        Some(event) => format!(
            "{} Countries | Page {} / {}",
            total,
            event.current_page.value(),
            event.total_pages
        ),
        None => format!("{} Countries", total),
    }
}

/// Label for one slot of the page-link bar.
pub fn token_label(window: &PageWindow, token: &PageToken) -> String {
    match token {
        PageToken::Page(number) if window.is_active(token) => format!("[{}]", number.value()),
        PageToken::Page(number) => number.value().to_string(),
        PageToken::LeftEllipsis => "«".to_string(),
        PageToken::RightEllipsis => "»".to_string(),
    }
}

/// The page-link bar, slots separated by single spaces.
pub fn nav_bar(window: &PageWindow) -> String {
    window
        .tokens()
        .iter()
        .map(|token| token_label(window, token))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lines of a single card.
fn card_lines(country: &Country) -> [String; 4] {
    let border = format!("+{}+", "-".repeat(CARD_WIDTH));
    let flag = country.flag().unwrap_or_else(|| "  ".to_string());
    let name: String = country.name().chars().take(CARD_WIDTH - 4).collect();

    [
        border.clone(),
        format!("|{:<width$}|", format!(" {} {}", flag, name), width = CARD_WIDTH),
        format!("|{:<width$}|", format!("    {}", country.region_label()), width = CARD_WIDTH),
        border,
    ]
}

/// Cards laid out `columns` per row.
pub fn grid(countries: &[Country], columns: usize) -> String {
    let columns = columns.max(1);
    let mut out = String::new();

    for row in countries.chunks(columns) {
        let cards: Vec<[String; 4]> = row.iter().map(card_lines).collect();
        for line in 0..4 {
            let joined = cards
                .iter()
                .map(|card| card[line].as_str())
                .collect::<Vec<_>>()
                .join(" ");
            // Writing to a String cannot fail
            let _ = writeln!(out, "{}", joined);
        }
    }

    out
}

/// Full page: header, bar, cards. Empty when there is nothing to show.
pub fn page(
    total: usize,
    event: Option<&PageChangedEvent>,
    window: &PageWindow,
    countries: &[Country],
    columns: usize,
) -> String {
    if total == 0 {
        return String::new();
    }

    let mut out = String::new();
    let _ = writeln!(out, "{}", header(total, event));
    if !window.is_empty() {
        let _ = writeln!(out, "{}", nav_bar(window));
    }
    let _ = writeln!(out);
    out.push_str(&grid(countries, columns));
    out
}
