//! Application state and logic for the country browser

use std::io::{BufRead, Write};

use anyhow::Result;
use country_pager::{PaginationController, SlicingListener};

use crate::country::Country;
use crate::input::Input;
use crate::render;

/// Application state
pub struct App {
    /// Pagination session over all loaded countries
    pub pager: PaginationController<SlicingListener<Country>>,
    /// Cards per row
    pub columns: usize,
}

impl App {
    /// Create a new application on page 1
    pub fn new(
        countries: Vec<Country>,
        page_limit: usize,
        page_neighbours: usize,
        columns: usize,
    ) -> Result<Self> {
        let pager = SlicingListener::new(countries).paginate(page_limit, page_neighbours)?;

        Ok(Self { pager, columns })
    }

    /// Number of loaded countries
    pub fn total(&self) -> usize {
        self.pager.listener().records().len()
    }

    /// Countries on the current page
    pub fn visible(&self) -> &[Country] {
        self.pager.listener().visible()
    }

    /// Render the current page
    pub fn render(&self) -> String {
        render::page(
            self.total(),
            self.pager.listener().last_event(),
            &self.pager.current_window(),
            self.visible(),
            self.columns,
        )
    }

    /// Apply one browse command; returns false when the user wants to quit
    pub fn apply(&mut self, input: Input) -> bool {
        match input {
            Input::Navigate(navigation) => {
                if self.pager.navigate(navigation).is_none() {
                    log::debug!("{:?} left page {} unchanged", navigation, self.pager.current_page());
                }
            }
            Input::Last => {
                self.pager.goto(self.pager.total_pages());
            }
            Input::Redraw => {}
            Input::Quit => return false,
        }
        true
    }

    /// Interactive loop: read commands from `input`, draw pages to `output`
    pub fn browse<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        if self.total() == 0 {
            writeln!(output, "No countries to show")?;
            return Ok(());
        }

        write!(output, "{}", self.render())?;
        write!(output, "> ")?;
        output.flush()?;

        for line in input.lines() {
            let line = line?;

            match Input::parse(&line) {
                Ok(command) => {
                    if !self.apply(command) {
                        break;
                    }
                    write!(output, "{}", self.render())?;
                }
                Err(e) => writeln!(output, "{}", e)?,
            }

            write!(output, "> ")?;
            output.flush()?;
        }

        writeln!(output)?;
        Ok(())
    }
}
