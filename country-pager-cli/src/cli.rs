//! Command-line interface definition and dispatch.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use country_pager::PageToken;

use crate::app::App;
use crate::country::load_countries;

/// Browse countries as a paginated grid of cards
#[derive(Parser, Debug)]
#[command(name = "country-pager", version, about)]
pub struct Cli {
    /// Countries per page
    #[arg(long, global = true, default_value_t = 18)]
    pub page_limit: usize,

    /// Page links shown on each side of the current page
    #[arg(long, global = true, default_value_t = 1)]
    pub page_neighbours: usize,

    /// Cards per row
    #[arg(long, global = true, default_value_t = 3)]
    pub columns: usize,

    /// JSON file with the countries to show (defaults to the built-in table)
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print one page of cards
    Show {
        /// Page to print
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Print the page-link tokens for a page
    Window {
        /// Page the window is computed for
        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Print the tokens as JSON
        #[arg(long)]
        json: bool,
    },
    /// Page through the cards interactively
    Browse,
}

/// Run the parsed command
pub fn run(cli: Cli) -> Result<()> {
    let countries = load_countries(cli.data.as_deref())?;
    let mut app = App::new(countries, cli.page_limit, cli.page_neighbours, cli.columns)
        .context("Invalid pagination settings")?;

    match cli.command {
        Command::Show { page } => {
            app.pager.goto(page);
            print!("{}", app.render());
        }
        Command::Window { page, json } => {
            app.pager.goto(page);
            let window = app.pager.current_window();
            if json {
                let tokens: &[PageToken] = window.tokens();
                println!("{}", serde_json::to_string_pretty(tokens)?);
            } else {
                println!("{}", crate::render::nav_bar(&window));
            }
        }
        Command::Browse => {
            let stdin = io::stdin();
            app.browse(stdin.lock(), io::stdout())?;
        }
    }

    Ok(())
}
