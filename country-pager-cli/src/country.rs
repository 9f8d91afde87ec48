//! Country records and where they come from.
//!
//! Records use the same JSON shape as the countries data set the grid was
//! first built against:
//!
//! ```json
//! { "cca2": "NO", "region": "Europe", "name": { "common": "Norway" } }
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Country table shipped with the binary.
const BUILTIN_COUNTRIES: &str = include_str!("../data/countries.json");

/// Country names.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CountryName {
    /// Everyday English name
    pub common: String,
}

/// One country card's worth of data.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Country {
    /// ISO 3166-1 alpha-2 code
    #[serde(default)]
    pub cca2: String,
    /// Continent-level region, may be missing
    #[serde(default)]
    pub region: Option<String>,
    /// Names the country goes by
    pub name: CountryName,
}

impl Country {
    /// Common name of the country.
    pub fn name(&self) -> &str {
        &self.name.common
    }

    /// Region upper-cased for the card, empty if unknown.
    pub fn region_label(&self) -> String {
        self.region.as_deref().unwrap_or_default().to_uppercase()
    }

    /// Flag emoji built from the two regional indicator symbols of `cca2`.
    ///
    /// Returns None when the code is not two ASCII letters.
    pub fn flag(&self) -> Option<String> {
        let code = self.cca2.as_bytes();
        if code.len() != 2 || !code.iter().all(u8::is_ascii_alphabetic) {
            return None;
        }

        code.iter()
            .map(|b| char::from_u32(0x1F1E6 + u32::from(b.to_ascii_uppercase() - b'A')))
            .collect()
    }
}

/// Parse a JSON array of countries.
pub fn parse_countries(json: &str) -> Result<Vec<Country>> {
    serde_json::from_str(json).context("Failed to parse country list")
}

/// The built-in country table.
pub fn builtin_countries() -> Result<Vec<Country>> {
    parse_countries(BUILTIN_COUNTRIES)
}

/// Load countries from `path`, or the built-in table when no path is given.
pub fn load_countries(path: Option<&Path>) -> Result<Vec<Country>> {
    let countries = match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            parse_countries(&json).with_context(|| format!("Invalid data in {}", path.display()))?
        }
        None => builtin_countries()?,
    };

    log::info!("Loaded {} countries", countries.len());
    Ok(countries)
}
