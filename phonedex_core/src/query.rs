//! Search parameters as received from a request, and the typed query built from them.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::debug;

/// Number of rows returned by a search unless configured otherwise.
pub const DEFAULT_RESULT_LIMIT: usize = 20;

/// Parse an optional filter value.
///
/// Blank input means "no constraint". Input that fails to parse is treated the
/// same way rather than rejected, so a malformed filter widens the search on
/// that dimension instead of failing the request.
#[must_use]
pub fn parse_optional<T: FromStr>(raw: &str) -> Option<T> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            debug!("Ignoring unparseable filter value: {trimmed:?}");
            None
        }
    }
}

/// Raw filter strings, as submitted by the search form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    pub brand: String,
    pub max_budget: String,
    pub min_ram: String,
    pub min_rom: String,
}

impl SearchParams {
    /// Build from decoded query pairs. The first value of a repeated key wins;
    /// unknown keys are ignored.
    #[must_use]
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut brand = None;
        let mut max_budget = None;
        let mut min_ram = None;
        let mut min_rom = None;
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "brand" => &mut brand,
                "max_budget" => &mut max_budget,
                "min_ram" => &mut min_ram,
                "min_rom" => &mut min_rom,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        Self {
            brand: brand.unwrap_or_default(),
            max_budget: max_budget.unwrap_or_default(),
            min_ram: min_ram.unwrap_or_default(),
            min_rom: min_rom.unwrap_or_default(),
        }
    }

    /// Trim every value and lower-case the brand, the form echoed back to the user.
    #[must_use]
    pub fn normalized(&self) -> Self {
        Self {
            brand: self.brand.trim().to_lowercase(),
            max_budget: self.max_budget.trim().to_string(),
            min_ram: self.min_ram.trim().to_string(),
            min_rom: self.min_rom.trim().to_string(),
        }
    }

    /// True when no filter was supplied at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        [&self.brand, &self.max_budget, &self.min_ram, &self.min_rom]
            .iter()
            .all(|v| v.trim().is_empty())
    }
}

/// A typed, validated search over the display table.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    /// Lower-cased substring matched against the phone name.
    pub brand: Option<String>,
    pub max_budget: Option<i64>,
    pub min_ram_gb: Option<f64>,
    pub min_rom_gb: Option<f64>,
    pub limit: usize,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            brand: None,
            max_budget: None,
            min_ram_gb: None,
            min_rom_gb: None,
            limit: DEFAULT_RESULT_LIMIT,
        }
    }
}

impl SearchQuery {
    #[must_use]
    pub fn from_params(params: &SearchParams, limit: usize) -> Self {
        let brand = params.brand.trim();
        Self {
            brand: (!brand.is_empty()).then(|| brand.to_lowercase()),
            max_budget: parse_optional(&params.max_budget),
            min_ram_gb: parse_optional(&params.min_ram),
            min_rom_gb: parse_optional(&params.min_rom),
            limit,
        }
    }

    #[must_use]
    pub fn with_brand(mut self, brand: &str) -> Self {
        self.brand = Some(brand.to_lowercase());
        self
    }

    #[must_use]
    pub const fn with_max_budget(mut self, max_budget: i64) -> Self {
        self.max_budget = Some(max_budget);
        self
    }

    #[must_use]
    pub const fn with_min_ram_gb(mut self, gb: f64) -> Self {
        self.min_ram_gb = Some(gb);
        self
    }

    #[must_use]
    pub const fn with_min_rom_gb(mut self, gb: f64) -> Self {
        self.min_rom_gb = Some(gb);
        self
    }

    #[must_use]
    pub const fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}
