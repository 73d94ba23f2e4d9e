//! Field-level parsing rules that turn raw catalog text into typed columns.
//!
//! Every rule degrades to a placeholder for its own field only; no input can
//! fail the whole load.

use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

use phonedex_core::{DisplayRecord, NOT_AVAILABLE};

use crate::raw::RawRecord;

/// Currency glyph used when none is configured.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";

const MB_PER_GB: f64 = 1024.0;

static COLOUR_PATTERN: OnceLock<Regex> = OnceLock::new();
static DIGITS_PATTERN: OnceLock<Regex> = OnceLock::new();
static STORAGE_PATTERN: OnceLock<Regex> = OnceLock::new();

#[expect(
    clippy::expect_used,
    reason = "Static regex pattern validated at compile time"
)]
fn colour_pattern() -> &'static Regex {
    COLOUR_PATTERN.get_or_init(|| {
        Regex::new(r"\(([^,]+),").expect("Static regex pattern is guaranteed to be valid")
    })
}

#[expect(
    clippy::expect_used,
    reason = "Static regex pattern validated at compile time"
)]
fn digits_pattern() -> &'static Regex {
    DIGITS_PATTERN.get_or_init(|| {
        // ASCII only, so every match parses as a number.
        Regex::new(r"[0-9]+").expect("Static regex pattern is guaranteed to be valid")
    })
}

#[expect(
    clippy::expect_used,
    reason = "Static regex pattern validated at compile time"
)]
fn storage_pattern() -> &'static Regex {
    STORAGE_PATTERN.get_or_init(|| {
        // ASCII digits only, units are case-sensitive.
        Regex::new(r"([0-9]+\.?[0-9]*)\s*(GB|MB)")
            .expect("Static regex pattern is guaranteed to be valid")
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizeOptions {
    /// Glyph stripped from prices before parsing and prefixed when formatting.
    pub currency_symbol: String,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
        }
    }
}

/// Colour named in the phone title, e.g. `"Galaxy X (Black, 128GB)"` -> `"Black"`.
#[must_use]
pub fn extract_colour(phone_name: Option<&str>) -> String {
    phone_name
        .and_then(|name| colour_pattern().captures(name))
        .and_then(|caps| caps.get(1))
        .map_or_else(|| NOT_AVAILABLE.to_string(), |m| m.as_str().to_string())
}

/// Parse a price such as `"₹12,999"`. Non-finite values count as unparseable.
#[must_use]
pub fn parse_price(raw: Option<&str>, currency_symbol: &str) -> Option<f64> {
    let raw = raw?;
    let stripped = if currency_symbol.is_empty() {
        raw.replace(',', "")
    } else {
        raw.replace(currency_symbol, "").replace(',', "")
    };
    stripped
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite())
}

/// Median of the parsed prices, or 0 when nothing parsed.
#[must_use]
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Render a price as `<currency><integer>`, or `"N/A"` when negative, not
/// finite, or too large for a whole-unit integer.
#[must_use]
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    reason = "Prices are displayed as whole currency units"
)]
pub fn format_price(price: f64, currency_symbol: &str) -> String {
    if price.is_finite() && (0.0..i64::MAX as f64).contains(&price) {
        format!("{currency_symbol}{}", price.trunc() as i64)
    } else {
        NOT_AVAILABLE.to_string()
    }
}

/// RAM in gigabytes: the first run of digits in the text.
#[must_use]
pub fn parse_ram_gb(raw: Option<&str>) -> Option<f64> {
    let found = digits_pattern().find(raw?)?;
    found.as_str().parse::<f64>().ok()
}

/// Storage parsed from text like `"128 GB"` or `"512 MB"`.
#[derive(Debug, Clone, PartialEq)]
pub struct Storage {
    /// Display form, e.g. `"128 GB"`.
    pub formatted: String,
    /// Capacity in gigabytes, `None` when no number and unit were found.
    pub gigabytes: Option<f64>,
}

/// Parse a ROM cell. A numeric match always wins over the raw-text fallback.
#[must_use]
#[expect(
    clippy::cast_possible_truncation,
    reason = "Storage is displayed as whole units"
)]
pub fn parse_storage(raw: Option<&str>) -> Storage {
    let Some(raw) = raw else {
        return Storage {
            formatted: NOT_AVAILABLE.to_string(),
            gigabytes: None,
        };
    };

    let parsed = storage_pattern().captures(raw).and_then(|caps| {
        let amount = caps.get(1)?.as_str().parse::<f64>().ok()?;
        let unit = caps.get(2)?.as_str();
        Some((amount, unit))
    });

    if let Some((amount, unit)) = parsed {
        let gigabytes = if unit == "MB" {
            amount / MB_PER_GB
        } else {
            amount
        };
        return Storage {
            formatted: format!("{} {unit}", amount.trunc() as i64),
            gigabytes: Some(gigabytes),
        };
    }

    let formatted = if raw.contains("GB") || raw.contains("MB") {
        raw.trim().to_string()
    } else {
        NOT_AVAILABLE.to_string()
    };
    Storage {
        formatted,
        gigabytes: None,
    }
}

/// Normalize raw rows into display rows, one per input row, in order.
///
/// Prices that fail to parse are imputed with the median of the column.
#[must_use]
pub fn normalize_records(raw: &[RawRecord], options: &NormalizeOptions) -> Vec<DisplayRecord> {
    let currency = options.currency_symbol.as_str();
    let prices: Vec<Option<f64>> = raw
        .iter()
        .map(|r| parse_price(r.current_price.as_deref(), currency))
        .collect();

    let parsed: Vec<f64> = prices.iter().flatten().copied().collect();
    let fill = median(&parsed);
    let imputed = prices.len() - parsed.len();
    if imputed > 0 {
        debug!("Imputed {imputed} missing prices with median {fill}");
    }

    raw.iter()
        .zip(prices)
        .map(|(record, price)| {
            let current_price = price.unwrap_or(fill);
            let storage = parse_storage(record.rom.as_deref());
            DisplayRecord {
                phone_name: record.phone_name.clone().unwrap_or_default(),
                processor: record.processor.clone().unwrap_or_default(),
                image: record.image.clone().unwrap_or_default(),
                colour: extract_colour(record.phone_name.as_deref()),
                current_price,
                current_price_formatted: format_price(current_price, currency),
                ram_gb: parse_ram_gb(record.ram.as_deref()),
                rom_formatted: storage.formatted,
                rom_gb: storage.gigabytes,
            }
        })
        .collect()
}
