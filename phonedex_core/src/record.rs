//! Typed rows of the display table and the projection returned by search.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder rendered for any value that could not be derived.
pub const NOT_AVAILABLE: &str = "N/A";

/// One normalized catalog row, ready for filtering and display.
///
/// Field names serialize to the column names of the source table so that
/// exported rows line up with the catalog file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayRecord {
    #[serde(rename = "Phone_Name")]
    pub phone_name: String,
    #[serde(rename = "Processor")]
    pub processor: String,
    pub image: String,
    #[serde(rename = "Colour")]
    pub colour: String,
    /// Parsed price; imputed with the column median when the source was unparseable.
    #[serde(rename = "Current_Price")]
    pub current_price: f64,
    #[serde(rename = "Current_Price_Formatted")]
    pub current_price_formatted: String,
    /// RAM in gigabytes, `None` when the RAM text held no digits.
    #[serde(rename = "RAM")]
    pub ram_gb: Option<f64>,
    #[serde(rename = "ROM_Formatted")]
    pub rom_formatted: String,
    /// Storage normalized to gigabytes.
    #[serde(rename = "ROM_GB")]
    pub rom_gb: Option<f64>,
}

impl DisplayRecord {
    /// Project this row into the shape returned to callers of search.
    #[must_use]
    pub fn to_result(&self) -> ResultRecord {
        ResultRecord {
            phone: self.phone_name.clone(),
            processor: self.processor.clone(),
            ram: self.ram_gb.map_or(RamCell::NotAvailable, RamCell::from_gb),
            rom: self.rom_formatted.clone(),
            price: self.current_price_formatted.clone(),
            image_url: self.image.clone(),
        }
    }
}

/// RAM column of a search result: whole gigabytes, or `"N/A"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RamCell {
    Gigabytes(i64),
    NotAvailable,
}

impl RamCell {
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "RAM is displayed as whole gigabytes"
    )]
    pub fn from_gb(gb: f64) -> Self {
        Self::Gigabytes(gb.trunc() as i64)
    }
}

impl fmt::Display for RamCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gigabytes(gb) => write!(f, "{gb}"),
            Self::NotAvailable => f.write_str(NOT_AVAILABLE),
        }
    }
}

impl Serialize for RamCell {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Gigabytes(gb) => serializer.serialize_i64(*gb),
            Self::NotAvailable => serializer.serialize_str(NOT_AVAILABLE),
        }
    }
}

/// A search hit as handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultRecord {
    #[serde(rename = "Phone")]
    pub phone: String,
    #[serde(rename = "Processor")]
    pub processor: String,
    #[serde(rename = "RAM")]
    pub ram: RamCell,
    #[serde(rename = "ROM")]
    pub rom: String,
    #[serde(rename = "Price")]
    pub price: String,
    #[serde(rename = "ImageURL")]
    pub image_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(ram_gb: Option<f64>) -> DisplayRecord {
        DisplayRecord {
            phone_name: "Galaxy X (Black, 128GB)".to_string(),
            processor: "Exynos".to_string(),
            image: String::new(),
            colour: "Black".to_string(),
            current_price: 12_999.0,
            current_price_formatted: "₹12999".to_string(),
            ram_gb,
            rom_formatted: "128 GB".to_string(),
            rom_gb: Some(128.0),
        }
    }

    #[test]
    fn projection_truncates_ram() {
        let result = record(Some(6.0)).to_result();
        assert_eq!(result.ram, RamCell::Gigabytes(6));
        assert_eq!(result.price, "₹12999");
        assert_eq!(result.rom, "128 GB");
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn missing_ram_serializes_as_placeholder() {
        let result = record(None).to_result();
        let json = serde_json::to_value(&result).expect("result should serialize");
        assert_eq!(json["RAM"], "N/A");
        assert_eq!(json["Phone"], "Galaxy X (Black, 128GB)");
        assert_eq!(json["ImageURL"], "");
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn present_ram_serializes_as_integer() {
        let json = serde_json::to_value(record(Some(8.0)).to_result())
            .expect("result should serialize");
        assert_eq!(json["RAM"], 8);
    }
}
