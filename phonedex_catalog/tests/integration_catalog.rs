//! Integration tests for loading a catalog file and searching it.
//!
//! These tests verify that:
//! - A catalog file on disk is normalized field by field
//! - A missing catalog file behaves as an empty table
//! - Search parameters arriving as strings are applied or ignored

use std::io::Write;

use phonedex_catalog::{Catalog, NormalizeOptions};
use phonedex_core::{RamCell, SearchParams, SearchQuery};

const CATALOG: &str = "\
Phone_Name,Reviews,RAM,ROM,Display_Size,Processor,Battery,Rear_Camera,Front_Camera,Current_Price,Original_Price,image
\"Galaxy X (Black, 128GB)\",1200,6 GB,128 GB,6.5 inches,Exynos 850,5000 mAh,50MP,8MP,\"₹12,999\",\"₹15,999\",https://img.example/galaxy.jpg
\"Feature Phone (Red, 4MB)\",80,NA,512 MB,1.8 inches,Unisoc,1000 mAh,0.3MP,,\"₹1,499\",\"₹1,799\",
\"Mystery Phone\",,8 GB,Expandable GB,,Snapdragon,,,,Out of stock,,
";

#[expect(clippy::expect_used, reason = "Test failure should panic with context")]
fn write_catalog() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file should be created");
    file.write_all(CATALOG.as_bytes())
        .expect("catalog should be written");
    file
}

#[test]
#[expect(clippy::expect_used, reason = "Test failure should panic with context")]
fn test_load_normalizes_every_row() {
    let file = write_catalog();
    let catalog =
        Catalog::load(file.path(), &NormalizeOptions::default()).expect("catalog should load");

    assert_eq!(catalog.len(), 3);

    let galaxy = &catalog.records()[0];
    assert_eq!(galaxy.colour, "Black");
    assert!((galaxy.current_price - 12_999.0).abs() < f64::EPSILON);
    assert_eq!(galaxy.current_price_formatted, "₹12999");
    assert_eq!(galaxy.ram_gb, Some(6.0));
    assert_eq!(galaxy.rom_formatted, "128 GB");
    assert_eq!(galaxy.rom_gb, Some(128.0));
    assert_eq!(galaxy.image, "https://img.example/galaxy.jpg");

    let feature = &catalog.records()[1];
    assert_eq!(feature.colour, "Red");
    assert_eq!(feature.ram_gb, None);
    assert_eq!(feature.rom_formatted, "512 MB");
    assert_eq!(feature.rom_gb, Some(0.5));
    assert_eq!(feature.image, "");

    let mystery = &catalog.records()[2];
    assert_eq!(mystery.colour, "N/A");
    assert_eq!(mystery.rom_formatted, "Expandable GB");
    assert_eq!(mystery.rom_gb, None);
    // Median of 12999 and 1499.
    assert!((mystery.current_price - 7_249.0).abs() < f64::EPSILON);
    assert_eq!(mystery.current_price_formatted, "₹7249");
}

#[test]
#[expect(clippy::expect_used, reason = "Test failure should panic with context")]
fn test_every_price_is_finite_after_load() {
    let file = write_catalog();
    let catalog =
        Catalog::load(file.path(), &NormalizeOptions::default()).expect("catalog should load");
    assert!(
        catalog
            .records()
            .iter()
            .all(|r| r.current_price.is_finite() && r.current_price >= 0.0)
    );
}

#[test]
#[expect(clippy::expect_used, reason = "Test failure should panic with context")]
fn test_missing_catalog_finds_nothing() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let catalog = Catalog::load(
        dir.path().join("smart_phones1.csv"),
        &NormalizeOptions::default(),
    )
    .expect("missing catalog is not an error");

    let params = SearchParams {
        brand: "galaxy".to_string(),
        ..SearchParams::default()
    };
    assert!(catalog.search(&SearchQuery::from_params(&params, 20)).is_empty());
}

#[test]
#[expect(clippy::expect_used, reason = "Test failure should panic with context")]
fn test_search_scenarios_from_string_params() {
    let file = write_catalog();
    let catalog =
        Catalog::load(file.path(), &NormalizeOptions::default()).expect("catalog should load");

    let over_budget = SearchParams {
        brand: "galaxy".to_string(),
        max_budget: "10000".to_string(),
        ..SearchParams::default()
    };
    assert!(catalog.search(&SearchQuery::from_params(&over_budget, 20)).is_empty());

    let bad_budget = SearchParams {
        brand: "galaxy".to_string(),
        max_budget: "lots".to_string(),
        ..SearchParams::default()
    };
    let results = catalog.search(&SearchQuery::from_params(&bad_budget, 20));
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].ram, RamCell::Gigabytes(6));
    assert_eq!(results[0].price, "₹12999");

    let any_ram = SearchParams {
        min_ram: "0".to_string(),
        ..SearchParams::default()
    };
    let phones: Vec<String> = catalog
        .search(&SearchQuery::from_params(&any_ram, 20))
        .into_iter()
        .map(|r| r.phone)
        .collect();
    assert_eq!(phones, ["Galaxy X (Black, 128GB)", "Mystery Phone"]);
}

#[test]
#[expect(clippy::expect_used, reason = "Test failure should panic with context")]
fn test_results_serialize_to_display_shape() {
    let file = write_catalog();
    let catalog =
        Catalog::load(file.path(), &NormalizeOptions::default()).expect("catalog should load");

    let results = catalog.search(&SearchQuery::default().with_brand("feature"));
    let json = serde_json::to_value(&results).expect("results should serialize");
    assert_eq!(
        json,
        serde_json::json!([{
            "Phone": "Feature Phone (Red, 4MB)",
            "Processor": "Unisoc",
            "RAM": "N/A",
            "ROM": "512 MB",
            "Price": "₹1499",
            "ImageURL": ""
        }])
    );
}
