//! Multi-criteria filtering over the display table.

use tracing::debug;

use phonedex_core::{DisplayRecord, ResultRecord, SearchQuery};

use crate::Catalog;

/// A missing value never satisfies a minimum.
fn at_least(value: Option<f64>, minimum: Option<f64>) -> bool {
    minimum.is_none_or(|min| value.is_some_and(|v| v >= min))
}

#[expect(
    clippy::cast_precision_loss,
    reason = "Budgets are far below the f64 integer precision limit"
)]
fn matches(record: &DisplayRecord, query: &SearchQuery) -> bool {
    let brand_ok = query
        .brand
        .as_deref()
        .is_none_or(|brand| record.phone_name.to_lowercase().contains(brand));
    let budget_ok = query
        .max_budget
        .is_none_or(|budget| record.current_price <= budget as f64);
    brand_ok
        && budget_ok
        && at_least(record.ram_gb, query.min_ram_gb)
        && at_least(record.rom_gb, query.min_rom_gb)
}

impl Catalog {
    /// Filter the table and project the first `query.limit` matches, in table order.
    #[must_use]
    pub fn search(&self, query: &SearchQuery) -> Vec<ResultRecord> {
        let results: Vec<ResultRecord> = self
            .records()
            .iter()
            .filter(|record| matches(record, query))
            .take(query.limit)
            .map(DisplayRecord::to_result)
            .collect();
        debug!("Search {query:?} matched {} phones", results.len());
        results
    }
}
