use crate::command::CommandStrategy;
use phonedex_core::{ResultRecord, SearchParams, SearchQuery};
use std::path::PathBuf;

/// Input for a one-shot catalog search.
pub struct SearchInput {
    pub params: SearchParams,
    /// Maximum number of rows (overrides config)
    pub limit: Option<usize>,
    /// Print JSON instead of a table
    pub json: bool,
    pub catalog: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

/// Strategy for searching the catalog from the command line.
#[derive(Debug, Clone, Copy)]
pub struct SearchStrategy;

impl CommandStrategy for SearchStrategy {
    type Input = SearchInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = super::load_config(input.config.as_deref())?;
        let catalog = super::load_catalog(&config, input.catalog);

        let limit = input.limit.unwrap_or(config.catalog.result_limit);
        let query = SearchQuery::from_params(&input.params.normalized(), limit);
        let results = catalog.search(&query);

        if input.json {
            println!("{}", serde_json::to_string_pretty(&results)?);
        } else {
            print_table(&results);
        }
        Ok(())
    }
}

fn print_table(results: &[ResultRecord]) {
    if results.is_empty() {
        println!("No phones matched.");
        return;
    }
    println!(
        "{:<48} {:<24} {:>5} {:>8} {:>10}",
        "Phone", "Processor", "RAM", "ROM", "Price"
    );
    for r in results {
        println!(
            "{:<48} {:<24} {:>5} {:>8} {:>10}",
            truncate(&r.phone, 48),
            truncate(&r.processor, 24),
            r.ram.to_string(),
            r.rom,
            r.price
        );
    }
    println!("\n{} phones", results.len());
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{head}...")
    }
}
