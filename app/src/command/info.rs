use phonedex_catalog::Catalog;
use phonedex_config::Config;
use std::path::PathBuf;

/// Strategy for displaying the effective configuration and catalog statistics.
///
/// This strategy outputs:
/// - Config file location and whether it exists
/// - Server bind address
/// - Catalog path, currency and result limit
/// - Row counts and how many rows lack RAM or storage figures
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    type Input = Option<PathBuf>;

    async fn execute(&self, config_path: Self::Input) -> anyhow::Result<()> {
        let config = super::load_config(config_path.as_deref())?;

        println!("=== phonedex Configuration ===\n");

        println!("Config:");
        match config_path {
            Some(path) => println!("  File: {}", path.display()),
            None => {
                let path = Config::config_path()?;
                let status = if path.exists() { "" } else { " (not found, using defaults)" };
                println!("  File: {}{status}", path.display());
            }
        }
        println!();

        println!("Server:");
        println!("  Address: {}", config.server.bind_address());
        println!();

        println!("Catalog:");
        println!("  Path: {}", config.catalog.path.display());
        println!("  Currency: {}", config.catalog.currency_symbol);
        println!("  Result Limit: {}", config.catalog.result_limit);

        let catalog = super::load_catalog(&config, None);
        print_stats(&catalog);

        Ok(())
    }
}

fn print_stats(catalog: &Catalog) {
    let records = catalog.records();
    let missing_ram = records.iter().filter(|r| r.ram_gb.is_none()).count();
    let missing_rom = records.iter().filter(|r| r.rom_gb.is_none()).count();

    println!("  Phones: {}", records.len());
    if records.is_empty() {
        return;
    }
    println!("  Without RAM figure: {missing_ram}");
    println!("  Without storage figure: {missing_rom}");

    let (min, max) = records
        .iter()
        .map(|r| r.current_price)
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
            (lo.min(p), hi.max(p))
        });
    println!("  Price range: {min} - {max}");
}
