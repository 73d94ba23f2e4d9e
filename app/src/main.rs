#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

mod command;

use clap::{Parser, Subcommand};
use command::{
    CommandStrategy, InfoStrategy, InitStrategy, SearchInput, SearchStrategy, ServeInput,
    ServeStrategy, VersionStrategy,
};
use phonedex_core::SearchParams;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "phonedex")]
#[command(about = "Search a phone catalog and keep a wishlist", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the web application
    Serve {
        /// Host to bind
        #[arg(long)]
        host: Option<String>,

        /// Port to bind
        #[arg(short = 'p', long)]
        port: Option<u16>,

        /// Catalog CSV file
        #[arg(short = 'c', long)]
        catalog: Option<PathBuf>,

        /// Config file to use instead of ~/phonedex/config.json
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Search the catalog once and print the results
    Search {
        /// Case-insensitive substring of the phone name
        #[arg(short = 'b', long, default_value = "")]
        brand: String,

        /// Highest acceptable price
        #[arg(long, default_value = "")]
        max_budget: String,

        /// Minimum RAM in GB
        #[arg(long, default_value = "")]
        min_ram: String,

        /// Minimum storage in GB
        #[arg(long, default_value = "")]
        min_rom: String,

        /// Maximum number of results
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,

        /// Catalog CSV file
        #[arg(short = 'c', long)]
        catalog: Option<PathBuf>,

        /// Config file to use instead of ~/phonedex/config.json
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Initialize configuration
    Init,
    /// Show effective configuration and catalog statistics
    Info {
        /// Config file to use instead of ~/phonedex/config.json
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Show version
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            host,
            port,
            catalog,
            config,
        } => {
            ServeStrategy
                .execute(ServeInput {
                    host,
                    port,
                    catalog,
                    config,
                })
                .await
        }
        Commands::Search {
            brand,
            max_budget,
            min_ram,
            min_rom,
            limit,
            json,
            catalog,
            config,
        } => {
            SearchStrategy
                .execute(SearchInput {
                    params: SearchParams {
                        brand,
                        max_budget,
                        min_ram,
                        min_rom,
                    },
                    limit,
                    json,
                    catalog,
                    config,
                })
                .await
        }
        Commands::Init => InitStrategy.execute(()).await,
        Commands::Info { config } => InfoStrategy.execute(config).await,
        Commands::Version => VersionStrategy.execute(()).await,
    }
}
