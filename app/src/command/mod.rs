//! Static strategy pattern for CLI commands.
//!
//! Each command is a separate strategy type with its own input type, so
//! dispatch from `main` is monomorphized and needs no boxing.

use phonedex_catalog::{Catalog, NormalizeOptions};
use phonedex_config::Config;
use std::path::{Path, PathBuf};
use tracing::{error, info};

mod info;
mod init;
mod search;
mod serve;
mod version;

pub use info::InfoStrategy;
pub use init::InitStrategy;
pub use search::{SearchInput, SearchStrategy};
pub use serve::{ServeInput, ServeStrategy};
pub use version::VersionStrategy;

/// Core trait defining the contract for all command strategies.
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    async fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}

/// Load config from an explicit file, or the user config, or defaults.
fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => {
            info!("Loading config from {}", path.display());
            Config::load_from(path)
        }
        None => Config::load_or_default(),
    }
}

/// Load the catalog named by `config`, optionally overridden by `path`.
///
/// Read failures other than a missing file are logged and degrade to an empty
/// catalog; the application keeps serving.
fn load_catalog(config: &Config, path: Option<PathBuf>) -> Catalog {
    let path = path.unwrap_or_else(|| config.catalog.path.clone());
    let options = NormalizeOptions {
        currency_symbol: config.catalog.currency_symbol.clone(),
    };
    Catalog::load(&path, &options).unwrap_or_else(|e| {
        error!("Failed to load catalog from {}: {e}", path.display());
        Catalog::empty()
    })
}
