use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

use phonedex_core::DEFAULT_RESULT_LIMIT;

#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    #[serde(default = "ServerConfig::default_host")]
    pub host: String,
    #[serde(default = "ServerConfig::default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
        }
    }
}

impl ServerConfig {
    fn default_host() -> String {
        "0.0.0.0".to_string()
    }

    const fn default_port() -> u16 {
        5000
    }

    /// `host:port` string suitable for binding a listener.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// CSV file, relative to the working directory unless absolute.
    #[serde(default = "CatalogConfig::default_path")]
    pub path: PathBuf,
    #[serde(default = "CatalogConfig::default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default = "CatalogConfig::default_result_limit")]
    pub result_limit: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: Self::default_path(),
            currency_symbol: Self::default_currency_symbol(),
            result_limit: Self::default_result_limit(),
        }
    }
}

impl CatalogConfig {
    fn default_path() -> PathBuf {
        PathBuf::from("smart_phones1.csv")
    }

    fn default_currency_symbol() -> String {
        "₹".to_string()
    }

    const fn default_result_limit() -> usize {
        DEFAULT_RESULT_LIMIT
    }
}

impl Config {
    pub fn config_dir() -> anyhow::Result<PathBuf> {
        Ok(dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("phonedex"))
    }

    pub fn config_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Load the user config, falling back to defaults when there is none.
    pub fn load_or_default() -> anyhow::Result<Self> {
        let config_path = Self::config_path()?;
        if config_path.exists() {
            return Self::load_from(&config_path);
        }
        warn!(
            "No config file at {}, using defaults",
            config_path.display()
        );
        Ok(Self::default())
    }

    pub fn create_config() -> anyhow::Result<()> {
        let config_dir = Self::config_dir()?;
        std::fs::create_dir_all(&config_dir)?;
        let config_path = config_dir.join("config.json");

        if config_path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                config_path.display()
            );
        }

        Self::default().write_to(&config_path)?;

        println!("✅ Created config file at: {}", config_path.display());
        println!();
        println!("📝 Next steps:");
        println!("   1. Point catalog.path at your phone catalog CSV");
        println!("   2. Run 'phonedex serve' and open http://localhost:5000/");
        println!();
        println!("🔧 Configuration options:");
        println!("   - server.host / server.port: address the web server binds to");
        println!("   - catalog.currency_symbol: glyph stripped from and added to prices");
        println!("   - catalog.result_limit: maximum number of search results shown");
        println!();
        Ok(())
    }

    pub fn write_to(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
