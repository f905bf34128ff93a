//! CLI configuration.

use anyhow::{Context, Result};
use boltshop_server::ServerConfig;
use serde::{Deserialize, Serialize};

/// Environment variable that overrides the configured port.
pub const PORT_ENV: &str = "PORT";

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let content = if path.ends_with(".json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))
    }

    /// Apply a `PORT` value. Unparseable values are rejected.
    pub fn apply_port_env(&mut self, value: Option<&str>) -> Result<()> {
        if let Some(raw) = value {
            self.server.port = raw
                .trim()
                .parse()
                .with_context(|| format!("Invalid {} value: {:?}", PORT_ENV, raw))?;
        }
        Ok(())
    }
}

/// Generate a default boltshop.toml config file.
pub fn generate_default_config() -> String {
    r#"# Boltshop configuration

[server]
host = "0.0.0.0"
port = 3001
db_path = "db.json"
# assets_dir = "public/assets"
asset_url_prefix = "/assets"
"#
    .to_string()
}
