//! Server settings.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Port used when neither the config file nor `PORT` sets one.
pub const DEFAULT_PORT: u16 = 3001;

/// Settings for [`serve`](crate::serve).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// TCP port.
    pub port: u16,
    /// Path of the JSON store.
    pub db_path: PathBuf,
    /// Directory of product images. No catalog and no static files when unset.
    pub assets_dir: Option<PathBuf>,
    /// URL path the asset directory is served under.
    pub asset_url_prefix: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            db_path: PathBuf::from("db.json"),
            assets_dir: None,
            asset_url_prefix: "/assets".to_string(),
        }
    }
}

impl ServerConfig {
    /// `host:port` to bind.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Asset prefix with a leading slash and no trailing slash.
    pub fn asset_route(&self) -> String {
        format!("/{}", self.asset_url_prefix.trim_matches('/'))
    }
}
