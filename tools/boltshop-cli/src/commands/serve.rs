//! Serve command.

use anyhow::{Context as _, Result};
use boltshop_server::ServerConfig;

use super::ServeArgs;
use crate::context::Context;

/// Run the serve command.
pub async fn run(args: ServeArgs, ctx: &Context) -> Result<()> {
    let config = server_config(args, ctx);

    ctx.output.header("Boltshop server");
    ctx.output.kv("listen", &config.bind_addr());
    ctx.output.kv("db", &config.db_path.display().to_string());
    match &config.assets_dir {
        Some(dir) => ctx.output.kv("assets", &dir.display().to_string()),
        None => ctx.output.warn("No assets directory configured, catalog is empty"),
    }

    boltshop_server::serve(config)
        .await
        .context("Server failed")?;

    ctx.output.success("Server stopped");
    Ok(())
}

/// Layer command line flags over the loaded config.
pub fn server_config(args: ServeArgs, ctx: &Context) -> ServerConfig {
    let mut config = ctx.config.server.clone();

    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(db) = args.db {
        config.db_path = db;
    }
    if let Some(assets) = args.assets {
        config.assets_dir = Some(assets);
    }

    config.db_path = ctx.resolve_path(&config.db_path);
    config.assets_dir = config.assets_dir.map(|dir| ctx.resolve_path(&dir));
    config
}
