//! Configuration management commands.

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::{Context, CONFIG_NAMES};

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    let server = &ctx.config.server;
    ctx.output.header("Current Configuration");
    ctx.output.info("[server]");
    ctx.output.kv("host", &server.host);
    ctx.output.kv("port", &server.port.to_string());
    ctx.output.kv("db_path", &server.db_path.display().to_string());
    match &server.assets_dir {
        Some(dir) => ctx.output.kv("assets_dir", &dir.display().to_string()),
        None => ctx.output.kv("assets_dir", "(none)"),
    }
    ctx.output.kv("asset_url_prefix", &server.asset_url_prefix);
    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let path = ctx.cwd.join(CONFIG_NAMES[0]);
    if path.exists() && !force {
        bail!(
            "{} already exists. Use --force to overwrite.",
            path.display()
        );
    }

    std::fs::write(&path, generate_default_config())?;
    ctx.output.success(&format!("Created {}", path.display()));
    Ok(())
}
