mod cli;

use std::process::ExitCode;

use clap::Parser;

use utilisateurs_admin::{AdminConfig, AppContext, init_logger_with_file};
use utilisateurs_client::Gateways;

use cli::{Cli, Output};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // 1. Environment (.env is optional)
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    // 2. Configuration, flags override the environment
    let mut config = AdminConfig::from_env()?;
    if let Some(api_url) = cli.api_url {
        config.api_url = api_url;
    }
    if let Some(log_level) = cli.log_level {
        config.log_level = log_level;
    }

    // 3. Logging
    init_logger_with_file(&config.log_level, config.log_json, config.log_dir.as_deref())?;
    tracing::debug!(api = %config.api_url, "Configuration loaded");

    // 4. Context and gateways
    let ctx = AppContext::from_config(&config);
    let gateways = Gateways::connect(&config.client_config())?;

    let mut notifications = ctx.notifications.subscribe();
    let printer = tokio::spawn(async move {
        while let Some(notification) = notifications.recv().await {
            eprintln!("{}", notification);
        }
    });

    let mut busy = ctx.busy.subscribe();
    tokio::spawn(async move {
        while busy.changed().await.is_ok() {
            tracing::debug!(busy = *busy.borrow_and_update(), "Busy indicator");
        }
    });

    let code = cli::run(cli.command, Output::from_flag(cli.json), ctx.clone(), gateways).await?;

    // closing the context ends the printer once queued messages are out
    drop(ctx);
    printer.await?;
    Ok(code)
}
