//! VoltUp - Main entry point

use anyhow::Context;
use clap::Parser;
use std::io::Write;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use voltup_app::cli::{execute, Cli};
use voltup_app::config::AppConfig;
use voltup_app::AppState;
use voltup_engine::Scope;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so pages on stdout stay clean
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "voltup=info,voltup_app=info,voltup_networking=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = AppConfig::resolve(cli.data_dir.clone(), cli.environment.as_deref())
        .context("Invalid configuration")?;
    let state = AppState::open(&config)
        .await
        .with_context(|| format!("Failed to open {}", config.database_path().display()))?;

    let scope = Arc::new(Scope::new(cli.command.name()));
    {
        let scope = scope.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                scope.close();
            }
        });
    }

    let mut drew_wheel = false;
    let mut on_frame = |line: &str| {
        drew_wheel = true;
        eprint!("\r{:<60}", line);
        let _ = std::io::stderr().flush();
    };
    let page = execute(&state, &scope, cli.command, &mut on_frame).await;
    if drew_wheel {
        eprintln!();
    }

    println!("{}", page);
    Ok(())
}
