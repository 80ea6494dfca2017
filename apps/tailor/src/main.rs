mod analysis;
mod cli;
mod commands;
mod config;
mod errors;
mod generation;
mod llm_client;
mod models;
mod render;
mod routes;
mod state;
mod store;
mod text;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    if let Some(home) = cli.home.clone() {
        config.home = home;
    }

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!(
        "tailor v{} (workspace: {})",
        env!("CARGO_PKG_VERSION"),
        config.home.display()
    );

    let state = AppState::from_config(config)?;

    match cli.command {
        Commands::Build {
            style,
            company,
            jd_file,
        } => {
            commands::build::run(&state, &style, &company, jd_file.as_deref()).await?;
        }
        Commands::Preview { jd_file, json } => {
            commands::preview::run(&state.workspace, jd_file.as_deref(), json)?;
        }
        Commands::Ask {
            company,
            jd_file,
            build,
        } => {
            let stdin = std::io::stdin();
            commands::ask::run(
                &state.workspace,
                &company,
                jd_file.as_deref(),
                stdin.lock(),
                std::io::stdout(),
            )?;
            if let Some(style) = build {
                commands::build::run(&state, &style, &company, jd_file.as_deref()).await?;
            }
        }
        Commands::Curate => {
            commands::curate::run(&state.workspace)?;
        }
        Commands::LintProfile => {
            commands::lint_profile::run(&state.workspace)?;
        }
        Commands::Serve { port } => {
            let port = port.unwrap_or(state.config.port);
            commands::serve::run(state, port).await?;
        }
    }

    Ok(())
}
