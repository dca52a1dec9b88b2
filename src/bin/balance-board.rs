//! Balance Board CLI
//!
//! Renders one page of the board to the terminal and keeps it fresh until
//! interrupted.

use std::path::PathBuf;
use std::sync::Arc;

use balance_board::logging::init_logging;
use balance_board::prelude::*;
use balance_board::poll;
use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "balance-board", version, about = "Live balance dashboard in the terminal")]
struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// API base URL (overrides the config file)
    #[arg(long)]
    base_url: Option<String>,

    /// Refresh interval in milliseconds (overrides the config file)
    #[arg(long)]
    interval_ms: Option<u64>,

    /// Page to render
    #[arg(short, long, value_enum, default_value_t = PageArg::Dashboard)]
    page: PageArg,

    /// Render once and exit instead of polling
    #[arg(long)]
    once: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PageArg {
    Dashboard,
    Leaderboard,
    Balance,
}

impl From<PageArg> for Page {
    fn from(arg: PageArg) -> Self {
        match arg {
            PageArg::Dashboard => Page::Dashboard,
            PageArg::Leaderboard => Page::Leaderboard,
            PageArg::Balance => Page::Balance,
        }
    }
}

fn load_config(cli: &Cli) -> Result<DashboardConfig, BoardError> {
    let mut config = match &cli.config {
        Some(path) => DashboardConfig::load(path)?,
        None => DashboardConfig::from_env()?,
    };
    if let Some(url) = &cli.base_url {
        config.base_url = url.clone();
    }
    if let Some(ms) = cli.interval_ms {
        if ms == 0 {
            return Err(BoardError::Config("--interval-ms must be positive".into()));
        }
        config.update_interval_ms = ms;
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    init_logging(&config.logging);

    tracing::info!("Balance Board v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(base_url = %config.base_url, "Using board API");

    let client = Arc::new(BoardClient::from_config(&config)?);
    let view = shared(TerminalView::new(std::io::stdout()));
    let page: Page = cli.page.into();
    let controller = page.controller(client, view, Arc::new(NoopNavigationBar), &config);

    if cli.once {
        controller.init().await;
        controller.tick().await;
        return Ok(());
    }

    let mut handle = poll::start(controller, config.update_interval()).await?;

    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutting down...");
    handle.stop().await;

    Ok(())
}
