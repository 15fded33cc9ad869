//! Gallery driver for battler view components.
//!
//! Loads roster files, renders them through the clickable wrapper, and
//! addresses the rendered elements by identifier the way an automated test
//! harness would.
//!
//! ```bash
//! cargo run -p view-gallery -- render --roster crates/view/gallery/fixtures/roster.json --page
//! cargo run -p view-gallery -- click --roster crates/view/gallery/fixtures/roster.json skill-thunderbolt
//! ```

mod commands;
mod logging;
mod roster;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use commands::{Click, List, Render, Watch};
use view_core::ViewConfig;

/// Render and drive battler view components
#[derive(Parser)]
#[command(name = "view-gallery")]
#[command(about = "Render and drive battler view components", long_about = None)]
#[command(version)]
struct Cli {
    /// Also write logs to <DIR>/gallery.log
    #[arg(long, global = true, env = "VIEW_LOG_DIR", value_name = "DIR")]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Render a roster to HTML
    Render(Render),

    /// List addressable identifiers
    List(List),

    /// Dispatch an event to an element by identifier
    Click(Click),

    /// Re-render a roster on an interval (debug overlay)
    Watch(Watch),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let _guard = logging::setup_logging(cli.log_dir.as_deref())?;

    let config = ViewConfig::from_env();
    tracing::debug!(?config, "loaded view configuration");

    match cli.command {
        Command::Render(cmd) => cmd.execute(&config).await,
        Command::List(cmd) => cmd.execute(&config),
        Command::Click(cmd) => cmd.execute(&config).await.map(|_| ()),
        Command::Watch(cmd) => cmd.execute(&config).await,
    }
}
