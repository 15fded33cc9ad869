//! Debug overlay: re-render a roster on a fixed interval.
use std::{path::PathBuf, time::Duration};

use anyhow::Result;
use clap::Parser;
use tokio::time;
use view_core::ViewConfig;

use crate::roster::{self, ActivationLog};

/// Re-render the roster periodically and print frames that changed
#[derive(Parser)]
pub struct Watch {
    /// Roster JSON file
    #[arg(short, long, value_name = "FILE")]
    roster: PathBuf,

    /// Stop after this many refreshes (runs until Ctrl-C otherwise)
    #[arg(short, long)]
    ticks: Option<u64>,

    /// Refresh interval in milliseconds (defaults to VIEW_DEBUG_REFRESH_MS)
    #[arg(short, long)]
    interval_ms: Option<u64>,
}

impl Watch {
    pub async fn execute(self, config: &ViewConfig) -> Result<()> {
        let period =
            Duration::from_millis(self.interval_ms.unwrap_or(config.debug_refresh_ms).max(1));
        let mut interval = time::interval(period);
        interval.set_missed_tick_behavior(time::MissedTickBehavior::Skip);
        let mut last_frame: Option<String> = None;
        let mut frame = 0u64;

        tracing::info!(?period, roster = %self.roster.display(), "watching roster");

        let ctrl_c = tokio::signal::ctrl_c();
        tokio::pin!(ctrl_c);

        loop {
            tokio::select! {
                _ = interval.tick() => {}
                _ = &mut ctrl_c => {
                    tracing::info!("watch interrupted");
                    break;
                }
            }

            frame += 1;
            match self.refresh(config).await {
                Ok(html) if last_frame.as_deref() != Some(html.as_str()) => {
                    println!("--- frame {frame} ---\n{html}");
                    last_frame = Some(html);
                }
                Ok(_) => tracing::debug!(frame, "frame unchanged"),
                // Keep polling so a half-written roster does not end the overlay.
                Err(error) => tracing::warn!(frame, "refresh failed: {error:#}"),
            }

            if self.ticks.is_some_and(|ticks| frame >= ticks) {
                break;
            }
        }

        Ok(())
    }

    async fn refresh(&self, config: &ViewConfig) -> Result<String> {
        let entries = roster::load(&self.roster)?;
        let tree = roster::build_tree(&entries, config, &ActivationLog::new())?;
        Ok(tree.to_html().await)
    }
}
