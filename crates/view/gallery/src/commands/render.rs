//! Render a roster to HTML.
use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use view_core::ViewConfig;

use crate::roster::{self, ActivationLog};

/// Render every roster entry through the clickable wrapper
#[derive(Parser)]
pub struct Render {
    /// Roster JSON file
    #[arg(short, long, value_name = "FILE")]
    roster: PathBuf,

    /// Write HTML here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    out: Option<PathBuf>,

    /// Wrap the fragments in a minimal HTML document
    #[arg(long)]
    page: bool,
}

impl Render {
    pub async fn execute(self, config: &ViewConfig) -> Result<()> {
        let entries = roster::load(&self.roster)?;
        let tree = roster::build_tree(&entries, config, &ActivationLog::new())?;

        let body = tree.to_html().await;
        let html = if self.page {
            format!(
                "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\" /></head>\n<body>\n{body}\n</body>\n</html>\n"
            )
        } else {
            format!("{body}\n")
        };

        match self.out {
            Some(path) => {
                fs::write(&path, html)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                tracing::info!(elements = tree.len(), path = %path.display(), "rendered roster");
            }
            None => print!("{html}"),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixture_roster;

    #[tokio::test]
    async fn writes_page_to_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("roster.html");
        let render = Render {
            roster: fixture_roster(),
            out: Some(out.clone()),
            page: true,
        };

        render.execute(&ViewConfig::default()).await.unwrap();

        let html = fs::read_to_string(&out).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"data-testid="wild-pidgey""#));
        assert!(html.contains(r#"data-testid="skill-tackle""#));
        assert!(html.contains(r#"data-fraction="0.25""#));
    }

    #[tokio::test]
    async fn missing_roster_is_reported() {
        let render = Render {
            roster: PathBuf::from("/definitely/not/here.json"),
            out: None,
            page: false,
        };
        let error = render.execute(&ViewConfig::default()).await.unwrap_err();
        assert!(error.to_string().contains("failed to read roster"));
    }
}
