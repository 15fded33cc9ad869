//! List addressable elements in a roster.
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use view_core::{ViewConfig, ViewTree};

use crate::roster::{self, ActivationLog, RosterEntry};

/// List identifiers a driver can address
#[derive(Parser)]
pub struct List {
    /// Roster JSON file
    #[arg(short, long, value_name = "FILE")]
    roster: PathBuf,
}

impl List {
    pub fn execute(self, config: &ViewConfig) -> Result<()> {
        let entries = roster::load(&self.roster)?;
        let tree = roster::build_tree(&entries, config, &ActivationLog::new())?;

        for line in rows(&entries, &tree) {
            println!("{line}");
        }
        println!("{} element(s)", tree.len());

        Ok(())
    }
}

fn rows(entries: &[RosterEntry], tree: &ViewTree) -> Vec<String> {
    entries
        .iter()
        .zip(tree)
        .map(|(entry, element)| {
            format!(
                "{:<24} {:<9} <{}> {}",
                element.identifier(),
                entry.kind,
                element.root_tag(),
                element.root_attribute("class").unwrap_or_default().replace(' ', ".")
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixture_roster;

    #[test]
    fn one_row_per_element_with_root_shape() {
        let entries = roster::load(&fixture_roster()).unwrap();
        let tree = roster::build_tree(&entries, &ViewConfig::default(), &ActivationLog::new())
            .unwrap();
        let rows = rows(&entries, &tree);

        assert_eq!(rows.len(), entries.len());
        assert!(rows[0].starts_with("wild-pidgey"));
        assert!(rows[0].ends_with("<div> card.creature-card"));
        assert!(rows[3].ends_with("<div> skill-control"));
    }
}
