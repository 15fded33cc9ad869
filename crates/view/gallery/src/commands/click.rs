//! Dispatch a pointer event to one element by identifier.
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use view_core::{Activation, PointerEvent, ViewConfig};

use crate::roster::{self, ActivationLog};

/// Address an element by identifier and dispatch an event to it
#[derive(Parser)]
pub struct Click {
    /// Roster JSON file
    #[arg(short, long, value_name = "FILE")]
    roster: PathBuf,

    /// Identifier of the element to activate
    #[arg(value_name = "IDENTIFIER")]
    identifier: String,

    /// Event to dispatch (click, enter, leave, focus, blur)
    #[arg(short, long, default_value = "click")]
    event: PointerEvent,

    /// Print the element's HTML after the event
    #[arg(long)]
    show: bool,
}

impl Click {
    pub async fn execute(self, config: &ViewConfig) -> Result<Activation> {
        let entries = roster::load(&self.roster)?;
        let activations = ActivationLog::new();
        let mut tree = roster::build_tree(&entries, config, &activations)?;

        let outcome = tree
            .dispatch(&self.identifier, self.event)
            .with_context(|| format!("failed to dispatch {} event", self.event))?;

        match outcome {
            Activation::Invoked => println!(
                "{}: activated ({} total)",
                self.identifier,
                activations.count(&self.identifier)
            ),
            Activation::Unbound => println!("{}: no activation handler bound", self.identifier),
            Activation::HoverChanged { visible } => println!(
                "{}: detail {}",
                self.identifier,
                if visible { "shown" } else { "hidden" }
            ),
            Activation::Ignored => println!("{}: {} ignored", self.identifier, self.event),
        }

        if self.show {
            if let Some(element) = tree.find(&self.identifier) {
                println!("{}", element.to_html().await);
            }
        }

        Ok(outcome)
    }
}
