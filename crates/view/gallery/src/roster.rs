//! Roster files: display data for a set of cards, loaded from JSON.
//!
//! A roster is a JSON array of entries:
//!
//! ```json
//! [
//!   { "kind": "creature", "id": "wild-1", "name": "Pidgey",
//!     "image": "/img/pidgey.png", "stat": { "label": "HP", "current": 30, "maximum": 120 } },
//!   { "kind": "skill", "id": "skill-1", "name": "Gust",
//!     "description": "Whips up a gust of wind.", "stats": "Power 40" }
//! ]
//! ```
//!
//! `id` is optional in the file so a missing identifier surfaces as the
//! wrapper's configuration error rather than a parse error.
use std::{cell::RefCell, collections::BTreeMap, fs, path::Path, rc::Rc};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use view_core::{
    CardKind, CardProps, Clickable, EntityCard, Identifier, Sections, SkillDetail, StatValue,
    ViewConfig, ViewTree,
};
use yew::Callback;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct RosterEntry {
    pub kind: CardKind,
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub stat: Option<StatValue>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub stats: Option<String>,
    /// Section names (e.g. `"title"`, `"stat_bar"`); kind defaults if absent.
    #[serde(default)]
    pub sections: Option<Vec<String>>,
}

impl RosterEntry {
    pub fn sections(&self) -> Result<Sections> {
        let Some(names) = &self.sections else {
            return Ok(self.kind.default_sections());
        };

        let mut sections = Sections::empty();
        for name in names {
            let Some(flag) = Sections::from_name(&name.to_ascii_uppercase()) else {
                bail!("unknown section `{}` on roster entry `{}`", name, self.name);
            };
            sections |= flag;
        }
        Ok(sections)
    }

    pub fn props(&self, config: &ViewConfig, activations: &ActivationLog) -> Result<CardProps> {
        let identifier = self
            .id
            .as_deref()
            .map(Identifier::new)
            .transpose()
            .with_context(|| format!("roster entry `{}` has an invalid id", self.name))?;

        let mut props = CardProps::new(self.kind, self.name.clone())
            .with_sections(self.sections()?)
            .with_config(config);
        props.image = self.image.clone();
        props.stat = self.stat.clone();
        if self.description.is_some() || self.stats.is_some() {
            props.detail = Some(SkillDetail {
                description: self.description.clone(),
                stats: self.stats.clone(),
            });
        }
        if let Some(identifier) = identifier {
            props.on_activate = Some(activations.handler(identifier.clone()));
            props.identifier = Some(identifier);
        }
        Ok(props)
    }
}

pub fn load(path: &Path) -> Result<Vec<RosterEntry>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read roster {}", path.display()))?;
    let entries: Vec<RosterEntry> = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse roster {}", path.display()))?;
    tracing::debug!(entries = entries.len(), path = %path.display(), "loaded roster");
    Ok(entries)
}

/// Renders every roster entry through the clickable wrapper into one tree.
pub fn build_tree(
    entries: &[RosterEntry],
    config: &ViewConfig,
    activations: &ActivationLog,
) -> Result<ViewTree> {
    let clickable = Clickable::<EntityCard>::with_config(config);
    let mut tree = ViewTree::new();
    for entry in entries {
        let props = entry.props(config, activations)?;
        let element = clickable
            .render(&props)
            .with_context(|| format!("failed to render roster entry `{}`", entry.name))?;
        tree.mount(element)?;
    }
    Ok(tree)
}

/// Counts activations per identifier for the lifetime of one command.
#[derive(Clone, Debug, Default)]
pub struct ActivationLog {
    counts: Rc<RefCell<BTreeMap<Identifier, u32>>>,
}

impl ActivationLog {
    pub fn new() -> Self {
        Self::default()
    }

    fn handler(&self, identifier: Identifier) -> Callback<()> {
        let counts = Rc::clone(&self.counts);
        Callback::from(move |()| {
            let mut counts = counts.borrow_mut();
            let count = counts.entry(identifier.clone()).or_default();
            *count += 1;
            tracing::info!(identifier = %identifier, count = *count, "element activated");
        })
    }

    pub fn count(&self, identifier: &str) -> u32 {
        self.counts.borrow().get(identifier).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u32 {
        self.counts.borrow().values().sum()
    }
}
