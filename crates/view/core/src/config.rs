//! View configuration structures and loaders.
use std::env;

use strum::IntoEnumIterator;
use tracing::warn;

use crate::error::{Result, ViewError};

pub const DEFAULT_FRACTION_PRECISION: usize = 1;
const MAX_FRACTION_PRECISION: usize = 4;
const MIN_DEBUG_REFRESH_MS: u64 = 50;

/// Attribute written on a wrapped component's root to carry its identifier.
///
/// The set is closed: only `data-*` hooks that automation tools conventionally
/// query, plus `id`. None of them collide with attributes the primitives emit.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
pub enum IdAttribute {
    #[default]
    #[strum(serialize = "data-testid")]
    DataTestId,
    #[strum(serialize = "data-test")]
    DataTest,
    #[strum(serialize = "data-cy")]
    DataCy,
    #[strum(serialize = "data-qa")]
    DataQa,
    #[strum(serialize = "data-id")]
    DataId,
    #[strum(serialize = "id")]
    Id,
}

impl IdAttribute {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DataTestId => "data-testid",
            Self::DataTest => "data-test",
            Self::DataCy => "data-cy",
            Self::DataQa => "data-qa",
            Self::DataId => "data-id",
            Self::Id => "id",
        }
    }

    /// Comma-separated list of accepted attribute names.
    pub fn supported() -> String {
        Self::iter().map(Self::as_str).collect::<Vec<_>>().join(", ")
    }

    /// Parses an attribute name.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::UnsupportedIdAttribute`] for anything outside the
    /// supported set, including `class`, `style` and malformed names.
    pub fn parse_name(name: &str) -> Result<Self> {
        name.trim()
            .parse()
            .map_err(|_| ViewError::UnsupportedIdAttribute {
                name: name.to_string(),
                supported: Self::supported(),
            })
    }
}

/// Settings shared by every wrapped component and view tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewConfig {
    /// Attribute the identifier is written to on the root node.
    pub id_attribute: IdAttribute,
    /// Decimal places used for stat bar width styles.
    pub fraction_precision: usize,
    /// Refresh interval of the debug overlay, in milliseconds.
    pub debug_refresh_ms: u64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            id_attribute: IdAttribute::default(),
            fraction_precision: DEFAULT_FRACTION_PRECISION,
            debug_refresh_ms: 1000,
        }
    }
}

impl ViewConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `VIEW_ID_ATTRIBUTE` - Identifier attribute, one of [`IdAttribute`] (default: `data-testid`)
    /// - `VIEW_FRACTION_PRECISION` - Width style decimals, at most 4 (default: 1)
    /// - `VIEW_DEBUG_REFRESH_MS` - Debug overlay refresh, at least 50 (default: 1000)
    ///
    /// Unparseable values are ignored in favour of the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env), reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(attribute) = lookup("VIEW_ID_ATTRIBUTE") {
            if !attribute.trim().is_empty() {
                match IdAttribute::parse_name(&attribute) {
                    Ok(parsed) => config.id_attribute = parsed,
                    Err(error) => warn!(
                        %error,
                        fallback = config.id_attribute.as_str(),
                        "ignoring VIEW_ID_ATTRIBUTE"
                    ),
                }
            }
        }

        if let Some(precision) = read::<usize>(&lookup, "VIEW_FRACTION_PRECISION") {
            config.fraction_precision = precision.min(MAX_FRACTION_PRECISION);
        }

        if let Some(refresh) = read::<u64>(&lookup, "VIEW_DEBUG_REFRESH_MS") {
            config.debug_refresh_ms = refresh.max(MIN_DEBUG_REFRESH_MS);
        }

        config
    }

    #[must_use]
    pub fn with_id_attribute(mut self, attribute: IdAttribute) -> Self {
        self.id_attribute = attribute;
        self
    }

    /// Sets the identifier attribute from its name.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::UnsupportedIdAttribute`] if `name` is not a
    /// supported [`IdAttribute`].
    pub fn try_with_id_attribute(self, name: &str) -> Result<Self> {
        Ok(self.with_id_attribute(IdAttribute::parse_name(name)?))
    }

    #[must_use]
    pub fn with_fraction_precision(mut self, precision: usize) -> Self {
        self.fraction_precision = precision.min(MAX_FRACTION_PRECISION);
        self
    }
}

fn read<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.trim().parse().ok()
}
