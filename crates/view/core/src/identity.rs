//! Addressing keys and activation callbacks carried by view props.
use std::{borrow::Borrow, fmt, str::FromStr};

use yew::{AttrValue, Callback};

use crate::error::{Result, ViewError};

/// Externally supplied, stable key used to address a rendered element.
///
/// The crate never generates identifiers and never deduplicates them. The
/// caller must hand the same identifier to the same logical entity on every
/// render so a driver can re-address it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Identifier(String);

impl Identifier {
    /// Validates and wraps raw identifier text.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::InvalidIdentifier`] if the text is empty or
    /// whitespace only.
    pub fn new(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(ViewError::InvalidIdentifier);
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Identifier {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&Identifier> for AttrValue {
    fn from(value: &Identifier) -> Self {
        AttrValue::from(value.0.clone())
    }
}

impl FromStr for Identifier {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for Identifier {
    type Error = ViewError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Identifier {
    type Error = ViewError;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Identifier> for String {
    fn from(value: Identifier) -> Self {
        value.0
    }
}

/// Props that can be addressed and activated by an external driver.
///
/// Every component wrapped with [`Clickable`](crate::Clickable) must accept
/// props implementing this trait.
pub trait Addressable {
    /// The caller-supplied addressing key, if one was provided.
    fn identifier(&self) -> Option<&Identifier>;

    /// Callback to run on activation. Components without one are still
    /// addressable, they simply do nothing when clicked.
    ///
    /// Ownership stays with the caller: the wrapper only clones the handle
    /// into the element produced by one render pass.
    fn activation(&self) -> Option<&Callback<()>> {
        None
    }
}
