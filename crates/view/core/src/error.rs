//! Error infrastructure for rendering and addressing views.
//!
//! Every failure in this crate is a caller-supplied-data problem. Numeric
//! display data never errors (it degrades to an empty fraction instead), so
//! the variants below are limited to identity and addressing.

/// Severity level of a view error, used for logging priority and tests.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr, strum::EnumString,
)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorSeverity {
    /// The component was wired incorrectly (e.g. no identifier supplied).
    ///
    /// Surfaced immediately; the view is not rendered.
    Configuration,

    /// Invalid input handed to a constructor or driver lookup.
    Validation,
}

/// Errors raised while rendering wrapped components or driving a view tree.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ViewError {
    /// A clickable component was rendered without its addressing key.
    #[error("{component} requires an identifier but none was supplied")]
    MissingIdentifier { component: &'static str },

    /// The component rendered something other than a single root element,
    /// so there is no node to carry the identifier.
    #[error("{component} must render a single root element to be addressable")]
    UnaddressableRoot { component: &'static str },

    /// The configured identifier attribute is not one the wrapper may write.
    #[error("`{name}` cannot carry identifiers (expected one of: {supported})")]
    UnsupportedIdAttribute { name: String, supported: String },

    /// Identifier text was empty or whitespace only.
    #[error("identifier must contain at least one non-whitespace character")]
    InvalidIdentifier,

    /// The driver was asked to address an identifier that is not mounted.
    #[error("no element with identifier `{identifier}` is mounted")]
    UnknownIdentifier { identifier: String },

    /// The driver refused to mount a second element under the same identifier.
    #[error("identifier `{identifier}` is already mounted")]
    DuplicateIdentifier { identifier: String },
}

impl ViewError {
    pub const fn severity(&self) -> ErrorSeverity {
        match self {
            Self::MissingIdentifier { .. }
            | Self::UnaddressableRoot { .. }
            | Self::UnsupportedIdAttribute { .. }
            | Self::DuplicateIdentifier { .. } => ErrorSeverity::Configuration,
            Self::InvalidIdentifier | Self::UnknownIdentifier { .. } => ErrorSeverity::Validation,
        }
    }

    /// Static identifier for this variant, stable across message rewording.
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::MissingIdentifier { .. } => "VIEW_MISSING_IDENTIFIER",
            Self::UnaddressableRoot { .. } => "VIEW_UNADDRESSABLE_ROOT",
            Self::UnsupportedIdAttribute { .. } => "VIEW_UNSUPPORTED_ID_ATTRIBUTE",
            Self::InvalidIdentifier => "VIEW_INVALID_IDENTIFIER",
            Self::UnknownIdentifier { .. } => "VIEW_UNKNOWN_IDENTIFIER",
            Self::DuplicateIdentifier { .. } => "VIEW_DUPLICATE_IDENTIFIER",
        }
    }
}

pub type Result<T> = std::result::Result<T, ViewError>;
