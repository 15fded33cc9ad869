//! Addressable, activatable view components for turn-based battler UIs.
//!
//! Views are yew components mapping typed display data (names, images,
//! stats) onto a small design system. The [`Clickable`] decorator attaches a
//! caller-supplied identifier and a click listener to the root of any view,
//! so an external driver can select and activate arbitrary nodes generically.
//!
//! # Architecture
//!
//! - [`View`]: pure rendering contract for wrappable views
//! - [`Clickable`]: decorator binding identity and activation
//! - [`EntityCard`]: the parameterized creature/player/skill view
//! - [`ViewTree`]: driver-side lookup and activation by identifier
//! - [`primitives`]: stand-in design system (card parts, button, hover card)
//! - [`render`]: server-side rendering to HTML strings

pub mod clickable;
pub mod component;
pub mod config;
pub mod driver;
pub mod error;
pub mod fraction;
pub mod hover;
pub mod identity;
pub mod primitives;
pub mod render;
pub mod views;

pub use clickable::{ACTIVATABLE_ATTRIBUTE, Activation, ActivatableElement, Clickable, with_clickable};
pub use component::View;
pub use config::{IdAttribute, ViewConfig};
pub use driver::ViewTree;
pub use error::{ErrorSeverity, Result, ViewError};
pub use fraction::{Fraction, StatValue, display_fraction};
pub use hover::{HoverState, PointerEvent};
pub use identity::{Addressable, Identifier};
pub use render::{render_to_string, render_view};
pub use views::{CardKind, CardProps, EntityCard, Sections, SkillDetail};
