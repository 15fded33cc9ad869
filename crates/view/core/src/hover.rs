//! Pointer/focus events and the show/hide toggle for hover-revealed detail.

/// Normalized pointer and focus events a driver can dispatch to an element.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum PointerEvent {
    /// Activation of the element root.
    Click,
    /// Pointer moved onto the trigger.
    Enter,
    /// Pointer left the trigger.
    Leave,
    /// Trigger gained keyboard focus.
    Focus,
    /// Trigger lost keyboard focus.
    Blur,
}

impl PointerEvent {
    /// Returns the visibility this event forces on hover detail, if any.
    pub const fn hover_visibility(self) -> Option<bool> {
        match self {
            Self::Enter | Self::Focus => Some(true),
            Self::Leave | Self::Blur => Some(false),
            Self::Click => None,
        }
    }
}

/// Binary visible/hidden state of a hover detail panel.
///
/// Only the latest event matters: there is no memory across interactions,
/// so leaving or blurring always hides the panel immediately.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HoverState {
    visible: bool,
}

impl HoverState {
    pub const fn hidden() -> Self {
        Self { visible: false }
    }

    pub const fn from_visible(visible: bool) -> Self {
        Self { visible }
    }

    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Applies an event and returns `true` if visibility changed.
    pub fn apply(&mut self, event: PointerEvent) -> bool {
        match event.hover_visibility() {
            Some(visible) if visible != self.visible => {
                self.visible = visible;
                true
            }
            _ => false,
        }
    }
}
