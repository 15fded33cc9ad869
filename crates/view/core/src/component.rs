//! Render contract shared by every wrappable view.
//!
//! A [`View`] is a pure function from props to markup. It owns no state and
//! performs no data fetching; rendering the same props twice yields the same
//! markup. Views whose root is a single element can be wrapped with
//! [`Clickable`](crate::Clickable).

use yew::Html;

use crate::identity::Addressable;

/// A view that maps display props onto a composition of primitives.
pub trait View {
    /// Display data accepted by this view.
    type Props: Addressable + Clone + PartialEq + 'static;

    /// Short name used in logs and configuration errors.
    fn name(props: &Self::Props) -> &'static str;

    /// Render `props` into markup.
    ///
    /// Views must not attach addressing attributes themselves; that is the
    /// job of [`Clickable`](crate::Clickable).
    fn view(props: &Self::Props) -> Html;

    /// Visibility of hover-revealed detail, or `None` if the view has none.
    fn hover_visible(_props: &Self::Props) -> Option<bool> {
        None
    }

    /// Re-targets `props` at the given hover visibility.
    fn set_hover_visible(_props: &mut Self::Props, _visible: bool) {}
}
