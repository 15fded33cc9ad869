//! The clickable-identity wrapper.
//!
//! [`Clickable`] decorates any [`View`] so its rendered root carries the
//! caller's identifier and a click listener that runs the caller's
//! activation callback. The wrapped view's markup is otherwise left
//! untouched: no layout, styling, or structural changes.
//!
//! `Clickable` does not implement [`View`], so a definition can only be
//! wrapped once.

use std::{fmt, marker::PhantomData, rc::Rc};

use tracing::{debug, warn};
use yew::{
    Callback, Html,
    virtual_dom::{Listener, ListenerKind, VNode, VTag},
};

use crate::{
    component::View,
    config::{IdAttribute, ViewConfig},
    error::{Result, ViewError},
    hover::{HoverState, PointerEvent},
    identity::{Addressable, Identifier},
    render,
};

/// Marker attribute set on roots that have an activation handler bound.
pub const ACTIVATABLE_ATTRIBUTE: &str = "data-activatable";

/// Wraps `V` with the default [`ViewConfig`].
pub fn with_clickable<V: View + 'static>() -> Clickable<V> {
    Clickable::new()
}

/// Decorator attaching identity and activation semantics to a view.
pub struct Clickable<V> {
    id_attribute: IdAttribute,
    view: PhantomData<fn() -> V>,
}

impl<V> Clone for Clickable<V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for Clickable<V> {}

impl<V> fmt::Debug for Clickable<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Clickable")
            .field("view", &std::any::type_name::<V>())
            .field("id_attribute", &self.id_attribute)
            .finish()
    }
}

impl<V: View + 'static> Default for Clickable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: View + 'static> Clickable<V> {
    pub fn new() -> Self {
        Self::with_config(&ViewConfig::default())
    }

    pub fn with_config(config: &ViewConfig) -> Self {
        Self {
            id_attribute: config.id_attribute,
            view: PhantomData,
        }
    }

    pub fn id_attribute(&self) -> IdAttribute {
        self.id_attribute
    }

    /// Renders the wrapped view with identity bound to its root.
    ///
    /// This is the form to embed inside a parent component's `html!`.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::MissingIdentifier`] without rendering the inner
    /// view when `props` carries no identifier, and
    /// [`ViewError::UnaddressableRoot`] when the view does not render a single
    /// root element.
    pub fn html(&self, props: &V::Props) -> Result<Html> {
        let component = V::name(props);
        let Some(identifier) = props.identifier() else {
            warn!(
                component,
                "refusing to render clickable component without identifier"
            );
            return Err(ViewError::MissingIdentifier { component });
        };

        let mut html = V::view(props);
        let VNode::VTag(root) = &mut html else {
            warn!(component, identifier = %identifier, "component root is not an element");
            return Err(ViewError::UnaddressableRoot { component });
        };

        let name = self.id_attribute.as_str();
        if let Some(previous) = root_attribute(root, name) {
            if previous != identifier.as_str() {
                warn!(
                    component,
                    attribute = name,
                    previous,
                    identifier = %identifier,
                    "replacing identity attribute set by the component"
                );
            }
        }
        root.add_attribute(name, identifier);

        let handler = props.activation();
        if let Some(handler) = handler {
            if root_attribute(root, ACTIVATABLE_ATTRIBUTE).is_some() {
                warn!(
                    component,
                    identifier = %identifier,
                    "replacing activation marker set by the component"
                );
            }
            root.add_attribute(ACTIVATABLE_ATTRIBUTE, "true");
            // Roots rendered by views carry no listeners of their own.
            root.set_listeners(Box::new([Some(
                Rc::new(ActivationListener(handler.clone())) as Rc<dyn Listener>
            )]));
        }

        debug!(
            component,
            identifier = %identifier,
            activatable = handler.is_some(),
            "rendered clickable component"
        );

        Ok(html)
    }

    /// Renders the wrapped view into an element a driver can address.
    ///
    /// # Errors
    ///
    /// Same as [`html`](Self::html).
    pub fn render(&self, props: &V::Props) -> Result<ActivatableElement> {
        let html = self.html(props)?;
        let identifier = props
            .identifier()
            .cloned()
            .ok_or(ViewError::MissingIdentifier {
                component: V::name(props),
            })?;

        let clickable = *self;
        let snapshot = props.clone();
        let rerender = move |visible: bool| {
            let mut props = snapshot.clone();
            V::set_hover_visible(&mut props, visible);
            clickable.html(&props)
        };

        Ok(ActivatableElement {
            identifier,
            html,
            handler: props.activation().cloned(),
            hover: V::hover_visible(props).map(HoverState::from_visible),
            rerender: Rc::new(rerender),
        })
    }
}

fn root_attribute<'a>(root: &'a VTag, name: &str) -> Option<&'a str> {
    root.attributes
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
}

/// Click listener bound to a wrapped root.
struct ActivationListener(Callback<()>);

impl Listener for ActivationListener {
    fn kind(&self) -> ListenerKind {
        ListenerKind::onclick
    }

    fn handle(&self, _event: web_sys::Event) {
        self.0.emit(());
    }

    fn passive(&self) -> bool {
        false
    }
}

/// Outcome of dispatching a [`PointerEvent`] to an element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Activation {
    /// The activation handler ran.
    Invoked,
    /// The element was clicked but has no handler bound.
    Unbound,
    /// Hover detail visibility changed to the given value.
    HoverChanged { visible: bool },
    /// The event had no effect on this element.
    Ignored,
}

/// An identified, activatable element produced by one render pass.
///
/// Holds the caller's handler only for as long as this value lives; a
/// re-render produces a fresh element from fresh props.
#[derive(Clone)]
pub struct ActivatableElement {
    identifier: Identifier,
    html: Html,
    handler: Option<Callback<()>>,
    hover: Option<HoverState>,
    rerender: Rc<dyn Fn(bool) -> Result<Html>>,
}

impl fmt::Debug for ActivatableElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActivatableElement")
            .field("identifier", &self.identifier)
            .field("root", &self.root_tag())
            .field("activatable", &self.is_activatable())
            .field("hover", &self.hover)
            .finish_non_exhaustive()
    }
}

impl ActivatableElement {
    pub fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    pub fn html(&self) -> &Html {
        &self.html
    }

    pub fn into_html(self) -> Html {
        self.html
    }

    fn root(&self) -> Option<&VTag> {
        match &self.html {
            VNode::VTag(tag) => Some(&**tag),
            _ => None,
        }
    }

    /// Tag name of the root element.
    pub fn root_tag(&self) -> &str {
        self.root().map_or("", |tag| tag.tag())
    }

    /// Value of an attribute on the root element.
    pub fn root_attribute(&self, name: &str) -> Option<&str> {
        root_attribute(self.root()?, name)
    }

    pub fn is_activatable(&self) -> bool {
        self.handler.is_some()
    }

    pub fn has_hover_detail(&self) -> bool {
        self.hover.is_some()
    }

    pub fn hover_visible(&self) -> bool {
        self.hover.is_some_and(|hover| hover.is_visible())
    }

    /// Runs the activation handler, if one is bound.
    pub fn click(&self) -> Activation {
        match &self.handler {
            Some(handler) => {
                debug!(identifier = %self.identifier, "activating element");
                handler.emit(());
                Activation::Invoked
            }
            None => Activation::Unbound,
        }
    }

    /// Routes a pointer or focus event through the element's root.
    ///
    /// `Click` invokes the handler if one is bound. Hover events only affect
    /// elements with hover detail, and re-render them at the new visibility.
    ///
    /// # Errors
    ///
    /// Propagates errors from re-rendering the wrapped view.
    pub fn dispatch(&mut self, event: PointerEvent) -> Result<Activation> {
        if event == PointerEvent::Click {
            return Ok(self.click());
        }

        let Some(hover) = self.hover.as_mut() else {
            return Ok(Activation::Ignored);
        };
        if !hover.apply(event) {
            return Ok(Activation::Ignored);
        }

        let visible = hover.is_visible();
        self.html = (self.rerender)(visible)?;
        Ok(Activation::HoverChanged { visible })
    }

    /// HTML of the current render.
    pub async fn to_html(&self) -> String {
        render::render_to_string(self.html.clone()).await
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use yew::html;

    use super::*;
    use crate::identity::Addressable;

    struct Badge;

    #[derive(Clone, PartialEq)]
    struct BadgeProps {
        id: Option<Identifier>,
        label: String,
        on_click: Option<Callback<()>>,
    }

    impl Addressable for BadgeProps {
        fn identifier(&self) -> Option<&Identifier> {
            self.id.as_ref()
        }

        fn activation(&self) -> Option<&Callback<()>> {
            self.on_click.as_ref()
        }
    }

    impl View for Badge {
        type Props = BadgeProps;

        fn name(_props: &BadgeProps) -> &'static str {
            "Badge"
        }

        fn view(props: &BadgeProps) -> Html {
            html! { <span class="badge">{ props.label.clone() }</span> }
        }
    }

    /// Renders two sibling roots, so there is nothing to address.
    struct Pair;

    impl View for Pair {
        type Props = BadgeProps;

        fn name(_props: &BadgeProps) -> &'static str {
            "Pair"
        }

        fn view(props: &BadgeProps) -> Html {
            html! { <><span>{ props.label.clone() }</span><span /></> }
        }
    }

    /// Sets its own test id, which the wrapper must override.
    struct SelfTagged;

    impl View for SelfTagged {
        type Props = BadgeProps;

        fn name(_props: &BadgeProps) -> &'static str {
            "SelfTagged"
        }

        fn view(props: &BadgeProps) -> Html {
            html! { <span class="badge" data-testid="stale">{ props.label.clone() }</span> }
        }
    }

    fn props(id: Option<&str>) -> BadgeProps {
        BadgeProps {
            id: id.map(|raw| Identifier::new(raw).unwrap()),
            label: "Lv. 5".into(),
            on_click: None,
        }
    }

    #[tokio::test]
    async fn attaches_identifier_to_root() {
        let rendered = with_clickable::<Badge>().render(&props(Some("badge-1"))).unwrap();
        assert_eq!(rendered.root_attribute("data-testid"), Some("badge-1"));
        assert!(!rendered.is_activatable());
        assert_eq!(
            rendered.to_html().await,
            r#"<span class="badge" data-testid="badge-1">Lv. 5</span>"#
        );
    }

    #[test]
    fn missing_identifier_fails_fast() {
        let error = with_clickable::<Badge>().render(&props(None)).unwrap_err();
        assert_eq!(error, ViewError::MissingIdentifier { component: "Badge" });
    }

    #[test]
    fn fragment_roots_are_rejected() {
        let error = with_clickable::<Pair>().render(&props(Some("pair"))).unwrap_err();
        assert_eq!(error, ViewError::UnaddressableRoot { component: "Pair" });
    }

    #[tokio::test]
    async fn existing_identity_attribute_is_replaced_once() {
        let rendered = with_clickable::<SelfTagged>()
            .render(&props(Some("badge-9")))
            .unwrap();
        let html = rendered.to_html().await;

        assert_eq!(rendered.root_attribute("data-testid"), Some("badge-9"));
        assert!(!html.contains("stale"));
        assert_eq!(html.matches("data-testid=").count(), 1);
    }

    #[tokio::test]
    async fn honours_configured_attribute_name() {
        let config = ViewConfig::default().with_id_attribute(IdAttribute::DataCy);
        let rendered = Clickable::<Badge>::with_config(&config)
            .render(&props(Some("b")))
            .unwrap();

        assert_eq!(rendered.root_attribute("data-cy"), Some("b"));
        assert!(rendered.root_attribute("data-testid").is_none());
        assert_eq!(
            rendered.to_html().await,
            r#"<span class="badge" data-cy="b">Lv. 5</span>"#
        );
    }

    #[test]
    fn click_invokes_bound_handler() {
        let clicks = Rc::new(Cell::new(0));
        let counter = Rc::clone(&clicks);
        let mut badge_props = props(Some("badge-2"));
        badge_props.on_click = Some(Callback::from(move |()| counter.set(counter.get() + 1)));

        let rendered = with_clickable::<Badge>().render(&badge_props).unwrap();
        assert_eq!(rendered.root_attribute(ACTIVATABLE_ATTRIBUTE), Some("true"));
        assert_eq!(rendered.click(), Activation::Invoked);
        assert_eq!(rendered.click(), Activation::Invoked);
        assert_eq!(clicks.get(), 2);
    }

    #[test]
    fn click_without_handler_is_unbound() {
        let mut rendered = with_clickable::<Badge>().render(&props(Some("b"))).unwrap();
        assert_eq!(rendered.click(), Activation::Unbound);
        assert_eq!(rendered.dispatch(PointerEvent::Enter), Ok(Activation::Ignored));
    }
}
