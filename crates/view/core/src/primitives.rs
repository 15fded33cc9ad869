//! Minimal stand-in design system: card parts, button, stat bar, hover card.
//!
//! These only decide markup shape and class names. Styling belongs to the
//! host; swap these out for a real design system without touching views.
//! Root containers are left to the views so the wrapper always finds a
//! plain element to address.
use yew::prelude::*;

use crate::{
    fraction::{StatValue, finite_or_zero},
    hover::{HoverState, PointerEvent},
};

pub const HOVER_CARD_CLASS: &str = "hover-card";
pub const HOVER_CONTENT_CLASS: &str = "hover-card-content";

#[derive(Properties, PartialEq)]
pub struct ContainerProps {
    #[prop_or_default]
    pub children: Html,
}

#[function_component(CardHeader)]
pub fn card_header(props: &ContainerProps) -> Html {
    html! { <div class="card-header">{ props.children.clone() }</div> }
}

#[function_component(CardContent)]
pub fn card_content(props: &ContainerProps) -> Html {
    html! { <div class="card-content">{ props.children.clone() }</div> }
}

#[function_component(Button)]
pub fn button(props: &ContainerProps) -> Html {
    html! { <button class="button" type="button">{ props.children.clone() }</button> }
}

#[derive(Properties, PartialEq)]
pub struct CardTitleProps {
    pub text: AttrValue,
}

#[function_component(CardTitle)]
pub fn card_title(props: &CardTitleProps) -> Html {
    html! { <h3 class="card-title">{ props.text.to_string() }</h3> }
}

#[derive(Properties, PartialEq)]
pub struct CardImageProps {
    pub src: AttrValue,
    pub alt: AttrValue,
}

#[function_component(CardImage)]
pub fn card_image(props: &CardImageProps) -> Html {
    html! { <img class="card-image" src={props.src.clone()} alt={props.alt.clone()} /> }
}

#[derive(Properties, PartialEq)]
pub struct StatBarProps {
    pub stat: StatValue,
    /// Decimal places of the fill width style.
    #[prop_or(1)]
    pub precision: usize,
}

/// Labelled progress bar filled to the stat's display fraction.
#[function_component(StatBar)]
pub fn stat_bar(props: &StatBarProps) -> Html {
    let stat = &props.stat;
    let fraction = stat.fraction();

    html! {
        <div
            class="stat-bar"
            role="progressbar"
            aria-valuenow={finite_or_zero(stat.current).to_string()}
            aria-valuemax={finite_or_zero(stat.maximum).to_string()}
            data-fraction={fraction.value().to_string()}
        >
            <span class="stat-label">{ format!("{} {}", stat.label, stat.summary()) }</span>
            <div class="stat-track">
                <div class="stat-fill" style={fraction.width_style(props.precision)}></div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct HoverCardProps {
    /// Visibility of the detail panel on first render.
    #[prop_or_default]
    pub open: bool,
    /// Panel revealed while the trigger is hovered or focused.
    pub detail: Html,
    /// The trigger.
    #[prop_or_default]
    pub children: Html,
}

fn hover_callback<E: 'static>(state: &UseStateHandle<HoverState>, event: PointerEvent) -> Callback<E> {
    let state = state.clone();
    Callback::from(move |_: E| {
        let mut next = *state;
        if next.apply(event) {
            state.set(next);
        }
    })
}

/// Trigger plus a detail panel that exists only while visible.
///
/// Pointer and focus events on the trigger drive the panel; nothing of the
/// panel remains in the markup once it is hidden.
#[function_component(HoverCard)]
pub fn hover_card(props: &HoverCardProps) -> Html {
    let state = use_state_eq(|| HoverState::from_visible(props.open));
    {
        let state = state.clone();
        use_effect_with(props.open, move |open| {
            state.set(HoverState::from_visible(*open));
        });
    }

    let visible = state.is_visible();
    html! {
        <div class={HOVER_CARD_CLASS} data-state={if visible { "open" } else { "closed" }}>
            <div
                class="hover-card-trigger"
                onmouseenter={hover_callback::<MouseEvent>(&state, PointerEvent::Enter)}
                onmouseleave={hover_callback::<MouseEvent>(&state, PointerEvent::Leave)}
                onfocusin={hover_callback::<FocusEvent>(&state, PointerEvent::Focus)}
                onfocusout={hover_callback::<FocusEvent>(&state, PointerEvent::Blur)}
            >
                { props.children.clone() }
            </div>
            if visible {
                <div class={HOVER_CONTENT_CLASS}>{ props.detail.clone() }</div>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::render_to_string;

    #[tokio::test]
    async fn stat_bar_reports_fraction() {
        let stat = StatValue::new("HP", 30, 120);
        let html = render_to_string(html! { <StatBar stat={stat} precision={1} /> }).await;

        assert!(html.contains(r#"data-fraction="0.25""#));
        assert!(html.contains(r#"aria-valuenow="30""#));
        assert!(html.contains(r#"style="width: 25.0%""#));
        assert!(html.contains("HP 30/120"));
    }

    #[tokio::test]
    async fn stat_bar_with_zero_maximum_is_empty_not_missing() {
        let stat = StatValue::new("HP", 10, 0);
        let html = render_to_string(html! { <StatBar stat={stat} precision={0} /> }).await;

        assert!(html.contains(r#"data-fraction="0""#));
        assert!(html.contains(r#"style="width: 0%""#));
        assert!(html.contains("stat-fill"));
    }

    #[tokio::test]
    async fn hover_card_renders_detail_only_when_open() {
        let detail = html! { <p>{ "detail" }</p> };

        let closed = render_to_string(html! {
            <HoverCard open={false} detail={detail.clone()}><Button>{ "Ember" }</Button></HoverCard>
        })
        .await;
        assert!(closed.contains(r#"data-state="closed""#));
        assert!(!closed.contains(HOVER_CONTENT_CLASS));
        assert!(!closed.contains("detail"));

        let open = render_to_string(html! {
            <HoverCard open={true} detail={detail}><Button>{ "Ember" }</Button></HoverCard>
        })
        .await;
        assert!(open.contains(r#"data-state="open""#));
        assert!(open.contains("<p>detail</p>"));
    }
}
