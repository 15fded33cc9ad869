//! Domain view components for creatures, players, and skills.
//!
//! All three share one parameterized component, [`EntityCard`]. A [`CardKind`]
//! picks the root markup and class, and a [`Sections`] set picks which
//! optional sub-sections render. Missing optional data renders as empty
//! content rather than an error.

use bitflags::bitflags;
use yew::prelude::*;

use crate::{
    component::View,
    config::{DEFAULT_FRACTION_PRECISION, ViewConfig},
    fraction::StatValue,
    identity::{Addressable, Identifier},
    primitives::{Button, CardContent, CardHeader, CardImage, CardTitle, HoverCard, StatBar},
};

bitflags! {
    /// Optional sub-sections an [`EntityCard`] renders.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Sections: u8 {
        const HEADER_IMAGE = 1 << 0;
        const TITLE        = 1 << 1;
        const STAT_BAR     = 1 << 2;
        const HOVER_DETAIL = 1 << 3;
    }
}

/// The kind of entity a card displays.
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
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CardKind {
    /// Creature summary: portrait, name, health bar.
    #[default]
    Creature,
    /// Player summary: avatar, name, a headline stat.
    Player,
    /// Skill activation control with hover-revealed description.
    Skill,
}

impl CardKind {
    pub const fn default_sections(self) -> Sections {
        match self {
            Self::Creature | Self::Player => Sections::HEADER_IMAGE
                .union(Sections::TITLE)
                .union(Sections::STAT_BAR),
            Self::Skill => Sections::TITLE.union(Sections::HOVER_DETAIL),
        }
    }

    pub const fn root_class(self) -> &'static str {
        match self {
            Self::Creature => "creature-card",
            Self::Player => "player-card",
            Self::Skill => "skill-control",
        }
    }

    pub const fn component_name(self) -> &'static str {
        match self {
            Self::Creature => "CreatureCard",
            Self::Player => "PlayerCard",
            Self::Skill => "SkillControl",
        }
    }
}

/// Hover-revealed detail for a skill.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillDetail {
    pub description: Option<String>,
    pub stats: Option<String>,
}

impl SkillDetail {
    fn view(&self) -> Html {
        let description = self.description.clone().unwrap_or_default();
        let stats = self.stats.clone().unwrap_or_default();
        html! {
            <div class="skill-detail">
                <p class="skill-description">{ description }</p>
                <p class="skill-stats">{ stats }</p>
            </div>
        }
    }
}

/// Display data for an [`EntityCard`].
#[derive(Clone, Debug, PartialEq, Properties)]
pub struct CardProps {
    #[prop_or_default]
    pub kind: CardKind,
    /// Sub-sections to render; the kind's defaults when `None`.
    #[prop_or_default]
    pub sections: Option<Sections>,
    #[prop_or_default]
    pub identifier: Option<Identifier>,
    pub name: String,
    #[prop_or_default]
    pub image: Option<String>,
    #[prop_or_default]
    pub stat: Option<StatValue>,
    #[prop_or_default]
    pub detail: Option<SkillDetail>,
    /// Initial visibility of hover detail; drivers toggle it afterwards.
    #[prop_or_default]
    pub hover_visible: bool,
    /// Decimal places of stat bar width styles.
    #[prop_or(DEFAULT_FRACTION_PRECISION)]
    pub precision: usize,
    #[prop_or_default]
    pub on_activate: Option<Callback<()>>,
}

impl CardProps {
    pub fn new(kind: CardKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            sections: None,
            identifier: None,
            name: name.into(),
            image: None,
            stat: None,
            detail: None,
            hover_visible: false,
            precision: DEFAULT_FRACTION_PRECISION,
            on_activate: None,
        }
    }

    pub fn creature(name: impl Into<String>) -> Self {
        Self::new(CardKind::Creature, name)
    }

    pub fn player(name: impl Into<String>) -> Self {
        Self::new(CardKind::Player, name)
    }

    pub fn skill(name: impl Into<String>) -> Self {
        Self::new(CardKind::Skill, name)
    }

    /// Sub-sections this card renders.
    pub fn sections(&self) -> Sections {
        self.sections.unwrap_or(self.kind.default_sections())
    }

    #[must_use]
    pub fn with_sections(mut self, sections: Sections) -> Self {
        self.sections = Some(sections);
        self
    }

    #[must_use]
    pub fn with_config(mut self, config: &ViewConfig) -> Self {
        self.precision = config.fraction_precision;
        self
    }

    #[must_use]
    pub fn with_identifier(mut self, identifier: Identifier) -> Self {
        self.identifier = Some(identifier);
        self
    }

    #[must_use]
    pub fn with_image(mut self, src: impl Into<String>) -> Self {
        self.image = Some(src.into());
        self
    }

    #[must_use]
    pub fn with_stat(mut self, stat: StatValue) -> Self {
        self.stat = Some(stat);
        self
    }

    #[must_use]
    pub fn with_detail(mut self, detail: SkillDetail) -> Self {
        self.detail = Some(detail);
        self
    }

    #[must_use]
    pub fn with_hover_visible(mut self, visible: bool) -> Self {
        self.hover_visible = visible;
        self
    }

    #[must_use]
    pub fn on_activate(mut self, callback: impl Fn() + 'static) -> Self {
        self.on_activate = Some(Callback::from(move |()| callback()));
        self
    }

    fn has_hover_detail(&self) -> bool {
        self.kind == CardKind::Skill && self.sections().contains(Sections::HOVER_DETAIL)
    }
}

impl Addressable for CardProps {
    fn identifier(&self) -> Option<&Identifier> {
        self.identifier.as_ref()
    }

    fn activation(&self) -> Option<&Callback<()>> {
        self.on_activate.as_ref()
    }
}

fn header(props: &CardProps, sections: Sections) -> Html {
    match &props.image {
        Some(src) if sections.contains(Sections::HEADER_IMAGE) => html! {
            <CardHeader>
                <CardImage src={AttrValue::from(src.clone())} alt={AttrValue::from(props.name.clone())} />
            </CardHeader>
        },
        _ => Html::default(),
    }
}

fn body(props: &CardProps, sections: Sections) -> Html {
    let title = if sections.contains(Sections::TITLE) {
        html! { <CardTitle text={AttrValue::from(props.name.clone())} /> }
    } else {
        Html::default()
    };
    let stat = match &props.stat {
        Some(stat) if sections.contains(Sections::STAT_BAR) => {
            html! { <StatBar stat={stat.clone()} precision={props.precision} /> }
        }
        _ => Html::default(),
    };
    html! { <>{ title }{ stat }</> }
}

fn card_view(props: &CardProps, sections: Sections) -> Html {
    html! {
        <div class={classes!("card", props.kind.root_class())}>
            { header(props, sections) }
            <CardContent>{ body(props, sections) }</CardContent>
        </div>
    }
}

fn skill_view(props: &CardProps, sections: Sections) -> Html {
    let trigger = html! {
        <Button>
            { header(props, sections) }
            { body(props, sections) }
        </Button>
    };

    let control = if props.has_hover_detail() {
        let detail = props.detail.clone().unwrap_or_default().view();
        html! { <HoverCard open={props.hover_visible} detail={detail}>{ trigger }</HoverCard> }
    } else {
        trigger
    };

    html! { <div class={props.kind.root_class()}>{ control }</div> }
}

fn entity_card_view(props: &CardProps) -> Html {
    let sections = props.sections();
    match props.kind {
        CardKind::Creature | CardKind::Player => card_view(props, sections),
        CardKind::Skill => skill_view(props, sections),
    }
}

/// The single parameterized domain view component.
///
/// Mount it directly inside `html!`, or through
/// [`Clickable`](crate::Clickable) to make it addressable.
#[function_component(EntityCard)]
pub fn entity_card(props: &CardProps) -> Html {
    entity_card_view(props)
}

impl View for EntityCard {
    type Props = CardProps;

    fn name(props: &CardProps) -> &'static str {
        props.kind.component_name()
    }

    fn view(props: &CardProps) -> Html {
        entity_card_view(props)
    }

    fn hover_visible(props: &CardProps) -> Option<bool> {
        props.has_hover_detail().then_some(props.hover_visible)
    }

    fn set_hover_visible(props: &mut CardProps, visible: bool) {
        props.hover_visible = visible;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{render_to_string, render_view};

    fn pikachu() -> CardProps {
        CardProps::creature("Pikachu")
            .with_image("/img/pikachu.png")
            .with_stat(StatValue::new("HP", 30, 120))
    }

    #[tokio::test]
    async fn creature_card_composes_header_title_and_bar() {
        let html = render_view::<EntityCard>(&pikachu()).await;

        assert!(html.starts_with(r#"<div class="card creature-card">"#));
        assert!(html.contains(r#"src="/img/pikachu.png""#));
        assert!(html.contains(r#"<h3 class="card-title">Pikachu</h3>"#));
        assert!(html.contains(r#"data-fraction="0.25""#));
    }

    #[tokio::test]
    async fn sections_can_be_trimmed() {
        let html = render_view::<EntityCard>(&pikachu().with_sections(Sections::TITLE)).await;

        assert!(!html.contains("card-header"));
        assert!(!html.contains("stat-bar"));
        assert!(html.contains("card-title"));
    }

    #[tokio::test]
    async fn missing_image_skips_header() {
        let html = render_view::<EntityCard>(&CardProps::creature("Eevee")).await;
        assert!(!html.contains("card-header"));
    }

    #[tokio::test]
    async fn skill_detail_is_hidden_by_default() {
        let props = CardProps::skill("Thunderbolt").with_detail(SkillDetail {
            description: Some("A strong electric blast.".into()),
            stats: Some("Power 90".into()),
        });
        let html = render_view::<EntityCard>(&props).await;

        assert!(html.starts_with(r#"<div class="skill-control">"#));
        assert!(html.contains(r#"data-state="closed""#));
        assert!(!html.contains("A strong electric blast."));
        assert_eq!(EntityCard::hover_visible(&props), Some(false));
    }

    #[tokio::test]
    async fn missing_skill_detail_renders_empty() {
        let html =
            render_view::<EntityCard>(&CardProps::skill("Tackle").with_hover_visible(true)).await;

        assert!(html.contains(r#"data-state="open""#));
        assert!(html.contains(
            r#"<div class="skill-detail"><p class="skill-description"></p><p class="skill-stats"></p></div>"#
        ));
    }

    #[tokio::test]
    async fn skill_without_hover_section_is_a_plain_button() {
        let props = CardProps::skill("Tackle").with_sections(Sections::TITLE);
        let html = render_view::<EntityCard>(&props).await;

        assert!(!html.contains("hover-card"));
        assert!(html.contains(r#"<button class="button" type="button">"#));
        assert_eq!(EntityCard::hover_visible(&props), None);
    }

    #[tokio::test]
    async fn rendering_is_pure() {
        let first = render_view::<EntityCard>(&pikachu()).await;
        let second = render_view::<EntityCard>(&pikachu()).await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn mounts_as_a_function_component() {
        let props = pikachu();
        let mounted = render_to_string(html! { <EntityCard ..props.clone() /> }).await;
        assert_eq!(mounted, render_view::<EntityCard>(&props).await);
    }

    #[test]
    fn kind_parses_from_roster_text() {
        assert_eq!("Skill".parse::<CardKind>(), Ok(CardKind::Skill));
        assert_eq!(CardKind::Player.to_string(), "player");
        assert_eq!(CardKind::Skill.component_name(), "SkillControl");
    }
}
