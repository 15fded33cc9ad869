//! Server-side rendering of view markup to HTML strings.
//!
//! Drivers and tests inspect markup through these helpers instead of a
//! browser DOM. Event listeners are not part of the output.

use tokio::task::LocalSet;
use yew::{LocalServerRenderer, prelude::*};

use crate::component::View;

#[derive(Properties, PartialEq)]
struct SnapshotProps {
    html: Html,
}

#[function_component(Snapshot)]
fn snapshot(props: &SnapshotProps) -> Html {
    props.html.clone()
}

/// Renders already-built markup to an HTML string.
///
/// Must be awaited inside a tokio runtime; props holding callbacks are not
/// `Send`, so rendering happens on the current thread.
pub async fn render_to_string(html: Html) -> String {
    let renderer = LocalServerRenderer::<Snapshot>::with_props(SnapshotProps { html }).hydratable(false);
    LocalSet::new().run_until(renderer.render()).await
}

/// Renders a view without any wrapper applied.
pub async fn render_view<V: View>(props: &V::Props) -> String {
    render_to_string(V::view(props)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn renders_plain_markup() {
        let html = html! { <p class="note">{ "Fainted" }</p> };
        assert_eq!(render_to_string(html).await, r#"<p class="note">Fainted</p>"#);
    }

    #[tokio::test]
    async fn escapes_text_and_attribute_values() {
        let title = String::from("<Mr. Mime>");
        let html = html! { <span title={title.clone()}>{ title }</span> };
        let rendered = render_to_string(html).await;

        assert!(!rendered.contains("<Mr. Mime>"));
        assert!(rendered.contains("&lt;Mr. Mime&gt;"));
    }
}
