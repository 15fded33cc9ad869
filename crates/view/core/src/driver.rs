//! Driver-side addressing of rendered elements.
//!
//! A [`ViewTree`] collects the [`ActivatableElement`]s of one render pass so a
//! test harness or game controller can select and activate any of them by
//! identifier, regardless of their internal markup. The tree is rebuilt on
//! every render; it never outlives the handlers it holds.

use tracing::debug;

use crate::{
    clickable::{Activation, ActivatableElement},
    error::{Result, ViewError},
    hover::PointerEvent,
};

/// Ordered set of uniquely identified elements from one render pass.
#[derive(Clone, Debug, Default)]
pub struct ViewTree {
    elements: Vec<ActivatableElement>,
}

impl ViewTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rendered element to the tree.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::DuplicateIdentifier`] if another element is already
    /// mounted under the same identifier; the driver could not address both.
    pub fn mount(&mut self, element: ActivatableElement) -> Result<()> {
        let identifier = element.identifier().as_str();
        if self.find(identifier).is_some() {
            return Err(ViewError::DuplicateIdentifier {
                identifier: identifier.to_string(),
            });
        }
        debug!(identifier, "mounted element");
        self.elements.push(element);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ActivatableElement> {
        self.elements.iter()
    }

    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.elements.iter().map(|element| element.identifier().as_str())
    }

    pub fn find(&self, identifier: &str) -> Option<&ActivatableElement> {
        self.elements
            .iter()
            .find(|element| element.identifier().as_str() == identifier)
    }

    fn find_mut(&mut self, identifier: &str) -> Result<&mut ActivatableElement> {
        self.elements
            .iter_mut()
            .find(|element| element.identifier().as_str() == identifier)
            .ok_or_else(|| ViewError::UnknownIdentifier {
                identifier: identifier.to_string(),
            })
    }

    /// Dispatches `event` to the element mounted under `identifier`.
    pub fn dispatch(&mut self, identifier: &str, event: PointerEvent) -> Result<Activation> {
        let element = self.find_mut(identifier)?;
        let outcome = element.dispatch(event)?;
        debug!(identifier, %event, ?outcome, "dispatched pointer event");
        Ok(outcome)
    }

    /// Activates the element mounted under `identifier`.
    pub fn click(&mut self, identifier: &str) -> Result<Activation> {
        self.dispatch(identifier, PointerEvent::Click)
    }

    /// HTML of every mounted element, one per line, in mount order.
    pub async fn to_html(&self) -> String {
        let mut lines = Vec::with_capacity(self.elements.len());
        for element in &self.elements {
            lines.push(element.to_html().await);
        }
        lines.join("\n")
    }
}

impl<'a> IntoIterator for &'a ViewTree {
    type Item = &'a ActivatableElement;
    type IntoIter = std::slice::Iter<'a, ActivatableElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        clickable::with_clickable,
        identity::Identifier,
        views::{CardProps, EntityCard},
    };

    fn creature(id: &str) -> ActivatableElement {
        let props = CardProps::creature("Bulbasaur").with_identifier(Identifier::new(id).unwrap());
        with_clickable::<EntityCard>().render(&props).unwrap()
    }

    #[test]
    fn addresses_elements_by_identifier() {
        let mut tree = ViewTree::new();
        tree.mount(creature("c-1")).unwrap();
        tree.mount(creature("c-2")).unwrap();

        assert_eq!(tree.len(), 2);
        assert_eq!(tree.identifiers().collect::<Vec<_>>(), vec!["c-1", "c-2"]);
        assert!(tree.find("c-2").is_some());
        assert_eq!(tree.click("c-1").unwrap(), Activation::Unbound);
    }

    #[test]
    fn rejects_duplicate_identifiers() {
        let mut tree = ViewTree::new();
        tree.mount(creature("c-1")).unwrap();
        assert_eq!(
            tree.mount(creature("c-1")),
            Err(ViewError::DuplicateIdentifier {
                identifier: "c-1".into()
            })
        );
    }

    #[tokio::test]
    async fn html_is_one_element_per_line() {
        let mut tree = ViewTree::new();
        tree.mount(creature("c-1")).unwrap();
        tree.mount(creature("c-2")).unwrap();

        let html = tree.to_html().await;
        let lines: Vec<_> = html.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains(r#"data-testid="c-1""#));
        assert!(lines[1].contains(r#"data-testid="c-2""#));
    }

    #[test]
    fn unknown_identifier_is_reported() {
        let mut tree = ViewTree::new();
        assert_eq!(
            tree.click("nope"),
            Err(ViewError::UnknownIdentifier {
                identifier: "nope".into()
            })
        );
    }
}
