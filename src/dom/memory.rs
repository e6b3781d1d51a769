use super::{BindingTarget, BoundNode, Document, Fragment};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Element {
    text: String,
    value: String,
    placeholder: String,
    title: String,
    classes: BTreeSet<String>,
    hidden: bool,
    children: Vec<Fragment>,
    bindings: Vec<(BindingTarget, String)>,
}

/// In-memory document: a flat id -> element map.
///
/// Element order is the id order, so `bound_nodes` and snapshots are
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryDocument {
    elements: BTreeMap<String, Element>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a plain element.
    pub fn with_element(mut self, id: &str) -> Self {
        self.elements.entry(id.to_string()).or_default();
        self
    }

    /// Declare a plain element with initial classes.
    pub fn with_classes(mut self, id: &str, classes: &[&str]) -> Self {
        let element = self.elements.entry(id.to_string()).or_default();
        element
            .classes
            .extend(classes.iter().map(|c| c.to_string()));
        self
    }

    /// Declare a translation binding, creating the element if needed.
    pub fn with_binding(mut self, id: &str, target: BindingTarget, key: &str) -> Self {
        let element = self.elements.entry(id.to_string()).or_default();
        element.bindings.retain(|(t, _)| *t != target);
        element.bindings.push((target, key.to_string()));
        self
    }

    /// Declare an element that starts hidden.
    pub fn with_hidden(mut self, id: &str) -> Self {
        self.elements.entry(id.to_string()).or_default().hidden = true;
        self
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.elements.keys().map(String::as_str)
    }

    fn element_mut(&mut self, id: &str) -> Option<&mut Element> {
        let element = self.elements.get_mut(id);
        if element.is_none() {
            debug!("Ignoring write to unknown element '{}'", id);
        }
        element
    }
}

impl Document for MemoryDocument {
    fn contains(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    fn bound_nodes(&self) -> Vec<BoundNode> {
        self.elements
            .iter()
            .flat_map(|(id, element)| {
                element.bindings.iter().map(move |(target, key)| BoundNode {
                    element: id.clone(),
                    key: key.clone(),
                    target: *target,
                })
            })
            .collect()
    }

    fn render_binding(&mut self, id: &str, target: BindingTarget, text: &str) {
        if let Some(element) = self.element_mut(id) {
            let slot = match target {
                BindingTarget::Text => &mut element.text,
                BindingTarget::Placeholder => &mut element.placeholder,
                BindingTarget::Title => &mut element.title,
            };
            *slot = text.to_string();
        }
    }

    fn binding_text(&self, id: &str, target: BindingTarget) -> Option<String> {
        self.elements.get(id).map(|element| match target {
            BindingTarget::Text => element.text.clone(),
            BindingTarget::Placeholder => element.placeholder.clone(),
            BindingTarget::Title => element.title.clone(),
        })
    }

    fn set_text(&mut self, id: &str, text: &str) {
        self.render_binding(id, BindingTarget::Text, text);
    }

    fn text(&self, id: &str) -> Option<String> {
        self.binding_text(id, BindingTarget::Text)
    }

    fn set_value(&mut self, id: &str, value: &str) {
        if let Some(element) = self.element_mut(id) {
            element.value = value.to_string();
        }
    }

    fn value(&self, id: &str) -> Option<String> {
        self.elements.get(id).map(|element| element.value.clone())
    }

    fn set_class(&mut self, id: &str, class: &str, enabled: bool) {
        if let Some(element) = self.element_mut(id) {
            if enabled {
                element.classes.insert(class.to_string());
            } else {
                element.classes.remove(class);
            }
        }
    }

    fn has_class(&self, id: &str, class: &str) -> bool {
        self.elements
            .get(id)
            .map(|element| element.classes.contains(class))
            .unwrap_or(false)
    }

    fn set_visible(&mut self, id: &str, visible: bool) {
        if let Some(element) = self.element_mut(id) {
            element.hidden = !visible;
        }
    }

    fn is_visible(&self, id: &str) -> bool {
        self.elements
            .get(id)
            .map(|element| !element.hidden)
            .unwrap_or(false)
    }

    fn replace_children(&mut self, id: &str, children: Vec<Fragment>) {
        if let Some(element) = self.element_mut(id) {
            element.children = children;
        }
    }

    fn children(&self, id: &str) -> Vec<Fragment> {
        self.elements
            .get(id)
            .map(|element| element.children.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bound_nodes_cover_all_targets() {
        let doc = MemoryDocument::new()
            .with_binding("search", BindingTarget::Placeholder, "search_transactions")
            .with_binding("search", BindingTarget::Title, "search_transactions")
            .with_binding("nav", BindingTarget::Text, "dashboard");

        let nodes = doc.bound_nodes();
        assert_eq!(nodes.len(), 3);
        assert_eq!(nodes[0].element, "nav");
        assert!(nodes
            .iter()
            .any(|n| n.element == "search" && n.target == BindingTarget::Placeholder));
    }

    #[test]
    fn test_rebinding_same_target_replaces_key() {
        let doc = MemoryDocument::new()
            .with_binding("nav", BindingTarget::Text, "dashboard")
            .with_binding("nav", BindingTarget::Text, "analytics");

        let nodes = doc.bound_nodes();
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].key, "analytics");
    }

    #[test]
    fn test_render_binding_writes_selected_slot() {
        let mut doc = MemoryDocument::new().with_element("search");
        doc.render_binding("search", BindingTarget::Placeholder, "Search...");

        assert_eq!(
            doc.binding_text("search", BindingTarget::Placeholder).as_deref(),
            Some("Search...")
        );
        assert_eq!(doc.text("search").as_deref(), Some(""));
    }

    #[test]
    fn test_writes_to_unknown_ids_are_ignored() {
        let mut doc = MemoryDocument::new();
        doc.set_text("missing", "x");
        doc.set_class("missing", "active", true);

        assert!(!doc.contains("missing"));
        assert_eq!(doc.text("missing"), None);
        assert!(!doc.has_class("missing", "active"));
    }

    #[test]
    fn test_classes_toggle() {
        let mut doc = MemoryDocument::new().with_classes("menu-dashboard", &["menu-item", "active"]);
        doc.set_class("menu-dashboard", "active", false);

        assert!(doc.has_class("menu-dashboard", "menu-item"));
        assert!(!doc.has_class("menu-dashboard", "active"));
    }

    #[test]
    fn test_visibility_defaults_to_visible() {
        let mut doc = MemoryDocument::new().with_element("calculation-result");
        assert!(doc.is_visible("calculation-result"));

        doc.set_visible("calculation-result", false);
        assert!(!doc.is_visible("calculation-result"));
    }

    #[test]
    fn test_replace_children() {
        let mut doc = MemoryDocument::new().with_element("merchants-grid");
        doc.replace_children("merchants-grid", vec![Fragment::new("div"), Fragment::new("div")]);
        assert_eq!(doc.children("merchants-grid").len(), 2);

        doc.replace_children("merchants-grid", Vec::new());
        assert!(doc.children("merchants-grid").is_empty());
    }
}
