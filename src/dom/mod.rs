//! Document abstraction.
//!
//! The dashboard never touches a real browser DOM directly. Everything it
//! writes goes through the [`Document`] trait: plain elements addressed by
//! id, and *bound nodes* that display a translated string for a key.
//! [`MemoryDocument`] is the in-process implementation used by the binary
//! and the tests.

mod fragment;
mod layout;
mod memory;
mod registry;

pub use fragment::Fragment;
pub use layout::standard_layout;
pub use memory::MemoryDocument;
pub use registry::{ElementId, ElementRegistry};

/// Where a bound node renders its translated string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BindingTarget {
    /// Text content (`data-translate`)
    Text,
    /// Input placeholder (`data-translate-placeholder`)
    Placeholder,
    /// Title attribute (`data-translate-title`)
    Title,
}

impl BindingTarget {
    /// The markup attribute that declares this binding.
    pub fn attribute(&self) -> &'static str {
        match self {
            BindingTarget::Text => "data-translate",
            BindingTarget::Placeholder => "data-translate-placeholder",
            BindingTarget::Title => "data-translate-title",
        }
    }
}

/// One translation binding on one element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundNode {
    pub element: String,
    pub key: String,
    pub target: BindingTarget,
}

/// The set of addressable elements the dashboard renders into.
///
/// Writes to ids the document does not know are ignored; required ids are
/// checked once up front by [`ElementRegistry::validate`].
pub trait Document {
    fn contains(&self, id: &str) -> bool;

    /// Every translation binding currently in the document.
    fn bound_nodes(&self) -> Vec<BoundNode>;

    /// Render `text` into one binding of an element.
    fn render_binding(&mut self, id: &str, target: BindingTarget, text: &str);

    /// Current rendered value of one binding.
    fn binding_text(&self, id: &str, target: BindingTarget) -> Option<String>;

    fn set_text(&mut self, id: &str, text: &str);
    fn text(&self, id: &str) -> Option<String>;

    /// Form control value (inputs, selects).
    fn set_value(&mut self, id: &str, value: &str);
    fn value(&self, id: &str) -> Option<String>;

    fn set_class(&mut self, id: &str, class: &str, enabled: bool);
    fn has_class(&self, id: &str, class: &str) -> bool;

    fn set_visible(&mut self, id: &str, visible: bool);
    fn is_visible(&self, id: &str) -> bool;

    /// Replace the content of a container (table body, grid, select).
    fn replace_children(&mut self, id: &str, children: Vec<Fragment>);
    fn children(&self, id: &str) -> Vec<Fragment>;
}
