/// A detached element tree built by the row/card renderers.
///
/// Fragments are plain data: building one has no effect until it is handed
/// to [`Document::replace_children`](super::Document::replace_children).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Fragment {
    pub tag: String,
    pub classes: Vec<String>,
    pub attributes: Vec<(String, String)>,
    pub text: Option<String>,
    pub children: Vec<Fragment>,
}

impl Fragment {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Self::default()
        }
    }

    /// Add one or more space-separated classes.
    pub fn class(mut self, classes: &str) -> Self {
        self.classes
            .extend(classes.split_whitespace().map(str::to_string));
        self
    }

    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.push((name.to_string(), value.to_string()));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn child(mut self, child: Fragment) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Fragment>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Depth-first search (self included) for elements carrying `class`.
    pub fn find_by_class(&self, class: &str) -> Vec<&Fragment> {
        let mut found = Vec::new();
        self.collect(&mut |f: &Fragment| f.has_class(class), &mut found);
        found
    }

    /// Depth-first search (self included) for elements with `tag`.
    pub fn find_by_tag(&self, tag: &str) -> Vec<&Fragment> {
        let mut found = Vec::new();
        self.collect(&mut |f: &Fragment| f.tag == tag, &mut found);
        found
    }

    fn collect<'a>(&'a self, pred: &mut dyn FnMut(&Fragment) -> bool, out: &mut Vec<&'a Fragment>) {
        if pred(self) {
            out.push(self);
        }
        for child in &self.children {
            child.collect(pred, out);
        }
    }

    /// Concatenated text of this element and its descendants, space separated.
    pub fn text_content(&self) -> String {
        let mut parts = Vec::new();
        self.gather_text(&mut parts);
        parts.join(" ")
    }

    fn gather_text<'a>(&'a self, parts: &mut Vec<&'a str>) {
        if let Some(text) = self.text.as_deref().filter(|t| !t.is_empty()) {
            parts.push(text);
        }
        for child in &self.children {
            child.gather_text(parts);
        }
    }
}
