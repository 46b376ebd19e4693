//! Minimal host document: an element tree addressed by id and class.
//! Controllers hold `ElementId`s and mutate the tree through `&mut Document`.

use crate::sanitize::html_escape;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(usize);

#[derive(Debug, Clone)]
struct Element {
    tag: String,
    attrs: Vec<(String, String)>,
    classes: Vec<String>,
    value: String,
    inner_html: String,
    children: Vec<ElementId>,
}

/// Elements that never have a closing tag.
const VOID_TAGS: &[&str] = &["input", "br", "hr", "img", "meta", "link"];

#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Element>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Document {
            nodes: vec![Element {
                tag: "body".to_string(),
                attrs: Vec::new(),
                classes: Vec::new(),
                value: String::new(),
                inner_html: String::new(),
                children: Vec::new(),
            }],
        }
    }

    pub fn root(&self) -> ElementId {
        ElementId(0)
    }

    fn node(&self, id: ElementId) -> &Element {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: ElementId) -> &mut Element {
        &mut self.nodes[id.0]
    }

    // ── Construction ──────────────────────────────────

    /// Create an element under `parent`. A `class` attribute is split into
    /// the class list; a `value` attribute seeds the control value.
    pub fn create_in(&mut self, parent: ElementId, tag: &str, attrs: &[(&str, &str)]) -> ElementId {
        let mut el = Element {
            tag: tag.to_string(),
            attrs: Vec::new(),
            classes: Vec::new(),
            value: String::new(),
            inner_html: String::new(),
            children: Vec::new(),
        };
        for (k, v) in attrs {
            match *k {
                "class" => el.classes = v.split_whitespace().map(String::from).collect(),
                "value" => el.value = v.to_string(),
                _ => el.attrs.push((k.to_string(), v.to_string())),
            }
        }
        let id = ElementId(self.nodes.len());
        self.nodes.push(el);
        self.node_mut(parent).children.push(id);
        id
    }

    // ── Queries ───────────────────────────────────────

    /// All elements under `root` (inclusive) in document order.
    pub fn descendants(&self, root: ElementId) -> Vec<ElementId> {
        let mut out = Vec::new();
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.node(id).children.iter().rev().copied());
        }
        out
    }

    pub fn by_id(&self, id: &str) -> Option<ElementId> {
        self.descendants(self.root())
            .into_iter()
            .find(|e| self.attr(*e, "id") == Some(id))
    }

    pub fn by_class(&self, class: &str) -> Vec<ElementId> {
        self.by_class_within(self.root(), class)
    }

    pub fn by_class_within(&self, root: ElementId, class: &str) -> Vec<ElementId> {
        self.descendants(root)
            .into_iter()
            .filter(|e| self.has_class(*e, class))
            .collect()
    }

    pub fn children(&self, id: ElementId) -> &[ElementId] {
        &self.node(id).children
    }

    pub fn tag(&self, id: ElementId) -> &str {
        &self.node(id).tag
    }

    // ── Attributes & classes ──────────────────────────

    pub fn attr(&self, id: ElementId, name: &str) -> Option<&str> {
        self.node(id)
            .attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn set_attr(&mut self, id: ElementId, name: &str, value: &str) {
        let attrs = &mut self.node_mut(id).attrs;
        match attrs.iter_mut().find(|(k, _)| k == name) {
            Some(slot) => slot.1 = value.to_string(),
            None => attrs.push((name.to_string(), value.to_string())),
        }
    }

    pub fn has_class(&self, id: ElementId, class: &str) -> bool {
        self.node(id).classes.iter().any(|c| c == class)
    }

    pub fn classes(&self, id: ElementId) -> &[String] {
        &self.node(id).classes
    }

    pub fn add_class(&mut self, id: ElementId, class: &str) {
        if !self.has_class(id, class) {
            self.node_mut(id).classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, id: ElementId, class: &str) {
        self.node_mut(id).classes.retain(|c| c != class);
    }

    /// Flip `class` and return whether it is now set.
    pub fn toggle_class(&mut self, id: ElementId, class: &str) -> bool {
        if self.has_class(id, class) {
            self.remove_class(id, class);
            false
        } else {
            self.add_class(id, class);
            true
        }
    }

    // ── Content ───────────────────────────────────────

    pub fn inner_html(&self, id: ElementId) -> &str {
        &self.node(id).inner_html
    }

    /// Replace the element's content wholesale. Existing children are dropped.
    pub fn set_inner_html(&mut self, id: ElementId, html: String) {
        let el = self.node_mut(id);
        el.children.clear();
        el.inner_html = html;
    }

    pub fn set_text(&mut self, id: ElementId, text: &str) {
        self.set_inner_html(id, html_escape(text));
    }

    pub fn value(&self, id: ElementId) -> &str {
        &self.node(id).value
    }

    pub fn set_value(&mut self, id: ElementId, value: &str) {
        self.node_mut(id).value = value.to_string();
    }

    /// Value of the first control named `name` inside `form`.
    pub fn form_field(&self, form: ElementId, name: &str) -> Option<&str> {
        self.descendants(form)
            .into_iter()
            .find(|e| *e != form && self.attr(*e, "name") == Some(name))
            .map(|e| self.value(e))
    }

    // ── Serialization ─────────────────────────────────

    pub fn to_html(&self) -> String {
        let mut html = String::new();
        self.write_html(self.root(), &mut html, None);
        html
    }

    pub fn element_html(&self, id: ElementId) -> String {
        let mut html = String::new();
        self.write_html(id, &mut html, None);
        html
    }

    /// `selected` is the enclosing select's value, if any. A select carries
    /// its value as the `selected` flag on the matching option.
    fn write_html(&self, id: ElementId, html: &mut String, selected: Option<&str>) {
        let el = self.node(id);
        html.push('<');
        html.push_str(&el.tag);
        for (k, v) in &el.attrs {
            html.push_str(&format!(" {}=\"{}\"", k, html_escape(v)));
        }
        if !el.classes.is_empty() {
            html.push_str(&format!(" class=\"{}\"", html_escape(&el.classes.join(" "))));
        }
        let is_textarea = el.tag == "textarea";
        let is_select = el.tag == "select";
        if !el.value.is_empty() && !is_textarea && !is_select {
            html.push_str(&format!(" value=\"{}\"", html_escape(&el.value)));
        }
        if el.tag == "option" && selected == Some(el.value.as_str()) {
            html.push_str(" selected");
        }
        html.push('>');
        if VOID_TAGS.contains(&el.tag.as_str()) {
            return;
        }
        if is_textarea {
            html.push_str(&html_escape(&el.value));
        }
        let child_selected = if is_select { Some(el.value.as_str()) } else { selected };
        for child in &el.children {
            self.write_html(*child, html, child_selected);
        }
        html.push_str(&el.inner_html);
        html.push_str(&format!("</{}>", el.tag));
    }
}
