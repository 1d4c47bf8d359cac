//! Markup tree
//!
//! A small typed HTML tree. Text and attribute values are escaped on
//! render; there is no raw-HTML node.

/// Elements that never have children or a closing tag
const VOID_ELEMENTS: [&str; 5] = ["br", "hr", "img", "input", "meta"];

/// A node of the markup tree
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    /// Render the subtree to an HTML string
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }

    fn render_into(&self, out: &mut String) {
        match self {
            Node::Text(text) => escape_into(text, out),
            Node::Element(element) => element.render_into(out),
        }
    }

    /// Find the first element with the given id, depth-first
    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        match self {
            Node::Text(_) => None,
            Node::Element(element) => {
                if element.get_attr("id") == Some(id) {
                    return Some(element);
                }
                element.children.iter().find_map(|c| c.find_by_id(id))
            }
        }
    }

    /// Concatenated text content of the subtree
    pub fn text_content(&self) -> String {
        match self {
            Node::Text(text) => text.clone(),
            Node::Element(element) => element.text_content(),
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

/// An element with attributes and children
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: &'static str,
    pub attrs: Vec<(&'static str, String)>,
    pub children: Vec<Node>,
}

/// Start building an element
pub fn el(tag: &'static str) -> Element {
    Element {
        tag,
        attrs: Vec::new(),
        children: Vec::new(),
    }
}

impl Element {
    /// Builder method: set an attribute, replacing any previous value
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
        self
    }

    pub fn id(self, id: impl Into<String>) -> Self {
        self.attr("id", id)
    }

    pub fn class(self, class: impl Into<String>) -> Self {
        self.attr("class", class)
    }

    /// Builder method: append a child
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Builder method: append several children
    pub fn children<I, N>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Value of an attribute, if set
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn text_content(&self) -> String {
        self.children.iter().map(Node::text_content).collect()
    }

    fn render_into(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            escape_into(value, out);
            out.push('"');
        }
        out.push('>');

        if VOID_ELEMENTS.contains(&self.tag) {
            return;
        }

        for child in &self.children {
            child.render_into(out);
        }
        out.push_str("</");
        out.push_str(self.tag);
        out.push('>');
    }
}

fn escape_into(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}

/// Escape a string for HTML text or attribute context
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    escape_into(text, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_nested() {
        let node: Node = el("div")
            .class("content-section")
            .child(el("h2").class("section-title").child("Comercio"))
            .child(el("p").child("texto"))
            .into();

        assert_eq!(
            node.render(),
            r#"<div class="content-section"><h2 class="section-title">Comercio</h2><p>texto</p></div>"#
        );
    }

    #[test]
    fn test_escapes_text_and_attributes() {
        let node: Node = el("div")
            .attr("data-figure", r#"{"a":"<b>"}"#)
            .child("O'Higgins & <Maule>")
            .into();

        assert_eq!(
            node.render(),
            r#"<div data-figure="{&quot;a&quot;:&quot;&lt;b&gt;&quot;}">O&#39;Higgins &amp; &lt;Maule&gt;</div>"#
        );
    }

    #[test]
    fn test_void_elements() {
        let node: Node = el("img").attr("src", "/assets/icons/github.png").into();
        assert_eq!(node.render(), r#"<img src="/assets/icons/github.png">"#);
    }

    #[test]
    fn test_attr_replaces() {
        let element = el("nav").class("nav-menu").class("nav-menu active");
        assert_eq!(element.get_attr("class"), Some("nav-menu active"));
        assert_eq!(element.attrs.len(), 1);
    }

    #[test]
    fn test_find_by_id_and_text() {
        let node: Node = el("main")
            .child(el("h2").id("subtitle").child("Por ").child("Miguel"))
            .into();
        let found = node.find_by_id("subtitle").unwrap();
        assert_eq!(found.text_content(), "Por Miguel");
        assert!(node.find_by_id("missing").is_none());
    }
}
