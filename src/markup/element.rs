use super::entity::decode;
use std::ops::Range;

/// A child of an element: either a nested element or a run of raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// One element of the markup tree.
///
/// Tag and attribute names are lowercased. `span` covers the opening tag
/// through the closing tag (or the point where the element was implicitly
/// closed); `inner` covers only the content between them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attrs: Vec<(String, String)>,
    children: Vec<Node>,
    span: Range<usize>,
    inner: Range<usize>,
}

impl Element {
    pub fn new(tag: String, attrs: Vec<(String, String)>, span: Range<usize>) -> Self {
        let inner = span.end..span.end;
        Self {
            tag,
            attrs,
            children: Vec::new(),
            span,
            inner,
        }
    }
    pub(crate) fn push(&mut self, node: Node) {
        self.children.push(node);
    }
    pub(crate) fn close(&mut self, inner_end: usize, span_end: usize) {
        self.inner.end = inner_end.max(self.inner.start);
        self.span.end = span_end.max(self.inner.end);
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }
    pub fn is(&self, tag: &str) -> bool {
        self.tag == tag
    }
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }
    pub fn inner(&self) -> Range<usize> {
        self.inner.clone()
    }
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Direct child elements.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        })
    }
    /// Direct child cells of a row.
    pub fn cells(&self) -> Vec<&Element> {
        self.elements()
            .filter(|e| e.is("td") || e.is("th"))
            .collect()
    }
    /// Descendants with the given tag, in document order.
    pub fn find_all(&self, tag: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        self.walk(&mut |e| {
            if e.is(tag) {
                found.push(e)
            }
        });
        found
    }
    /// First descendant with the given tag.
    pub fn find(&self, tag: &str) -> Option<&Element> {
        self.find_all(tag).into_iter().next()
    }
    pub fn contains(&self, tag: &str) -> bool {
        self.find(tag).is_some()
    }

    /// True if the inline style carries the declaration, ignoring case and
    /// whitespace (`Width: 7em` declares `width:7em`).
    pub fn style_declares(&self, declaration: &str) -> bool {
        let squash = |s: &str| {
            s.chars()
                .filter(|c| !c.is_whitespace())
                .flat_map(char::to_lowercase)
                .collect::<String>()
        };
        self.attr("style")
            .map(|style| squash(style).contains(&squash(declaration)))
            .unwrap_or(false)
    }

    /// Decoded text of every descendant. Line breaks become newlines.
    pub fn text(&self) -> String {
        let mut text = String::new();
        self.collect_text(&mut text);
        text
    }

    fn collect_text(&self, text: &mut String) {
        for child in self.children.iter() {
            match child {
                Node::Text(t) => text.push_str(&decode(t)),
                Node::Element(e) if e.is("br") => text.push('\n'),
                Node::Element(e) => e.collect_text(text),
            }
        }
    }

    fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Element)) {
        for child in self.elements() {
            visit(child);
            child.walk(visit);
        }
    }
}
