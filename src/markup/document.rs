use super::element::Element;
use super::element::Node;
use regex::Regex;
use std::sync::LazyLock;

/// Tags, comments and doctype declarations. Attribute values may hide `>`
/// inside quotes, so quoted runs are consumed whole.
static TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)<!--.*?(?:-->|$)|<![^>]*>|<(/?)([A-Za-z][A-Za-z0-9]*)((?:[^>"']|"[^"]*"|'[^']*')*)>"#)
        .expect("token pattern")
});

static ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([A-Za-z_:][-A-Za-z0-9_:.]*)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+)))?"#)
        .expect("attribute pattern")
});

/// Elements that never carry content.
const VOID: [&str; 8] = ["area", "br", "col", "hr", "img", "input", "link", "meta"];

/// Parsed markup together with its source.
///
/// The tree is rooted at a synthetic `#root` element spanning the whole
/// source, so queries never need to special-case the top level.
#[derive(Debug, Clone)]
pub struct Document {
    source: String,
    root: Element,
}

impl Document {
    pub fn parse(source: &str) -> Self {
        let mut stack = vec![Element::new("#root".to_string(), Vec::new(), 0..0)];
        let mut cursor = 0;
        for caps in TOKEN.captures_iter(source) {
            let Some(token) = caps.get(0) else { continue };
            if token.start() > cursor {
                Self::text(&mut stack, &source[cursor..token.start()]);
            }
            cursor = token.end();
            let Some(name) = caps.get(2) else { continue };
            let tag = name.as_str().to_ascii_lowercase();
            let closing = caps.get(1).is_some_and(|m| m.as_str() == "/");
            match closing {
                true => Self::end(&mut stack, &tag, token.start(), token.end()),
                false => {
                    let raw = caps.get(3).map(|m| m.as_str()).unwrap_or_default();
                    Self::implicit(&mut stack, &tag, token.start());
                    let element = Element::new(tag.clone(), Self::attributes(raw), token.range());
                    match VOID.contains(&tag.as_str()) || raw.trim_end().ends_with('/') {
                        true => Self::attach(&mut stack, element),
                        false => stack.push(element),
                    }
                }
            }
        }
        if cursor < source.len() {
            Self::text(&mut stack, &source[cursor..]);
        }
        Self::unwind(&mut stack, 1, source.len());
        let mut root = stack.pop().unwrap_or_else(|| Element::new("#root".to_string(), Vec::new(), 0..0));
        root.close(source.len(), source.len());
        Self {
            source: source.to_string(),
            root,
        }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }
    /// Full markup of an element, tags included.
    pub fn markup(&self, element: &Element) -> &str {
        self.source.get(element.span()).unwrap_or_default()
    }
    /// Markup between an element's opening and closing tags.
    pub fn inner(&self, element: &Element) -> &str {
        self.source.get(element.inner()).unwrap_or_default()
    }
    pub fn find_all(&self, tag: &str) -> Vec<&Element> {
        self.root.find_all(tag)
    }

    fn text(stack: &mut [Element], text: &str) {
        if let Some(top) = stack.last_mut() {
            top.push(Node::Text(text.to_string()));
        }
    }

    fn attach(stack: &mut Vec<Element>, element: Element) {
        match stack.last_mut() {
            Some(parent) => parent.push(Node::Element(element)),
            None => stack.push(element),
        }
    }

    /// Cells and rows close their open siblings: `<td>a<td>b` is two cells.
    fn implicit(stack: &mut Vec<Element>, tag: &str, at: usize) {
        let scope: &[&str] = match tag {
            "td" | "th" => &["td", "th", "tr", "table"],
            "tr" => &["tr", "table"],
            _ => return,
        };
        let nearest = stack
            .iter()
            .rposition(|e| scope.contains(&e.tag()))
            .filter(|&i| i > 0);
        if let Some(i) = nearest {
            if stack[i].is(tag) || (tag != "tr" && (stack[i].is("td") || stack[i].is("th"))) {
                Self::unwind(stack, i, at);
            }
        }
    }

    /// Closes the nearest open element with this tag. Stray closing tags are
    /// dropped; anything opened inside the match is closed with it.
    fn end(stack: &mut Vec<Element>, tag: &str, start: usize, end: usize) {
        let open = stack
            .iter()
            .rposition(|e| e.is(tag))
            .filter(|&i| i > 0);
        if let Some(i) = open {
            Self::unwind(stack, i + 1, start);
            if let Some(mut element) = stack.pop() {
                element.close(start, end);
                Self::attach(stack, element);
            }
        }
    }

    /// Pops every element at or above `depth`, closing each at `at`.
    fn unwind(stack: &mut Vec<Element>, depth: usize, at: usize) {
        while stack.len() > depth.max(1) {
            if let Some(mut element) = stack.pop() {
                element.close(at, at);
                Self::attach(stack, element);
            }
        }
    }

    fn attributes(raw: &str) -> Vec<(String, String)> {
        ATTRIBUTE
            .captures_iter(raw)
            .map(|caps| {
                let name = caps[1].to_ascii_lowercase();
                let value = caps
                    .get(2)
                    .or_else(|| caps.get(3))
                    .or_else(|| caps.get(4))
                    .map(|m| m.as_str().to_string())
                    .unwrap_or_default();
                (name, value)
            })
            .collect()
    }
}
