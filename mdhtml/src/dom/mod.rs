//! Owned document tree shared by both converters
//!
//! html5ever hands back a reference-counted DOM with interior mutability.
//! Converters want a plain owned tree they can walk (HTML -> Markdown) or
//! rebuild (tree fixes), so the parse result is copied once into
//! [`DocumentNode`] and the rcdom is dropped.
//!
//!     parse_fragment:     &str -> RcDom -> DocumentNode
//!     serialize_fragment: DocumentNode -> RcDom -> &str

mod parser;
mod serializer;

pub use parser::parse_fragment;
pub use serializer::serialize_fragment;

/// What a [`DocumentNode`] holds
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// Root of a parsed fragment; only ever at the top of a tree
    Fragment,
    /// An element with its lowercase tag name and attributes in source order
    Element {
        tag: String,
        attributes: Vec<(String, String)>,
    },
    /// Character data, entities already decoded
    Text(String),
    /// Comment contents without the `<!--`/`-->` delimiters
    Comment(String),
}

/// A node of parsed markup, owning its children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentNode {
    pub kind: NodeKind,
    pub children: Vec<DocumentNode>,
}

impl DocumentNode {
    pub fn fragment(children: Vec<DocumentNode>) -> Self {
        Self {
            kind: NodeKind::Fragment,
            children,
        }
    }

    pub fn element(
        tag: impl Into<String>,
        attributes: Vec<(String, String)>,
        children: Vec<DocumentNode>,
    ) -> Self {
        Self {
            kind: NodeKind::Element {
                tag: tag.into(),
                attributes,
            },
            children,
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Text(text.into()),
            children: Vec::new(),
        }
    }

    pub fn comment(text: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Comment(text.into()),
            children: Vec::new(),
        }
    }

    /// Tag name for elements, `None` for everything else
    pub fn tag(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Element { tag, .. } => Some(tag),
            _ => None,
        }
    }

    pub fn is_element(&self, name: &str) -> bool {
        self.tag() == Some(name)
    }

    pub fn attributes(&self) -> &[(String, String)] {
        match &self.kind {
            NodeKind::Element { attributes, .. } => attributes,
            _ => &[],
        }
    }

    /// Value of the named attribute, if present
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes()
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Whether the `class` attribute contains `class_name` as a whole token
    pub fn has_class(&self, class_name: &str) -> bool {
        self.classes().any(|class| class == class_name)
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.attr("class").unwrap_or("").split_ascii_whitespace()
    }

    /// True for text nodes made only of HTML whitespace
    pub fn is_whitespace(&self) -> bool {
        match &self.kind {
            NodeKind::Text(text) => text.chars().all(is_html_whitespace),
            _ => false,
        }
    }

    /// Concatenated text of all descendant text nodes, verbatim
    ///
    /// `br` elements contribute a newline so preformatted content keeps its
    /// line structure.
    pub fn text_content(&self) -> String {
        let mut output = String::new();
        self.collect_text(&mut output);
        output
    }

    fn collect_text(&self, output: &mut String) {
        match &self.kind {
            NodeKind::Text(text) => output.push_str(text),
            NodeKind::Element { tag, .. } if tag == "br" => output.push('\n'),
            NodeKind::Comment(_) => {}
            _ => {
                for child in &self.children {
                    child.collect_text(output);
                }
            }
        }
    }
}

/// Whitespace as the HTML parsing rules define it (not Unicode whitespace,
/// so `&nbsp;` survives collapsing)
pub fn is_html_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r' | '\x0c')
}
