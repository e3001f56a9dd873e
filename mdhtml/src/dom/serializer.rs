//! HTML serialization (DocumentNode -> HTML)
//!
//! The owned tree is rebuilt as an rcdom and handed to html5ever's serializer,
//! which knows the HTML escaping rules, void elements and raw-text elements.
//! Only the fragment's children are emitted; the root itself has no markup.

use super::{DocumentNode, NodeKind};
use crate::error::ConvertError;
use html5ever::{
    ns, serialize, serialize::SerializeOpts, serialize::TraversalScope, Attribute, LocalName,
    QualName,
};
use markup5ever_rcdom::{Handle, Node, NodeData, SerializableHandle};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Serialize the children of `root` as an HTML fragment string
pub fn serialize_fragment(root: &DocumentNode) -> Result<String, ConvertError> {
    let mut output = Vec::new();

    // IncludeNode serializes the element AND its children
    let opts = SerializeOpts {
        traversal_scope: TraversalScope::IncludeNode,
        ..Default::default()
    };

    for child in &root.children {
        let serializable = SerializableHandle::from(build_handle(child));
        serialize(&mut output, &serializable, opts.clone()).map_err(|e| {
            ConvertError::SerializationError(format!("HTML serialization failed: {e}"))
        })?;
    }

    String::from_utf8(output)
        .map_err(|e| ConvertError::SerializationError(format!("UTF-8 conversion failed: {e}")))
}

/// Children are attached as plain children, template elements included: the
/// rcdom serializer only walks `children`.
fn build_handle(node: &DocumentNode) -> Handle {
    let handle = match &node.kind {
        NodeKind::Element { tag, attributes } => create_element(tag, attributes),
        NodeKind::Text(text) => create_text(text),
        NodeKind::Comment(text) => create_comment(text),
        // A nested fragment has no markup of its own; a template element
        // is the closest container that serializes only what it holds.
        NodeKind::Fragment => create_element("template", &[]),
    };

    for child in &node.children {
        handle.children.borrow_mut().push(build_handle(child));
    }

    handle
}

/// Create an element node
fn create_element(tag: &str, attrs: &[(String, String)]) -> Handle {
    let qual_name = QualName::new(None, ns!(html), LocalName::from(tag));
    let attributes = attrs
        .iter()
        .map(|(name, value)| Attribute {
            name: QualName::new(None, ns!(), LocalName::from(name.as_str())),
            value: value.clone().into(),
        })
        .collect();

    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Element {
            name: qual_name,
            attrs: RefCell::new(attributes),
            template_contents: Default::default(),
            mathml_annotation_xml_integration_point: false,
        },
    })
}

/// Create a text node
fn create_text(text: &str) -> Handle {
    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Text {
            contents: RefCell::new(text.to_string().into()),
        },
    })
}

/// Create a comment node
fn create_comment(text: &str) -> Handle {
    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Comment {
            contents: text.to_string().into(),
        },
    })
}
