//! HTML fragment parsing (HTML -> DocumentNode)
//!
//! html5ever implements the WHATWG tree builder, so unclosed tags, stray end
//! tags and bare entities are repaired the way a browser would. The input is
//! parsed as a document and the fragment is read back out of it: comments
//! that precede any element stay at document level, metadata-like tags are
//! routed to `head`, everything else lands in `body`. Concatenating those
//! three in order gives back the fragment.

use super::DocumentNode;
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

/// Parse an HTML fragment into an owned tree rooted at a `Fragment` node.
///
/// Never fails; the parser's error recovery always produces a tree.
pub fn parse_fragment(content: &str) -> DocumentNode {
    if content.is_empty() {
        return DocumentNode::fragment(Vec::new());
    }

    let dom = parse_document(RcDom::default(), Default::default()).one(content);

    let mut children = Vec::new();
    for child in dom.document.children.borrow().iter() {
        match &child.data {
            NodeData::Element { name, .. } if name.local.as_ref() == "html" => {
                collect_html_children(child, &mut children);
            }
            NodeData::Comment { contents } => {
                children.push(DocumentNode::comment(contents.to_string()));
            }
            _ => {}
        }
    }

    DocumentNode::fragment(children)
}

/// Flatten `<html>` into head content, then body content, keeping comments.
fn collect_html_children(html: &Handle, output: &mut Vec<DocumentNode>) {
    for child in html.children.borrow().iter() {
        match &child.data {
            NodeData::Element { name, .. }
                if matches!(name.local.as_ref(), "head" | "body") =>
            {
                output.extend(child.children.borrow().iter().filter_map(convert_node));
            }
            _ => output.extend(convert_node(child)),
        }
    }
}

/// Copy one rcdom node (and its subtree) into a [`DocumentNode`]
fn convert_node(handle: &Handle) -> Option<DocumentNode> {
    match &handle.data {
        NodeData::Element {
            name,
            attrs,
            template_contents,
            ..
        } => {
            let attributes = attrs
                .borrow()
                .iter()
                .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
                .collect();
            let mut children: Vec<DocumentNode> = handle
                .children
                .borrow()
                .iter()
                .filter_map(convert_node)
                .collect();
            // `<template>` content lives in a separate document fragment
            if let Some(contents) = template_contents.borrow().as_ref() {
                children.extend(contents.children.borrow().iter().filter_map(convert_node));
            }
            Some(DocumentNode::element(
                name.local.to_string(),
                attributes,
                children,
            ))
        }
        NodeData::Text { contents } => Some(DocumentNode::text(contents.borrow().to_string())),
        NodeData::Comment { contents } => Some(DocumentNode::comment(contents.to_string())),
        // Doctypes and processing instructions carry no fragment content
        _ => None,
    }
}
