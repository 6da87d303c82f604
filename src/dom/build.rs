use kuchikikiki::traits::TendrilSink;
use kuchikikiki::{parse_html, NodeRef};

use crate::utils::error::BoxResult;

/// Parse a complete HTML document.
pub fn parse_document(html: &str) -> NodeRef {
    parse_html().one(html)
}

/// Parse an HTML snippet and return its first node, detached from the
/// throwaway document it was parsed into.
///
/// Panics if the snippet yields no node; callers pass literal markup.
pub fn parse_snippet(html: &str) -> NodeRef {
    let document = parse_html().one(html);
    let body = document
        .select_first("body")
        .expect("parsed document always has a body");
    let node = body
        .as_node()
        .first_child()
        .expect("snippet yielded no nodes");
    node.detach();
    node
}

/// Serialize a node (and its subtree) back to HTML.
pub fn serialize(node: &NodeRef) -> BoxResult<String> {
    let mut buf = Vec::new();
    node.serialize(&mut buf)?;
    Ok(String::from_utf8(buf)?)
}
