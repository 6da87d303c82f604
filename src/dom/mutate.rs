use kuchikikiki::{NodeData, NodeRef};

/// Re-parent a run of sibling nodes under `wrapper`.
///
/// The wrapper is inserted where the run's first node was, or directly after
/// `anchor` when the run is empty, so an empty wrapper still lands in the
/// right place.
pub fn wrap_all(anchor: &NodeRef, nodes: &[NodeRef], wrapper: &NodeRef) {
    match nodes.first() {
        Some(first) => first.insert_before(wrapper.clone()),
        None => anchor.insert_after(wrapper.clone()),
    }
    for node in nodes {
        wrapper.append(node.clone());
    }
}

/// Move all of `node`'s children into `wrapper`, then append `wrapper` as
/// the node's only child.
pub fn wrap_inner(node: &NodeRef, wrapper: &NodeRef) {
    let children: Vec<NodeRef> = node.children().collect();
    for child in children {
        wrapper.append(child);
    }
    node.append(wrapper.clone());
}

/// Copy a subtree, attributes included. The copy shares nothing with the
/// original.
pub fn deep_clone(node: &NodeRef) -> NodeRef {
    let copy = match node.data() {
        NodeData::Element(element) => NodeRef::new_element(
            element.name.clone(),
            element.attributes.borrow().map.clone(),
        ),
        NodeData::Text(text) => NodeRef::new_text(text.borrow().clone()),
        NodeData::Comment(text) => NodeRef::new_comment(text.borrow().clone()),
        NodeData::ProcessingInstruction(contents) => {
            let (target, data) = contents.borrow().clone();
            NodeRef::new_processing_instruction(target, data)
        }
        NodeData::Doctype(doctype) => NodeRef::new_doctype(
            doctype.name.clone(),
            doctype.public_id.clone(),
            doctype.system_id.clone(),
        ),
        // document nodes never occur below an element
        NodeData::Document(_) | NodeData::DocumentFragment => NodeRef::new_document(),
    };
    for child in node.children() {
        copy.append(deep_clone(&child));
    }
    copy
}

/// Detach every descendant element whose tag name is in `names`.
pub fn remove_descendants(root: &NodeRef, names: &[&str]) {
    let doomed: Vec<NodeRef> = root
        .descendants()
        .filter(|node| {
            node.as_element()
                .map_or(false, |element| names.contains(&element.name.local.as_ref()))
        })
        .collect();
    for node in doomed {
        node.detach();
    }
}
