use kuchikikiki::NodeRef;

use crate::dom::query::{attribute, set_attribute};

/// Whether the element's `class` attribute contains `class` as a
/// whitespace-separated token.
pub fn has_class(node: &NodeRef, class: &str) -> bool {
    attribute(node, "class")
        .map_or(false, |value| value.split_whitespace().any(|c| c == class))
}

/// Add a class token unless already present.
pub fn add_class(node: &NodeRef, class: &str) {
    if has_class(node, class) {
        return;
    }
    let value = match attribute(node, "class") {
        Some(existing) if !existing.trim().is_empty() => format!("{} {}", existing.trim(), class),
        _ => class.to_string(),
    };
    set_attribute(node, "class", &value);
}

/// Remove every occurrence of a class token, keeping the others.
pub fn remove_class(node: &NodeRef, class: &str) {
    let existing = match attribute(node, "class") {
        Some(existing) => existing,
        None => return,
    };
    let kept: Vec<&str> = existing
        .split_whitespace()
        .filter(|c| *c != class)
        .collect();
    set_attribute(node, "class", &kept.join(" "));
}
