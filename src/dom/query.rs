use kuchikikiki::NodeRef;

/// Read an attribute from an element node.
pub fn attribute(node: &NodeRef, name: &str) -> Option<String> {
    let element = node.as_element()?;
    let attributes = element.attributes.borrow();
    attributes.get(name).map(str::to_string)
}

/// Set an attribute on an element node, overwriting any previous value.
/// Non-element nodes are left untouched.
pub fn set_attribute(node: &NodeRef, name: &str, value: &str) {
    if let Some(element) = node.as_element() {
        element.attributes.borrow_mut().insert(name, value.to_string());
    }
}

/// Nesting level of a header element (`h1`-`h6` map to 1-6).
///
/// Everything else, elements and non-elements alike, yields `None` and is
/// never treated as a section boundary.
pub fn heading_level(node: &NodeRef) -> Option<u8> {
    let element = node.as_element()?;
    match element.name.local.as_ref() {
        "h1" => Some(1),
        "h2" => Some(2),
        "h3" => Some(3),
        "h4" => Some(4),
        "h5" => Some(5),
        "h6" => Some(6),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::build::{parse_document, parse_snippet};

    #[test]
    fn test_attribute_round_trip() {
        let node = parse_snippet("<div></div>");

        assert_eq!(attribute(&node, "id"), None);
        set_attribute(&node, "id", "intro");
        assert_eq!(attribute(&node, "id").as_deref(), Some("intro"));
        set_attribute(&node, "id", "intro-2");
        assert_eq!(attribute(&node, "id").as_deref(), Some("intro-2"));
    }

    #[test]
    fn test_heading_level_of_headers() {
        for level in 1..=6u8 {
            let node = parse_snippet(&format!("<h{}>x</h{}>", level, level));
            assert_eq!(heading_level(&node), Some(level));
        }
    }

    #[test]
    fn test_heading_level_ignores_other_nodes() {
        let div = parse_snippet("<div>x</div>");
        assert_eq!(heading_level(&div), None);

        let root = parse_document("<p>just text</p>");
        let text = root.select_first("p").unwrap().as_node().first_child().unwrap();
        assert_eq!(heading_level(&text), None);
    }
}
