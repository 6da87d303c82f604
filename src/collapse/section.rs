use kuchikikiki::NodeRef;

use crate::collapse::id::IdAllocator;
use crate::dom::{attribute, heading_level, parse_snippet, set_attribute, wrap_all};

/// Wrap the content belonging to `header` into a new section container.
///
/// A level-N header's content runs from the header's next sibling to the
/// next sibling header of level N or shallower: an `h1` section ends at the
/// next `h1`, an `h2` section at the next `h1` or `h2`, and so on. The run
/// is re-parented under a fresh `<div>`, which takes the section identifier
/// derived from the header. The wrapper is created even for an empty run.
pub fn add_section(header: &NodeRef, ids: &mut IdAllocator) -> NodeRef {
    let level = heading_level(header).expect("add_section requires an h1-h6 header");

    let run: Vec<NodeRef> = header
        .following_siblings()
        .take_while(|sibling| heading_level(sibling).map_or(true, |l| l > level))
        .collect();

    let section = parse_snippet("<div></div>");
    wrap_all(header, &run, &section);
    section_id(header, &section, ids);
    section
}

/// Header identifier, allocated and assigned when missing or empty.
pub fn header_id(header: &NodeRef, ids: &mut IdAllocator) -> String {
    match attribute(header, "id") {
        Some(id) if !id.is_empty() => id,
        _ => {
            let id = ids.generate_unique_id(header);
            set_attribute(header, "id", &id);
            id
        }
    }
}

/// Section identifier, `<header-id>-section`, assigned when missing or
/// empty. An empty header identifier yields an empty section identifier.
pub fn section_id(header: &NodeRef, section: &NodeRef, ids: &mut IdAllocator) -> String {
    match attribute(section, "id") {
        Some(id) if !id.is_empty() => id,
        _ => {
            let header_id = header_id(header, ids);
            let id = if header_id.is_empty() {
                String::new()
            } else {
                format!("{}-section", header_id)
            };
            set_attribute(section, "id", &id);
            id
        }
    }
}
