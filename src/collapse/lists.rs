use kuchikikiki::NodeRef;
use log::debug;

use crate::collapse::id::IdAllocator;
use crate::collapse::Collapser;
use crate::dom::{
    add_class, attribute, deep_clone, has_class, parse_snippet, remove_descendants,
    set_attribute, wrap_inner,
};

fn ellipsis() -> NodeRef {
    parse_snippet("<a aria-hidden=\"true\" class=\"collapse-ellipsis\"></a>")
}

/// First direct child list container of an item, if any. Deeper descendants
/// do not count.
fn direct_sublist(item: &NodeRef) -> Option<NodeRef> {
    item.children().find(|child| {
        child
            .as_element()
            .map_or(false, |element| matches!(element.name.local.as_ref(), "ol" | "ul"))
    })
}

/// The item's identifier, derived from `label` and assigned as
/// `<slug>-item` when the item has none. Once set it is never regenerated.
fn item_id(item: &NodeRef, label: &NodeRef, ids: &mut IdAllocator) -> String {
    match attribute(item, "id") {
        Some(id) if !id.is_empty() => id,
        _ => {
            let id = ids.generate_unique_id(label);
            set_attribute(item, "id", &format!("{}-item", id));
            id
        }
    }
}

impl<'a> Collapser<'a> {
    /// Make every `ul > li` collapsible. Returns the root for chaining.
    ///
    /// An item with a direct nested list collapses that list: the item
    /// identifier comes from a label-only preview of the item (nested lists
    /// stripped) and the list takes `<id>-list`. An item without one
    /// collapses a fresh `<span>` wrapped around its inline content. Either
    /// way the item gets one trailing ellipsis marker, and its parent list
    /// the baseline collapsible markers (once per container).
    pub fn add_collapsible_lists(&mut self, root: &NodeRef) -> NodeRef {
        let items: Vec<NodeRef> = root
            .select("ul > li")
            .unwrap()
            .map(|matched| matched.as_node().clone())
            .collect();

        for item in &items {
            match direct_sublist(item) {
                Some(sublist) => {
                    let preview = deep_clone(item);
                    remove_descendants(&preview, &["ol", "ul"]);
                    let id = item_id(item, &preview, &mut self.ids);
                    let list_id = format!("{}-list", id);
                    self.add_button(item, &sublist, true, Some(&list_id));
                    item.append(ellipsis());
                }
                None => {
                    item_id(item, item, &mut self.ids);
                    let span = parse_snippet("<span></span>");
                    wrap_inner(item, &span);
                    self.add_button(item, &span, true, None);
                    item.append(ellipsis());
                }
            }

            if let Some(list) = item.parent() {
                if !has_class(&list, "collapse") {
                    add_class(&list, "collapse");
                    add_class(&list, "in");
                }
            }
        }

        if !items.is_empty() {
            debug!("lists: processed {} list item(s)", items.len());
        }
        root.clone()
    }
}
