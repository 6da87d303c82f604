use kuchikikiki::NodeRef;

use crate::collapse::section::section_id;
use crate::collapse::Collapser;
use crate::dom::{add_class, has_class, parse_snippet, remove_class, set_attribute};
use crate::storage::state_key;

/// Build a toggle control referencing the container `id`.
pub fn button(id: &str) -> NodeRef {
    let escaped = html_escape::encode_double_quoted_attribute(id);
    parse_snippet(&format!(
        "<a aria-hidden=\"true\" aria-expanded=\"true\" role=\"button\" class=\"collapse-button\" data-toggle=\"collapse\" href=\"#{}\" aria-controls=\"{}\"></a>",
        escaped, escaped
    ))
}

impl<'a> Collapser<'a> {
    /// Attach a toggle control for `section` to `header` and resolve the
    /// initial expanded/collapsed state.
    ///
    /// An `explicit_id` is assigned to the section as-is; otherwise the
    /// identifier is derived from the header. Starting collapsed takes, in
    /// order: the header's own start-collapsed marker (class `collapse`),
    /// then a persisted `"false"` for this page and identifier, then the
    /// expanded default. The marker wins over a persisted `"true"`.
    ///
    /// Re-invoking on an already processed pair inserts a second control;
    /// callers must not double-invoke.
    pub fn add_button(
        &mut self,
        header: &NodeRef,
        section: &NodeRef,
        prepend: bool,
        explicit_id: Option<&str>,
    ) {
        let id = match explicit_id {
            Some(id) => {
                set_attribute(section, "id", id);
                id.to_string()
            }
            None => section_id(header, section, &mut self.ids),
        };

        let control = button(&id);
        if prepend {
            header.prepend(control.clone());
        } else {
            header.append(control.clone());
        }

        add_class(section, "collapse");
        add_class(section, "in");

        let key = state_key(&self.page_url, &id);
        let persisted_collapsed = self
            .store
            .and_then(|store| store.get(&key))
            .map_or(false, |value| value == "false");
        if has_class(header, "collapse") || persisted_collapsed {
            remove_class(header, "collapse");
            add_class(header, "collapsed");
        }
        if has_class(header, "collapsed") {
            remove_class(header, "collapsed");
            remove_class(section, "in");
            set_attribute(&control, "aria-expanded", "false");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collapse::section::add_section;
    use crate::collapse::CollapseOptions;
    use crate::dom::{attribute, parse_document};
    use crate::storage::{MemoryStore, StateStore};

    fn collapser<'a>() -> Collapser<'a> {
        Collapser::new(CollapseOptions::default())
    }

    #[test]
    fn test_button_markup_contract() {
        let control = button("intro-section");

        assert_eq!(attribute(&control, "role").as_deref(), Some("button"));
        assert_eq!(attribute(&control, "aria-controls").as_deref(), Some("intro-section"));
        assert_eq!(attribute(&control, "aria-expanded").as_deref(), Some("true"));
        assert_eq!(attribute(&control, "href").as_deref(), Some("#intro-section"));
        assert_eq!(attribute(&control, "data-toggle").as_deref(), Some("collapse"));
        assert!(has_class(&control, "collapse-button"));
    }

    #[test]
    fn test_add_button_defaults_to_expanded() {
        let root = parse_document("<h1>Title</h1><p>body</p>");
        let mut collapser = collapser();

        let header = root.select_first("h1").unwrap().as_node().clone();
        let section = add_section(&header, &mut collapser.ids);
        collapser.add_button(&header, &section, false, None);

        assert!(has_class(&section, "collapse"));
        assert!(has_class(&section, "in"));
        let control = header.last_child().unwrap();
        assert!(has_class(&control, "collapse-button"));
        assert_eq!(attribute(&control, "aria-expanded").as_deref(), Some("true"));
    }

    #[test]
    fn test_prepend_inserts_control_first() {
        let root = parse_document("<h1>Title</h1><p>body</p>");
        let mut collapser = collapser();

        let header = root.select_first("h1").unwrap().as_node().clone();
        let section = add_section(&header, &mut collapser.ids);
        collapser.add_button(&header, &section, true, None);

        let control = header.first_child().unwrap();
        assert!(has_class(&control, "collapse-button"));
    }

    #[test]
    fn test_explicit_id_assigned_to_section() {
        let root = parse_document("<h1>Title</h1><p>body</p>");
        let mut collapser = collapser();

        let header = root.select_first("h1").unwrap().as_node().clone();
        let section = add_section(&header, &mut collapser.ids);
        collapser.add_button(&header, &section, false, Some("custom-target"));

        assert_eq!(attribute(&section, "id").as_deref(), Some("custom-target"));
        let control = header.last_child().unwrap();
        assert_eq!(attribute(&control, "aria-controls").as_deref(), Some("custom-target"));
    }

    #[test]
    fn test_start_collapsed_marker() {
        let root = parse_document("<h1 class=\"collapse\">Title</h1><p>body</p>");
        let mut collapser = collapser();

        let header = root.select_first("h1").unwrap().as_node().clone();
        let section = add_section(&header, &mut collapser.ids);
        collapser.add_button(&header, &section, false, None);

        // marker is normalized away, section hidden, control flagged
        assert!(!has_class(&header, "collapse"));
        assert!(!has_class(&header, "collapsed"));
        assert!(!has_class(&section, "in"));
        assert!(has_class(&section, "collapse"));
        let control = header.last_child().unwrap();
        assert_eq!(attribute(&control, "aria-expanded").as_deref(), Some("false"));
    }

    #[test]
    fn test_persisted_false_starts_collapsed() {
        let store = MemoryStore::new();
        store.set("https://docs.example/page.html#title-section", "false");

        let root = parse_document("<h1>Title</h1><p>body</p>");
        let mut collapser = Collapser::new(CollapseOptions::default())
            .with_page_url("https://docs.example/page.html")
            .with_store(&store);

        let header = root.select_first("h1").unwrap().as_node().clone();
        let section = add_section(&header, &mut collapser.ids);
        collapser.add_button(&header, &section, false, None);

        assert!(!has_class(&section, "in"));
        let control = header.last_child().unwrap();
        assert_eq!(attribute(&control, "aria-expanded").as_deref(), Some("false"));
    }

    #[test]
    fn test_marker_wins_over_persisted_true() {
        let store = MemoryStore::new();
        store.set("https://docs.example/page.html#title-section", "true");

        let root = parse_document("<h1 class=\"collapse\">Title</h1><p>body</p>");
        let mut collapser = Collapser::new(CollapseOptions::default())
            .with_page_url("https://docs.example/page.html")
            .with_store(&store);

        let header = root.select_first("h1").unwrap().as_node().clone();
        let section = add_section(&header, &mut collapser.ids);
        collapser.add_button(&header, &section, false, None);

        assert!(!has_class(&section, "in"));
    }

    #[test]
    fn test_persisted_true_stays_expanded() {
        let store = MemoryStore::new();
        store.set("https://docs.example/page.html#title-section", "true");

        let root = parse_document("<h1>Title</h1><p>body</p>");
        let mut collapser = Collapser::new(CollapseOptions::default())
            .with_page_url("https://docs.example/page.html")
            .with_store(&store);

        let header = root.select_first("h1").unwrap().as_node().clone();
        let section = add_section(&header, &mut collapser.ids);
        collapser.add_button(&header, &section, false, None);

        assert!(has_class(&section, "in"));
    }
}
