use kuchikikiki::NodeRef;
use log::debug;

use crate::collapse::section::add_section;
use crate::collapse::Collapser;

impl<'a> Collapser<'a> {
    /// Wrap every header's content into a section and attach toggle
    /// controls to the configured heading levels. Returns the root for
    /// chaining.
    ///
    /// Levels are processed innermost first (h6 down to h1) so inner
    /// sections are carved out before an outer header's sibling scan claims
    /// the same range. Sections are built for every level; the `include`
    /// option only gates the visible control.
    pub fn add_collapsible_sections(&mut self, root: &NodeRef) -> NodeRef {
        for level in (1..=6u8).rev() {
            let tag = format!("h{}", level);
            let headers: Vec<NodeRef> = root
                .select(&tag)
                .unwrap()
                .map(|matched| matched.as_node().clone())
                .collect();
            if headers.is_empty() {
                continue;
            }

            let include = self.options.include.iter().any(|l| l.level() == level);
            for header in &headers {
                let section = add_section(header, &mut self.ids);
                if include {
                    self.add_button(header, &section, false, None);
                }
            }
            debug!("sections: wrapped {} {} header(s)", headers.len(), tag);
        }
        root.clone()
    }
}
