use kuchikikiki::NodeRef;

/// Allocates URL-safe identifiers derived from node text.
///
/// One allocator is shared for the lifetime of one document pass; every
/// identifier it hands out is distinct from all identifiers it handed out
/// before. There is no reset operation.
#[derive(Debug, Default)]
pub struct IdAllocator {
    seen: Vec<String>,
}

impl IdAllocator {
    pub fn new() -> Self {
        IdAllocator { seen: Vec::new() }
    }

    /// Slug of the node's trimmed visible text, with `prefix` prepended.
    /// No side effects.
    pub fn generate_id(node: &NodeRef, prefix: &str) -> String {
        let text = node.text_contents();
        format!("{}{}", prefix, slug::slugify(text.trim()))
    }

    /// Like [`generate_id`](Self::generate_id), but unique across all calls
    /// on this allocator; colliding values are suffixed with `-2`, `-3`, ...
    pub fn generate_unique_id(&mut self, node: &NodeRef) -> String {
        let mut id = Self::generate_id(node, "");
        if self.seen.iter().any(|seen| *seen == id) {
            let mut i = 1;
            loop {
                i += 1;
                let candidate = format!("{}-{}", id, i);
                if !self.seen.iter().any(|seen| *seen == candidate) {
                    id = candidate;
                    break;
                }
            }
        }
        self.seen.push(id.clone());
        id
    }
}
