//! Query and mutation helpers over the document tree.
//!
//! The tree itself is `kuchikikiki`'s reference-counted DOM; this module is
//! the thin seam the collapse passes go through, so the rest of the crate
//! never touches parser types directly.

pub mod build;
pub mod class;
pub mod mutate;
pub mod query;

pub use build::{parse_document, parse_snippet, serialize};
pub use class::{add_class, has_class, remove_class};
pub use mutate::{deep_clone, remove_descendants, wrap_all, wrap_inner};
pub use query::{attribute, heading_level, set_attribute};
