//! Collapsify adds collapsible sections and lists to rendered HTML.
//!
//! The passes operate on a parsed document tree: every header gets its
//! content wrapped into a section container, list items collapse their
//! nested sub-lists (or their own inline content), toggle controls are
//! injected, and each container's expanded/collapsed state can be persisted
//! through a pluggable key-value store keyed by page URL and identifier.

pub mod builder;
pub mod cli;
pub mod collapse;
pub mod config;
pub mod dom;
pub mod storage;
pub mod utils;

pub use collapse::{CollapseOptions, Collapser, HeadingLevel, ToggleRegistry};
pub use config::Config;
pub use storage::{JsonFileStore, MemoryStore, StateStore};
