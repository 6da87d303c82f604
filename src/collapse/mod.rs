//! Collapsible sections and lists for rendered documents.
//!
//! A [`Collapser`] drives one transformation pass over one document: the
//! sections pass wraps header content and attaches toggle controls, the
//! lists pass makes nested lists collapsible, and the handlers pass collects
//! activation callbacks for the host's event dispatcher.

pub mod handlers;
pub mod id;
pub mod lists;
pub mod section;
pub mod sections;
pub mod toggle;

pub use handlers::{ToggleHandler, ToggleRegistry};
pub use id::IdAllocator;
pub use section::{add_section, header_id, section_id};
pub use toggle::button;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::storage::StateStore;

/// The six heading levels that can receive a toggle control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl HeadingLevel {
    /// All levels, shallowest first.
    pub fn all() -> [HeadingLevel; 6] {
        [
            HeadingLevel::H1,
            HeadingLevel::H2,
            HeadingLevel::H3,
            HeadingLevel::H4,
            HeadingLevel::H5,
            HeadingLevel::H6,
        ]
    }

    /// Numeric nesting level, 1-6.
    pub fn level(self) -> u8 {
        match self {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
            HeadingLevel::H4 => 4,
            HeadingLevel::H5 => 5,
            HeadingLevel::H6 => 6,
        }
    }

    /// Tag name, `h1`-`h6`.
    pub fn tag_name(self) -> &'static str {
        match self {
            HeadingLevel::H1 => "h1",
            HeadingLevel::H2 => "h2",
            HeadingLevel::H3 => "h3",
            HeadingLevel::H4 => "h4",
            HeadingLevel::H5 => "h5",
            HeadingLevel::H6 => "h6",
        }
    }

    /// Level from its numeric value.
    pub fn from_level(level: u8) -> Option<HeadingLevel> {
        match level {
            1 => Some(HeadingLevel::H1),
            2 => Some(HeadingLevel::H2),
            3 => Some(HeadingLevel::H3),
            4 => Some(HeadingLevel::H4),
            5 => Some(HeadingLevel::H5),
            6 => Some(HeadingLevel::H6),
            _ => None,
        }
    }
}

impl fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag_name())
    }
}

impl FromStr for HeadingLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "h1" | "1" => Ok(HeadingLevel::H1),
            "h2" | "2" => Ok(HeadingLevel::H2),
            "h3" | "3" => Ok(HeadingLevel::H3),
            "h4" | "4" => Ok(HeadingLevel::H4),
            "h5" | "5" => Ok(HeadingLevel::H5),
            "h6" | "6" => Ok(HeadingLevel::H6),
            other => Err(format!("unknown heading level: {}", other)),
        }
    }
}

/// Options for the sections pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollapseOptions {
    /// Heading levels that receive a visible toggle control. Every level is
    /// wrapped into a section regardless, so CSS rules apply uniformly.
    #[serde(default = "default_include")]
    pub include: Vec<HeadingLevel>,
}

impl Default for CollapseOptions {
    fn default() -> Self {
        CollapseOptions {
            include: default_include(),
        }
    }
}

fn default_include() -> Vec<HeadingLevel> {
    HeadingLevel::all().to_vec()
}

/// One document transformation pass.
///
/// Holds the identifier allocator, the page URL used for state keys, and the
/// optional state store. The allocator is never reset, so construct a fresh
/// `Collapser` per document.
pub struct Collapser<'a> {
    options: CollapseOptions,
    page_url: String,
    store: Option<&'a dyn StateStore>,
    ids: IdAllocator,
}

impl<'a> Collapser<'a> {
    pub fn new(options: CollapseOptions) -> Self {
        Collapser {
            options,
            page_url: String::new(),
            store: None,
            ids: IdAllocator::new(),
        }
    }

    /// Absolute URL of the page being transformed; state keys are
    /// `<url>#<id>`.
    pub fn with_page_url<S: Into<String>>(mut self, url: S) -> Self {
        self.page_url = url.into();
        self
    }

    /// Attach a state store. Without one, persistence is skipped and every
    /// container starts expanded.
    pub fn with_store(mut self, store: &'a dyn StateStore) -> Self {
        self.store = Some(store);
        self
    }

    pub fn options(&self) -> &CollapseOptions {
        &self.options
    }

    pub fn page_url(&self) -> &str {
        &self.page_url
    }
}
