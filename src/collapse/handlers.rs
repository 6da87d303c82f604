use std::collections::HashMap;

use kuchikikiki::NodeRef;
use log::debug;

use crate::collapse::Collapser;
use crate::dom::{attribute, set_attribute};
use crate::storage::{state_key, StateStore};

/// Activation callback for one toggle control.
pub struct ToggleHandler {
    control: NodeRef,
    key: String,
}

impl ToggleHandler {
    /// Flip the control's expanded state and persist the flipped value.
    ///
    /// Showing and hiding the container is left to the host's CSS-driven
    /// mechanism reacting to the same activation; the handler only mirrors
    /// the state on the control and in the store.
    pub fn activate(&self, store: Option<&dyn StateStore>) {
        let expanded = attribute(&self.control, "aria-expanded")
            .map_or(false, |value| value == "true");
        let flipped = if expanded { "false" } else { "true" };
        set_attribute(&self.control, "aria-expanded", flipped);
        if let Some(store) = store {
            store.set(&self.key, flipped);
        }
    }

    /// State key this handler writes, `<page-url>#<id>`.
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// Activation handlers keyed by control identifier.
///
/// The host event dispatcher routes a control's activation event to
/// [`activate`](Self::activate); handlers are independent and run one at a
/// time.
pub struct ToggleRegistry<'a> {
    handlers: HashMap<String, ToggleHandler>,
    store: Option<&'a dyn StateStore>,
}

impl<'a> ToggleRegistry<'a> {
    /// Run the handler registered for `id`. Returns `false` when no control
    /// with that identifier was registered.
    pub fn activate(&self, id: &str) -> bool {
        match self.handlers.get(id) {
            Some(handler) => {
                handler.activate(self.store);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.handlers.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl<'a> Collapser<'a> {
    /// Register an activation handler for every toggle control under
    /// `root`.
    pub fn add_click_handlers(&self, root: &NodeRef) -> ToggleRegistry<'a> {
        let mut handlers = HashMap::new();
        for control in root.select(".collapse-button").unwrap() {
            let node = control.as_node().clone();
            if let Some(id) = attribute(&node, "aria-controls") {
                let key = state_key(&self.page_url, &id);
                handlers.insert(id, ToggleHandler { control: node, key });
            }
        }
        debug!("handlers: registered {} control(s)", handlers.len());
        ToggleRegistry {
            handlers,
            store: self.store,
        }
    }
}
