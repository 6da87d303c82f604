//! Key-value persistence for toggle state.

pub mod file;
pub mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

/// A flat string-to-string store for expanded/collapsed flags.
///
/// Models the host's per-origin key-value storage: synchronous,
/// single-threaded, and possibly absent. Implementations may use interior
/// mutability. Where no store is injected the passes skip persistence
/// entirely and every container starts expanded.
pub trait StateStore {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, overwriting any previous value.
    fn set(&self, key: &str, value: &str);
}

/// Key for one container's state on one page.
pub fn state_key(page_url: &str, id: &str) -> String {
    format!("{}#{}", page_url, id)
}
