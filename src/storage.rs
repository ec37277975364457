//! Key/value stores parameters are persisted into.

use std::collections::HashMap;

use crate::location::Location;

/// A string to string store with per-key overwrite semantics, modeled on the browser's
/// `localStorage`.
pub trait Storage {
    fn set_item(&mut self, key: &str, value: &str);

    fn get_item(&self, key: &str) -> Option<&str>;

    fn remove_item(&mut self, key: &str) -> Option<String>;

    fn clear(&mut self);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    inner: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn set_item(&mut self, key: &str, value: &str) {
        self.inner.insert(key.to_string(), value.to_string());
    }

    fn get_item(&self, key: &str) -> Option<&str> {
        self.inner.get(key).map(String::as_str)
    }

    fn remove_item(&mut self, key: &str) -> Option<String> {
        self.inner.remove(key)
    }

    fn clear(&mut self) {
        self.inner.clear();
    }

    fn len(&self) -> usize {
        self.inner.len()
    }
}

/// One `MemoryStorage` per origin. Pages on different origins never see each other's keys.
#[derive(Debug, Default)]
pub struct OriginStorage {
    origins: HashMap<String, MemoryStorage>,
}

impl OriginStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// The store for `location`'s origin, created empty on first use.
    pub fn for_origin(&mut self, location: &Location) -> &mut MemoryStorage {
        self.origins.entry(location.origin()).or_default()
    }
}
