//! Last-search persistence.
//!
//! [`KeyValueStore`] is the seam over the backing store. [`LastSearch`] wraps
//! one fixed key of it and never lets a store failure escape as anything but
//! a logged warning or an ordinary `Err` value.

use crate::error::StoreError;

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Key under which the most recent successful city is kept.
pub const LAST_SEARCH_KEY: &str = "lastWeatherSearch";

pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for std::sync::Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}

/// Best-effort access to the remembered city.
#[derive(Debug)]
pub struct LastSearch<S> {
    store: S,
}

impl<S: KeyValueStore> LastSearch<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn save(&self, city: &str) -> Result<(), StoreError> {
        self.store.set(LAST_SEARCH_KEY, city).inspect_err(|e| {
            tracing::warn!("Could not save last search: {e}");
        })
    }

    /// A failed read is reported as "nothing saved".
    pub fn load(&self) -> Option<String> {
        match self.store.get(LAST_SEARCH_KEY) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Could not load last search: {e}");
                None
            }
        }
    }

    pub fn clear(&self) -> Result<(), StoreError> {
        self.store.remove(LAST_SEARCH_KEY).inspect_err(|e| {
            tracing::warn!("Could not clear last search: {e}");
        })
    }

    pub fn has_saved(&self) -> bool {
        self.load().is_some_and(|city| !city.is_empty())
    }
}
