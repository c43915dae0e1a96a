//! URL-keyed "load once" registry.
//!
//! Every key maps to one shared future until it is forgotten. The first
//! caller's loader runs; everyone after that (concurrently or later) awaits
//! the same result. Process-wide instances are kept in `OnceLock` statics by
//! their owners and never forget anything; short-lived ones (in-flight
//! thumbnail lookups) drop their key once the load settles.

use futures::future::{BoxFuture, FutureExt, Shared};
use std::collections::HashMap;
use std::future::Future;
use std::sync::{Mutex, PoisonError};

pub type LoadFuture<T> = Shared<BoxFuture<'static, T>>;

pub struct Registry<T: Clone> {
    entries: Mutex<HashMap<String, LoadFuture<T>>>,
}

impl<T> Registry<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Return the shared load for `key`, starting it with `load` if this is
    /// the first request. `load` is not called for known keys.
    pub fn ensure_loaded<F, Fut>(&self, key: &str, load: F) -> LoadFuture<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T> + Send + 'static,
    {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(existing) = entries.get(key) {
            return existing.clone();
        }
        tracing::debug!(key, "loader registry: first request");
        let shared = load().boxed().shared();
        entries.insert(key.to_string(), shared.clone());
        shared
    }

    /// Drop the entry for `key`. Futures already handed out still resolve;
    /// the next `ensure_loaded` starts a fresh load.
    pub fn forget(&self, key: &str) -> bool {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key)
            .is_some()
    }

    pub fn is_registered(&self, key: &str) -> bool {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Default for Registry<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}
