use crate::collection::HookedCollection;
use crate::common::{atomic, Atomic};
use crate::errors::{ErrorKind, FactoryError, FactoryResult};
use std::collections::HashMap;
use std::ops::Deref;
use std::sync::Arc;

/// Name-based registry of the collections a factory has constructed.
///
/// The registry is owned by its factory rather than being process-global, so
/// independent factories never observe each other's collections and tests
/// can tear down by simply dropping the factory.
#[derive(Clone)]
pub struct Registry {
    inner: Arc<RegistryInner>,
}

impl Registry {
    pub fn new() -> Self {
        Registry {
            inner: Arc::new(RegistryInner::new()),
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Registry::new()
    }
}

impl Deref for Registry {
    type Target = Arc<RegistryInner>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

pub struct RegistryInner {
    collections: Atomic<HashMap<String, HookedCollection>>,
}

impl RegistryInner {
    fn new() -> Self {
        Self {
            collections: atomic(HashMap::new()),
        }
    }

    /// True when a collection was constructed under `name` and is still
    /// registered.
    pub fn has(&self, name: &str) -> FactoryResult<bool> {
        Ok(self.collections.read().contains_key(name))
    }

    /// The registered collection, if any. Never constructs.
    pub fn get(&self, name: &str) -> FactoryResult<Option<HookedCollection>> {
        Ok(self.collections.read().get(name).cloned())
    }

    /// Registers a freshly constructed collection under its name.
    pub fn register(&self, name: &str, collection: HookedCollection) {
        self.collections.write().insert(name.to_string(), collection);
    }

    /// Drops the named collection: clears its backing store and removes the
    /// registry entry.
    ///
    /// A name with no registered collection is an error. A failure to clear
    /// the backing store (the collection was never materialized) is
    /// downgraded to a `false` return and the entry stays registered.
    pub fn drop_collection(&self, name: &str) -> FactoryResult<bool> {
        let collection = match self.get(name)? {
            Some(collection) => collection,
            None => {
                log::error!("Cannot drop - collection by name [{}] not found", name);
                return Err(FactoryError::new(
                    &format!("Cannot drop - collection by name [{}] not found", name),
                    ErrorKind::CollectionNotFound,
                ));
            }
        };

        if let Err(error) = collection.clear() {
            log::warn!(
                "Attempt to drop a non-materialized collection '{}': {}",
                name,
                error
            );
            return Ok(false);
        }

        self.collections.write().remove(name);
        Ok(true)
    }
}
