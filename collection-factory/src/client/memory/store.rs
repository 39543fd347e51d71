use super::MemoryCollection;
use crate::client::{CollectionOptions, StorageClientProvider};
use crate::collection::{Collection, DocId, Document};
use crate::common::{atomic, Atomic};
use crate::errors::{ErrorKind, FactoryError, FactoryResult};
use indexmap::IndexMap;
use std::collections::HashMap;
use std::sync::Arc;

/// One collection's backing map, keyed by document id in insertion order.
pub(crate) type DocumentMap = Atomic<IndexMap<DocId, Document>>;

/// An in-memory storage client.
///
/// Clones share the same backing storage. Recognized collection options:
/// `capacity` (integer) preallocates the backing map on materialization.
#[derive(Clone)]
pub struct MemoryClient {
    inner: Arc<MemoryClientInner>,
}

impl MemoryClient {
    pub fn new() -> Self {
        MemoryClient {
            inner: Arc::new(MemoryClientInner {
                maps: atomic(HashMap::new()),
            }),
        }
    }
}

impl Default for MemoryClient {
    fn default() -> Self {
        MemoryClient::new()
    }
}

impl StorageClientProvider for MemoryClient {
    fn open_collection(
        &self,
        name: &str,
        options: &CollectionOptions,
    ) -> FactoryResult<Collection> {
        log::debug!("Opening in-memory collection '{}'", name);
        Ok(Collection::new(MemoryCollection::new(
            name,
            options,
            self.inner.clone(),
        )))
    }
}

pub(crate) struct MemoryClientInner {
    maps: Atomic<HashMap<String, DocumentMap>>,
}

impl MemoryClientInner {
    /// The backing map for `name`, creating it on first use.
    pub(crate) fn materialize(&self, name: &str, capacity: Option<usize>) -> DocumentMap {
        self.maps
            .write()
            .entry(name.to_string())
            .or_insert_with(|| match capacity {
                Some(capacity) => atomic(IndexMap::with_capacity(capacity)),
                None => atomic(IndexMap::new()),
            })
            .clone()
    }

    /// The backing map for `name`, if one was materialized.
    pub(crate) fn lookup(&self, name: &str) -> Option<DocumentMap> {
        self.maps.read().get(name).cloned()
    }

    pub(crate) fn has_map(&self, name: &str) -> bool {
        self.maps.read().contains_key(name)
    }

    /// Drops the backing map for `name`. Fails when the collection was
    /// never materialized.
    pub(crate) fn drop_map(&self, name: &str) -> FactoryResult<()> {
        match self.maps.write().remove(name) {
            Some(_) => Ok(()),
            None => {
                log::error!("No backing map materialized for collection '{}'", name);
                Err(FactoryError::new(
                    &format!(
                        "Collection '{}' was never materialized in the backing store",
                        name
                    ),
                    ErrorKind::BackendError,
                ))
            }
        }
    }
}
