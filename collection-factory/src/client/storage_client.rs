use super::CollectionOptions;
use crate::collection::Collection;
use crate::errors::FactoryResult;
use std::fmt::{Debug, Formatter};
use std::ops::Deref;
use std::sync::Arc;

/// Contract for a storage client capable of opening named collections.
pub trait StorageClientProvider: Send + Sync {
    /// Opens (constructing if needed) the raw collection handle for `name`.
    ///
    /// The handle is not registered anywhere by this call; registration is
    /// the factory registry's concern. Whether backing storage is created
    /// eagerly or deferred until the first write is the client's choice.
    fn open_collection(
        &self,
        name: &str,
        options: &CollectionOptions,
    ) -> FactoryResult<Collection>;
}

/// Handle to a storage client implementation.
#[derive(Clone)]
pub struct StorageClient {
    inner: Arc<dyn StorageClientProvider>,
}

impl StorageClient {
    pub fn new<T: StorageClientProvider + 'static>(inner: T) -> Self {
        StorageClient {
            inner: Arc::new(inner),
        }
    }
}

impl Deref for StorageClient {
    type Target = Arc<dyn StorageClientProvider>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl Debug for StorageClient {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorageClient").finish()
    }
}
