use super::{CreationParams, Registry};
use crate::access::AccessRuleSet;
use crate::client::StorageClient;
use crate::collection::{Document, HookSlotName, HookedCollection};
use crate::common::ExecutionContext;
use crate::errors::{ErrorKind, FactoryError, FactoryResult};
use crate::filter::by_id;
use std::ops::Deref;
use std::sync::Arc;

/// The public entry point: builds-or-returns hooked collections by name.
///
/// A factory owns its registry, so creating a collection twice under the
/// same name hands back the same instance, and dropping the factory releases
/// every handle it constructed.
///
/// # Examples
///
/// ```rust,ignore
/// use collection_factory::client::memory::MemoryClient;
/// use collection_factory::client::StorageClient;
/// use collection_factory::collection::{Collection, Document};
/// use collection_factory::factory::{CollectionFactory, CreationParams};
///
/// let factory = CollectionFactory::new(StorageClient::new(MemoryClient::new()));
/// let books = factory.create_collection(
///     CreationParams::new("books").on_insert(
///         |_collection: &Collection, document: &mut Document| {
///             document.put("created_at", 1234567890)
///         },
///     ),
/// )?;
/// ```
#[derive(Clone)]
pub struct CollectionFactory {
    inner: Arc<CollectionFactoryInner>,
}

impl CollectionFactory {
    /// Creates a factory over the given storage client, running in the
    /// authoritative execution context.
    pub fn new(client: StorageClient) -> Self {
        CollectionFactory::with_context(client, ExecutionContext::Authoritative)
    }

    /// Creates a factory whose collections run in the given context.
    pub fn with_context(client: StorageClient, context: ExecutionContext) -> Self {
        CollectionFactory {
            inner: Arc::new(CollectionFactoryInner {
                client,
                registry: Registry::new(),
                context,
            }),
        }
    }
}

impl Deref for CollectionFactory {
    type Target = Arc<CollectionFactoryInner>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

pub struct CollectionFactoryInner {
    client: StorageClient,
    registry: Registry,
    context: ExecutionContext,
}

impl CollectionFactoryInner {
    /// True when a collection with this name was previously created by this
    /// factory and is still registered.
    pub fn has_collection(&self, name: &str) -> FactoryResult<bool> {
        self.registry.has(name)
    }

    /// The registered collection, if any. Never constructs.
    pub fn get_collection(&self, name: &str) -> FactoryResult<Option<HookedCollection>> {
        self.registry.get(name)
    }

    /// Drops the named collection: clears its backing store and removes the
    /// registry entry. An unregistered name is an error; a backing store
    /// that was never materialized yields `false` instead of an error.
    pub fn drop_collection(&self, name: &str) -> FactoryResult<bool> {
        self.registry.drop_collection(name)
    }

    /// Builds-or-returns the hooked collection for `params.name`.
    ///
    /// The first call for a name constructs the collection, wires the hook
    /// set from the parameters, registers the instance, and (with
    /// `explicit`) eagerly materializes the backing store. Later calls
    /// return the registered instance with its original hooks; the
    /// configuration steps (deny rule, schema, public fields, helpers) are
    /// re-applied idempotently on every call, so re-creation across module
    /// reloads never errors.
    pub fn create_collection(&self, mut params: CreationParams) -> FactoryResult<HookedCollection> {
        if params.name.is_empty() {
            log::error!("Collection name cannot be empty");
            return Err(FactoryError::new(
                "Collection name cannot be empty",
                ErrorKind::ValidationError,
            ));
        }

        let collection = match self.registry.get(&params.name)? {
            Some(collection) => collection,
            None => {
                let hooks = params.take_hooks();
                let raw = self.client.open_collection(&params.name, &params.options)?;
                let collection = HookedCollection::new(raw, hooks, self.context);
                self.registry.register(&params.name, collection.clone());

                if params.explicit {
                    self.materialize(&collection)?;
                }
                collection
            }
        };

        // Secure by default: without a caller-supplied allow rule, every
        // client-originated mutation is rejected.
        collection.deny(AccessRuleSet::match_all())?;

        if let Some(schema) = params.schema.take() {
            collection.collection().attach_schema(schema)?;
        }
        if let Some(fields) = params.public_fields.take() {
            collection.collection().set_public_fields(fields)?;
        }
        if let Some(helpers) = params.helpers.take() {
            collection.collection().install_helpers(helpers)?;
        }

        Ok(collection)
    }

    /// Forces the backing store to materialize the collection with a probe
    /// insert-and-remove, keeping the probe invisible to configured hooks.
    /// The mute guard restores the hook flags on every exit path.
    fn materialize(&self, collection: &HookedCollection) -> FactoryResult<()> {
        log::debug!(
            "Eagerly materializing collection '{}' with a probe write",
            collection.name()
        );
        let _muted = collection.mute_hooks(&[
            HookSlotName::Insert,
            HookSlotName::Remove,
            HookSlotName::InsertAfter,
            HookSlotName::RemoveAfter,
        ]);
        let probe_id = collection.insert(Document::new())?;
        collection.remove(by_id(probe_id))?;
        Ok(())
    }
}
