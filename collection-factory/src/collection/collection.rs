use super::{DocId, Document, DocumentCursor, ProjectionFields, UpdateOptions};
use crate::access::{AccessRuleSet, MutationRequest};
use crate::client::Helpers;
use crate::errors::FactoryResult;
use crate::filter::Filter;
use crate::schema::Schema;
use std::fmt::{Debug, Formatter};
use std::ops::Deref;
use std::sync::Arc;

/// Contract the storage client fulfils for a single named collection.
///
/// Implementations own the backing storage for their documents and carry the
/// collection-level configuration this crate attaches: schema, projection
/// metadata, computed properties, and access rules.
pub trait CollectionProvider: Send + Sync {
    /// Name of this collection.
    fn name(&self) -> String;

    /// Inserts a document, assigning an id when the document does not carry
    /// one, and returns the id.
    fn insert(&self, document: Document) -> FactoryResult<DocId>;

    /// Updates documents matching `filter` by setting the fields of
    /// `update` on them. Returns the number of documents written.
    fn update(
        &self,
        filter: &Filter,
        update: &Document,
        options: &UpdateOptions,
    ) -> FactoryResult<u64>;

    /// Removes documents matching `filter`, returning the removed count.
    fn remove(&self, filter: &Filter) -> FactoryResult<u64>;

    /// Finds documents matching `filter`.
    fn find(&self, filter: &Filter) -> FactoryResult<DocumentCursor>;

    /// Retrieves a document by id.
    fn get_by_id(&self, id: &DocId) -> FactoryResult<Option<Document>>;

    /// Number of documents in the collection.
    fn size(&self) -> FactoryResult<u64>;

    /// Drops the collection's backing store. Fails when the collection was
    /// never materialized in the store.
    fn clear(&self) -> FactoryResult<()>;

    /// Whether the backing store has physically materialized this
    /// collection.
    fn is_materialized(&self) -> bool;

    /// Attaches a schema, replacing any previously attached one.
    fn attach_schema(&self, schema: Schema) -> FactoryResult<()>;

    /// The currently attached schema, if any.
    fn schema(&self) -> Option<Schema>;

    /// Stores the projection allow-list consumed by read surfaces.
    /// Metadata only; nothing in this layer enforces it.
    fn set_public_fields(&self, fields: ProjectionFields) -> FactoryResult<()>;

    fn public_fields(&self) -> Option<ProjectionFields>;

    /// Installs computed properties mixed onto documents at read time,
    /// replacing any previous installation.
    fn install_helpers(&self, helpers: Helpers) -> FactoryResult<()>;

    /// Registers rules granting client-originated mutations.
    fn allow(&self, rules: AccessRuleSet) -> FactoryResult<()>;

    /// Registers rules rejecting client-originated mutations.
    fn deny(&self, rules: AccessRuleSet) -> FactoryResult<()>;

    /// Checks a client-originated mutation against the registered rules.
    fn check_access(&self, request: &MutationRequest<'_>) -> FactoryResult<()>;
}

/// Handle to a document collection provided by the storage client.
///
/// Clones share the same underlying collection.
#[derive(Clone)]
pub struct Collection {
    inner: Arc<dyn CollectionProvider>,
}

impl Collection {
    pub fn new<T: CollectionProvider + 'static>(inner: T) -> Self {
        Collection {
            inner: Arc::new(inner),
        }
    }
}

impl Deref for Collection {
    type Target = Arc<dyn CollectionProvider>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl Debug for Collection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Collection")
            .field("name", &self.inner.name())
            .finish()
    }
}
