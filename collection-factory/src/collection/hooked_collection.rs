use super::hooks::{HookSet, HookSlotName, MutedHooks};
use super::{Collection, DocId, Document, DocumentCursor, ProjectionFields, UpdateOptions};
use crate::access::{AccessRuleSet, MutationRequest};
use crate::common::ExecutionContext;
use crate::errors::FactoryResult;
use crate::filter::Filter;
use crate::schema::Schema;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

/// A collection handle that layers before/after hooks around the three
/// mutating operations.
///
/// The wrapper intercepts `insert`, `update` and `remove` only; every other
/// call is forwarded to the underlying collection unchanged. Each mutating
/// call runs the same three-phase pattern:
///
/// 1. an active before-hook runs with mutable borrows of the call's
///    arguments, so it can rewrite the document, selector, modifier, or
///    options before the real operation; a before-hook error propagates
///    immediately and the remaining phases do not run;
/// 2. the operation is delegated to the underlying collection with the
///    possibly mutated arguments;
/// 3. an active after-hook observes the arguments together with the
///    delegate's outcome, success or failure, before that outcome is
///    returned to the caller unchanged.
///
/// A hook is active when its slot is enabled, a callback is attached, and
/// the handle's [`ExecutionContext`] is authoritative. Mutations through an
/// untrusted handle never trigger hooks; they are checked against the
/// collection's access rules instead and rejected before delegation when
/// access is denied.
#[derive(Clone)]
pub struct HookedCollection {
    inner: Arc<HookedCollectionInner>,
    context: ExecutionContext,
}

struct HookedCollectionInner {
    collection: Collection,
    hooks: HookSet,
}

impl HookedCollection {
    pub(crate) fn new(collection: Collection, hooks: HookSet, context: ExecutionContext) -> Self {
        HookedCollection {
            inner: Arc::new(HookedCollectionInner { collection, hooks }),
            context,
        }
    }

    /// The underlying collection handle; what hook callbacks receive.
    pub fn collection(&self) -> &Collection {
        &self.inner.collection
    }

    /// A sibling handle sharing this collection's state but running in the
    /// given execution context.
    pub fn with_context(&self, context: ExecutionContext) -> HookedCollection {
        HookedCollection {
            inner: self.inner.clone(),
            context,
        }
    }

    pub fn context(&self) -> ExecutionContext {
        self.context
    }

    /// Enables or disables one of the six hook slots by name.
    ///
    /// Recognized names are `insert`, `update`, `remove`, `insert_after`,
    /// `update_after` and `remove_after`; anything else is rejected. Useful
    /// for one-shot hook suppression, e.g. system-initiated writes that must
    /// bypass authorship stamping.
    pub fn hook(&self, name: &str, enabled: bool) -> FactoryResult<()> {
        let slot: HookSlotName = name.parse()?;
        self.inner.hooks.set_enabled(slot, enabled);
        Ok(())
    }

    pub(crate) fn mute_hooks(&self, slots: &[HookSlotName]) -> MutedHooks<'_> {
        self.inner.hooks.mute(slots)
    }

    /// Inserts a document, running the insert hook pair around the
    /// operation. Returns the assigned document id.
    pub fn insert(&self, mut document: Document) -> FactoryResult<DocId> {
        let collection = &self.inner.collection;
        if !self.context.is_authoritative() {
            collection.check_access(&MutationRequest::Insert {
                document: &document,
            })?;
            return collection.insert(document);
        }

        if let Some(hook) = self.inner.hooks.insert.active(self.context) {
            (hook)(collection, &mut document)?;
        }
        let result = collection.insert(document.clone());
        if let Some(hook) = self.inner.hooks.insert_after.active(self.context) {
            (hook)(collection, &document, &result)?;
        }
        result
    }

    /// Updates documents matching `filter`, running the update hook pair
    /// around the operation. Returns the written count.
    pub fn update(
        &self,
        mut filter: Filter,
        mut modifier: Document,
        mut options: UpdateOptions,
    ) -> FactoryResult<u64> {
        let collection = &self.inner.collection;
        if !self.context.is_authoritative() {
            collection.check_access(&MutationRequest::Update {
                filter: &filter,
                update: &modifier,
            })?;
            return collection.update(&filter, &modifier, &options);
        }

        if let Some(hook) = self.inner.hooks.update.active(self.context) {
            (hook)(collection, &mut filter, &mut modifier, &mut options)?;
        }
        let result = collection.update(&filter, &modifier, &options);
        if let Some(hook) = self.inner.hooks.update_after.active(self.context) {
            (hook)(collection, &filter, &modifier, &options, &result)?;
        }
        result
    }

    /// Removes documents matching `filter`, running the remove hook pair
    /// around the operation. Returns the removed count.
    pub fn remove(&self, mut filter: Filter) -> FactoryResult<u64> {
        let collection = &self.inner.collection;
        if !self.context.is_authoritative() {
            collection.check_access(&MutationRequest::Remove { filter: &filter })?;
            return collection.remove(&filter);
        }

        if let Some(hook) = self.inner.hooks.remove.active(self.context) {
            (hook)(collection, &mut filter)?;
        }
        let result = collection.remove(&filter);
        if let Some(hook) = self.inner.hooks.remove_after.active(self.context) {
            (hook)(collection, &filter, &result)?;
        }
        result
    }

    // The non-mutating surface forwards to the underlying collection
    // unchanged.

    pub fn name(&self) -> String {
        self.inner.collection.name()
    }

    pub fn find(&self, filter: &Filter) -> FactoryResult<DocumentCursor> {
        self.inner.collection.find(filter)
    }

    pub fn get_by_id(&self, id: &DocId) -> FactoryResult<Option<Document>> {
        self.inner.collection.get_by_id(id)
    }

    pub fn size(&self) -> FactoryResult<u64> {
        self.inner.collection.size()
    }

    pub fn schema(&self) -> Option<Schema> {
        self.inner.collection.schema()
    }

    pub fn public_fields(&self) -> Option<ProjectionFields> {
        self.inner.collection.public_fields()
    }

    pub fn is_materialized(&self) -> bool {
        self.inner.collection.is_materialized()
    }

    /// Grants client-originated mutations matching the rules.
    pub fn allow(&self, rules: AccessRuleSet) -> FactoryResult<()> {
        self.inner.collection.allow(rules)
    }

    /// Rejects client-originated mutations matching the rules.
    pub fn deny(&self, rules: AccessRuleSet) -> FactoryResult<()> {
        self.inner.collection.deny(rules)
    }

    pub(crate) fn clear(&self) -> FactoryResult<()> {
        self.inner.collection.clear()
    }
}

impl Debug for HookedCollection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HookedCollection")
            .field("name", &self.inner.collection.name())
            .field("context", &self.context)
            .field("hooks", &self.inner.hooks)
            .finish()
    }
}
