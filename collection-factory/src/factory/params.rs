use crate::client::{CollectionOptions, Helpers};
use crate::collection::{
    AfterInsertCallback, AfterRemoveCallback, AfterUpdateCallback, BeforeInsertCallback,
    BeforeRemoveCallback, BeforeUpdateCallback, HookSet, ProjectionFields,
};
use crate::schema::Schema;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

/// Parameters consumed once by
/// [`create_collection`](crate::factory::CollectionFactoryInner::create_collection)
/// to build and configure a collection.
///
/// # Examples
///
/// ```rust,ignore
/// use collection_factory::collection::{Collection, Document};
/// use collection_factory::factory::CreationParams;
///
/// let params = CreationParams::new("books")
///     .explicit(true)
///     .on_insert(|_collection: &Collection, document: &mut Document| {
///         document.put("created_at", 1234567890)
///     });
/// ```
pub struct CreationParams {
    pub(crate) name: String,
    pub(crate) options: CollectionOptions,
    pub(crate) schema: Option<Schema>,
    pub(crate) explicit: bool,
    pub(crate) public_fields: Option<ProjectionFields>,
    pub(crate) helpers: Option<Helpers>,
    insert_hook: Option<Arc<dyn BeforeInsertCallback>>,
    update_hook: Option<Arc<dyn BeforeUpdateCallback>>,
    remove_hook: Option<Arc<dyn BeforeRemoveCallback>>,
    insert_after_hook: Option<Arc<dyn AfterInsertCallback>>,
    update_after_hook: Option<Arc<dyn AfterUpdateCallback>>,
    remove_after_hook: Option<Arc<dyn AfterRemoveCallback>>,
}

impl CreationParams {
    /// Starts parameters for a collection with the given name.
    pub fn new(name: &str) -> Self {
        CreationParams {
            name: name.to_string(),
            options: CollectionOptions::new(),
            schema: None,
            explicit: false,
            public_fields: None,
            helpers: None,
            insert_hook: None,
            update_hook: None,
            remove_hook: None,
            insert_after_hook: None,
            update_after_hook: None,
            remove_after_hook: None,
        }
    }

    /// Opaque configuration passed through to the storage client.
    pub fn options(mut self, options: CollectionOptions) -> Self {
        self.options = options;
        self
    }

    /// Schema attached to the collection after construction.
    pub fn schema(mut self, schema: Schema) -> Self {
        self.schema = Some(schema);
        self
    }

    /// Eagerly materializes the backing store via a disposable probe write,
    /// so the collection physically exists once creation returns.
    pub fn explicit(mut self, explicit: bool) -> Self {
        self.explicit = explicit;
        self
    }

    /// Projection allow-list retained on the collection as metadata.
    pub fn public_fields(mut self, fields: ProjectionFields) -> Self {
        self.public_fields = Some(fields);
        self
    }

    /// Computed properties mixed onto documents at read time.
    pub fn helpers(mut self, helpers: Helpers) -> Self {
        self.helpers = Some(helpers);
        self
    }

    /// Hook run before every insert; may mutate the document.
    pub fn on_insert(mut self, hook: impl BeforeInsertCallback + 'static) -> Self {
        let hook: Arc<dyn BeforeInsertCallback> = Arc::new(hook);
        self.insert_hook = Some(hook);
        self
    }

    /// Hook run before every update; may mutate the selector, modifier, and
    /// options.
    pub fn on_update(mut self, hook: impl BeforeUpdateCallback + 'static) -> Self {
        let hook: Arc<dyn BeforeUpdateCallback> = Arc::new(hook);
        self.update_hook = Some(hook);
        self
    }

    /// Hook run before every remove; may mutate the selector.
    pub fn on_remove(mut self, hook: impl BeforeRemoveCallback + 'static) -> Self {
        let hook: Arc<dyn BeforeRemoveCallback> = Arc::new(hook);
        self.remove_hook = Some(hook);
        self
    }

    /// Hook run after every insert, observing the outcome.
    pub fn after_insert(mut self, hook: impl AfterInsertCallback + 'static) -> Self {
        let hook: Arc<dyn AfterInsertCallback> = Arc::new(hook);
        self.insert_after_hook = Some(hook);
        self
    }

    /// Hook run after every update, observing the outcome.
    pub fn after_update(mut self, hook: impl AfterUpdateCallback + 'static) -> Self {
        let hook: Arc<dyn AfterUpdateCallback> = Arc::new(hook);
        self.update_after_hook = Some(hook);
        self
    }

    /// Hook run after every remove, observing the outcome.
    pub fn after_remove(mut self, hook: impl AfterRemoveCallback + 'static) -> Self {
        let hook: Arc<dyn AfterRemoveCallback> = Arc::new(hook);
        self.remove_after_hook = Some(hook);
        self
    }

    /// Collects the present hook slots into a hook set, leaving the
    /// parameters without hooks.
    pub(crate) fn take_hooks(&mut self) -> HookSet {
        HookSet::new(
            self.insert_hook.take(),
            self.update_hook.take(),
            self.remove_hook.take(),
            self.insert_after_hook.take(),
            self.update_after_hook.take(),
            self.remove_after_hook.take(),
        )
    }
}

impl Debug for CreationParams {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreationParams")
            .field("name", &self.name)
            .field("explicit", &self.explicit)
            .field("schema", &self.schema.is_some())
            .field("public_fields", &self.public_fields.is_some())
            .field("helpers", &self.helpers.is_some())
            .finish()
    }
}
