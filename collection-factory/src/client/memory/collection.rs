use super::store::{DocumentMap, MemoryClientInner};
use crate::access::{AccessControl, AccessRuleSet, MutationRequest};
use crate::client::{CollectionOptions, Helpers};
use crate::collection::{DocId, Document, DocumentCursor, ProjectionFields, UpdateOptions};
use crate::collection::CollectionProvider;
use crate::common::{atomic, Atomic, Value, DOC_ID_FIELD};
use crate::errors::FactoryResult;
use crate::filter::Filter;
use crate::schema::Schema;
use std::sync::Arc;

/// A named collection backed by the in-memory client.
pub(crate) struct MemoryCollection {
    name: String,
    capacity: Option<usize>,
    client: Arc<MemoryClientInner>,
    schema: Atomic<Option<Schema>>,
    public_fields: Atomic<Option<ProjectionFields>>,
    helpers: Atomic<Option<Helpers>>,
    access: AccessControl,
}

impl MemoryCollection {
    pub(crate) fn new(
        name: &str,
        options: &CollectionOptions,
        client: Arc<MemoryClientInner>,
    ) -> Self {
        let capacity = options
            .get("capacity")
            .and_then(Value::as_u64)
            .map(|capacity| capacity as usize);
        MemoryCollection {
            name: name.to_string(),
            capacity,
            client,
            schema: atomic(None),
            public_fields: atomic(None),
            helpers: atomic(None),
            access: AccessControl::new(),
        }
    }

    fn read_map(&self) -> Option<DocumentMap> {
        self.client.lookup(&self.name)
    }

    fn write_map(&self) -> DocumentMap {
        self.client.materialize(&self.name, self.capacity)
    }

    fn decorate(&self, mut document: Document) -> FactoryResult<Document> {
        if let Some(helpers) = self.helpers.read().as_ref() {
            helpers.apply(&mut document)?;
        }
        Ok(document)
    }
}

fn apply_update(target: &mut Document, update: &Document) -> FactoryResult<()> {
    for (key, value) in update.fields() {
        if key.as_str() == DOC_ID_FIELD {
            continue;
        }
        target.put(key.as_str(), value.clone())?;
    }
    Ok(())
}

impl CollectionProvider for MemoryCollection {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn insert(&self, mut document: Document) -> FactoryResult<DocId> {
        let id = document.id().unwrap_or_else(DocId::random);
        document.set_id(&id);
        let map = self.write_map();
        map.write().insert(id.clone(), document);
        Ok(id)
    }

    fn update(
        &self,
        filter: &Filter,
        update: &Document,
        options: &UpdateOptions,
    ) -> FactoryResult<u64> {
        let mut modified = 0u64;
        if let Some(map) = self.read_map() {
            let mut documents = map.write();
            for (_, document) in documents.iter_mut() {
                if filter.matches(document) {
                    apply_update(document, update)?;
                    modified += 1;
                    if options.is_just_once() {
                        break;
                    }
                }
            }
        }
        if modified == 0 && options.is_insert_if_absent() {
            self.insert(update.clone())?;
            return Ok(1);
        }
        Ok(modified)
    }

    fn remove(&self, filter: &Filter) -> FactoryResult<u64> {
        let map = match self.read_map() {
            Some(map) => map,
            None => return Ok(0),
        };
        let mut documents = map.write();
        let before = documents.len();
        documents.retain(|_, document| !filter.matches(document));
        Ok((before - documents.len()) as u64)
    }

    fn find(&self, filter: &Filter) -> FactoryResult<DocumentCursor> {
        let map = match self.read_map() {
            Some(map) => map,
            None => return Ok(DocumentCursor::default()),
        };
        let matched: Vec<Document> = map
            .read()
            .values()
            .filter(|document| filter.matches(document))
            .cloned()
            .collect();
        let mut results = Vec::with_capacity(matched.len());
        for document in matched {
            results.push(self.decorate(document)?);
        }
        Ok(DocumentCursor::new(results))
    }

    fn get_by_id(&self, id: &DocId) -> FactoryResult<Option<Document>> {
        let map = match self.read_map() {
            Some(map) => map,
            None => return Ok(None),
        };
        let document = map.read().get(id).cloned();
        match document {
            Some(document) => Ok(Some(self.decorate(document)?)),
            None => Ok(None),
        }
    }

    fn size(&self) -> FactoryResult<u64> {
        Ok(self
            .read_map()
            .map(|map| map.read().len() as u64)
            .unwrap_or(0))
    }

    fn clear(&self) -> FactoryResult<()> {
        self.client.drop_map(&self.name)
    }

    fn is_materialized(&self) -> bool {
        self.client.has_map(&self.name)
    }

    fn attach_schema(&self, schema: Schema) -> FactoryResult<()> {
        *self.schema.write() = Some(schema);
        Ok(())
    }

    fn schema(&self) -> Option<Schema> {
        self.schema.read().clone()
    }

    fn set_public_fields(&self, fields: ProjectionFields) -> FactoryResult<()> {
        *self.public_fields.write() = Some(fields);
        Ok(())
    }

    fn public_fields(&self) -> Option<ProjectionFields> {
        self.public_fields.read().clone()
    }

    fn install_helpers(&self, helpers: Helpers) -> FactoryResult<()> {
        *self.helpers.write() = Some(helpers);
        Ok(())
    }

    fn allow(&self, rules: AccessRuleSet) -> FactoryResult<()> {
        self.access.allow(rules);
        Ok(())
    }

    fn deny(&self, rules: AccessRuleSet) -> FactoryResult<()> {
        self.access.deny(rules);
        Ok(())
    }

    fn check_access(&self, request: &MutationRequest<'_>) -> FactoryResult<()> {
        self.access.check(request)
    }
}
