use super::DocId;
use crate::common::{Value, DOC_ID_FIELD};
use crate::errors::{ErrorKind, FactoryError, FactoryResult};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A schemaless document: an ordered map of field names to values.
///
/// Field order is insertion order and survives serialization. The reserved
/// `_id` field is managed by the backing store; [`Document::put`] rejects it.
///
/// # Examples
///
/// ```rust,ignore
/// use collection_factory::doc;
///
/// let mut document = doc! {
///     "title": "Dune",
///     "year": 1965
/// };
/// document.put("author", "Frank Herbert")?;
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    fields: IndexMap<String, Value>,
}

impl Document {
    pub fn new() -> Self {
        Document {
            fields: IndexMap::new(),
        }
    }

    /// Puts a field into the document, replacing any previous value.
    ///
    /// The field name must be non-empty and must not be the reserved `_id`
    /// field.
    pub fn put<T: Into<Value>>(&mut self, key: &str, value: T) -> FactoryResult<()> {
        if key.is_empty() {
            log::error!("Document field name cannot be empty");
            return Err(FactoryError::new(
                "Document field name cannot be empty",
                ErrorKind::InvalidFieldName,
            ));
        }
        if key == DOC_ID_FIELD {
            log::error!("Field name '{}' is reserved", DOC_ID_FIELD);
            return Err(FactoryError::new(
                &format!("Field name '{}' is reserved", DOC_ID_FIELD),
                ErrorKind::InvalidFieldName,
            ));
        }
        self.fields.insert(key.to_string(), value.into());
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Removes a field, returning its previous value.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.fields.shift_remove(key)
    }

    pub fn has_field(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Iterates over the fields in insertion order.
    pub fn fields(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }

    /// Returns the document id, if the backing store has assigned one.
    pub fn id(&self) -> Option<DocId> {
        match self.fields.get(DOC_ID_FIELD) {
            Some(Value::String(id)) => Some(DocId::from(id.as_str())),
            _ => None,
        }
    }

    /// Stamps the document id. The backing store calls this on insert.
    pub fn set_id(&mut self, id: &DocId) {
        self.fields.insert(DOC_ID_FIELD.to_string(), Value::from(id));
    }
}

/// Strips the quotes `stringify!` leaves around string-literal keys.
pub fn normalize(key: &str) -> String {
    key.trim_matches('"').to_string()
}

/// Builds a [`Document`] from key-value pairs.
///
/// ```rust,ignore
/// use collection_factory::doc;
///
/// let document = doc! {
///     "title": "Dune",
///     "year": 1965,
///     "in_print": true
/// };
/// ```
#[macro_export]
macro_rules! doc {
    () => {
        $crate::collection::Document::new()
    };

    ($($key:tt : $value:expr),* $(,)?) => {{
        let mut doc = $crate::collection::Document::new();
        $(
            doc.put(&$crate::collection::normalize(stringify!($key)), $value)
                .expect(&format!("Failed to put field {} in document", stringify!($key)));
        )*
        doc
    }};
}
