use crate::common::Value;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Unique identifier of a document within a collection.
///
/// Ids are random UUIDs rendered in simple form. The backing store assigns
/// one on insert when the document does not already carry an `_id`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DocId(String);

impl DocId {
    /// Generates a new random id.
    pub fn random() -> Self {
        DocId(Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for DocId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for DocId {
    fn from(id: &str) -> Self {
        DocId(id.to_string())
    }
}

impl From<String> for DocId {
    fn from(id: String) -> Self {
        DocId(id)
    }
}

impl From<&DocId> for Value {
    fn from(id: &DocId) -> Self {
        Value::String(id.0.clone())
    }
}

impl From<DocId> for Value {
    fn from(id: DocId) -> Self {
        Value::String(id.0)
    }
}
