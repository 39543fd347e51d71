//! Selectors passed through to the backing store.
//!
//! This crate does not implement a query language; filters exist so the
//! decorating layer and the bundled in-memory client agree on a concrete
//! selector type. [`Filter::matches`] defines the reference semantics.
//!
//! ```rust,ignore
//! use collection_factory::filter::{all, by_id, field};
//!
//! let everything = all();
//! let by_author = field("author").eq("Frank Herbert");
//! let narrowed = by_author.and(field("year").eq(1965));
//! ```

use crate::collection::{DocId, Document};
use crate::common::Value;

/// A selector for documents in a collection.
#[derive(Clone, Debug, PartialEq)]
pub enum Filter {
    /// Matches every document.
    All,
    /// Matches the document with the given id.
    ById(DocId),
    /// Matches documents whose field equals the given value.
    Eq { field: String, value: Value },
    /// Matches documents satisfying every inner filter.
    And(Vec<Filter>),
}

impl Filter {
    /// Evaluates this filter against a document.
    pub fn matches(&self, document: &Document) -> bool {
        match self {
            Filter::All => true,
            Filter::ById(id) => document.id().as_ref() == Some(id),
            Filter::Eq { field, value } => document.get(field) == Some(value),
            Filter::And(filters) => filters.iter().all(|f| f.matches(document)),
        }
    }

    /// Combines this filter with another; both must match.
    pub fn and(self, other: Filter) -> Filter {
        match self {
            Filter::And(mut filters) => {
                filters.push(other);
                Filter::And(filters)
            }
            filter => Filter::And(vec![filter, other]),
        }
    }
}

/// Matches every document in the collection.
pub fn all() -> Filter {
    Filter::All
}

/// Matches a single document by id.
pub fn by_id(id: DocId) -> Filter {
    Filter::ById(id)
}

/// Entry point of the fluent filter api.
pub fn field(name: &str) -> FieldFilter {
    FieldFilter {
        field: name.to_string(),
    }
}

/// Builder for field-based filters.
#[derive(Clone, Debug)]
pub struct FieldFilter {
    field: String,
}

impl FieldFilter {
    /// Matches documents where the field equals `value`.
    pub fn eq<T: Into<Value>>(self, value: T) -> Filter {
        Filter::Eq {
            field: self.field,
            value: value.into(),
        }
    }
}
