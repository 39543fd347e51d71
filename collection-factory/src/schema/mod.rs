//! The schema collaborator: plain field definitions turned into an
//! attachable schema object.
//!
//! Validating documents against a schema is the backing client's concern;
//! this layer only constructs, attaches, and exposes schemas for
//! introspection.

use crate::errors::{ErrorKind, FactoryError, FactoryResult};
use indexmap::IndexMap;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

/// Logical type of a schema field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldType {
    Text,
    Integer,
    Float,
    Boolean,
    Array,
    Object,
}

/// Definition of a single schema field.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldSpec {
    field_type: FieldType,
    required: bool,
}

impl FieldSpec {
    pub fn field_type(&self) -> &FieldType {
        &self.field_type
    }

    pub fn is_required(&self) -> bool {
        self.required
    }
}

/// An attachable collection schema built from plain field definitions.
///
/// # Examples
///
/// ```rust,ignore
/// use collection_factory::schema::{FieldType, Schema};
///
/// let schema = Schema::builder()
///     .required_field("title", FieldType::Text)
///     .field("year", FieldType::Integer)
///     .build()?;
/// ```
#[derive(Clone)]
pub struct Schema {
    inner: Arc<SchemaInner>,
}

struct SchemaInner {
    fields: IndexMap<String, FieldSpec>,
}

impl Schema {
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder { fields: Vec::new() }
    }

    /// The definition of a field, if the schema declares it.
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.inner.fields.get(name)
    }

    /// Iterates over the declared fields in definition order.
    pub fn fields(&self) -> impl Iterator<Item = (&String, &FieldSpec)> + '_ {
        self.inner.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.inner.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.fields.is_empty()
    }
}

impl Debug for Schema {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Schema")
            .field("fields", &self.inner.fields)
            .finish()
    }
}

impl PartialEq for Schema {
    fn eq(&self, other: &Self) -> bool {
        self.inner.fields == other.inner.fields
    }
}

/// Collects field definitions and validates them into a [`Schema`].
pub struct SchemaBuilder {
    fields: Vec<(String, FieldSpec)>,
}

impl SchemaBuilder {
    /// Declares an optional field.
    pub fn field(mut self, name: &str, field_type: FieldType) -> Self {
        self.fields.push((
            name.to_string(),
            FieldSpec {
                field_type,
                required: false,
            },
        ));
        self
    }

    /// Declares a required field.
    pub fn required_field(mut self, name: &str, field_type: FieldType) -> Self {
        self.fields.push((
            name.to_string(),
            FieldSpec {
                field_type,
                required: true,
            },
        ));
        self
    }

    /// Validates the collected definitions and produces the schema.
    ///
    /// A later definition of the same field name replaces an earlier one.
    pub fn build(self) -> FactoryResult<Schema> {
        let mut fields = IndexMap::with_capacity(self.fields.len());
        for (name, spec) in self.fields {
            if name.is_empty() {
                log::error!("Schema field name cannot be empty");
                return Err(FactoryError::new(
                    "Schema field name cannot be empty",
                    ErrorKind::ValidationError,
                ));
            }
            fields.insert(name, spec);
        }
        Ok(Schema {
            inner: Arc::new(SchemaInner { fields }),
        })
    }
}
