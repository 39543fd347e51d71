use indexmap::IndexMap;

/// Projection allow-list retained on a collection as metadata.
///
/// Maps field names to an include flag, the shape read surfaces
/// (publications, API layers) consume when projecting documents for
/// untrusted consumers. Nothing in this crate enforces it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProjectionFields {
    fields: IndexMap<String, bool>,
}

impl ProjectionFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a field as included in the public projection.
    pub fn include(mut self, name: &str) -> Self {
        self.fields.insert(name.to_string(), true);
        self
    }

    /// Marks a field as excluded from the public projection.
    pub fn exclude(mut self, name: &str) -> Self {
        self.fields.insert(name.to_string(), false);
        self
    }

    /// Whether the field is part of the public projection. Fields never
    /// mentioned are excluded.
    pub fn is_included(&self, name: &str) -> bool {
        self.fields.get(name).copied().unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
