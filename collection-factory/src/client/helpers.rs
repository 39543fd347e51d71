use crate::collection::Document;
use crate::common::Value;
use crate::errors::FactoryResult;
use indexmap::IndexMap;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

/// A computed property: derives a value from a stored document at read time.
pub trait HelperFn: Send + Sync + Fn(&Document) -> FactoryResult<Value> {}

impl<F> HelperFn for F where F: Send + Sync + Fn(&Document) -> FactoryResult<Value> {}

/// Named computed properties mixed onto documents returned by reads.
///
/// Helpers are installed on a collection through the client's
/// computed-property facility; the client applies them to every document it
/// hands back from `find` and `get_by_id`. A helper never overwrites a
/// stored field of the same name.
///
/// # Examples
///
/// ```rust,ignore
/// use collection_factory::client::Helpers;
/// use collection_factory::collection::Document;
/// use collection_factory::common::Value;
///
/// let helpers = Helpers::new().helper("display_title", |document: &Document| {
///     let title = document.get("title").and_then(Value::as_str).unwrap_or("untitled");
///     Ok(Value::from(title.to_uppercase()))
/// });
/// ```
#[derive(Clone, Default)]
pub struct Helpers {
    helpers: IndexMap<String, Arc<dyn HelperFn>>,
}

impl Helpers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a computed property under `name`.
    pub fn helper(mut self, name: &str, helper: impl HelperFn + 'static) -> Self {
        let helper: Arc<dyn HelperFn> = Arc::new(helper);
        self.helpers.insert(name.to_string(), helper);
        self
    }

    pub fn len(&self) -> usize {
        self.helpers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.helpers.is_empty()
    }

    /// Materializes every computed property on the document. Stored fields
    /// win over helpers of the same name.
    pub fn apply(&self, document: &mut Document) -> FactoryResult<()> {
        for (name, helper) in &self.helpers {
            if document.has_field(name.as_str()) {
                continue;
            }
            let value = (helper)(document)?;
            document.put(name.as_str(), value)?;
        }
        Ok(())
    }
}

impl Debug for Helpers {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Helpers")
            .field("names", &self.helpers.keys().collect::<Vec<_>>())
            .finish()
    }
}
