/// Options controlling an update operation.
///
/// # Examples
///
/// ```rust,ignore
/// use collection_factory::collection::UpdateOptions;
///
/// // Update only the first match
/// let options = collection_factory::collection::just_once();
///
/// // Insert the update as a new document when nothing matches
/// let options = collection_factory::collection::insert_if_absent();
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UpdateOptions {
    insert_if_absent: bool,
    just_once: bool,
}

impl UpdateOptions {
    pub fn new(insert_if_absent: bool, just_once: bool) -> Self {
        Self {
            insert_if_absent,
            just_once,
        }
    }

    /// Whether to insert the update as a new document when nothing matches.
    pub fn is_insert_if_absent(&self) -> bool {
        self.insert_if_absent
    }

    /// Whether to update only the first matching document.
    pub fn is_just_once(&self) -> bool {
        self.just_once
    }
}

/// Creates `UpdateOptions` with insert-if-absent behavior.
pub fn insert_if_absent() -> UpdateOptions {
    UpdateOptions::new(true, false)
}

/// Creates `UpdateOptions` that update only the first matching document.
pub fn just_once() -> UpdateOptions {
    UpdateOptions::new(false, true)
}
