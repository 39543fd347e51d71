//! Documents, collection handles, and the hook-dispatching decorator.
//!
//! # Documents
//!
//! A [`Document`] is an ordered map of field names to [`crate::common::Value`]s.
//! Each stored document carries a unique [`DocId`] under the reserved `_id`
//! field, assigned by the backing store on insert.
//!
//! # Collections
//!
//! [`Collection`] is the raw handle the storage client provides; it owns
//! backing storage, schema, projection metadata, computed properties, and
//! access rules for one named group of documents.
//!
//! [`HookedCollection`] wraps a raw handle and layers a before/after hook
//! pair around insert, update, and remove, leaving everything else
//! untouched. The factory hands out hooked handles.

mod collection;
mod cursor;
mod doc_id;
mod document;
mod hooked_collection;
mod hooks;
mod metadata;
mod update_options;

pub use collection::*;
pub use cursor::*;
pub use doc_id::DocId;
pub use document::*;
pub use hooked_collection::*;
pub use hooks::*;
pub use metadata::*;
pub use update_options::*;
