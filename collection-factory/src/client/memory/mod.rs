//! In-memory reference implementation of the storage client.
//!
//! Backing maps are created lazily, mirroring stores that defer physical
//! creation until the first write: opening a collection registers nothing,
//! the first successful write materializes the map, and clearing a
//! collection that was never written to is an error.

mod collection;
mod store;

pub(crate) use collection::*;
pub use store::*;
