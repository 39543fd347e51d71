//! # collection-factory
//!
//! A factory for hooked document collections over an embedded document
//! store: idempotent name-based singleton creation, before/after hooks
//! around the three mutating operations, default-deny access control,
//! optional schema attachment, and computed document properties.
//!
//! ## Key pieces
//!
//! - **Factory** ([`factory::CollectionFactory`]): builds-or-returns a
//!   hooked collection for a name, wires the supplied hooks, optionally
//!   forces eager backing-store materialization, applies the default-deny
//!   access rule, and attaches schema, projection metadata, and computed
//!   properties.
//! - **Hooked collection** ([`collection::HookedCollection`]): wraps a raw
//!   collection handle and runs a before/after hook pair around insert,
//!   update, and remove, preserving errors and forwarding everything else
//!   unchanged.
//! - **Registry** ([`factory::Registry`]): factory-owned lookup from
//!   collection name to instance, with best-effort teardown.
//! - **Storage client** ([`client::StorageClient`]): the external
//!   collaborator owning backing storage; an in-memory reference client
//!   ships in [`client::memory`].
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use collection_factory::client::memory::MemoryClient;
//! use collection_factory::client::StorageClient;
//! use collection_factory::collection::{Collection, Document};
//! use collection_factory::doc;
//! use collection_factory::factory::{CollectionFactory, CreationParams};
//! use collection_factory::filter::field;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let factory = CollectionFactory::new(StorageClient::new(MemoryClient::new()));
//!
//! let books = factory.create_collection(
//!     CreationParams::new("books").on_insert(
//!         |_collection: &Collection, document: &mut Document| {
//!             document.put("created_at", 1234567890)
//!         },
//!     ),
//! )?;
//!
//! books.insert(doc! { "title": "Dune" })?;
//! let stored = books.find(&field("title").eq("Dune"))?.first().unwrap();
//! assert!(stored.has_field("created_at"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Design pattern
//!
//! Public handle types are thin clones over shared inner state
//! (`Arc<Inner>` or `Arc<dyn Provider>`), so handles can be passed around
//! freely while implementation details stay encapsulated. The hooked
//! collection wraps the raw handle by composition; it never inherits the
//! client's behavior, it forwards to it.
//!
//! ## Module organization
//!
//! - [`access`] - default-deny access rules for client-originated mutations
//! - [`client`] - the storage client collaborator and the in-memory client
//! - [`collection`] - documents, collection handles, hooks, and the decorator
//! - [`common`] - shared types and the execution context
//! - [`errors`] - error types and result definitions
//! - [`factory`] - the factory and its registry
//! - [`filter`] - pass-through document selectors
//! - [`schema`] - the schema collaborator

pub mod access;
pub mod client;
pub mod collection;
pub mod common;
pub mod errors;
pub mod factory;
pub mod filter;
pub mod schema;
