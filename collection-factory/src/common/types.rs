use parking_lot::RwLock;
use std::sync::Arc;

/// Document field values.
pub use serde_json::Value;

/// Shared mutable state guarded by a read-write lock.
pub type Atomic<T> = Arc<RwLock<T>>;

/// Wraps a value in an [`Atomic`].
pub fn atomic<T>(t: T) -> Atomic<T> {
    Arc::new(RwLock::new(t))
}
