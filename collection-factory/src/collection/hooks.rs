use super::{Collection, DocId, Document, UpdateOptions};
use crate::common::ExecutionContext;
use crate::errors::{ErrorKind, FactoryError, FactoryResult};
use crate::filter::Filter;
use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Callback invoked before an insert; may mutate the document in place.
///
/// The first argument is the raw collection handle, so hook code can read
/// collection-level state (name, schema, other documents).
pub trait BeforeInsertCallback:
    Send + Sync + Fn(&Collection, &mut Document) -> FactoryResult<()>
{
}

impl<F> BeforeInsertCallback for F where
    F: Send + Sync + Fn(&Collection, &mut Document) -> FactoryResult<()>
{
}

/// Callback invoked after an insert; observes the original document and the
/// operation outcome, success or failure.
pub trait AfterInsertCallback:
    Send + Sync + Fn(&Collection, &Document, &FactoryResult<DocId>) -> FactoryResult<()>
{
}

impl<F> AfterInsertCallback for F where
    F: Send + Sync + Fn(&Collection, &Document, &FactoryResult<DocId>) -> FactoryResult<()>
{
}

/// Callback invoked before an update; may mutate the selector, the modifier
/// document, and the options in place.
pub trait BeforeUpdateCallback:
    Send + Sync + Fn(&Collection, &mut Filter, &mut Document, &mut UpdateOptions) -> FactoryResult<()>
{
}

impl<F> BeforeUpdateCallback for F where
    F: Send
        + Sync
        + Fn(&Collection, &mut Filter, &mut Document, &mut UpdateOptions) -> FactoryResult<()>
{
}

/// Callback invoked after an update; observes the original arguments and
/// the written count, or the failure.
pub trait AfterUpdateCallback:
    Send
    + Sync
    + Fn(&Collection, &Filter, &Document, &UpdateOptions, &FactoryResult<u64>) -> FactoryResult<()>
{
}

impl<F> AfterUpdateCallback for F where
    F: Send
        + Sync
        + Fn(
            &Collection,
            &Filter,
            &Document,
            &UpdateOptions,
            &FactoryResult<u64>,
        ) -> FactoryResult<()>
{
}

/// Callback invoked before a remove; may mutate the selector in place.
pub trait BeforeRemoveCallback:
    Send + Sync + Fn(&Collection, &mut Filter) -> FactoryResult<()>
{
}

impl<F> BeforeRemoveCallback for F where
    F: Send + Sync + Fn(&Collection, &mut Filter) -> FactoryResult<()>
{
}

/// Callback invoked after a remove; observes the original selector and the
/// removed count, or the failure.
pub trait AfterRemoveCallback:
    Send + Sync + Fn(&Collection, &Filter, &FactoryResult<u64>) -> FactoryResult<()>
{
}

impl<F> AfterRemoveCallback for F where
    F: Send + Sync + Fn(&Collection, &Filter, &FactoryResult<u64>) -> FactoryResult<()>
{
}

/// The six recognized hook slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HookSlotName {
    Insert,
    Update,
    Remove,
    InsertAfter,
    UpdateAfter,
    RemoveAfter,
}

impl FromStr for HookSlotName {
    type Err = FactoryError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "insert" => Ok(HookSlotName::Insert),
            "update" => Ok(HookSlotName::Update),
            "remove" => Ok(HookSlotName::Remove),
            "insert_after" => Ok(HookSlotName::InsertAfter),
            "update_after" => Ok(HookSlotName::UpdateAfter),
            "remove_after" => Ok(HookSlotName::RemoveAfter),
            other => {
                log::error!("Unrecognized hook slot name '{}'", other);
                Err(FactoryError::new(
                    &format!("Unrecognized hook slot name '{}'", other),
                    ErrorKind::InvalidArgument,
                ))
            }
        }
    }
}

impl Display for HookSlotName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            HookSlotName::Insert => write!(f, "insert"),
            HookSlotName::Update => write!(f, "update"),
            HookSlotName::Remove => write!(f, "remove"),
            HookSlotName::InsertAfter => write!(f, "insert_after"),
            HookSlotName::UpdateAfter => write!(f, "update_after"),
            HookSlotName::RemoveAfter => write!(f, "remove_after"),
        }
    }
}

/// One hook slot: an enabled flag plus an optional callback.
///
/// The callback is fixed at construction; only the flag changes at runtime.
/// A slot with no callback is never invoked regardless of its flag.
pub(crate) struct HookSlot<F: ?Sized> {
    enabled: AtomicBool,
    callback: Option<Arc<F>>,
}

impl<F: ?Sized> HookSlot<F> {
    fn new(callback: Option<Arc<F>>) -> Self {
        HookSlot {
            enabled: AtomicBool::new(true),
            callback,
        }
    }

    fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
    }

    fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    /// The callback, when the slot is enabled, one is attached, and the
    /// context is authoritative.
    pub(crate) fn active(&self, context: ExecutionContext) -> Option<Arc<F>> {
        if !context.is_authoritative() || !self.is_enabled() {
            return None;
        }
        self.callback.clone()
    }
}

impl<F: ?Sized> Default for HookSlot<F> {
    fn default() -> Self {
        HookSlot::new(None)
    }
}

/// The six optional callbacks attached to one hooked collection.
///
/// Hooks are fixed at construction; at runtime only the per-slot enabled
/// flags change, through [`HookSet::set_enabled`] or a [`HookSet::mute`]
/// guard.
#[derive(Default)]
pub struct HookSet {
    pub(crate) insert: HookSlot<dyn BeforeInsertCallback>,
    pub(crate) update: HookSlot<dyn BeforeUpdateCallback>,
    pub(crate) remove: HookSlot<dyn BeforeRemoveCallback>,
    pub(crate) insert_after: HookSlot<dyn AfterInsertCallback>,
    pub(crate) update_after: HookSlot<dyn AfterUpdateCallback>,
    pub(crate) remove_after: HookSlot<dyn AfterRemoveCallback>,
}

impl HookSet {
    pub(crate) fn new(
        insert: Option<Arc<dyn BeforeInsertCallback>>,
        update: Option<Arc<dyn BeforeUpdateCallback>>,
        remove: Option<Arc<dyn BeforeRemoveCallback>>,
        insert_after: Option<Arc<dyn AfterInsertCallback>>,
        update_after: Option<Arc<dyn AfterUpdateCallback>>,
        remove_after: Option<Arc<dyn AfterRemoveCallback>>,
    ) -> Self {
        HookSet {
            insert: HookSlot::new(insert),
            update: HookSlot::new(update),
            remove: HookSlot::new(remove),
            insert_after: HookSlot::new(insert_after),
            update_after: HookSlot::new(update_after),
            remove_after: HookSlot::new(remove_after),
        }
    }

    /// Flips the enabled flag of the named slot.
    pub fn set_enabled(&self, slot: HookSlotName, enabled: bool) {
        match slot {
            HookSlotName::Insert => self.insert.set_enabled(enabled),
            HookSlotName::Update => self.update.set_enabled(enabled),
            HookSlotName::Remove => self.remove.set_enabled(enabled),
            HookSlotName::InsertAfter => self.insert_after.set_enabled(enabled),
            HookSlotName::UpdateAfter => self.update_after.set_enabled(enabled),
            HookSlotName::RemoveAfter => self.remove_after.set_enabled(enabled),
        }
    }

    pub fn is_enabled(&self, slot: HookSlotName) -> bool {
        match slot {
            HookSlotName::Insert => self.insert.is_enabled(),
            HookSlotName::Update => self.update.is_enabled(),
            HookSlotName::Remove => self.remove.is_enabled(),
            HookSlotName::InsertAfter => self.insert_after.is_enabled(),
            HookSlotName::UpdateAfter => self.update_after.is_enabled(),
            HookSlotName::RemoveAfter => self.remove_after.is_enabled(),
        }
    }

    /// Disables the given slots until the returned guard drops.
    ///
    /// The guard re-enables the slots on every exit path, so a failing
    /// operation inside the scope cannot leave them muted.
    pub fn mute(&self, slots: &[HookSlotName]) -> MutedHooks<'_> {
        for slot in slots {
            self.set_enabled(*slot, false);
        }
        MutedHooks {
            hooks: self,
            slots: slots.to_vec(),
        }
    }
}

impl Debug for HookSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HookSet")
            .field("insert", &self.insert.callback.is_some())
            .field("update", &self.update.callback.is_some())
            .field("remove", &self.remove.callback.is_some())
            .field("insert_after", &self.insert_after.callback.is_some())
            .field("update_after", &self.update_after.callback.is_some())
            .field("remove_after", &self.remove_after.callback.is_some())
            .finish()
    }
}

/// Scope guard restoring muted hook slots.
pub struct MutedHooks<'a> {
    hooks: &'a HookSet,
    slots: Vec<HookSlotName>,
}

impl Drop for MutedHooks<'_> {
    fn drop(&mut self) {
        for slot in &self.slots {
            self.hooks.set_enabled(*slot, true);
        }
    }
}
