//! Default-deny access control for client-originated mutations.
//!
//! Collections are mutable from the authoritative context only, unless a
//! caller explicitly grants access: a mutation attempted through an
//! untrusted handle is rejected when any deny predicate matches it, and
//! also when no allow predicate matches it.

use crate::collection::Document;
use crate::common::{atomic, Atomic};
use crate::errors::{ErrorKind, FactoryError, FactoryResult};
use crate::filter::Filter;
use std::fmt::{Debug, Display, Formatter};
use std::sync::Arc;

/// A mutating operation subject to access control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Insert,
    Update,
    Remove,
}

impl Display for Operation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Insert => write!(f, "insert"),
            Operation::Update => write!(f, "update"),
            Operation::Remove => write!(f, "remove"),
        }
    }
}

/// Borrowed view of an attempted mutation, handed to access predicates.
#[derive(Debug)]
pub enum MutationRequest<'a> {
    Insert {
        document: &'a Document,
    },
    Update {
        filter: &'a Filter,
        update: &'a Document,
    },
    Remove {
        filter: &'a Filter,
    },
}

impl MutationRequest<'_> {
    pub fn operation(&self) -> Operation {
        match self {
            MutationRequest::Insert { .. } => Operation::Insert,
            MutationRequest::Update { .. } => Operation::Update,
            MutationRequest::Remove { .. } => Operation::Remove,
        }
    }
}

/// Boolean predicate evaluated against an attempted mutation.
pub trait AccessPredicate: Send + Sync + Fn(&MutationRequest<'_>) -> bool {}

impl<F> AccessPredicate for F where F: Send + Sync + Fn(&MutationRequest<'_>) -> bool {}

/// One optional predicate per mutating operation.
#[derive(Clone, Default)]
pub struct AccessRuleSet {
    insert: Option<Arc<dyn AccessPredicate>>,
    update: Option<Arc<dyn AccessPredicate>>,
    remove: Option<Arc<dyn AccessPredicate>>,
}

impl AccessRuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the predicate consulted for insert attempts.
    pub fn insert(mut self, predicate: impl AccessPredicate + 'static) -> Self {
        let predicate: Arc<dyn AccessPredicate> = Arc::new(predicate);
        self.insert = Some(predicate);
        self
    }

    /// Sets the predicate consulted for update attempts.
    pub fn update(mut self, predicate: impl AccessPredicate + 'static) -> Self {
        let predicate: Arc<dyn AccessPredicate> = Arc::new(predicate);
        self.update = Some(predicate);
        self
    }

    /// Sets the predicate consulted for remove attempts.
    pub fn remove(mut self, predicate: impl AccessPredicate + 'static) -> Self {
        let predicate: Arc<dyn AccessPredicate> = Arc::new(predicate);
        self.remove = Some(predicate);
        self
    }

    /// A rule set whose predicates match every request, for all three
    /// operations. Registered as a deny rule it blocks all client writes.
    pub fn match_all() -> Self {
        AccessRuleSet::new()
            .insert(|_request: &MutationRequest<'_>| true)
            .update(|_request: &MutationRequest<'_>| true)
            .remove(|_request: &MutationRequest<'_>| true)
    }

    fn predicate(&self, operation: Operation) -> Option<Arc<dyn AccessPredicate>> {
        match operation {
            Operation::Insert => self.insert.clone(),
            Operation::Update => self.update.clone(),
            Operation::Remove => self.remove.clone(),
        }
    }
}

impl Debug for AccessRuleSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessRuleSet")
            .field("insert", &self.insert.is_some())
            .field("update", &self.update.is_some())
            .field("remove", &self.remove.is_some())
            .finish()
    }
}

/// Per-collection allow/deny rule registry.
///
/// Evaluation is deny-first: a matching deny predicate rejects the request
/// outright; otherwise some allow predicate must match, or the request is
/// rejected. With no rules registered at all, every request is rejected.
/// Registration is append-only; re-registering an equivalent rule never
/// errors and does not change the outcome.
#[derive(Clone)]
pub struct AccessControl {
    allow_rules: Atomic<Vec<AccessRuleSet>>,
    deny_rules: Atomic<Vec<AccessRuleSet>>,
}

impl AccessControl {
    pub fn new() -> Self {
        AccessControl {
            allow_rules: atomic(Vec::new()),
            deny_rules: atomic(Vec::new()),
        }
    }

    /// Registers rules that grant matching requests.
    pub fn allow(&self, rules: AccessRuleSet) {
        self.allow_rules.write().push(rules);
    }

    /// Registers rules that reject matching requests.
    pub fn deny(&self, rules: AccessRuleSet) {
        self.deny_rules.write().push(rules);
    }

    /// Checks an attempted mutation against the registered rules.
    pub fn check(&self, request: &MutationRequest<'_>) -> FactoryResult<()> {
        let operation = request.operation();
        for rules in self.deny_rules.read().iter() {
            if let Some(predicate) = rules.predicate(operation) {
                if (predicate)(request) {
                    log::error!("Access denied for {} by a deny rule", operation);
                    return Err(FactoryError::new(
                        &format!("Access denied for {} operation", operation),
                        ErrorKind::AccessDenied,
                    ));
                }
            }
        }

        let allowed = self.allow_rules.read().iter().any(|rules| {
            match rules.predicate(operation) {
                Some(predicate) => (predicate)(request),
                None => false,
            }
        });
        if !allowed {
            log::error!("Access denied for {}: no allow rule matched", operation);
            return Err(FactoryError::new(
                &format!("Access denied for {} operation", operation),
                ErrorKind::AccessDenied,
            ));
        }
        Ok(())
    }
}

impl Default for AccessControl {
    fn default() -> Self {
        AccessControl::new()
    }
}
