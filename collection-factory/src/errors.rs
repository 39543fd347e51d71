use crate::common::{atomic, Atomic};
use backtrace::Backtrace;
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::result::Result;

/// Error kinds for factory operations.
///
/// Each kind describes one category of failure, so callers can match on the
/// category without parsing messages.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ErrorKind {
    /// No collection is registered under the requested name
    CollectionNotFound,
    /// A hook slot name or similar argument was not recognized
    InvalidArgument,
    /// A document field name is empty or reserved
    InvalidFieldName,
    /// A schema or creation parameter failed validation
    ValidationError,
    /// A client-originated mutation was rejected by the access rules
    AccessDenied,
    /// The backing store failed, including clearing a collection that was
    /// never materialized
    BackendError,
    /// The operation is not valid in the current state
    InvalidOperation,
    /// Internal error (usually indicates a bug)
    InternalError,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::CollectionNotFound => write!(f, "Collection not found"),
            ErrorKind::InvalidArgument => write!(f, "Invalid argument"),
            ErrorKind::InvalidFieldName => write!(f, "Invalid field name"),
            ErrorKind::ValidationError => write!(f, "Validation error"),
            ErrorKind::AccessDenied => write!(f, "Access denied"),
            ErrorKind::BackendError => write!(f, "Backend error"),
            ErrorKind::InvalidOperation => write!(f, "Invalid operation"),
            ErrorKind::InternalError => write!(f, "Internal error"),
        }
    }
}

/// Error type for all fallible factory operations.
///
/// A `FactoryError` carries a message, an [`ErrorKind`], an optional cause
/// for error chaining, and a backtrace captured at construction time.
///
/// # Examples
///
/// ```rust,ignore
/// use collection_factory::errors::{ErrorKind, FactoryError, FactoryResult};
///
/// fn example() -> FactoryResult<()> {
///     Err(FactoryError::new("Collection not found", ErrorKind::CollectionNotFound))
/// }
/// ```
#[derive(Clone)]
pub struct FactoryError {
    message: String,
    error_kind: ErrorKind,
    cause: Option<Box<FactoryError>>,
    backtrace: Atomic<Backtrace>,
}

impl FactoryError {
    /// Creates a new error with the given message and kind.
    pub fn new(message: &str, error_kind: ErrorKind) -> Self {
        FactoryError {
            message: message.to_string(),
            error_kind,
            cause: None,
            backtrace: atomic(Backtrace::new()),
        }
    }

    /// Creates a new error with a cause attached, preserving the chain for
    /// debugging.
    pub fn new_with_cause(message: &str, error_kind: ErrorKind, cause: FactoryError) -> Self {
        FactoryError {
            message: message.to_string(),
            error_kind,
            cause: Some(Box::new(cause)),
            backtrace: atomic(Backtrace::new()),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.error_kind
    }

    pub fn cause(&self) -> Option<&Box<FactoryError>> {
        self.cause.as_ref()
    }
}

impl Display for FactoryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Debug for FactoryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // message with stack trace, followed by the cause chain
        match &self.cause {
            Some(cause) => write!(f, "{}\nCaused by: {:?}", self.message, cause),
            None => write!(f, "{}\n{:?}", self.message, self.backtrace.read()),
        }
    }
}

impl Error for FactoryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.cause {
            Some(cause) => Some(cause.as_ref()),
            None => None,
        }
    }
}

/// Result type alias used by every fallible operation in this crate.
pub type FactoryResult<T> = Result<T, FactoryError>;

impl From<String> for FactoryError {
    fn from(msg: String) -> Self {
        FactoryError::new(&msg, ErrorKind::InternalError)
    }
}

impl From<&str> for FactoryError {
    fn from(msg: &str) -> Self {
        FactoryError::new(msg, ErrorKind::InternalError)
    }
}
