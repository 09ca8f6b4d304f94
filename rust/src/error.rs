//! Error handling and result types for Dictionary operations.
//!
//! Two conditions are detected by the dictionary itself: operating on an
//! absent dictionary reference, and inserting a repeated key into a
//! dictionary in unique mode. A third variant carries failures of the output
//! sink handed to `dump`.

use std::fmt::Debug;

/// Error type for dictionary operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionaryError {
    /// An operation was invoked on an absent dictionary reference.
    InvalidReference(String),
    /// Insert of a key already present while unique mode is enabled.
    DuplicateKey(String),
    /// The output sink rejected a write.
    SinkError(String),
}

impl DictionaryError {
    /// Create an InvalidReference error naming the operation that was attempted
    pub fn invalid_reference(operation: &str) -> Self {
        Self::InvalidReference(format!(
            "calling {}() on NULL Dictionary reference",
            operation
        ))
    }

    /// Create a DuplicateKey error naming the offending key
    pub fn duplicate_key<K: Debug + ?Sized>(key: &K) -> Self {
        Self::DuplicateKey(format!("cannot insert() duplicate key: {:?}", key))
    }

    /// Create a SinkError from an io failure
    pub fn sink_error(err: &std::io::Error) -> Self {
        Self::SinkError(format!("write to output sink failed: {}", err))
    }

    /// Check if this error is a duplicate-key error
    pub fn is_duplicate_key(&self) -> bool {
        matches!(self, Self::DuplicateKey(_))
    }

    /// Check if this error is an invalid-reference error
    pub fn is_invalid_reference(&self) -> bool {
        matches!(self, Self::InvalidReference(_))
    }

    /// Check if this error came from the output sink
    pub fn is_sink_error(&self) -> bool {
        matches!(self, Self::SinkError(_))
    }
}

impl std::fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DictionaryError::InvalidReference(msg) => write!(f, "Dictionary Error: {}", msg),
            DictionaryError::DuplicateKey(msg) => write!(f, "Dictionary Error: {}", msg),
            DictionaryError::SinkError(msg) => write!(f, "Dictionary Error: {}", msg),
        }
    }
}

impl std::error::Error for DictionaryError {}

impl From<std::io::Error> for DictionaryError {
    fn from(err: std::io::Error) -> Self {
        Self::sink_error(&err)
    }
}

/// Public result type for dictionary operations that may fail
pub type DictResult<T> = Result<T, DictionaryError>;

/// Result type for key lookup operations
pub type KeyResult<T> = Result<T, DictionaryError>;

/// Result type for dictionary modification operations
pub type ModifyResult<T> = Result<T, DictionaryError>;

/// Result extension trait for attaching operation context
pub trait DictResultExt<T> {
    /// Prefix the error message with additional context
    fn with_context(self, context: &str) -> DictResult<T>;

    /// Prefix the error message with the name of the failing operation
    fn with_operation(self, operation: &str) -> DictResult<T>;
}

impl<T> DictResultExt<T> for Result<T, DictionaryError> {
    fn with_context(self, context: &str) -> DictResult<T> {
        self.map_err(|e| match e {
            DictionaryError::InvalidReference(msg) => {
                DictionaryError::InvalidReference(format!("{}: {}", context, msg))
            }
            DictionaryError::DuplicateKey(msg) => {
                DictionaryError::DuplicateKey(format!("{}: {}", context, msg))
            }
            DictionaryError::SinkError(msg) => {
                DictionaryError::SinkError(format!("{}: {}", context, msg))
            }
        })
    }

    fn with_operation(self, operation: &str) -> DictResult<T> {
        self.with_context(&format!("Operation '{}'", operation))
    }
}
