//! Error types shared by the creational components.

use thiserror::Error;

/// The error returned when a lazily initialized value could not be constructed.
///
/// Only the caller whose initializer failed observes this error; the slot is
/// left empty so that a later caller may retry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InitError<E> {
    /// The initializer returned an error.
    #[error("singleton initialization failed: {0}")]
    InitializationFailed(#[source] E),
}

impl<E> InitError<E> {
    /// Returns the initializer's error.
    pub fn into_inner(self) -> E {
        match self {
            Self::InitializationFailed(err) => err,
        }
    }
}

/// The error returned when a prototype's component cannot be structurally copied.
///
/// This is a property of the component type, not a transient condition, so
/// retrying the same clone cannot succeed.
#[derive(Debug, Error)]
pub enum CloneError {
    /// The deep-copy capability rejected the component.
    #[error("component is not cloneable: {reason}")]
    NotCloneable {
        /// Human-readable cause reported by the copier.
        reason: String,
        /// Underlying serialization failure, when the copier marshals.
        #[source]
        source: Option<serde_json::Error>,
    },
}

impl CloneError {
    /// Builds a `NotCloneable` error without an underlying cause.
    pub fn not_cloneable(reason: impl Into<String>) -> Self {
        Self::NotCloneable {
            reason: reason.into(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for CloneError {
    fn from(err: serde_json::Error) -> Self {
        Self::NotCloneable {
            reason: err.to_string(),
            source: Some(err),
        }
    }
}
