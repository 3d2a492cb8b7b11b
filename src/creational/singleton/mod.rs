//! Singleton: one shared instance, constructed once.
//!
//! Two flavors are provided:
//! - [`eager`]: a process-wide instance fixed at compile time.
//! - [`SingletonRegistry`]: a lazily initialized instance whose first caller
//!   supplies the value. Built on [`LazySingleton`], it tolerates any number
//!   of threads racing for first access.

pub mod eager;
pub mod lazy;

pub use lazy::LazySingleton;

use serde::{Deserialize, Serialize};

use crate::error::InitError;

/// The payload held by a [`SingletonRegistry`]. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SingletonValue {
    value: String,
}

impl SingletonValue {
    /// Creates a new value.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Returns the value fixed at construction.
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Stand-in for the business logic a real singleton would carry.
    pub fn some_business_logic(&self) -> &str {
        self.value()
    }
}

/// An explicitly owned registry for a single shared [`SingletonValue`].
///
/// Hand the registry to whoever needs the instance (by reference, `Arc`, or a
/// `static`); every caller of [`get_instance`](Self::get_instance) receives the
/// same object.
///
/// # Example
///
/// ```rust
/// use motif::creational::singleton::SingletonRegistry;
///
/// let registry = SingletonRegistry::new();
/// let first = registry.get_instance("FOO");
/// let second = registry.get_instance("BAR");
///
/// assert!(std::ptr::eq(first, second));
/// assert_eq!(second.value(), "FOO");
/// ```
#[derive(Debug, Default)]
pub struct SingletonRegistry {
    instance: LazySingleton<SingletonValue>,
}

impl SingletonRegistry {
    /// Creates a registry with an empty slot.
    pub const fn new() -> Self {
        Self {
            instance: LazySingleton::new(),
        }
    }

    /// Returns the shared instance, constructing it from `value_if_absent`
    /// only if no instance exists yet.
    ///
    /// The returned value may differ from `value_if_absent` when another
    /// caller initialized first.
    pub fn get_instance(&self, value_if_absent: impl Into<String>) -> &SingletonValue {
        self.instance.get_or_init(|| SingletonValue::new(value_if_absent))
    }

    /// Returns the shared instance, constructing it with `init` if absent.
    ///
    /// # Errors
    /// Returns [`InitError::InitializationFailed`] when `init` fails; the
    /// registry stays empty and a later call may retry.
    pub fn try_get_instance<F, E>(&self, init: F) -> Result<&SingletonValue, InitError<E>>
    where
        F: FnOnce() -> Result<SingletonValue, E>,
    {
        self.instance.get_or_try_init(init)
    }

    /// Returns the instance if it has been constructed. Never blocks.
    #[inline]
    pub fn get(&self) -> Option<&SingletonValue> {
        self.instance.get()
    }

    /// Returns `true` once an instance has been constructed.
    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.instance.is_initialized()
    }
}
