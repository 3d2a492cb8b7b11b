//! Deep-copy capabilities injected into a [`PrototypeArena`](super::PrototypeArena).
//!
//! The arena never assumes how a component is copied; it asks its copier.
//! [`MarshalCopier`] round-trips the component through JSON, which yields a
//! fully independent value for any serde-enabled type and reports types that
//! cannot be encoded. [`CloneCopier`] delegates to `Clone` and is only as deep
//! as the component's `Clone` impl.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::CloneError;

/// A capability that produces a structurally equal copy of a component.
///
/// How much the copy shares with its source is part of each implementation's
/// contract: [`MarshalCopier`] shares nothing, [`CloneCopier`] shares whatever
/// `Clone` shares.
pub trait DeepCopy<C> {
    /// Copies `component`.
    ///
    /// # Errors
    /// Returns [`CloneError::NotCloneable`] when `component` cannot be copied.
    fn deep_copy(&self, component: &C) -> Result<C, CloneError>;
}

/// Copies components with their `Clone` implementation.
///
/// The copy is independent only when `C::clone` is. Shared handles such as
/// `Arc<Mutex<_>>` or `Rc<RefCell<_>>` clone the pointer, so a node cloned
/// through this copier shares that state with its source. Use
/// [`MarshalCopier`] for components that hold shared handles.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CloneCopier;

impl<C: Clone> DeepCopy<C> for CloneCopier {
    #[inline]
    fn deep_copy(&self, component: &C) -> Result<C, CloneError> {
        Ok(component.clone())
    }
}

/// Copies components by serializing them and deserializing the result.
///
/// Shared pointers inside the component (e.g. `Arc`) are *not* preserved:
/// the copy owns fresh allocations all the way down.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MarshalCopier;

impl<C> DeepCopy<C> for MarshalCopier
where
    C: Serialize + DeserializeOwned,
{
    fn deep_copy(&self, component: &C) -> Result<C, CloneError> {
        let encoded = serde_json::to_value(component)?;
        Ok(serde_json::from_value(encoded)?)
    }
}

impl<C, F> DeepCopy<C> for F
where
    F: Fn(&C) -> Result<C, CloneError>,
{
    #[inline]
    fn deep_copy(&self, component: &C) -> Result<C, CloneError> {
        self(component)
    }
}
