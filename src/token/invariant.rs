//! The brand carried by arena keys.

use core::marker::PhantomData;

/// A zero-sized brand that is invariant in `'id`.
///
/// Every [`NodeKey`](crate::NodeKey) embeds one. Because `'id` can neither
/// shrink nor widen by subtyping, a key minted by one arena never type-checks
/// against another arena's brand.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InvariantLifetime<'id>(PhantomData<fn(&'id ()) -> &'id ()>);

impl<'id> InvariantLifetime<'id> {
    /// Creates the brand marker for `'id`.
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}
