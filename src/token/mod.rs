//! `GhostToken` - the brand that ties arena keys to the arena that issued them.
//!
//! A `GhostToken<'brand>` is a zero-sized value created inside a closure with a
//! fresh, invariant lifetime. Any structure that consumes the token inherits
//! the brand, and every key it hands out carries the same `'brand`. Because no
//! two `GhostToken::new` calls can produce the same lifetime, a key from one
//! arena is rejected at compile time by every other arena.
//!
//! ## Core invariant (linearity)
//!
//! `GhostToken<'brand>` is intentionally **not** `Copy`/`Clone`. A structure
//! that takes the token by value is therefore the *only* owner of its brand.

/// Invariant lifetime definitions for branding.
pub mod invariant;

pub use invariant::InvariantLifetime;

/// A zero-sized capability carrying a unique brand.
#[derive(Debug)]
pub struct GhostToken<'brand>(InvariantLifetime<'brand>);

impl<'brand> GhostToken<'brand> {
    /// Creates a new token and executes a closure with it.
    ///
    /// The closure is generic over the brand, so the token (and anything built
    /// from it) cannot escape the call.
    ///
    /// # Example
    ///
    /// ```rust
    /// use motif::GhostToken;
    ///
    /// let valid = GhostToken::new(|token| token.is_valid());
    /// assert!(valid);
    /// ```
    pub fn new<F, R>(f: F) -> R
    where
        F: for<'new_brand> FnOnce(GhostToken<'new_brand>) -> R,
    {
        f(GhostToken(InvariantLifetime::default()))
    }

    /// Returns the invariant marker for this brand.
    ///
    /// Keys embed this marker so they carry the brand without holding the token.
    #[inline(always)]
    pub(crate) const fn brand(&self) -> InvariantLifetime<'brand> {
        InvariantLifetime::new()
    }

    /// Returns whether the token represents a valid branding scope.
    ///
    /// This is always true for valid tokens, but allows for const evaluation.
    #[inline(always)]
    pub const fn is_valid(&self) -> bool {
        true
    }
}
