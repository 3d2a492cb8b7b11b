//! # `motif` - Classic Design Patterns, Rust-Native
//!
//! A collection of the classic object-oriented design patterns, each expressed
//! the way Rust wants to express it: traits at the seams where behavior varies,
//! ownership instead of shared mutable references, and explicit error values.
//!
//! Two components receive careful treatment because they carry real
//! concurrency and ownership concerns:
//!
//! ### Lazy singleton
//! - **Double-checked initialization**: an atomic flag serves the fast path;
//!   a scoped lock plus a re-check guards construction.
//! - **At most one construction**: every caller, on every thread, receives the
//!   same object.
//! - **Failure is not cached**: a failed (or panicking) initializer leaves the
//!   slot empty and the lock released, so a later caller may retry.
//! - **No hidden global**: [`SingletonRegistry`] is an ordinary value passed by
//!   reference; its `const` constructor still allows a `static` when wanted.
//!
//! ### Cyclic prototype
//! - **Index-based back-reference**: a child names its owner by [`NodeKey`],
//!   so storage stays acyclic while the logical relation is a cycle.
//! - **Explicit re-targeting**: [`PrototypeArena::clone_node`] copies the
//!   component through an injected [`DeepCopy`] capability and points the
//!   clone's back-reference at the clone. [`MarshalCopier`] shares nothing
//!   with the source; [`CloneCopier`] is as deep as the component's `Clone`.
//! - **Branded keys**: each arena consumes a [`GhostToken`], so keys from one
//!   arena cannot be used with another.
//!
//! The remaining patterns live in [`behavioral`], [`creational`] and
//! [`structural`]. None of them print: they return values or write to a sink
//! supplied by the caller.
//!
//! ## Example
//!
//! ```rust
//! use motif::{PrototypeArena, SingletonRegistry};
//!
//! let registry = SingletonRegistry::new();
//! std::thread::scope(|s| {
//!     let foo = s.spawn(|| registry.get_instance("FOO"));
//!     let bar = s.spawn(|| registry.get_instance("BAR"));
//!     let (foo, bar) = (foo.join().unwrap(), bar.join().unwrap());
//!     assert!(std::ptr::eq(foo, bar));
//! });
//!
//! PrototypeArena::scope(|mut arena| {
//!     let original = arena.insert(245, vec![1, 2, 3]);
//!     let clone = arena.clone_node(original).unwrap();
//!     assert_eq!(arena[clone].backref().owner(), clone);
//! });
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod behavioral;
pub mod creational;
pub mod error;
pub mod structural;
pub mod token;

pub use creational::prototype::{
    BackRef, CloneCopier, DeepCopy, MarshalCopier, Node, NodeKey, PrototypeArena,
};
pub use creational::singleton::{LazySingleton, SingletonRegistry, SingletonValue};
pub use error::{CloneError, InitError};
pub use token::GhostToken;

// Compile-time layout assertions.
const _: () = {
    use core::mem;

    // Tokens and brands are ZSTs.
    assert!(mem::size_of::<GhostToken<'static>>() == 0);
    assert!(mem::size_of::<token::InvariantLifetime<'static>>() == 0);

    // A key is exactly an index; a back-reference is exactly a key.
    assert!(mem::size_of::<NodeKey<'static>>() == mem::size_of::<usize>());
    assert!(mem::size_of::<BackRef<'static>>() == mem::size_of::<usize>());
};
