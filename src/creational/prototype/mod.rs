//! `PrototypeArena` - prototypes whose child points back at its owner.
//!
//! Each node owns a component and a [`BackRef`] naming the node that owns it.
//! The relation is cyclic (`node.backref.owner == node`), but storage is a flat
//! vector indexed by branded [`NodeKey`]s, so nothing is ever reference-counted
//! or self-borrowed. Cloning is explicit and two-phase:
//!
//! 1. the component is deep-copied through the arena's [`DeepCopy`] capability;
//! 2. the back-reference is copied without its owner edge and re-pointed at the
//!    key of the node being created.
//!
//! A generic structural copy would either follow the cycle forever or leave
//! the clone pointing at the original. Here the owner edge is never copied.
//!
//! The arena consumes a [`GhostToken`], so every arena has its own brand and a
//! key from one arena does not type-check against another.

pub mod copier;

pub use copier::{CloneCopier, DeepCopy, MarshalCopier};

use core::fmt;
use core::ops::Index;

use crate::error::CloneError;
use crate::token::{GhostToken, InvariantLifetime};

/// A branded handle to a node in a [`PrototypeArena`].
///
/// Key equality is node identity.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeKey<'brand> {
    index: usize,
    _brand: InvariantLifetime<'brand>,
}

impl<'brand> NodeKey<'brand> {
    /// Returns the node's position in the arena.
    #[inline]
    pub fn index(self) -> usize {
        self.index
    }
}

impl fmt::Debug for NodeKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeKey({})", self.index)
    }
}

/// The child-to-owner relation of a node.
///
/// Not an ownership edge: it names whichever node is its logical owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BackRef<'brand> {
    owner: NodeKey<'brand>,
}

impl<'brand> BackRef<'brand> {
    /// Returns the node this back-reference points at.
    #[inline]
    pub fn owner(&self) -> NodeKey<'brand> {
        self.owner
    }

    /// Copies the back-reference with its owner edge replaced by `owner`.
    #[inline]
    fn retarget(&self, owner: NodeKey<'brand>) -> Self {
        Self { owner }
    }
}

/// A prototype: a primitive, an opaque component, and a back-reference.
#[derive(Debug)]
pub struct Node<'brand, C> {
    primitive: i64,
    component: C,
    backref: BackRef<'brand>,
}

impl<'brand, C> Node<'brand, C> {
    /// Returns the primitive field.
    #[inline]
    pub fn primitive(&self) -> i64 {
        self.primitive
    }

    /// Returns the component.
    #[inline]
    pub fn component(&self) -> &C {
        &self.component
    }

    /// Returns the back-reference.
    #[inline]
    pub fn backref(&self) -> &BackRef<'brand> {
        &self.backref
    }
}

/// An append-only arena of prototypes with a deep-copy capability `D`.
pub struct PrototypeArena<'brand, C, D = CloneCopier> {
    token: GhostToken<'brand>,
    nodes: Vec<Node<'brand, C>>,
    copier: D,
}

impl<C: Clone> PrototypeArena<'_, C, CloneCopier> {
    /// Runs `f` with a fresh arena that copies components via `Clone`.
    ///
    /// Clones are independent of their source only if `C::clone` is deep.
    /// Components holding shared handles (`Arc`, `Rc`) need
    /// [`scope_with`](Self::scope_with) and [`MarshalCopier`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use motif::creational::prototype::PrototypeArena;
    ///
    /// PrototypeArena::scope(|mut arena| {
    ///     let original = arena.insert(245, String::from("component"));
    ///     let clone = arena.clone_node(original).unwrap();
    ///
    ///     assert_eq!(arena[clone].backref().owner(), clone);
    ///     assert_eq!(arena[original].backref().owner(), original);
    /// });
    /// ```
    pub fn scope<F, R>(f: F) -> R
    where
        F: for<'brand> FnOnce(PrototypeArena<'brand, C, CloneCopier>) -> R,
    {
        Self::scope_with(CloneCopier, f)
    }
}

impl<C, D> PrototypeArena<'_, C, D>
where
    D: DeepCopy<C>,
{
    /// Runs `f` with a fresh arena that copies components via `copier`.
    pub fn scope_with<F, R>(copier: D, f: F) -> R
    where
        F: for<'brand> FnOnce(PrototypeArena<'brand, C, D>) -> R,
    {
        GhostToken::new(|token| f(PrototypeArena::with_copier(token, copier)))
    }
}

impl<'brand, C, D> PrototypeArena<'brand, C, D>
where
    D: DeepCopy<C>,
{
    /// Creates an empty arena that takes over `token`'s brand.
    pub fn with_copier(token: GhostToken<'brand>, copier: D) -> Self {
        Self {
            token,
            nodes: Vec::new(),
            copier,
        }
    }

    /// Inserts a prototype whose back-reference points at itself.
    pub fn insert(&mut self, primitive: i64, component: C) -> NodeKey<'brand> {
        let key = self.next_key();
        self.nodes.push(Node {
            primitive,
            component,
            backref: BackRef { owner: key },
        });
        key
    }

    /// Clones `key` into a new node and returns the clone's key.
    ///
    /// The clone's component is copied by the arena's copier, its primitive is
    /// copied by value, and its back-reference points at the clone. The source node is not
    /// modified.
    ///
    /// # Errors
    /// Returns [`CloneError::NotCloneable`] if the component cannot be copied.
    /// Nothing is inserted in that case.
    pub fn clone_node(&mut self, key: NodeKey<'brand>) -> Result<NodeKey<'brand>, CloneError> {
        let source = &self.nodes[key.index];
        debug_assert_eq!(source.backref.owner, key, "back-reference must point at its owner");

        let component = self.copier.deep_copy(&source.component)?;
        let clone = self.next_key();
        let backref = source.backref.retarget(clone);
        let primitive = source.primitive;

        self.nodes.push(Node {
            primitive,
            component,
            backref,
        });
        Ok(clone)
    }

    /// Returns the node for `key`.
    #[inline]
    pub fn get(&self, key: NodeKey<'brand>) -> &Node<'brand, C> {
        &self.nodes[key.index]
    }

    /// Replaces the primitive field of `key`.
    #[inline]
    pub fn set_primitive(&mut self, key: NodeKey<'brand>, primitive: i64) {
        self.nodes[key.index].primitive = primitive;
    }

    /// Returns a mutable reference to the component of `key`.
    ///
    /// The back-reference is deliberately not exposed mutably.
    #[inline]
    pub fn component_mut(&mut self, key: NodeKey<'brand>) -> &mut C {
        &mut self.nodes[key.index].component
    }

    /// Returns the arena's deep-copy capability.
    #[inline]
    pub fn copier(&self) -> &D {
        &self.copier
    }

    /// Returns the number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the arena holds no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates over all node keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = NodeKey<'brand>> + '_ {
        (0..self.nodes.len()).map(|index| self.key_at(index))
    }

    /// Iterates over every `(node, owner)` back-reference edge.
    pub fn backref_edges(&self) -> impl Iterator<Item = (NodeKey<'brand>, NodeKey<'brand>)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (self.key_at(index), node.backref.owner))
    }

    #[inline]
    fn next_key(&self) -> NodeKey<'brand> {
        self.key_at(self.nodes.len())
    }

    #[inline]
    fn key_at(&self, index: usize) -> NodeKey<'brand> {
        NodeKey {
            index,
            _brand: self.token.brand(),
        }
    }
}

impl<'brand, C, D> Index<NodeKey<'brand>> for PrototypeArena<'brand, C, D>
where
    D: DeepCopy<C>,
{
    type Output = Node<'brand, C>;

    #[inline]
    fn index(&self, key: NodeKey<'brand>) -> &Self::Output {
        self.get(key)
    }
}

impl<C: fmt::Debug, D> fmt::Debug for PrototypeArena<'_, C, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrototypeArena")
            .field("nodes", &self.nodes)
            .finish_non_exhaustive()
    }
}
