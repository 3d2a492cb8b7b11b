//! Creational patterns: how instances come into existence.

pub mod abstract_factory;
pub mod builder;
pub mod factory_method;
pub mod prototype;
pub mod singleton;

pub use prototype::{BackRef, CloneCopier, DeepCopy, MarshalCopier, Node, NodeKey, PrototypeArena};
pub use singleton::{LazySingleton, SingletonRegistry, SingletonValue};
