//! Structural patterns: how objects are composed.

pub mod bridge;
pub mod decorator;
pub mod facade;
pub mod flyweight;
pub mod proxy;
