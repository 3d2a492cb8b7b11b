//! Behavioral patterns: how requests travel between objects.

pub mod chain;
pub mod command;
