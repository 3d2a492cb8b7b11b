//! Flyweight: share the common (intrinsic) state between many entities.
//!
//! The factory keys flyweights by their shared state, sorted and joined with
//! `_`, so the same set of values always maps to one shared allocation. The
//! unique (extrinsic) state is passed in by the caller on every operation.

use std::collections::HashMap;
use std::io::{self, Write};
use std::sync::Arc;

/// Holds the state shared by many entities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flyweight {
    shared_state: Vec<String>,
}

impl Flyweight {
    /// Creates a flyweight for `shared_state`.
    pub fn new<S: AsRef<str>>(shared_state: &[S]) -> Self {
        Self {
            shared_state: shared_state.iter().map(|s| s.as_ref().to_owned()).collect(),
        }
    }

    /// Returns the shared state.
    pub fn shared_state(&self) -> &[String] {
        &self.shared_state
    }

    /// Reports the shared state together with a caller's unique state, as JSON.
    ///
    /// # Errors
    /// Propagates write failures from `out`.
    pub fn operation<S: AsRef<str>>(&self, unique_state: &[S], out: &mut impl Write) -> io::Result<()> {
        let unique: Vec<&str> = unique_state.iter().map(AsRef::as_ref).collect();
        let s = serde_json::to_string(&self.shared_state)?;
        let u = serde_json::to_string(&unique)?;
        writeln!(out, "Flyweight: Displaying shared ({s}) and unique ({u}) state.")
    }
}

/// Creates and hands out shared [`Flyweight`]s.
#[derive(Debug, Default)]
pub struct FlyweightFactory {
    flyweights: HashMap<String, Arc<Flyweight>>,
    // Keys in insertion order, for listing.
    order: Vec<String>,
}

impl FlyweightFactory {
    /// Creates a factory pre-populated with `initial` shared states.
    pub fn new<I, S, const N: usize>(initial: I) -> Self
    where
        I: IntoIterator<Item = [S; N]>,
        S: AsRef<str>,
    {
        let mut factory = Self::default();
        for state in initial {
            factory.insert(&state);
        }
        factory
    }

    /// Returns the key for a shared state: the values, sorted, joined with `_`.
    pub fn key<S: AsRef<str>>(state: &[S]) -> String {
        let mut parts: Vec<&str> = state.iter().map(AsRef::as_ref).collect();
        parts.sort_unstable();
        parts.join("_")
    }

    /// Returns the flyweight for `shared_state`, creating it if necessary.
    ///
    /// # Errors
    /// Propagates write failures from `out`.
    pub fn get_flyweight<S: AsRef<str>>(
        &mut self,
        shared_state: &[S],
        out: &mut impl Write,
    ) -> io::Result<Arc<Flyweight>> {
        let key = Self::key(shared_state);
        if let Some(existing) = self.flyweights.get(&key) {
            writeln!(out, "FlyweightFactory: Reusing existing flyweight.")?;
            return Ok(Arc::clone(existing));
        }
        writeln!(out, "FlyweightFactory: Can't find a flyweight, creating new one.")?;
        Ok(self.insert(shared_state))
    }

    /// Returns the number of distinct flyweights.
    pub fn len(&self) -> usize {
        self.flyweights.len()
    }

    /// Returns `true` if the factory holds no flyweights.
    pub fn is_empty(&self) -> bool {
        self.flyweights.is_empty()
    }

    /// Lists every key, in insertion order.
    ///
    /// # Errors
    /// Propagates write failures from `out`.
    pub fn list_flyweights(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "FlyweightFactory: I have {} flyweights:", self.len())?;
        writeln!(out, "{}", self.order.join("\n"))
    }

    fn insert<S: AsRef<str>>(&mut self, state: &[S]) -> Arc<Flyweight> {
        let key = Self::key(state);
        let flyweight = Arc::new(Flyweight::new(state));
        if self.flyweights.insert(key.clone(), Arc::clone(&flyweight)).is_none() {
            self.order.push(key);
        }
        flyweight
    }
}

/// Registers a car, sharing its brand/model/color through `factory`.
///
/// # Errors
/// Propagates write failures from `out`.
pub fn add_car_to_police_database(
    factory: &mut FlyweightFactory,
    plates: &str,
    owner: &str,
    brand: &str,
    model: &str,
    color: &str,
    out: &mut impl Write,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Client: Adding a car to database.")?;
    let flyweight = factory.get_flyweight(&[brand, model, color], out)?;
    flyweight.operation(&[plates, owner], out)
}
