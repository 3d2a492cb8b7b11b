//! Eager singleton: the instance exists before any code asks for it.
//!
//! The instance is a `static` built by a `const` constructor, so there is no
//! initialization race to guard against and no way to create a second one.

/// A process-wide singleton with no construction-time input.
#[derive(Debug)]
pub struct Singleton {
    _private: (),
}

static INSTANCE: Singleton = Singleton { _private: () };

impl Singleton {
    /// Returns the unique instance.
    #[inline]
    pub fn instance() -> &'static Singleton {
        &INSTANCE
    }

    /// Stand-in for the business logic a real singleton would carry.
    pub fn some_business_logic(&self) -> &'static str {
        "Singleton: running business logic on the shared instance."
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eager_singleton_identity() {
        let s1 = Singleton::instance();
        let s2 = Singleton::instance();
        assert!(core::ptr::eq(s1, s2));
    }
}
