//! Bridge: the abstraction and its implementation vary independently.

/// The platform-side interface the abstraction delegates to.
pub trait Implementation {
    /// Performs the platform-specific work.
    fn operation_implementation(&self) -> String;
}

/// Platform A.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConcreteImplementationA;

impl Implementation for ConcreteImplementationA {
    fn operation_implementation(&self) -> String {
        "ConcreteImplementationA: Here's the result on the platform A.".to_string()
    }
}

/// Platform B.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConcreteImplementationB;

impl Implementation for ConcreteImplementationB {
    fn operation_implementation(&self) -> String {
        "ConcreteImplementationB: Here's the result on the platform B.".to_string()
    }
}

/// The control-side interface client code depends on.
pub trait Operation {
    /// Runs the operation through the linked implementation.
    fn operation(&self) -> String;
}

/// The base abstraction.
pub struct Abstraction<I> {
    implementation: I,
}

impl<I: Implementation> Abstraction<I> {
    /// Links the abstraction with `implementation`.
    pub fn new(implementation: I) -> Self {
        Self { implementation }
    }
}

impl<I: Implementation> Operation for Abstraction<I> {
    fn operation(&self) -> String {
        format!(
            "Abstraction: Base operation with:\n{}",
            self.implementation.operation_implementation()
        )
    }
}

/// An abstraction extended without touching any implementation.
pub struct ExtendedAbstraction<I> {
    implementation: I,
}

impl<I: Implementation> ExtendedAbstraction<I> {
    /// Links the extended abstraction with `implementation`.
    pub fn new(implementation: I) -> Self {
        Self { implementation }
    }
}

impl<I: Implementation> Operation for ExtendedAbstraction<I> {
    fn operation(&self) -> String {
        format!(
            "ExtendedAbstraction: Extended operation with:\n{}",
            self.implementation.operation_implementation()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_pairing_works() {
        let pairs: [Box<dyn Operation>; 2] = [
            Box::new(Abstraction::new(ConcreteImplementationA)),
            Box::new(ExtendedAbstraction::new(ConcreteImplementationB)),
        ];

        assert_eq!(
            pairs[0].operation(),
            "Abstraction: Base operation with:\nConcreteImplementationA: Here's the result on the platform A."
        );
        assert_eq!(
            pairs[1].operation(),
            "ExtendedAbstraction: Extended operation with:\nConcreteImplementationB: Here's the result on the platform B."
        );
    }
}
