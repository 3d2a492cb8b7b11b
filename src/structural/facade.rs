//! Facade: one simple entry point over several subsystems.

/// The first subsystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct Subsystem1;

impl Subsystem1 {
    /// Prepares the subsystem.
    pub fn operation1(&self) -> &'static str {
        "Subsystem1: Ready!"
    }

    /// Runs the subsystem.
    pub fn operation_n(&self) -> &'static str {
        "Subsystem1: Go!"
    }
}

/// The second subsystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct Subsystem2;

impl Subsystem2 {
    /// Prepares the subsystem.
    pub fn operation1(&self) -> &'static str {
        "Subsystem2: Get ready!"
    }

    /// Runs the subsystem.
    pub fn operation_z(&self) -> &'static str {
        "Subsystem2: Fire!"
    }
}

/// Drives both subsystems through a fixed sequence.
#[derive(Debug, Default, Clone)]
pub struct Facade {
    subsystem1: Subsystem1,
    subsystem2: Subsystem2,
}

impl Facade {
    /// Creates a facade over the given subsystems, creating any that are missing.
    pub fn new(subsystem1: Option<Subsystem1>, subsystem2: Option<Subsystem2>) -> Self {
        Self {
            subsystem1: subsystem1.unwrap_or_default(),
            subsystem2: subsystem2.unwrap_or_default(),
        }
    }

    /// Initializes both subsystems and then orders them to act.
    pub fn operation(&self) -> String {
        [
            "Facade initializes subsystems:",
            self.subsystem1.operation1(),
            self.subsystem2.operation1(),
            "Facade orders subsystems to perform the action:",
            self.subsystem1.operation_n(),
            self.subsystem2.operation_z(),
        ]
        .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facade_operation() {
        let facade = Facade::new(Some(Subsystem1), None);
        assert_eq!(
            facade.operation(),
            "Facade initializes subsystems:\n\
             Subsystem1: Ready!\n\
             Subsystem2: Get ready!\n\
             Facade orders subsystems to perform the action:\n\
             Subsystem1: Go!\n\
             Subsystem2: Fire!"
        );
    }
}
