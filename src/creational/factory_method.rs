//! Factory method: the creator's logic is shared, the product type is not.

/// A product created by a [`Creator`].
pub trait Product {
    /// Returns the product's result.
    fn operation(&self) -> String;
}

/// Declares the factory method and builds shared logic on top of it.
pub trait Creator {
    /// Creates the product this creator works with.
    fn factory_method(&self) -> Box<dyn Product>;

    /// Runs the creator's logic against whatever product it makes.
    fn some_operation(&self) -> String {
        let product = self.factory_method();
        format!(
            "Creator: The same creator's code has just worked with {}",
            product.operation()
        )
    }
}

/// Returns `{Result of the ConcreteProduct1}`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConcreteProduct1;

impl Product for ConcreteProduct1 {
    fn operation(&self) -> String {
        "{Result of the ConcreteProduct1}".to_string()
    }
}

/// Returns `{Result of the ConcreteProduct2}`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConcreteProduct2;

impl Product for ConcreteProduct2 {
    fn operation(&self) -> String {
        "{Result of the ConcreteProduct2}".to_string()
    }
}

/// Creates [`ConcreteProduct1`].
#[derive(Debug, Default, Clone, Copy)]
pub struct ConcreteCreator1;

impl Creator for ConcreteCreator1 {
    fn factory_method(&self) -> Box<dyn Product> {
        Box::new(ConcreteProduct1)
    }
}

/// Creates [`ConcreteProduct2`].
#[derive(Debug, Default, Clone, Copy)]
pub struct ConcreteCreator2;

impl Creator for ConcreteCreator2 {
    fn factory_method(&self) -> Box<dyn Product> {
        Box::new(ConcreteProduct2)
    }
}
