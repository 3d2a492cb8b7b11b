//! Abstract factory: one factory per product family.
//!
//! Client code holds a `&dyn AbstractFactory` and never names a concrete
//! product, yet every product it receives belongs to the same family.

/// The first product kind of every family.
pub trait AbstractProductA {
    /// Returns this product's contribution.
    fn useful_function_a(&self) -> String;
}

/// The second product kind; it can collaborate with an `AbstractProductA`.
pub trait AbstractProductB {
    /// Returns this product's contribution.
    fn useful_function_b(&self) -> String;

    /// Works together with a product A of the same family.
    fn another_useful_function_b(&self, collaborator: &dyn AbstractProductA) -> String;
}

/// Creates a consistent family of products.
pub trait AbstractFactory {
    /// Creates the family's product A.
    fn create_product_a(&self) -> Box<dyn AbstractProductA>;
    /// Creates the family's product B.
    fn create_product_b(&self) -> Box<dyn AbstractProductB>;
}

macro_rules! product_family {
    ($factory:ident, $a:ident, $b:ident, $n:literal) => {
        #[doc = concat!("Product A of family ", $n, ".")]
        #[derive(Debug, Default, Clone, Copy)]
        pub struct $a;

        impl AbstractProductA for $a {
            fn useful_function_a(&self) -> String {
                concat!("The result of the product A", $n, ".").to_string()
            }
        }

        #[doc = concat!("Product B of family ", $n, ".")]
        #[derive(Debug, Default, Clone, Copy)]
        pub struct $b;

        impl AbstractProductB for $b {
            fn useful_function_b(&self) -> String {
                concat!("The result of the product B", $n, ".").to_string()
            }

            fn another_useful_function_b(&self, collaborator: &dyn AbstractProductA) -> String {
                format!(
                    concat!("The result of the B", $n, " collaborating with the ({})"),
                    collaborator.useful_function_a()
                )
            }
        }

        #[doc = concat!("Factory for family ", $n, ".")]
        #[derive(Debug, Default, Clone, Copy)]
        pub struct $factory;

        impl AbstractFactory for $factory {
            fn create_product_a(&self) -> Box<dyn AbstractProductA> {
                Box::new($a)
            }

            fn create_product_b(&self) -> Box<dyn AbstractProductB> {
                Box::new($b)
            }
        }
    };
}

product_family!(ConcreteFactory1, ConcreteProductA1, ConcreteProductB1, "1");
product_family!(ConcreteFactory2, ConcreteProductA2, ConcreteProductB2, "2");

/// Exercises a factory through its abstract interface.
///
/// Returns B's own result followed by B's collaboration with A.
pub fn client_code(factory: &dyn AbstractFactory) -> [String; 2] {
    let product_a = factory.create_product_a();
    let product_b = factory.create_product_b();

    [
        product_b.useful_function_b(),
        product_b.another_useful_function_b(product_a.as_ref()),
    ]
}
