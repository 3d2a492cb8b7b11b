//! Builder: assemble a product step by step, optionally through a director.

/// The construction steps shared by every builder.
pub trait Builder {
    /// Adds part A.
    fn produce_part_a(&mut self);
    /// Adds part B.
    fn produce_part_b(&mut self);
    /// Adds part C.
    fn produce_part_c(&mut self);
}

/// The product assembled by [`ConcreteBuilder1`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Product1 {
    parts: Vec<String>,
}

impl Product1 {
    /// Appends a part.
    pub fn add(&mut self, part: impl Into<String>) {
        self.parts.push(part.into());
    }

    /// Returns the parts in the order they were added.
    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    /// Describes the product, e.g. `Product parts: PartA1, PartB1`.
    pub fn list_parts(&self) -> String {
        format!("Product parts: {}", self.parts.join(", "))
    }
}

/// Builds [`Product1`] values.
#[derive(Debug, Default)]
pub struct ConcreteBuilder1 {
    product: Product1,
}

impl ConcreteBuilder1 {
    /// Creates a builder holding an empty product.
    pub fn new() -> Self {
        Self::default()
    }

    /// Discards the product under construction.
    pub fn reset(&mut self) {
        self.product = Product1::default();
    }

    /// Returns the finished product and starts a fresh one.
    pub fn product(&mut self) -> Product1 {
        core::mem::take(&mut self.product)
    }
}

impl Builder for ConcreteBuilder1 {
    fn produce_part_a(&mut self) {
        self.product.add("PartA1");
    }

    fn produce_part_b(&mut self) {
        self.product.add("PartB1");
    }

    fn produce_part_c(&mut self) {
        self.product.add("PartC1");
    }
}

/// Runs building steps in fixed sequences against any builder.
#[derive(Debug, Default, Clone, Copy)]
pub struct Director;

impl Director {
    /// Builds the smallest useful product (part A only).
    pub fn build_minimal_viable_product(&self, builder: &mut dyn Builder) {
        builder.produce_part_a();
    }

    /// Builds a product with every part.
    pub fn build_full_featured_product(&self, builder: &mut dyn Builder) {
        builder.produce_part_a();
        builder.produce_part_b();
        builder.produce_part_c();
    }
}
