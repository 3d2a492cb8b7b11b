//! Decorator: wrap a component to alter its result without changing its type.

/// The interface shared by components and decorators.
pub trait Component {
    /// Produces the component's result.
    fn operation(&self) -> String;
}

/// The undecorated component.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConcreteComponent;

impl Component for ConcreteComponent {
    fn operation(&self) -> String {
        "ConcreteComponent".to_string()
    }
}

impl<C: Component + ?Sized> Component for Box<C> {
    fn operation(&self) -> String {
        (**self).operation()
    }
}

macro_rules! decorator {
    ($name:ident) => {
        #[doc = concat!("Wraps the inner result as `", stringify!($name), "(...)`.")]
        #[derive(Debug, Clone)]
        pub struct $name<C> {
            component: C,
        }

        impl<C: Component> $name<C> {
            /// Wraps `component`.
            pub fn new(component: C) -> Self {
                Self { component }
            }

            /// Returns the wrapped component.
            pub fn inner(&self) -> &C {
                &self.component
            }
        }

        impl<C: Component> Component for $name<C> {
            fn operation(&self) -> String {
                format!(concat!(stringify!($name), "({})"), self.component.operation())
            }
        }
    };
}

decorator!(ConcreteDecoratorA);
decorator!(ConcreteDecoratorB);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_component() {
        assert_eq!(ConcreteComponent.operation(), "ConcreteComponent");
    }

    #[test]
    fn test_decorators_stack() {
        let decorated = ConcreteDecoratorB::new(ConcreteDecoratorA::new(ConcreteComponent));
        assert_eq!(
            decorated.operation(),
            "ConcreteDecoratorB(ConcreteDecoratorA(ConcreteComponent))"
        );
        assert_eq!(decorated.inner().operation(), "ConcreteDecoratorA(ConcreteComponent)");
    }

    #[test]
    fn test_decorating_trait_objects() {
        let boxed: Box<dyn Component> = Box::new(ConcreteComponent);
        assert_eq!(
            ConcreteDecoratorA::new(boxed).operation(),
            "ConcreteDecoratorA(ConcreteComponent)"
        );
    }
}
