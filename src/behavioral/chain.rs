//! Chain of responsibility: pass a request along until someone takes it.
//!
//! Handlers own their successor, so a chain is built front to back:
//! `MonkeyHandler::default().set_next(CatHandler::default().set_next(DogHandler::default()))`.
//! Any link can serve as an entry point; requests only travel forward.

use std::io::{self, Write};

/// A link in the chain.
pub trait Handler {
    /// Handles `request`, or forwards it. `None` means nobody took it.
    fn handle(&self, request: &str) -> Option<String>;
}

/// The forwarding behavior shared by every concrete handler.
#[derive(Default)]
struct Successor {
    next: Option<Box<dyn Handler>>,
}

impl Successor {
    fn forward(&self, request: &str) -> Option<String> {
        self.next.as_ref().and_then(|next| next.handle(request))
    }
}

impl core::fmt::Debug for Successor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Successor")
            .field("linked", &self.next.is_some())
            .finish()
    }
}

macro_rules! eater {
    ($name:ident, $who:literal, $food:literal) => {
        #[doc = concat!("Eats `", $food, "`; forwards everything else.")]
        #[derive(Debug, Default)]
        pub struct $name {
            successor: Successor,
        }

        impl $name {
            /// Links `next` after this handler and returns the extended chain.
            #[must_use]
            pub fn set_next(mut self, next: impl Handler + 'static) -> Self {
                self.successor.next = Some(Box::new(next));
                self
            }
        }

        impl Handler for $name {
            fn handle(&self, request: &str) -> Option<String> {
                if request == $food {
                    Some(format!(concat!($who, ": I'll eat the {}"), request))
                } else {
                    self.successor.forward(request)
                }
            }
        }
    };
}

eater!(MonkeyHandler, "Monkey", "Banana");
eater!(CatHandler, "Cat", "Fish");
eater!(DogHandler, "Dog", "Dog Food");

/// The foods offered by [`client_code`], in order.
pub const FOODS: [&str; 5] = ["Fish", "Banana", "Coffee", "Cake", "Dog Food"];

/// Offers each of [`FOODS`] to `handler` and reports who ate it.
///
/// # Errors
/// Propagates write failures from `out`.
pub fn client_code(handler: &dyn Handler, out: &mut impl Write) -> io::Result<()> {
    for food in FOODS {
        writeln!(out)?;
        writeln!(out, "Client: Who wants a {food}?")?;
        match handler.handle(food) {
            Some(result) => writeln!(out, " {result}")?,
            None => writeln!(out, " {food} was left untouched.")?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_chain() -> MonkeyHandler {
        MonkeyHandler::default().set_next(CatHandler::default().set_next(DogHandler::default()))
    }

    #[test]
    fn test_each_handler_takes_its_food() {
        let chain = full_chain();
        assert_eq!(chain.handle("Banana").as_deref(), Some("Monkey: I'll eat the Banana"));
        assert_eq!(chain.handle("Fish").as_deref(), Some("Cat: I'll eat the Fish"));
        assert_eq!(chain.handle("Dog Food").as_deref(), Some("Dog: I'll eat the Dog Food"));
        assert_eq!(chain.handle("Coffee"), None);
    }

    #[test]
    fn test_subchain_skips_earlier_links() {
        let subchain = CatHandler::default().set_next(DogHandler::default());
        assert_eq!(subchain.handle("Banana"), None);
        assert_eq!(subchain.handle("Fish").as_deref(), Some("Cat: I'll eat the Fish"));
    }

    #[test]
    fn test_client_code_transcript() {
        let mut out = Vec::new();
        client_code(&full_chain(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("\nClient: Who wants a Fish?\n Cat: I'll eat the Fish\n"));
        assert!(text.contains("Client: Who wants a Coffee?\n Coffee was left untouched.\n"));
        assert!(text.ends_with(" Dog: I'll eat the Dog Food\n"));
    }
}
