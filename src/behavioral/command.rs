//! Command: wrap a request as an object the invoker can run later.
//!
//! The invoker knows only the [`Command`] trait. Commands either act on their
//! own or delegate to a [`Receiver`] that carries the business logic.

use std::io::{self, Write};

/// A request packaged for later execution.
pub trait Command {
    /// Executes the request, reporting progress to `out`.
    ///
    /// # Errors
    /// Propagates write failures from `out`.
    fn execute(&self, out: &mut dyn Write) -> io::Result<()>;
}

/// A command that does its (small) job itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleCommand {
    payload: String,
}

impl SimpleCommand {
    /// Creates a command carrying `payload`.
    pub fn new(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
        }
    }
}

impl Command for SimpleCommand {
    fn execute(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(
            out,
            "SimpleCommand: See, I can do simple things like printing ({})",
            self.payload
        )
    }
}

/// Holds the business logic that complex commands delegate to.
#[derive(Debug, Default, Clone, Copy)]
pub struct Receiver;

impl Receiver {
    /// Performs the first piece of work.
    ///
    /// # Errors
    /// Propagates write failures from `out`.
    pub fn do_something(&self, a: &str, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "Receiver: Working on ({a}.)")
    }

    /// Performs the second piece of work.
    ///
    /// # Errors
    /// Propagates write failures from `out`.
    pub fn do_something_else(&self, b: &str, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "Receiver: Also working on ({b}.)")
    }
}

/// A command that forwards its work to a [`Receiver`].
#[derive(Debug, Clone)]
pub struct ComplexCommand {
    receiver: Receiver,
    a: String,
    b: String,
}

impl ComplexCommand {
    /// Creates a command that will ask `receiver` to work on `a` and then `b`.
    pub fn new(receiver: Receiver, a: impl Into<String>, b: impl Into<String>) -> Self {
        Self {
            receiver,
            a: a.into(),
            b: b.into(),
        }
    }
}

impl Command for ComplexCommand {
    fn execute(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "ComplexCommand: Complex stuff should be done by a receiver object")?;
        self.receiver.do_something(&self.a, out)?;
        self.receiver.do_something_else(&self.b, out)
    }
}

/// Runs optional commands before and after its own work.
#[derive(Default)]
pub struct Invoker {
    on_start: Option<Box<dyn Command>>,
    on_finish: Option<Box<dyn Command>>,
}

impl Invoker {
    /// Creates an invoker with no commands attached.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the command run before the main work.
    pub fn set_on_start(&mut self, command: impl Command + 'static) {
        self.on_start = Some(Box::new(command));
    }

    /// Sets the command run after the main work.
    pub fn set_on_finish(&mut self, command: impl Command + 'static) {
        self.on_finish = Some(Box::new(command));
    }

    /// Runs the start command, the main work, then the finish command.
    ///
    /// # Errors
    /// Propagates write failures from `out` and from the commands.
    pub fn do_something_important(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Invoker: Does anybody want something done before I begin?")?;
        writeln!(out)?;
        if let Some(command) = &self.on_start {
            command.execute(out)?;
        }
        writeln!(out)?;
        writeln!(out, "Invoker: ...doing something really important...")?;
        writeln!(out)?;
        writeln!(out, "Invoker: Does anybody want something done after I finish?")?;
        writeln!(out)?;
        if let Some(command) = &self.on_finish {
            command.execute(out)?;
        }
        Ok(())
    }
}

impl core::fmt::Debug for Invoker {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Invoker")
            .field("on_start", &self.on_start.is_some())
            .field("on_finish", &self.on_finish.is_some())
            .finish()
    }
}
