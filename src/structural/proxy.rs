//! Proxy: same interface as the real subject, with checks around each call.

use std::io::{self, Write};

/// The interface shared by the real subject and its proxy.
pub trait Subject {
    /// Handles a request.
    ///
    /// # Errors
    /// Propagates write failures from `out`.
    fn request(&self, out: &mut dyn Write) -> io::Result<()>;
}

/// The object doing the actual work.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealSubject;

impl Subject for RealSubject {
    fn request(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "RealSubject: Handling request.")
    }
}

/// Guards and logs access to a wrapped subject.
#[derive(Debug, Clone)]
pub struct Proxy<S> {
    real_subject: S,
    allow: bool,
}

impl<S: Subject> Proxy<S> {
    /// Wraps `real_subject`, granting access.
    pub fn new(real_subject: S) -> Self {
        Self {
            real_subject,
            allow: true,
        }
    }

    /// Wraps `real_subject`, denying every request.
    pub fn denying(real_subject: S) -> Self {
        Self {
            real_subject,
            allow: false,
        }
    }

    fn check_access(&self, out: &mut dyn Write) -> io::Result<bool> {
        writeln!(out, "Proxy: Checking access prior to firing a real request.")?;
        Ok(self.allow)
    }

    fn log_access(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Proxy: Logging the time of request.")
    }
}

impl<S: Subject> Subject for Proxy<S> {
    fn request(&self, out: &mut dyn Write) -> io::Result<()> {
        if !self.check_access(out)? {
            return Ok(());
        }
        self.real_subject.request(out)?;
        self.log_access(out)
    }
}
