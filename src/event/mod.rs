//! Terminal event types and listener traits.
//!
//! Events flow outward from the interpreter to the host. The
//! `EventListener` trait decouples [`crate::term::Term`] from any
//! specific host — tests use `VoidListener`, a real application routes
//! events into its UI loop.

/// Events the interpreter can raise toward the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// BEL character received; the host may play an audible signal.
    Bell,
}

/// Receives terminal events from `Term<T>`.
///
/// The default implementation is a no-op, so `VoidListener` needs no
/// method body.
///
/// Bound: `Send + 'static` because hosts commonly drive the interpreter
/// from a pty reader thread.
pub trait EventListener: Send + 'static {
    /// Handle a terminal event. Default: no-op.
    fn send_event(&self, _event: Event) {}
}

/// No-op event listener for tests and headless operation.
pub struct VoidListener;

impl EventListener for VoidListener {}
