use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde_json::Value;

/// A named event delivered to subscriber handlers.
///
/// Events are a generic "named call" abstraction: a method name plus an
/// ordered list of opaque JSON argument values. The hub never interprets
/// either; the contract between publisher and subscriber is the name and
/// the shape of the arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub name: String,
    pub args: Vec<Value>,
}

impl Event {
    pub fn new(name: impl Into<String>, args: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }

    /// A bare signal event carrying no arguments.
    pub fn signal(name: impl Into<String>) -> Self {
        Self::new(name, Vec::new())
    }
}

/// Callback sink registered against a connection.
pub type Handler = Arc<dyn Fn(&Event) + Send + Sync>;

/// Token returned when a handler is registered.
///
/// Releasing the token detaches exactly that handler; releasing twice has no
/// effect. The token also releases on drop, so a registration held in a
/// scope is detached when the scope ends.
pub struct Registration {
    detach: Box<dyn Fn() + Send + Sync>,
    released: AtomicBool,
}

impl Registration {
    pub(crate) fn new(detach: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            detach: Box::new(detach),
            released: AtomicBool::new(false),
        }
    }

    /// Detaches the registered handler. Idempotent.
    pub fn release(&self) {
        if !self.released.swap(true, Ordering::SeqCst) {
            (self.detach)();
        }
    }
}

impl Drop for Registration {
    fn drop(&mut self) {
        self.release();
    }
}
