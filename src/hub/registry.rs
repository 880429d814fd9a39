use std::collections::HashMap;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, RwLock};

use tracing::{debug, warn};

use crate::hub::event::{Event, Handler, Registration};

pub type ConnectionId = String;

/// Bookkeeping state for a single connection: its registered handlers,
/// keyed so a registration token can detach exactly one of them.
#[derive(Default)]
struct ConnectionState {
    handlers: Mutex<Vec<(u64, Handler)>>,
    next_handler: AtomicU64,
}

impl ConnectionState {
    fn add(&self, handler: Handler) -> u64 {
        let id = self.next_handler.fetch_add(1, Ordering::Relaxed);
        self.handlers.lock().unwrap().push((id, handler));
        id
    }

    fn remove(&self, handler_id: u64) {
        self.handlers
            .lock()
            .unwrap()
            .retain(|(id, _)| *id != handler_id);
    }

    /// Copies the handler list so invocation happens outside the lock.
    fn snapshot(&self) -> Vec<Handler> {
        self.handlers
            .lock()
            .unwrap()
            .iter()
            .map(|(_, h)| Arc::clone(h))
            .collect()
    }
}

/// Tracks live connections and the callback handlers registered against each.
///
/// Entries are created on registration and kept for the process lifetime;
/// they are lightweight and keyed by ephemeral ids, so no explicit teardown
/// is modeled. A configurable soft cap flags runaway growth in the log
/// without ever refusing a registration.
pub struct ConnectionRegistry {
    connections: RwLock<HashMap<ConnectionId, Arc<ConnectionState>>>,
    max_connections: usize,
}

impl ConnectionRegistry {
    pub fn new(max_connections: usize) -> Self {
        Self {
            connections: RwLock::new(HashMap::new()),
            max_connections,
        }
    }

    /// Registers a connection. Idempotent; a connection that is already
    /// known keeps its handlers and memberships.
    pub fn register(&self, connection_id: &str) {
        self.get_or_create(connection_id);
        let count = self.len();
        if count > self.max_connections {
            warn!(
                connections = count,
                max = self.max_connections,
                "connection count exceeds configured soft cap"
            );
        }
        debug!(connection_id, "connection registered");
    }

    /// Appends a callback to the connection's handler list, registering the
    /// connection if it is not yet known. Multiple handlers per connection
    /// are allowed.
    pub fn add_handler(
        &self,
        connection_id: &str,
        handler: impl Fn(&Event) + Send + Sync + 'static,
    ) -> Registration {
        let state = self.get_or_create(connection_id);
        let handler_id = state.add(Arc::new(handler));
        Registration::new(move || state.remove(handler_id))
    }

    /// Invokes every handler registered on the connection with the event.
    ///
    /// The handler list is copied under the connection's lock and each copy
    /// is invoked outside it, so a handler that releases its own
    /// registration or triggers a nested hub operation cannot deadlock.
    /// A panicking handler is logged and does not stop the remaining ones.
    pub fn invoke(&self, connection_id: &str, event: &Event) {
        let Some(state) = self.get(connection_id) else {
            return;
        };
        for handler in state.snapshot() {
            if catch_unwind(AssertUnwindSafe(|| handler(event))).is_err() {
                warn!(connection_id, event = %event.name, "handler panicked during delivery");
            }
        }
    }

    /// Point-in-time snapshot of every registered connection id.
    pub fn connection_ids(&self) -> Vec<ConnectionId> {
        self.connections.read().unwrap().keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.connections.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.connections.read().unwrap().is_empty()
    }

    fn get(&self, connection_id: &str) -> Option<Arc<ConnectionState>> {
        self.connections
            .read()
            .unwrap()
            .get(connection_id)
            .cloned()
    }

    fn get_or_create(&self, connection_id: &str) -> Arc<ConnectionState> {
        if let Some(state) = self.get(connection_id) {
            return state;
        }
        let mut connections = self.connections.write().unwrap();
        Arc::clone(
            connections
                .entry(connection_id.to_string())
                .or_insert_with(|| Arc::new(ConnectionState::default())),
        )
    }
}
