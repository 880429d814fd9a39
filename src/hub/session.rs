use std::sync::Arc;

use tracing::debug;

use crate::config::HubSettings;
use crate::hub::dispatcher::Dispatcher;
use crate::hub::event::{Event, Registration};
use crate::hub::group::GroupIndex;
use crate::hub::registry::ConnectionRegistry;

/// One independent event channel: a connection registry plus a group index.
///
/// A channel is constructed once at process start and shared by handle;
/// every hub session and every dispatcher for the channel refers to the
/// same instance. Channels that never need to share subscribers (the bare
/// order-feed signal and the structured order stream) are separate
/// instances.
pub struct EventChannel {
    registry: Arc<ConnectionRegistry>,
    groups: Arc<GroupIndex>,
}

impl EventChannel {
    pub fn new(settings: &HubSettings) -> Arc<Self> {
        Arc::new(Self {
            registry: Arc::new(ConnectionRegistry::new(settings.max_connections)),
            groups: Arc::new(GroupIndex::new()),
        })
    }

    /// A dispatcher handle over this channel's connections and groups.
    pub fn dispatcher(&self) -> Dispatcher {
        Dispatcher::new(Arc::clone(&self.registry), Arc::clone(&self.groups))
    }

    pub fn registry(&self) -> &ConnectionRegistry {
        &self.registry
    }

    pub fn groups(&self) -> &GroupIndex {
        &self.groups
    }
}

/// A session-scoped facade for one connected client.
///
/// Instantiation mints a fresh connection id and registers it with the
/// channel; the session then accepts join/leave calls for its lifetime.
/// No explicit teardown is modeled; registry entries are lightweight and
/// keyed by ephemeral ids.
pub struct HubSession {
    channel: Arc<EventChannel>,
    connection_id: String,
}

impl HubSession {
    pub fn connect(channel: &Arc<EventChannel>) -> Self {
        let connection_id = format!("conn-{}", uuid::Uuid::new_v4());
        channel.registry.register(&connection_id);
        debug!(connection_id = %connection_id, "hub session connected");
        Self {
            channel: Arc::clone(channel),
            connection_id,
        }
    }

    pub fn connection_id(&self) -> &str {
        &self.connection_id
    }

    /// Joins a topic on behalf of this session's connection. Empty or
    /// whitespace keys are a no-op, not an error.
    pub fn join_topic(&self, key: &str) {
        self.channel.groups.join(&self.connection_id, key);
    }

    /// Leaves a topic. Empty or whitespace keys are a no-op.
    pub fn leave_topic(&self, key: &str) {
        self.channel.groups.leave(&self.connection_id, key);
    }

    /// Registers a callback that receives every event delivered to this
    /// session's connection. The returned token detaches it on release.
    pub fn on_event(&self, handler: impl Fn(&Event) + Send + Sync + 'static) -> Registration {
        self.channel.registry.add_handler(&self.connection_id, handler)
    }
}
