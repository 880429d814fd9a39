use std::sync::Arc;

use tracing::trace;

use crate::hub::event::Event;
use crate::hub::group::GroupIndex;
use crate::hub::registry::{ConnectionId, ConnectionRegistry};

/// The set of connections a broadcast resolves against.
#[derive(Debug, Clone, PartialEq)]
pub enum BroadcastTarget {
    All,
    Topic(String),
    Connection(ConnectionId),
}

/// Resolves a broadcast target into a point-in-time snapshot and invokes
/// the registered handlers of every connection in it.
///
/// Delivery is synchronous and fire-and-forget: no acknowledgement, no
/// return value, no retry. Once a snapshot is taken, every entry in it is
/// delivered to, even if some entries become stale moments later.
#[derive(Clone)]
pub struct Dispatcher {
    registry: Arc<ConnectionRegistry>,
    groups: Arc<GroupIndex>,
}

impl Dispatcher {
    pub(crate) fn new(registry: Arc<ConnectionRegistry>, groups: Arc<GroupIndex>) -> Self {
        Self { registry, groups }
    }

    /// Delivers the event to every connection in the resolved target set.
    pub fn broadcast(&self, target: &BroadcastTarget, event: &Event) {
        let snapshot = self.resolve(target);
        trace!(event = %event.name, fan_out = snapshot.len(), "broadcasting");
        for connection_id in &snapshot {
            self.registry.invoke(connection_id, event);
        }
    }

    /// Delivers the event to every registered connection.
    pub fn broadcast_all(&self, event: &Event) {
        self.broadcast(&BroadcastTarget::All, event);
    }

    /// Delivers the event to the members of a topic. A nonexistent or empty
    /// topic means zero invocations and zero errors.
    pub fn broadcast_topic(&self, topic: &str, event: &Event) {
        self.broadcast(&BroadcastTarget::Topic(topic.to_string()), event);
    }

    /// Delivers the event to a single connection, if it is registered.
    pub fn send(&self, connection_id: &str, event: &Event) {
        self.broadcast(&BroadcastTarget::Connection(connection_id.to_string()), event);
    }

    fn resolve(&self, target: &BroadcastTarget) -> Vec<ConnectionId> {
        match target {
            BroadcastTarget::All => self.registry.connection_ids(),
            BroadcastTarget::Topic(topic) => self.groups.members(topic),
            BroadcastTarget::Connection(id) => vec![id.clone()],
        }
    }
}
