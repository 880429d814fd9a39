use serde::Serialize;
use tracing::error;

use crate::hub::{normalize_topic, Dispatcher, Event};

/// Bare signal pushed on the feed channel when the order list changed.
pub const ORDERS_CHANGED: &str = "ordersChanged";

/// Structured event pushed on the orders channel when a single order
/// was created or changed status.
pub const ORDER_CHANGED: &str = "orderChanged";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
enum ChangeKind {
    Created,
    StatusChanged,
}

/// Payload of an `orderChanged` event. The topic key is carried here for
/// client-side filtering; it does not restrict the fan-out target.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct OrderChange<'a> {
    #[serde(rename = "type")]
    kind: ChangeKind,
    order_id: &'a str,
    topic_key: Option<String>,
    status: Option<&'a str>,
}

/// The single entry point the order workflows call after committing a
/// state change.
///
/// Two channels with different fan-out policies coexist: the feed channel
/// scopes the bare `ordersChanged` signal to the supplied topic (or to all
/// connections when no topic is given), while the orders channel always
/// broadcasts the structured `orderChanged` payload globally and leaves
/// filtering to the client. Clients depend on both policies; do not unify
/// them.
pub struct OrderNotifier {
    feed: Dispatcher,
    orders: Dispatcher,
}

impl OrderNotifier {
    /// `feed` delivers the bare signal channel, `orders` the structured one.
    pub fn new(feed: Dispatcher, orders: Dispatcher) -> Self {
        Self { feed, orders }
    }

    /// Signals that the order list changed. With a non-empty topic key the
    /// signal goes to that topic's members only; with `None` or an empty
    /// key it goes to every feed connection.
    pub fn notify_changed(&self, topic_key: Option<&str>) {
        let event = Event::signal(ORDERS_CHANGED);
        match topic_key.and_then(normalize_topic) {
            Some(topic) => self.feed.broadcast_topic(&topic, &event),
            None => self.feed.broadcast_all(&event),
        }
    }

    /// Announces a newly created order to every orders-channel connection.
    pub fn notify_created(&self, order_id: &str, topic_key: Option<&str>) {
        self.broadcast_change(ChangeKind::Created, order_id, topic_key, None);
    }

    /// Announces an order status change to every orders-channel connection.
    pub fn notify_status_changed(&self, order_id: &str, topic_key: Option<&str>, status: &str) {
        self.broadcast_change(ChangeKind::StatusChanged, order_id, topic_key, Some(status));
    }

    fn broadcast_change(
        &self,
        kind: ChangeKind,
        order_id: &str,
        topic_key: Option<&str>,
        status: Option<&str>,
    ) {
        let change = OrderChange {
            kind,
            order_id,
            topic_key: topic_key.and_then(normalize_topic),
            status,
        };
        let payload = match serde_json::to_value(&change) {
            Ok(json) => json,
            Err(e) => {
                error!("failed to serialize order change: {e:?}");
                return;
            }
        };
        self.orders
            .broadcast_all(&Event::new(ORDER_CHANGED, vec![payload]));
    }
}
