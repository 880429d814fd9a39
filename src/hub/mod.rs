//! The `hub` module is the core of the notification system.
//!
//! It tracks live connections and their registered handlers, maintains
//! topic (group) membership, and delivers named events by taking a
//! point-in-time snapshot of the target set and invoking each handler
//! outside any lock.

pub mod dispatcher;
pub mod event;
pub mod group;
pub mod registry;
pub mod session;

pub use dispatcher::{BroadcastTarget, Dispatcher};
pub use event::{Event, Registration};
pub use group::{normalize_topic, GroupIndex};
pub use registry::{ConnectionId, ConnectionRegistry};
pub use session::{EventChannel, HubSession};
