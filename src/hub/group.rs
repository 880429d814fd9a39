use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, RwLock};

use tracing::debug;

use crate::hub::registry::ConnectionId;

/// Normalizes a topic key: trimmed and case-folded. Returns `None` for
/// empty or whitespace-only input, which every caller treats as "no topic".
pub fn normalize_topic(key: &str) -> Option<String> {
    let trimmed = key.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

#[derive(Default)]
struct Group {
    members: Mutex<HashSet<ConnectionId>>,
}

/// Bidirectional membership mapping between normalized topic keys and
/// connection ids.
///
/// Groups are created lazily on first join and deleted as soon as their
/// member set empties; no group object exists with an empty member set.
/// Membership is a pure set: joining twice and leaving once removes the
/// member.
#[derive(Default)]
pub struct GroupIndex {
    groups: RwLock<HashMap<String, Arc<Group>>>,
    memberships: RwLock<HashMap<ConnectionId, Arc<Mutex<HashSet<String>>>>>,
}

impl GroupIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the connection to the topic's member set, creating the group if
    /// needed, and records the topic on the connection's own membership set.
    /// Empty or whitespace keys are a no-op. Idempotent.
    pub fn join(&self, connection_id: &str, topic: &str) {
        let Some(topic) = normalize_topic(topic) else {
            return;
        };
        let group = {
            let mut groups = self.groups.write().unwrap();
            Arc::clone(groups.entry(topic.clone()).or_default())
        };
        group
            .members
            .lock()
            .unwrap()
            .insert(connection_id.to_string());
        let membership = {
            let mut memberships = self.memberships.write().unwrap();
            Arc::clone(memberships.entry(connection_id.to_string()).or_default())
        };
        membership.lock().unwrap().insert(topic.clone());
        debug!(connection_id, topic = %topic, "joined topic");
    }

    /// Removes the connection from the topic in both directions, deleting
    /// the group entirely if its member set becomes empty.
    pub fn leave(&self, connection_id: &str, topic: &str) {
        let Some(topic) = normalize_topic(topic) else {
            return;
        };
        if let Some(membership) = self.memberships.read().unwrap().get(connection_id) {
            membership.lock().unwrap().remove(&topic);
        }
        let mut groups = self.groups.write().unwrap();
        if let Some(group) = groups.get(&topic) {
            let mut members = group.members.lock().unwrap();
            members.remove(connection_id);
            if members.is_empty() {
                drop(members);
                groups.remove(&topic);
            }
        }
        debug!(connection_id, topic = %topic, "left topic");
    }

    /// Snapshot of the topic's member set, taken under the group's lock.
    /// A missing or empty topic yields an empty snapshot.
    pub fn members(&self, topic: &str) -> Vec<ConnectionId> {
        let Some(topic) = normalize_topic(topic) else {
            return Vec::new();
        };
        let group = self.groups.read().unwrap().get(&topic).cloned();
        match group {
            Some(group) => group.members.lock().unwrap().iter().cloned().collect(),
            None => Vec::new(),
        }
    }

    /// Snapshot of the topics the connection currently belongs to.
    pub fn topics_of(&self, connection_id: &str) -> Vec<String> {
        let membership = self.memberships.read().unwrap().get(connection_id).cloned();
        match membership {
            Some(membership) => membership.lock().unwrap().iter().cloned().collect(),
            None => Vec::new(),
        }
    }

    /// Number of currently existing (non-empty) groups.
    pub fn group_count(&self) -> usize {
        self.groups.read().unwrap().len()
    }
}
