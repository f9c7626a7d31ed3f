//! Observer list for store changes.

use std::fmt;

use megamenu_model::TreeLevel;

use super::store::NavigationState;

/// What a mutation changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateChange {
    /// A new tree and configuration were loaded.
    Loaded,
    /// The active department changed.
    ActiveDepartment,
    /// The open node of one level changed.
    OpenChanged(TreeLevel),
    /// The whole menu was opened or closed.
    MenuOpen(bool),
}

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut(&NavigationState, StateChange)>;

/// Registered subscribers, notified in registration order.
#[derive(Default)]
pub struct Subscribers {
    next_id: u64,
    entries: Vec<(SubscriptionId, Callback)>,
}

impl Subscribers {
    pub fn add(&mut self, callback: Callback) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, callback));
        id
    }

    pub fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub fn notify(&mut self, state: &NavigationState, change: StateChange) {
        for (_, callback) in &mut self.entries {
            callback(state, change);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

}

impl fmt::Debug for Subscribers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscribers")
            .field("count", &self.entries.len())
            .finish()
    }
}
