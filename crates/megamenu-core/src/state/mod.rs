//! Navigation state management.
//!
//! The architecture separates concerns into:
//!
//! - **NavigationStore**: the single source of truth, mutated only through
//!   its operations
//! - **OpenSlot**: single-open tracking, one per expandable tree level
//! - **DerivedState**: cached visible-category lists
//! - **Subscribers**: observers notified after every change

mod derived;
mod open_slot;
mod store;
mod subscription;

pub use open_slot::{OpenSlot, OpenSlots};
pub use store::{NavigationState, NavigationStore, SharedStore};
pub use subscription::{StateChange, SubscriptionId};
