//! The navigation store: single source of truth for the menu.
//!
//! One store exists per mounted menu. Presenters share it through
//! [`SharedStore`] and mutate it only through the operations below. Every
//! mutation runs synchronously and notifies subscribers with the
//! post-mutation [`NavigationState`].

use std::cell::RefCell;
use std::rc::Rc;

use megamenu_model::{MenuNode, MenuTree, NavigationConfig, TreeLevel};

use super::derived::DerivedState;
use super::open_slot::OpenSlots;
use super::subscription::{StateChange, SubscriptionId, Subscribers};

/// Store handle shared between presenters and listeners.
pub type SharedStore = Rc<RefCell<NavigationStore>>;

// =============================================================================
// NAVIGATION STATE
// =============================================================================

/// Snapshot of the mutable navigation state.
#[derive(Debug, Clone, Default)]
pub struct NavigationState {
    tree: Rc<MenuTree>,
    config: NavigationConfig,
    /// Department driving the sub-panel / accordion content.
    active_department: Option<String>,
    open: OpenSlots,
    /// Whether the whole widget is open.
    menu_open: bool,
    /// Bumped on every load.
    generation: u64,
    derived: DerivedState,
}

impl NavigationState {
    pub fn tree(&self) -> &MenuTree {
        &self.tree
    }

    /// The shared tree handle; identity changes only on load.
    pub fn tree_handle(&self) -> &Rc<MenuTree> {
        &self.tree
    }

    pub fn config(&self) -> &NavigationConfig {
        &self.config
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_loaded(&self) -> bool {
        self.generation > 0
    }

    pub fn active_department_id(&self) -> Option<&str> {
        self.active_department.as_deref()
    }

    /// The active department node.
    pub fn active_department(&self) -> Option<&MenuNode> {
        self.active_department
            .as_deref()
            .and_then(|id| self.tree.department(id))
    }

    pub fn is_active_department(&self, id: &str) -> bool {
        self.active_department.as_deref() == Some(id)
    }

    pub fn open_department(&self) -> Option<&str> {
        self.open.department.current()
    }

    pub fn open_category(&self) -> Option<&str> {
        self.open.category.current()
    }

    /// Whether `id` is the open node of its level.
    pub fn is_open(&self, id: &str) -> bool {
        self.open.is_open(id)
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Visible categories of `department_id`, in tree order.
    ///
    /// Empty unless `department_id` is the active department. Memoised on
    /// the load generation and department id, so subscribers can derive
    /// views from the state they are handed without touching the store.
    pub fn visible_categories(&self, department_id: &str) -> Vec<&MenuNode> {
        if !self.is_active_department(department_id) {
            return Vec::new();
        }
        let Some(department) = self.tree.department(department_id) else {
            return Vec::new();
        };

        self.derived
            .visible_category_indices(self.generation, department)
            .iter()
            .filter_map(|&index| department.children.get(index))
            .collect()
    }

    /// Visible categories of the active department.
    pub fn active_categories(&self) -> Vec<&MenuNode> {
        match self.active_department_id() {
            Some(id) => self.visible_categories(id),
            None => Vec::new(),
        }
    }
}

// =============================================================================
// NAVIGATION STORE
// =============================================================================

/// Owns the navigation state and its subscribers.
#[derive(Debug, Default)]
pub struct NavigationStore {
    state: NavigationState,
    subscribers: Subscribers,
}

impl NavigationStore {
    /// Create an empty, unloaded store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store behind a shared handle.
    pub fn shared() -> SharedStore {
        Rc::new(RefCell::new(Self::new()))
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    // =========================================================================
    // MUTATIONS
    // =========================================================================

    /// Replace the tree and configuration.
    ///
    /// Active and open state are reset, then the configured default
    /// department (matched by trimmed, case-insensitive name) becomes active.
    /// Calling this again with the latest tree is always safe.
    pub fn load(&mut self, tree: impl Into<Rc<MenuTree>>, config: NavigationConfig) {
        let tree = tree.into();
        let default_department = config
            .default_department_name
            .as_deref()
            .and_then(|name| tree.department_by_name(name))
            .map(|node| node.id.clone());

        self.state.tree = tree;
        self.state.config = config;
        self.state.open.close_all();
        self.state.active_department = default_department;
        self.state.generation += 1;
        self.state.derived.invalidate();

        tracing::info!(
            departments = self.state.tree.len(),
            orientation = %self.state.config.orientation,
            active = ?self.state.active_department,
            generation = self.state.generation,
            "Loaded menu tree"
        );
        self.notify(StateChange::Loaded);
    }

    /// Set or clear the active department.
    ///
    /// Ids that are not top-level departments of the current tree clear the
    /// active department. Changing department closes the open category.
    pub fn set_active_department(&mut self, id: Option<&str>) {
        let next = match id {
            Some(id) if self.state.tree.department(id).is_some() => Some(id.to_string()),
            Some(id) => {
                tracing::debug!(id, "active department not found in tree");
                None
            }
            None => None,
        };

        let changes = self.switch_department(next);
        self.notify_all(&changes);
    }

    /// Toggle a node at its own tree level.
    ///
    /// Departments toggle among departments and become the active department
    /// while open; categories toggle among the active department's
    /// categories. Leaves, unknown ids, deeper levels and categories outside
    /// the active department are ignored. Returns whether the node is open
    /// afterwards.
    pub fn toggle_open(&mut self, node_id: &str) -> bool {
        let Some(location) = self.state.tree.locate(node_id) else {
            tracing::debug!(node_id, "toggle ignored: node not found");
            return false;
        };
        let has_children = self
            .state
            .tree
            .find(node_id)
            .is_some_and(MenuNode::has_children);
        if !has_children {
            return false;
        }

        if location.level == TreeLevel::Category
            && !self.state.is_active_department(&location.department_id)
        {
            tracing::debug!(node_id, "toggle ignored: category outside active department");
            return false;
        }

        let Some(slot) = self.state.open.slot_mut(location.level) else {
            return false;
        };
        let open = slot.toggle(node_id);
        tracing::debug!(node_id, open, level = ?location.level, "toggled");

        let mut changes = vec![StateChange::OpenChanged(location.level)];
        if location.level == TreeLevel::Department {
            let category_was_open = self.state.open.category.close();
            changes.extend(self.switch_department(open.then(|| node_id.to_string())));
            if category_was_open {
                changes.push(StateChange::OpenChanged(TreeLevel::Category));
            }
        }
        self.notify_all(&changes);
        open
    }

    /// Close every open node.
    ///
    /// Closing an open department also clears the active department, the
    /// same as toggling it shut.
    pub fn close_all(&mut self) {
        let mut changes = Vec::new();
        if self.state.open.department.close() {
            changes.push(StateChange::OpenChanged(TreeLevel::Department));
            changes.extend(self.switch_department(None));
        }
        if self.state.open.category.close() {
            changes.push(StateChange::OpenChanged(TreeLevel::Category));
        }
        self.notify_all(&changes);
    }

    /// Open or close the whole widget.
    pub fn open_menu(&mut self, open: bool) {
        if self.state.menu_open == open {
            return;
        }
        tracing::debug!(open, "menu open");
        self.state.menu_open = open;
        self.notify(StateChange::MenuOpen(open));
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    pub fn tree(&self) -> &MenuTree {
        self.state.tree()
    }

    pub fn config(&self) -> &NavigationConfig {
        self.state.config()
    }

    pub fn is_loaded(&self) -> bool {
        self.state.is_loaded()
    }

    pub fn active_department(&self) -> Option<&MenuNode> {
        self.state.active_department()
    }

    pub fn is_active_department(&self, id: &str) -> bool {
        self.state.is_active_department(id)
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.state.is_open(id)
    }

    pub fn is_menu_open(&self) -> bool {
        self.state.is_menu_open()
    }

    pub fn open_department(&self) -> Option<&str> {
        self.state.open_department()
    }

    pub fn open_category(&self) -> Option<&str> {
        self.state.open_category()
    }

    /// Visible categories of `department_id`, in tree order.
    pub fn visible_categories(&self, department_id: &str) -> Vec<&MenuNode> {
        self.state.visible_categories(department_id)
    }

    pub fn active_categories(&self) -> Vec<&MenuNode> {
        self.state.active_categories()
    }

    #[cfg(test)]
    pub(crate) fn derived_recomputations(&self) -> u64 {
        self.state.derived.recomputations()
    }

    // =========================================================================
    // SUBSCRIPTIONS
    // =========================================================================

    /// Register a callback run after every change.
    ///
    /// Callbacks run once the mutation is complete and receive the state
    /// directly. Derive views from that state (see `MenuView::derive`); the
    /// store itself is still borrowed while callbacks run.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&NavigationState, StateChange) + 'static,
    {
        self.subscribers.add(Box::new(callback))
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.remove(id)
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    fn notify(&mut self, change: StateChange) {
        self.subscribers.notify(&self.state, change);
    }

    fn notify_all(&mut self, changes: &[StateChange]) {
        for &change in changes {
            self.notify(change);
        }
    }

    /// Replace the active department without notifying.
    ///
    /// Returns the changes to report once the caller's mutation is complete.
    fn switch_department(&mut self, next: Option<String>) -> Vec<StateChange> {
        if next == self.state.active_department {
            return Vec::new();
        }

        tracing::debug!(from = ?self.state.active_department, to = ?next, "active department");
        self.state.active_department = next;
        let mut changes = vec![StateChange::ActiveDepartment];
        if self.state.open.category.close() {
            changes.push(StateChange::OpenChanged(TreeLevel::Category));
        }
        changes
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use megamenu_model::{MenuNode, MenuTree, NavigationConfig, Orientation, TreeLevel};

    use super::*;

    fn tree() -> MenuTree {
        MenuTree::new(vec![
            MenuNode::new("1", "Shoes", "shoes").with_children(vec![
                MenuNode::new("11", "Sneakers", "shoes/sneakers")
                    .with_children(vec![MenuNode::new("111", "Running", "running")]),
                MenuNode::new("12", "Boots", "shoes/boots").hidden(),
                MenuNode::new("13", "Sandals", "shoes/sandals")
                    .with_children(vec![MenuNode::new("131", "Flip flops", "flip")]),
            ]),
            MenuNode::new("2", "Bags", "bags"),
        ])
    }

    fn loaded(config: NavigationConfig) -> NavigationStore {
        let mut store = NavigationStore::new();
        store.load(tree(), config);
        store
    }

    #[test]
    fn load_resets_state_and_resolves_default_department() {
        let mut store = loaded(NavigationConfig::default());
        store.set_active_department(Some("1"));
        store.toggle_open("1");
        assert!(store.is_open("1"));

        store.load(
            tree(),
            NavigationConfig::new(Orientation::Vertical).with_default_department(" bags "),
        );
        assert!(!store.is_open("1"));
        assert!(store.is_active_department("2"));
        assert_eq!(store.state().generation(), 2);
    }

    #[test]
    fn unknown_default_department_leaves_nothing_active() {
        let store = loaded(NavigationConfig::default().with_default_department("Hats"));
        assert!(store.active_department().is_none());
    }

    #[test]
    fn unknown_ids_are_lookup_misses() {
        let mut store = loaded(NavigationConfig::default());
        store.set_active_department(Some("1"));
        store.set_active_department(Some("missing"));
        assert!(store.active_department().is_none());
        assert!(!store.toggle_open("missing"));
        assert!(store.visible_categories("missing").is_empty());
        assert!(!store.is_open("missing"));
    }

    #[test]
    fn leaves_never_open() {
        let mut store = loaded(NavigationConfig::default());
        assert!(!store.toggle_open("2"));
        assert!(!store.is_open("2"));
        store.set_active_department(Some("1"));
        assert!(!store.toggle_open("111"));
    }

    #[test]
    fn department_and_category_slots_are_independent() {
        let mut store = loaded(NavigationConfig::default());
        store.set_active_department(Some("1"));
        assert!(store.toggle_open("1"));
        assert!(store.toggle_open("11"));
        assert!(store.is_open("1"));
        assert!(store.is_open("11"));

        assert!(store.toggle_open("13"));
        assert!(!store.is_open("11"));
        assert!(store.is_open("1"));

        assert!(!store.toggle_open("13"));
        assert!(store.state().open_category().is_none());
    }

    #[test]
    fn department_toggle_tracks_active_department() {
        let mut store = loaded(NavigationConfig::default());
        assert!(store.toggle_open("1"));
        assert!(store.is_active_department("1"));
        assert!(store.toggle_open("11"));

        assert!(!store.toggle_open("1"));
        assert!(store.active_department().is_none());
        assert!(store.state().open_category().is_none());
    }

    #[test]
    fn categories_outside_active_department_do_not_toggle() {
        let mut store = loaded(NavigationConfig::default());
        assert!(!store.toggle_open("11"));
        store.set_active_department(Some("2"));
        assert!(!store.toggle_open("11"));
    }

    #[test]
    fn changing_department_closes_open_category() {
        let mut store = loaded(NavigationConfig::default());
        store.set_active_department(Some("1"));
        store.toggle_open("11");
        store.set_active_department(Some("2"));
        assert!(store.state().open_category().is_none());
    }

    #[test]
    fn visible_categories_filter_hidden_and_keep_order() {
        let mut store = loaded(NavigationConfig::default());
        assert!(store.visible_categories("1").is_empty());

        store.set_active_department(Some("1"));
        let ids: Vec<&str> = store
            .visible_categories("1")
            .iter()
            .map(|node| node.id.as_str())
            .collect();
        assert_eq!(ids, vec!["11", "13"]);
        assert!(store.visible_categories("2").is_empty());

        store.set_active_department(Some("2"));
        assert!(store.active_categories().is_empty());
    }

    #[test]
    fn visible_categories_are_memoised() {
        let mut store = loaded(NavigationConfig::default());
        store.set_active_department(Some("1"));
        store.visible_categories("1");
        store.open_menu(true);
        store.toggle_open("11");
        store.visible_categories("1");
        assert_eq!(store.derived_recomputations(), 1);

        store.load(tree(), NavigationConfig::default().with_default_department("shoes"));
        store.visible_categories("1");
        assert_eq!(store.derived_recomputations(), 2);
    }

    #[test]
    fn subscribers_see_post_mutation_state() {
        let mut store = NavigationStore::new();
        let seen: Rc<RefCell<Vec<(StateChange, Option<String>)>>> = Rc::default();
        let sink = Rc::clone(&seen);
        let id = store.subscribe(move |state, change| {
            sink.borrow_mut()
                .push((change, state.active_department_id().map(str::to_string)));
        });

        store.load(tree(), NavigationConfig::default());
        store.set_active_department(Some("1"));
        store.set_active_department(Some("1"));
        store.open_menu(true);

        assert_eq!(
            *seen.borrow(),
            vec![
                (StateChange::Loaded, None),
                (StateChange::ActiveDepartment, Some("1".to_string())),
                (StateChange::MenuOpen(true), Some("1".to_string())),
            ]
        );

        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.open_menu(false);
        assert_eq!(seen.borrow().len(), 3);
        assert_eq!(store.subscriber_count(), 0);
    }

    type Seen = Rc<RefCell<Vec<(StateChange, Option<String>, Option<String>)>>>;

    /// Record `(change, open department, active department)` per notification.
    fn record(store: &mut NavigationStore) -> Seen {
        let seen: Seen = Rc::default();
        let sink = Rc::clone(&seen);
        store.subscribe(move |state, change| {
            sink.borrow_mut().push((
                change,
                state.open_department().map(str::to_string),
                state.active_department_id().map(str::to_string),
            ));
        });
        seen
    }

    fn some(id: &str) -> Option<String> {
        Some(id.to_string())
    }

    #[test]
    fn department_toggle_notifies_after_every_change() {
        let mut store = NavigationStore::new();
        store.load(
            MenuTree::new(vec![
                MenuNode::new("1", "Shoes", "shoes")
                    .with_children(vec![MenuNode::new("11", "Boots", "boots")]),
                MenuNode::new("2", "Bags", "bags")
                    .with_children(vec![MenuNode::new("21", "Totes", "totes")]),
            ]),
            NavigationConfig::default(),
        );
        store.toggle_open("1");
        let seen = record(&mut store);

        assert!(store.toggle_open("2"));
        assert_eq!(
            *seen.borrow(),
            vec![
                (StateChange::OpenChanged(TreeLevel::Department), some("2"), some("2")),
                (StateChange::ActiveDepartment, some("2"), some("2")),
            ]
        );

        seen.borrow_mut().clear();
        assert!(!store.toggle_open("2"));
        assert_eq!(
            *seen.borrow(),
            vec![
                (StateChange::OpenChanged(TreeLevel::Department), None, None),
                (StateChange::ActiveDepartment, None, None),
            ]
        );
    }

    #[test]
    fn close_all_clears_the_active_department_of_an_open_department() {
        let mut store = loaded(NavigationConfig::default());
        store.toggle_open("1");
        store.toggle_open("11");
        let seen = record(&mut store);

        store.close_all();
        assert!(store.active_department().is_none());
        assert!(!store.toggle_open("11"));
        assert!(store.state().open_category().is_none());
        assert_eq!(
            *seen.borrow(),
            vec![
                (StateChange::OpenChanged(TreeLevel::Department), None, None),
                (StateChange::ActiveDepartment, None, None),
                (StateChange::OpenChanged(TreeLevel::Category), None, None),
            ]
        );
    }

    #[test]
    fn close_all_reports_only_the_levels_that_changed() {
        let mut store = loaded(NavigationConfig::default());
        store.set_active_department(Some("1"));
        store.toggle_open("11");
        let seen = record(&mut store);

        store.close_all();
        assert!(store.is_active_department("1"));
        assert_eq!(
            *seen.borrow(),
            vec![(StateChange::OpenChanged(TreeLevel::Category), None, some("1"))]
        );

        store.close_all();
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn subscribers_can_derive_categories_from_the_state() {
        let mut store = loaded(NavigationConfig::default());
        let categories: Rc<RefCell<Vec<Vec<String>>>> = Rc::default();
        let sink = Rc::clone(&categories);
        store.subscribe(move |state, _| {
            sink.borrow_mut().push(
                state
                    .active_categories()
                    .iter()
                    .map(|node| node.id.clone())
                    .collect(),
            );
        });

        store.set_active_department(Some("1"));
        store.set_active_department(Some("2"));
        assert_eq!(
            *categories.borrow(),
            vec![vec!["11".to_string(), "13".to_string()], Vec::new()]
        );
    }

    #[test]
    fn empty_store_answers_queries() {
        let store = NavigationStore::new();
        assert!(!store.is_loaded());
        assert!(store.tree().is_empty());
        assert!(store.active_categories().is_empty());
        assert!(!store.is_menu_open());
    }
}
