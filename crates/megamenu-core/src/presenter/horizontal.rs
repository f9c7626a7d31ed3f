//! Horizontal (hover-driven) presenter.
//!
//! Pointer-enter on a department makes it active and shows its categories in
//! a panel; pointer-leave on the menu root clears the active department. A
//! single global click listener closes the whole menu when a click lands
//! outside the menu and not on the trigger control.

use std::rc::Rc;

use serde::Serialize;

use super::item::{CloseMenu, ItemView, Navigation, Navigator};
use crate::click::{ClickListeners, ListenerId, OutsideClickGuard};
use crate::state::{NavigationState, SharedStore};
use crate::url::LinkResolver;

/// Render-ready horizontal menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HorizontalView {
    pub departments: Vec<ItemView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub panel: Option<SubPanel>,
}

/// Categories of the active department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubPanel {
    pub department_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub categories: Vec<PanelCategory>,
}

/// A category column: its own link plus its visible sub-categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanelCategory {
    pub header: ItemView,
    pub subcategories: Vec<ItemView>,
}

pub struct HorizontalMenu {
    navigator: Navigator,
    listener: Option<ListenerId>,
}

impl HorizontalMenu {
    pub fn new(store: SharedStore, links: LinkResolver) -> Self {
        Self {
            navigator: Navigator::new(store, links),
            listener: None,
        }
    }

    #[must_use]
    pub fn with_close_menu(mut self, close_menu: impl FnMut(bool) + 'static) -> Self {
        self.set_close_menu(Box::new(close_menu));
        self
    }

    pub fn set_close_menu(&mut self, close_menu: CloseMenu) {
        self.navigator.set_close_menu(close_menu);
    }

    pub fn store(&self) -> &SharedStore {
        &self.navigator.store
    }

    // =========================================================================
    // POINTER
    // =========================================================================

    /// Pointer entered a department item.
    ///
    /// Only visible departments become active. Returns whether the
    /// department is active afterwards.
    pub fn pointer_enter(&mut self, department_id: &str) -> bool {
        let mut store = self.navigator.store.borrow_mut();
        let visible = store
            .tree()
            .department(department_id)
            .is_some_and(|node| node.display);
        if !visible {
            return false;
        }
        store.set_active_department(Some(department_id));
        true
    }

    /// Pointer left the menu root: hide the panel, keep the menu open.
    pub fn pointer_leave(&mut self) {
        self.navigator.store.borrow_mut().set_active_department(None);
    }

    /// Follow a department, category or sub-category link.
    pub fn navigate(&mut self, node_id: &str) -> Option<Navigation> {
        self.navigator.navigate(node_id)
    }

    // =========================================================================
    // MOUNT
    // =========================================================================

    /// Register the outside-click listener.
    ///
    /// Registers at most once; returns false when already mounted.
    pub fn mount(&mut self, listeners: &mut ClickListeners, guard: OutsideClickGuard) -> bool {
        if self.listener.is_some() {
            return false;
        }

        let store = Rc::clone(&self.navigator.store);
        let id = listeners.add(Box::new(move |event| {
            if guard.is_outside(event) {
                tracing::debug!(x = event.point.x, y = event.point.y, "outside click");
                store.borrow_mut().open_menu(false);
            }
        }));
        tracing::debug!(?id, "mounted horizontal menu");
        self.listener = Some(id);
        true
    }

    /// Remove the outside-click listener. Returns false when not mounted.
    pub fn unmount(&mut self, listeners: &mut ClickListeners) -> bool {
        match self.listener.take() {
            Some(id) => {
                tracing::debug!(?id, "unmounted horizontal menu");
                listeners.remove(id)
            }
            None => false,
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.listener.is_some()
    }

    // =========================================================================
    // VIEW
    // =========================================================================

    pub fn view(&self) -> HorizontalView {
        HorizontalView::derive(self.navigator.store.borrow().state(), &self.navigator.links)
    }
}

impl HorizontalView {
    /// Derive the bar and the active department's panel from `state`.
    pub fn derive(state: &NavigationState, links: &LinkResolver) -> Self {
        let departments = state
            .tree()
            .visible_departments()
            .map(|node| ItemView::expandable_link(node, links))
            .collect();

        let panel = state.active_department().and_then(|department| {
            let categories: Vec<PanelCategory> = state
                .visible_categories(&department.id)
                .into_iter()
                .map(|category| PanelCategory {
                    header: ItemView::link(category, links),
                    subcategories: category
                        .visible_children()
                        .map(|sub| ItemView::link(sub, links))
                        .collect(),
                })
                .collect();
            if categories.is_empty() {
                return None;
            }
            Some(SubPanel {
                department_id: department.id.clone(),
                image_url: department
                    .image_url
                    .clone()
                    .or_else(|| state.config().image_url.clone()),
                categories,
            })
        });

        Self {
            departments,
            active_department: state.active_department_id().map(str::to_string),
            panel,
        }
    }
}
