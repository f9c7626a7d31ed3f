//! Vertical (click-driven accordion) presenter.
//!
//! Departments and categories each keep their own single-open slot in the
//! store. Opening a department also makes it the active department, so the
//! category list is always derived from the store's active department.

use serde::Serialize;

use megamenu_model::{MenuNode, TreeLevel};

use super::item::{CloseMenu, Interaction, ItemView, Navigation, Navigator, SeeAll};
use crate::state::{NavigationState, SharedStore};
use crate::url::LinkResolver;

/// Render-ready accordion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerticalView {
    pub departments: Vec<VerticalDepartment>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerticalDepartment {
    pub item: ItemView,
    pub open: bool,
    /// Present only while open.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub see_all: Option<SeeAll>,
    /// Empty unless open.
    pub categories: Vec<VerticalCategory>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerticalCategory {
    pub item: ItemView,
    pub open: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub see_all: Option<SeeAll>,
    pub subcategories: Vec<ItemView>,
}

pub struct VerticalMenu {
    navigator: Navigator,
}

impl VerticalMenu {
    pub fn new(store: SharedStore, links: LinkResolver) -> Self {
        Self {
            navigator: Navigator::new(store, links),
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

    /// Click on a node's header.
    ///
    /// Departments and categories with children toggle at their own level
    /// (an open department is also the active one); everything else follows
    /// its link.
    pub fn click(&mut self, node_id: &str) -> Interaction {
        let target = {
            let store = self.navigator.store.borrow();
            store
                .tree()
                .locate(node_id)
                .zip(store.tree().find(node_id).map(MenuNode::has_children))
        };
        let Some((location, has_children)) = target else {
            return Interaction::Ignored;
        };

        match (location.level, has_children) {
            (TreeLevel::Department | TreeLevel::Category, true) => {
                let open = self.navigator.store.borrow_mut().toggle_open(node_id);
                Interaction::Toggled {
                    node_id: node_id.to_string(),
                    open,
                }
            }
            _ => self
                .navigate(node_id)
                .map_or(Interaction::Ignored, Interaction::Navigated),
        }
    }

    /// Follow a node's link directly (leaf items and "see all" links).
    pub fn navigate(&mut self, node_id: &str) -> Option<Navigation> {
        self.navigator.navigate(node_id)
    }

    pub fn view(&self) -> VerticalView {
        VerticalView::derive(self.navigator.store.borrow().state(), &self.navigator.links)
    }
}

impl VerticalView {
    /// Derive the accordion from `state`; closed nodes expose no children.
    pub fn derive(state: &NavigationState, links: &LinkResolver) -> Self {
        let departments = state
            .tree()
            .visible_departments()
            .map(|department| {
                let open = department.has_children() && state.is_open(&department.id);
                let item = if department.has_children() {
                    ItemView::accordion(department)
                } else {
                    ItemView::link(department, links)
                };
                if !open {
                    return VerticalDepartment {
                        item,
                        open,
                        see_all: None,
                        categories: Vec::new(),
                    };
                }

                let categories = state
                    .visible_categories(&department.id)
                    .into_iter()
                    .map(|category| {
                        let open = category.has_children() && state.is_open(&category.id);
                        let item = if category.has_children() {
                            ItemView::accordion(category)
                        } else {
                            ItemView::link(category, links)
                        };
                        VerticalCategory {
                            item,
                            open,
                            see_all: open.then(|| SeeAll::for_node(category, links)).flatten(),
                            subcategories: if open {
                                category
                                    .visible_children()
                                    .map(|sub| ItemView::link(sub, links))
                                    .collect()
                            } else {
                                Vec::new()
                            },
                        }
                    })
                    .collect();

                VerticalDepartment {
                    item,
                    open,
                    see_all: SeeAll::for_node(department, links),
                    categories,
                }
            })
            .collect();

        Self { departments }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use megamenu_model::{MenuTree, NavigationConfig, Orientation};

    use super::*;
    use crate::state::NavigationStore;

    fn store() -> SharedStore {
        let store = NavigationStore::shared();
        store.borrow_mut().load(
            MenuTree::new(vec![
                MenuNode::new("1", "Shoes", "shoes").with_children(vec![
                    MenuNode::new("11", "Sneakers", "shoes/sneakers")
                        .with_children(vec![MenuNode::new("111", "Running", "running")]),
                    MenuNode::new("12", "Sandals", "shoes/sandals")
                        .with_children(vec![MenuNode::new("121", "Slides", "slides")]),
                    MenuNode::new("13", "Socks", "shoes/socks"),
                ]),
                MenuNode::new("2", "Bags", "bags")
                    .with_children(vec![MenuNode::new("21", "Totes", "bags/totes")]),
                MenuNode::new("3", "Gift cards", "gift-cards"),
            ]),
            NavigationConfig::new(Orientation::Vertical),
        );
        store
    }

    fn menu(store: &SharedStore) -> VerticalMenu {
        VerticalMenu::new(Rc::clone(store), LinkResolver::new("https://store.com"))
    }

    fn toggled(node_id: &str, open: bool) -> Interaction {
        Interaction::Toggled {
            node_id: node_id.to_string(),
            open,
        }
    }

    #[test]
    fn department_click_toggles_and_tracks_active() {
        let store = store();
        let mut menu = menu(&store);

        assert_eq!(menu.click("1"), toggled("1", true));
        assert!(store.borrow().is_active_department("1"));

        assert_eq!(menu.click("2"), toggled("2", true));
        assert!(!store.borrow().is_open("1"));
        assert!(store.borrow().is_active_department("2"));

        assert_eq!(menu.click("2"), toggled("2", false));
        assert!(store.borrow().active_department().is_none());
    }

    #[test]
    fn category_slot_is_separate_from_department_slot() {
        let store = store();
        let mut menu = menu(&store);
        menu.click("1");

        assert_eq!(menu.click("11"), toggled("11", true));
        assert_eq!(menu.click("12"), toggled("12", true));
        let view = menu.view();
        let shoes = &view.departments[0];
        assert!(shoes.open);
        assert!(!shoes.categories[0].open);
        assert!(shoes.categories[1].open);

        assert_eq!(menu.click("12"), toggled("12", false));
        assert!(store.borrow().is_open("1"));
    }

    #[test]
    fn switching_department_closes_category() {
        let store = store();
        let mut menu = menu(&store);
        menu.click("1");
        menu.click("11");
        menu.click("2");
        assert!(store.borrow().state().open_category().is_none());
    }

    #[test]
    fn leaves_navigate_and_close_the_overlay() {
        let store = store();
        let closes = Rc::new(Cell::new(0));
        let counter = Rc::clone(&closes);
        let mut menu = menu(&store).with_close_menu(move |open| {
            assert!(!open);
            counter.set(counter.get() + 1);
        });

        let Interaction::Navigated(navigation) = menu.click("3") else {
            panic!("leaf department should navigate");
        };
        assert_eq!(navigation.url, "https://store.com/gift-cards");

        menu.click("1");
        assert!(matches!(menu.click("13"), Interaction::Navigated(_)));
        assert_eq!(closes.get(), 2);
        assert!(!store.borrow().is_open("13"));

        assert_eq!(menu.click("missing"), Interaction::Ignored);
        assert_eq!(closes.get(), 2);
    }

    #[test]
    fn sub_categories_are_links() {
        let store = store();
        let mut menu = menu(&store);
        menu.click("1");
        menu.click("11");
        assert!(matches!(menu.click("111"), Interaction::Navigated(_)));
    }

    #[test]
    fn view_exposes_children_only_when_open() {
        let store = store();
        let mut menu = menu(&store);

        let view = menu.view();
        assert!(view.departments.iter().all(|d| !d.open && d.categories.is_empty()));
        assert!(view.departments[0].item.accordion);
        assert!(view.departments[0].item.url.is_none());
        assert_eq!(
            view.departments[2].item.url.as_deref(),
            Some("https://store.com/gift-cards")
        );

        menu.click("1");
        menu.click("11");
        let view = menu.view();
        let shoes = &view.departments[0];
        assert_eq!(
            shoes.see_all.as_ref().map(|s| s.url.as_str()),
            Some("https://store.com/shoes")
        );
        let sneakers = &shoes.categories[0];
        assert_eq!(sneakers.subcategories.len(), 1);
        assert_eq!(
            sneakers.see_all.as_ref().map(|s| s.url.as_str()),
            Some("https://store.com/shoes/sneakers")
        );
        assert!(shoes.categories[1].subcategories.is_empty());
        assert_eq!(
            shoes.categories[2].item.url.as_deref(),
            Some("https://store.com/shoes/socks")
        );
    }
}
