//! Mounting a menu: fetch, load and pick the presenter.

use std::rc::Rc;

use megamenu_model::{GlobalConfig, Orientation, Result};

use crate::presenter::{CloseMenu, MenuView, Presenter};
use crate::source::MenuSource;
use crate::state::{NavigationStore, SharedStore, StateChange, SubscriptionId};
use crate::url::LinkResolver;

/// A mounted menu instance: one store plus the presenter for its orientation.
pub struct MegaMenu {
    config: GlobalConfig,
    store: SharedStore,
    links: LinkResolver,
    presenter: Presenter,
}

impl MegaMenu {
    /// Create an unloaded menu for `config`, linking against `origin`.
    ///
    /// Horizontal menus close themselves through the store's menu-open flag
    /// when a link is followed.
    pub fn new(config: GlobalConfig, origin: &str) -> Self {
        let store = NavigationStore::shared();
        let links = LinkResolver::new(origin);
        let mut presenter =
            Presenter::for_orientation(config.orientation(), Rc::clone(&store), links.clone());
        if config.orientation() == Orientation::Horizontal {
            let handle = Rc::clone(&store);
            presenter.set_close_menu(Box::new(move |open| handle.borrow_mut().open_menu(open)));
        }
        Self {
            config,
            store,
            links,
            presenter,
        }
    }

    /// Create the menu and load it from `source`.
    pub fn mount(source: &impl MenuSource, config: GlobalConfig, origin: &str) -> Result<Self> {
        let menu = Self::new(config, origin);
        menu.reload(source)?;
        Ok(menu)
    }

    /// Fetch the tree again and load it.
    ///
    /// An empty document leaves the current state untouched. Returns whether
    /// a tree was loaded.
    pub fn reload(&self, source: &impl MenuSource) -> Result<bool> {
        let tree = source.load_menu_tree(self.config.is_mobile())?;
        if tree.is_empty() {
            tracing::debug!("menus document is empty; keeping current state");
            return Ok(false);
        }
        self.store
            .borrow_mut()
            .load(tree, self.config.navigation());
        Ok(true)
    }

    /// Replace the callback run when a link is followed.
    #[must_use]
    pub fn with_close_menu(mut self, close_menu: impl FnMut(bool) + 'static) -> Self {
        let close_menu: CloseMenu = Box::new(close_menu);
        self.presenter.set_close_menu(close_menu);
        self
    }

    pub fn config(&self) -> &GlobalConfig {
        &self.config
    }

    pub fn store(&self) -> &SharedStore {
        &self.store
    }

    pub fn presenter(&self) -> &Presenter {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut Presenter {
        &mut self.presenter
    }

    pub fn view(&self) -> MenuView {
        self.presenter.view()
    }

    /// Re-render after every store change.
    ///
    /// `render` receives the view derived from the post-mutation state.
    pub fn subscribe_view(
        &self,
        mut render: impl FnMut(&MenuView, StateChange) + 'static,
    ) -> SubscriptionId {
        let orientation = self.presenter.orientation();
        let links = self.links.clone();
        self.store.borrow_mut().subscribe(move |state, change| {
            render(&MenuView::derive(orientation, state, &links), change);
        })
    }
}
