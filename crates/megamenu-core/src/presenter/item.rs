//! Shared item rendering and link navigation.

use serde::Serialize;

use megamenu_model::{MenuNode, StyleMap};

use crate::state::SharedStore;
use crate::url::LinkResolver;

/// Callback letting the overlay owner collapse the widget; called with `false`.
pub type CloseMenu = Box<dyn FnMut(bool)>;

/// One rendered menu entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemView {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    /// Resolved link; `None` renders as a button or plain text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "StyleMap::is_empty")]
    pub style: StyleMap,
    /// Whether the entry has children to expand.
    pub accordion: bool,
}

impl ItemView {
    /// A linked entry.
    pub fn link(node: &MenuNode, links: &LinkResolver) -> Self {
        Self::build(node, links.link(node), false)
    }

    /// A linked entry that also expands when it has children.
    pub fn expandable_link(node: &MenuNode, links: &LinkResolver) -> Self {
        Self::build(node, links.link(node), node.has_children())
    }

    /// An expandable header; it carries no link of its own.
    pub fn accordion(node: &MenuNode) -> Self {
        Self::build(node, None, true)
    }

    fn build(node: &MenuNode, url: Option<String>, accordion: bool) -> Self {
        Self {
            id: node.id.clone(),
            name: node.name.clone(),
            icon_url: node.icon_url.clone(),
            url,
            style: node.effective_style(),
            accordion,
        }
    }
}

/// The "all in <name>" link shown at the top of an open node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeeAll {
    pub name: String,
    pub url: String,
}

impl SeeAll {
    pub fn for_node(node: &MenuNode, links: &LinkResolver) -> Option<Self> {
        links.link(node).map(|url| Self {
            name: node.name.clone(),
            url,
        })
    }
}

/// The result of following a link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Navigation {
    pub node_id: String,
    pub url: String,
}

/// What a click did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interaction {
    /// A node was expanded or collapsed.
    Toggled { node_id: String, open: bool },
    /// A link was followed.
    Navigated(Navigation),
    /// Nothing happened (unknown id or a node without a link).
    Ignored,
}

/// Link following shared by both presenters.
pub(crate) struct Navigator {
    pub(crate) store: SharedStore,
    pub(crate) links: LinkResolver,
    close_menu: Option<CloseMenu>,
}

impl Navigator {
    pub(crate) fn new(store: SharedStore, links: LinkResolver) -> Self {
        Self {
            store,
            links,
            close_menu: None,
        }
    }

    pub(crate) fn set_close_menu(&mut self, close_menu: CloseMenu) {
        self.close_menu = Some(close_menu);
    }

    /// Resolve the node's link and tell the overlay owner to close.
    pub(crate) fn navigate(&mut self, node_id: &str) -> Option<Navigation> {
        let url = {
            let store = self.store.borrow();
            let node = store.tree().find(node_id)?;
            self.links.link(node)?
        };

        tracing::debug!(node_id, %url, "navigate");
        if let Some(close_menu) = self.close_menu.as_mut() {
            close_menu(false);
        }
        Some(Navigation {
            node_id: node_id.to_string(),
            url,
        })
    }
}
