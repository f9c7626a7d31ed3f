//! Orientation presenters.
//!
//! A presenter reads the shared store, derives a render-ready view for its
//! orientation and turns user interaction into store mutations:
//!
//! - **HorizontalMenu**: hover-driven department bar with a category panel
//! - **VerticalMenu**: click-driven accordion, one open node per level
//!
//! Both build every outbound link through [`crate::url`]. Views are derived
//! from a [`NavigationState`] alone, so store subscribers can re-render
//! with [`MenuView::derive`].

mod horizontal;
mod item;
mod vertical;

use serde::Serialize;

use megamenu_model::Orientation;

pub use horizontal::{HorizontalMenu, HorizontalView, PanelCategory, SubPanel};
pub use item::{CloseMenu, Interaction, ItemView, Navigation, SeeAll};
pub use vertical::{VerticalCategory, VerticalDepartment, VerticalMenu, VerticalView};

use crate::state::{NavigationState, SharedStore};
use crate::url::LinkResolver;

/// The presenter selected by the configured orientation.
pub enum Presenter {
    Horizontal(HorizontalMenu),
    Vertical(VerticalMenu),
}

impl Presenter {
    /// Build the presenter for `orientation`.
    pub fn for_orientation(
        orientation: Orientation,
        store: SharedStore,
        links: LinkResolver,
    ) -> Self {
        match orientation {
            Orientation::Horizontal => Self::Horizontal(HorizontalMenu::new(store, links)),
            Orientation::Vertical => Self::Vertical(VerticalMenu::new(store, links)),
        }
    }

    pub fn orientation(&self) -> Orientation {
        match self {
            Self::Horizontal(_) => Orientation::Horizontal,
            Self::Vertical(_) => Orientation::Vertical,
        }
    }

    /// Replace the callback invoked by link navigation.
    pub fn set_close_menu(&mut self, close_menu: CloseMenu) {
        match self {
            Self::Horizontal(menu) => menu.set_close_menu(close_menu),
            Self::Vertical(menu) => menu.set_close_menu(close_menu),
        }
    }

    /// Follow the link of any node.
    pub fn navigate(&mut self, node_id: &str) -> Option<Navigation> {
        match self {
            Self::Horizontal(menu) => menu.navigate(node_id),
            Self::Vertical(menu) => menu.navigate(node_id),
        }
    }

    pub fn view(&self) -> MenuView {
        match self {
            Self::Horizontal(menu) => MenuView::Horizontal(menu.view()),
            Self::Vertical(menu) => MenuView::Vertical(menu.view()),
        }
    }

    pub fn as_horizontal_mut(&mut self) -> Option<&mut HorizontalMenu> {
        match self {
            Self::Horizontal(menu) => Some(menu),
            Self::Vertical(_) => None,
        }
    }

    pub fn as_vertical_mut(&mut self) -> Option<&mut VerticalMenu> {
        match self {
            Self::Vertical(menu) => Some(menu),
            Self::Horizontal(_) => None,
        }
    }
}

/// A derived view for either orientation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "orientation", rename_all = "lowercase")]
pub enum MenuView {
    Horizontal(HorizontalView),
    Vertical(VerticalView),
}

impl MenuView {
    /// Derive the view for `orientation` from a state snapshot.
    ///
    /// This is what store subscribers call to re-render.
    pub fn derive(orientation: Orientation, state: &NavigationState, links: &LinkResolver) -> Self {
        match orientation {
            Orientation::Horizontal => Self::Horizontal(HorizontalView::derive(state, links)),
            Orientation::Vertical => Self::Vertical(VerticalView::derive(state, links)),
        }
    }

    pub fn orientation(&self) -> Orientation {
        match self {
            Self::Horizontal(_) => Orientation::Horizontal,
            Self::Vertical(_) => Orientation::Vertical,
        }
    }
}
