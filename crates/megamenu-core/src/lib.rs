//! Storefront mega-menu navigation engine.
//!
//! Loads a department / category / sub-category tree into a
//! [`NavigationStore`](state::NavigationStore), derives render-ready views
//! for the horizontal and vertical layouts and builds every outbound link
//! through [`url::resolve`].

pub mod click;
pub mod mount;
pub mod presenter;
pub mod source;
pub mod state;
pub mod url;

pub use click::{Bounds, ClickEvent, ClickListeners, ListenerId, OutsideClickGuard, Point};
pub use mount::MegaMenu;
pub use presenter::{HorizontalMenu, Interaction, MenuView, Navigation, Presenter, VerticalMenu};
pub use source::{JsonFileSource, MenuSource, StaticSource};
pub use state::{NavigationState, NavigationStore, SharedStore, StateChange};
pub use url::{LinkResolver, resolve};
