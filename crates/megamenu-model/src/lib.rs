pub mod config;
pub mod error;
pub mod node;
pub mod style;

pub use config::{GlobalConfig, NavigationConfig, Orientation};
pub use error::{MenuError, Result};
pub use node::{MenuNode, MenuTree, MenusResponse, NodeLocation, TreeLevel};
pub use style::StyleMap;
