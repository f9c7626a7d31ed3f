//! Menu data sources.
//!
//! Fetching the tree is the host's business; the engine only needs something
//! implementing [`MenuSource`]. Sources are parameterised by `is_mobile`
//! because mobile and desktop menus are published separately upstream.

use std::path::{Path, PathBuf};

use megamenu_model::{MenuTree, MenusResponse, Result};

/// Something that can produce the menu tree.
pub trait MenuSource {
    fn load_menu_tree(&self, is_mobile: bool) -> Result<MenuTree>;
}

impl<F> MenuSource for F
where
    F: Fn(bool) -> Result<MenuTree>,
{
    fn load_menu_tree(&self, is_mobile: bool) -> Result<MenuTree> {
        self(is_mobile)
    }
}

/// Reads a `{ "menus": [...] }` document from disk.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    desktop: PathBuf,
    mobile: Option<PathBuf>,
}

impl JsonFileSource {
    /// Use the same document for desktop and mobile.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            desktop: path.into(),
            mobile: None,
        }
    }

    /// Serve a separate document when `is_mobile` is requested.
    #[must_use]
    pub fn with_mobile(mut self, path: impl Into<PathBuf>) -> Self {
        self.mobile = Some(path.into());
        self
    }

    fn path_for(&self, is_mobile: bool) -> &Path {
        match (&self.mobile, is_mobile) {
            (Some(mobile), true) => mobile,
            _ => &self.desktop,
        }
    }
}

impl MenuSource for JsonFileSource {
    fn load_menu_tree(&self, is_mobile: bool) -> Result<MenuTree> {
        let path = self.path_for(is_mobile);
        tracing::debug!(path = %path.display(), is_mobile, "reading menus document");
        let text = std::fs::read_to_string(path)?;
        Ok(MenusResponse::from_json(&text)?.into_tree())
    }
}

/// An in-memory tree.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    tree: MenuTree,
}

impl StaticSource {
    pub fn new(tree: MenuTree) -> Self {
        Self { tree }
    }

    pub fn tree(&self) -> &MenuTree {
        &self.tree
    }
}

impl MenuSource for StaticSource {
    fn load_menu_tree(&self, _is_mobile: bool) -> Result<MenuTree> {
        Ok(self.tree.clone())
    }
}

#[cfg(test)]
mod tests {
    use megamenu_model::{MenuError, MenuNode};

    use super::*;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "megamenu-source-{}-{}-{name}",
            std::process::id(),
            std::thread::current().name().unwrap_or("main").replace("::", "-")
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn reads_desktop_and_mobile_documents() {
        let desktop = temp_file(
            "desktop.json",
            r#"{"menus": [{"id": "1", "name": "Shoes", "slug": "shoes"}]}"#,
        );
        let mobile = temp_file(
            "mobile.json",
            r#"{"menus": [{"id": "9", "name": "Mobile", "slug": "m"}]}"#,
        );
        let source = JsonFileSource::new(&desktop).with_mobile(&mobile);

        assert_eq!(source.load_menu_tree(false).unwrap().departments()[0].id, "1");
        assert_eq!(source.load_menu_tree(true).unwrap().departments()[0].id, "9");

        std::fs::remove_file(desktop).unwrap();
        std::fs::remove_file(mobile).unwrap();
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let source = JsonFileSource::new("/definitely/not/here.json");
        assert!(matches!(
            source.load_menu_tree(false),
            Err(MenuError::Io(_))
        ));
    }

    #[test]
    fn closures_are_sources() {
        let source = |is_mobile: bool| -> Result<MenuTree> {
            let name = if is_mobile { "Mobile" } else { "Desktop" };
            Ok(MenuTree::new(vec![MenuNode::new("1", name, "x")]))
        };
        assert_eq!(source.load_menu_tree(true).unwrap().departments()[0].name, "Mobile");
    }
}
