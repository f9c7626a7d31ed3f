//! Menu tree types.
//!
//! The tree is read-only once loaded: departments at the top level,
//! categories below them and sub-categories below those. Nothing here limits
//! the depth; presenters decide how far to recurse.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{MenuError, Result};
use crate::style::StyleMap;

// =============================================================================
// MENU NODE
// =============================================================================

/// A single entry of the menu tree.
///
/// Field names on the wire follow the upstream menus document
/// (`icon`, `styles`, `enableSty`, `imgCategory`, `menu`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuNode {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    /// Icon image shown next to the name.
    #[serde(default, rename = "icon", skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    /// Hidden nodes stay in the tree but are never rendered.
    #[serde(default = "default_display")]
    pub display: bool,
    /// Raw JSON inline style.
    #[serde(default, rename = "styles", skip_serializing_if = "Option::is_none")]
    pub style_json: Option<String>,
    /// Whether `style_json` should be applied at all.
    #[serde(default, rename = "enableSty")]
    pub style_enabled: bool,
    /// Image for the department panel.
    #[serde(
        default,
        rename = "imgCategory",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_url: Option<String>,
    #[serde(default, rename = "menu", deserialize_with = "null_as_empty")]
    pub children: Vec<MenuNode>,
}

fn default_display() -> bool {
    true
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<MenuNode>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<MenuNode>>::deserialize(deserializer)?.unwrap_or_default())
}

impl MenuNode {
    /// Create a visible node without children.
    pub fn new(id: impl Into<String>, name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            slug: slug.into(),
            icon_url: None,
            display: true,
            style_json: None,
            style_enabled: false,
            image_url: None,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_children(mut self, children: Vec<MenuNode>) -> Self {
        self.children = children;
        self
    }

    #[must_use]
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Attach an inline style and enable it.
    #[must_use]
    pub fn with_style(mut self, json: impl Into<String>) -> Self {
        self.style_json = Some(json.into());
        self.style_enabled = true;
        self
    }

    /// Mark the node as hidden.
    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.display = false;
        self
    }

    /// Leaves never take part in open/close state.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Children with `display = true`, in tree order.
    pub fn visible_children(&self) -> impl Iterator<Item = &MenuNode> {
        self.children.iter().filter(|child| child.display)
    }

    /// The slug to link to, or `None` when the node is not a link.
    ///
    /// An empty slug and the placeholder `#` both mean "no link".
    pub fn link_target(&self) -> Option<&str> {
        match self.slug.as_str() {
            "" | "#" => None,
            slug => Some(slug),
        }
    }

    /// Parsed inline style; malformed JSON yields an empty style.
    pub fn style(&self) -> StyleMap {
        self.style_json
            .as_deref()
            .map(StyleMap::parse_or_empty)
            .unwrap_or_default()
    }

    /// The style to apply when rendering, honouring `style_enabled`.
    pub fn effective_style(&self) -> StyleMap {
        if self.style_enabled {
            self.style()
        } else {
            StyleMap::empty()
        }
    }

    /// Depth-first search for a node by id, including `self`.
    pub fn find(&self, id: &str) -> Option<&MenuNode> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }
}

// =============================================================================
// TREE LEVEL / LOCATION
// =============================================================================

/// Depth of a node within the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TreeLevel {
    Department,
    Category,
    SubCategory,
    /// Anything deeper than a sub-category (zero-based depth).
    Nested(usize),
}

impl TreeLevel {
    /// Map a zero-based depth to a level.
    pub fn from_depth(depth: usize) -> Self {
        match depth {
            0 => Self::Department,
            1 => Self::Category,
            2 => Self::SubCategory,
            n => Self::Nested(n),
        }
    }
}

/// Where a node sits in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeLocation {
    pub level: TreeLevel,
    /// Id of the top-level department containing the node.
    pub department_id: String,
    /// Id of the direct parent, `None` for departments.
    pub parent_id: Option<String>,
}

// =============================================================================
// MENU TREE
// =============================================================================

/// Ordered top-level departments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuTree {
    departments: Vec<MenuNode>,
}

impl MenuTree {
    pub fn new(departments: Vec<MenuNode>) -> Self {
        Self { departments }
    }

    pub fn departments(&self) -> &[MenuNode] {
        &self.departments
    }

    /// Departments with `display = true`, in tree order.
    pub fn visible_departments(&self) -> impl Iterator<Item = &MenuNode> {
        self.departments.iter().filter(|node| node.display)
    }

    pub fn is_empty(&self) -> bool {
        self.departments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.departments.len()
    }

    /// Find a top-level department by id.
    pub fn department(&self, id: &str) -> Option<&MenuNode> {
        self.departments.iter().find(|node| node.id == id)
    }

    /// Find any node by id.
    pub fn find(&self, id: &str) -> Option<&MenuNode> {
        self.departments.iter().find_map(|node| node.find(id))
    }

    /// Locate a node and report its level, department and parent.
    pub fn locate(&self, id: &str) -> Option<NodeLocation> {
        fn walk(
            node: &MenuNode,
            id: &str,
            depth: usize,
            department_id: &str,
            parent_id: Option<&str>,
        ) -> Option<NodeLocation> {
            if node.id == id {
                return Some(NodeLocation {
                    level: TreeLevel::from_depth(depth),
                    department_id: department_id.to_string(),
                    parent_id: parent_id.map(str::to_string),
                });
            }
            node.children.iter().find_map(|child| {
                walk(child, id, depth + 1, department_id, Some(node.id.as_str()))
            })
        }

        self.departments
            .iter()
            .find_map(|department| walk(department, id, 0, &department.id, None))
    }

    /// Find a department by name, ignoring case and surrounding whitespace.
    pub fn department_by_name(&self, name: &str) -> Option<&MenuNode> {
        let wanted = name.trim().to_lowercase();
        self.departments
            .iter()
            .find(|node| node.name.trim().to_lowercase() == wanted)
    }
}

impl From<Vec<MenuNode>> for MenuTree {
    fn from(departments: Vec<MenuNode>) -> Self {
        Self::new(departments)
    }
}

// =============================================================================
// MENUS RESPONSE
// =============================================================================

/// The document delivered by the menu data source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenusResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub menus: Vec<MenuNode>,
}

impl MenusResponse {
    /// Parse a menus document from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(MenuError::document)
    }

    pub fn into_tree(self) -> MenuTree {
        MenuTree::new(self.menus)
    }
}
