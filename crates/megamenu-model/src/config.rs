//! Mount-time configuration.
//!
//! [`GlobalConfig`] is the configuration surface the host page hands to the
//! menu (`openOnly`, `urlImgCategory`, `defaultDepartmentActive`).
//! [`NavigationConfig`] is the subset the navigation store works with.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{MenuError, Result};

// =============================================================================
// ORIENTATION
// =============================================================================

/// How the menu is laid out and driven.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Hover-driven bar with a department sub-panel.
    #[default]
    Horizontal,
    /// Click-driven accordion.
    Vertical,
}

impl Orientation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }

    /// The vertical accordion is the mobile rendering.
    pub fn is_mobile(&self) -> bool {
        matches!(self, Self::Vertical)
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// GLOBAL CONFIG
// =============================================================================

/// Configuration consumed when the menu is mounted.
///
/// Serialized with the host's camelCase property names, so the same struct
/// reads a TOML file or a JSON props blob.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GlobalConfig {
    /// Forces one orientation; absent means horizontal.
    pub open_only: Option<Orientation>,
    /// Image shown in the active department panel.
    pub url_img_category: Option<String>,
    /// Name of the department to activate after loading.
    pub default_department_active: Option<String>,
    /// Heading shown above the department list.
    pub title: String,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            open_only: None,
            url_img_category: None,
            default_department_active: None,
            title: "Departments".to_string(),
        }
    }
}

impl GlobalConfig {
    pub fn orientation(&self) -> Orientation {
        self.open_only.unwrap_or_default()
    }

    /// Mobile menus are requested only when the vertical layout is forced.
    pub fn is_mobile(&self) -> bool {
        self.open_only == Some(Orientation::Vertical)
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(MenuError::config)
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(MenuError::config)
    }

    /// Load from a `.json` or TOML file, chosen by extension.
    pub fn load_from(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json_str(&text)
        } else {
            Self::from_toml_str(&text)
        }
    }

    pub fn navigation(&self) -> NavigationConfig {
        NavigationConfig::from(self)
    }
}

// =============================================================================
// NAVIGATION CONFIG
// =============================================================================

/// Settings the navigation store is loaded with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationConfig {
    pub orientation: Orientation,
    pub default_department_name: Option<String>,
    /// Fallback image for the department panel.
    pub image_url: Option<String>,
}

impl NavigationConfig {
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_default_department(mut self, name: impl Into<String>) -> Self {
        self.default_department_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }
}

impl From<&GlobalConfig> for NavigationConfig {
    fn from(config: &GlobalConfig) -> Self {
        Self {
            orientation: config.orientation(),
            default_department_name: config.default_department_active.clone(),
            image_url: config.url_img_category.clone(),
        }
    }
}
