//! Single-open tracking for one level of the tree.

use megamenu_model::TreeLevel;

/// At most one node open at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpenSlot {
    /// Currently open node (if any).
    open: Option<String>,
}

impl OpenSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle a node open/closed.
    ///
    /// Toggling the open node closes it; toggling any other node replaces it.
    /// Returns whether `id` is open afterwards.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.open.as_deref() == Some(id) {
            self.open = None;
            false
        } else {
            self.open = Some(id.to_string());
            true
        }
    }

    /// Close whatever is open. Returns true if something was open.
    pub fn close(&mut self) -> bool {
        self.open.take().is_some()
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.open.as_deref() == Some(id)
    }

    pub fn current(&self) -> Option<&str> {
        self.open.as_deref()
    }
}

/// One [`OpenSlot`] per tree level that supports expansion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpenSlots {
    /// Open department among the departments.
    pub department: OpenSlot,
    /// Open category among the active department's categories.
    pub category: OpenSlot,
}

impl OpenSlots {
    /// The slot for a level, if that level can be expanded.
    pub fn slot_mut(&mut self, level: TreeLevel) -> Option<&mut OpenSlot> {
        match level {
            TreeLevel::Department => Some(&mut self.department),
            TreeLevel::Category => Some(&mut self.category),
            TreeLevel::SubCategory | TreeLevel::Nested(_) => None,
        }
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.department.is_open(id) || self.category.is_open(id)
    }

    pub fn close_all(&mut self) -> bool {
        let department = self.department.close();
        let category = self.category.close();
        department || category
    }
}
