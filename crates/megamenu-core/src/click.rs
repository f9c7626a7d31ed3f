//! Global click handling for outside-click dismissal.
//!
//! The host owns one [`ClickListeners`] registry per page. The horizontal
//! menu registers a single listener on mount and removes it on unmount; the
//! listener asks an [`OutsideClickGuard`] whether a click landed outside the
//! menu and away from the trigger control.

use std::collections::HashSet;
use std::fmt;

// =============================================================================
// GEOMETRY
// =============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned bounding region of the menu root.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Edges are inside.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }
}

// =============================================================================
// CLICK EVENT
// =============================================================================

/// A click as seen by the global listener.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClickEvent {
    pub point: Point,
    /// Identifiers of the target element and its ancestors.
    pub path: Vec<String>,
}

impl ClickEvent {
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            point: Point::new(x, y),
            path: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_path<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.path = ids.into_iter().map(Into::into).collect();
        self
    }
}

// =============================================================================
// OUTSIDE CLICK GUARD
// =============================================================================

/// Decides whether a click should dismiss the menu.
///
/// The trigger control lives outside the menu region, so it is excluded by
/// identifier rather than by containment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OutsideClickGuard {
    root: Bounds,
    excluded_ids: HashSet<String>,
}

impl OutsideClickGuard {
    pub fn new(root: Bounds) -> Self {
        Self {
            root,
            excluded_ids: HashSet::new(),
        }
    }

    /// Never dismiss for clicks whose path contains `id`.
    #[must_use]
    pub fn excluding(mut self, id: impl Into<String>) -> Self {
        self.excluded_ids.insert(id.into());
        self
    }

    pub fn root(&self) -> Bounds {
        self.root
    }

    /// True when the click is outside the root and not on an excluded element.
    pub fn is_outside(&self, event: &ClickEvent) -> bool {
        let on_excluded = event
            .path
            .iter()
            .any(|id| self.excluded_ids.contains(id));
        !self.root.contains(event.point) && !on_excluded
    }
}

// =============================================================================
// LISTENER REGISTRY
// =============================================================================

/// Handle returned when a listener is registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

pub type ClickHandler = Box<dyn FnMut(&ClickEvent)>;

/// Page-wide click listeners, dispatched in registration order.
#[derive(Default)]
pub struct ClickListeners {
    next_id: u64,
    listeners: Vec<(ListenerId, ClickHandler)>,
}

impl ClickListeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, handler: ClickHandler) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, handler));
        id
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    pub fn dispatch(&mut self, event: &ClickEvent) {
        for (_, handler) in &mut self.listeners {
            handler(event);
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl fmt::Debug for ClickListeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClickListeners")
            .field("count", &self.listeners.len())
            .finish()
    }
}
