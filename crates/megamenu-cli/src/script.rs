//! Interaction scripts replayed by `megamenu simulate`.

use std::fmt;
use std::str::FromStr;

use megamenu_core::{Bounds, ClickEvent, ClickListeners, Interaction, MegaMenu, OutsideClickGuard};

/// Element id of the control that opens and closes the menu.
pub const TRIGGER_ID: &str = "megamenu-trigger";

/// Simulated menu root; anything below it is "outside".
const ROOT: Bounds = Bounds {
    x: 0.0,
    y: 0.0,
    width: 1280.0,
    height: 480.0,
};

/// One scripted user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Pointer enters a department (`enter:ID`).
    Enter(String),
    /// Pointer leaves the menu root.
    Leave,
    /// Click on a node (`click:ID`).
    Click(String),
    /// Click somewhere on the page outside the menu.
    Outside,
    /// Click on the trigger control.
    Trigger,
}

impl FromStr for Event {
    type Err = String;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let text = text.trim();
        let (kind, arg) = match text.split_once(':') {
            Some((kind, arg)) => (kind, Some(arg.trim())),
            None => (text, None),
        };
        match (kind.to_ascii_lowercase().as_str(), arg) {
            ("enter", Some(id)) if !id.is_empty() => Ok(Self::Enter(id.to_string())),
            ("click", Some(id)) if !id.is_empty() => Ok(Self::Click(id.to_string())),
            ("enter" | "click", _) => Err(format!("`{kind}` needs a node id, e.g. {kind}:42")),
            ("leave", None) => Ok(Self::Leave),
            ("outside", None) => Ok(Self::Outside),
            ("trigger", None) => Ok(Self::Trigger),
            _ => Err(format!(
                "unknown event `{text}` (expected enter:ID, leave, click:ID, outside or trigger)"
            )),
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Enter(id) => write!(f, "enter:{id}"),
            Self::Leave => f.write_str("leave"),
            Self::Click(id) => write!(f, "click:{id}"),
            Self::Outside => f.write_str("outside"),
            Self::Trigger => f.write_str("trigger"),
        }
    }
}

/// A mounted menu plus the page-level click registry.
pub struct Simulation {
    menu: MegaMenu,
    listeners: ClickListeners,
}

impl Simulation {
    /// Wrap `menu`, registering the outside-click listener when horizontal.
    pub fn new(mut menu: MegaMenu) -> Self {
        let mut listeners = ClickListeners::new();
        if let Some(horizontal) = menu.presenter_mut().as_horizontal_mut() {
            horizontal.mount(
                &mut listeners,
                OutsideClickGuard::new(ROOT).excluding(TRIGGER_ID),
            );
        }
        Self { menu, listeners }
    }

    pub fn menu(&self) -> &MegaMenu {
        &self.menu
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Apply one event and describe what it did.
    pub fn apply(&mut self, event: &Event) -> String {
        tracing::debug!(%event, "replaying");
        match event {
            Event::Enter(id) => match self.menu.presenter_mut().as_horizontal_mut() {
                Some(horizontal) => {
                    if horizontal.pointer_enter(id) {
                        format!("active {id}")
                    } else {
                        "ignored".to_string()
                    }
                }
                None => "ignored (vertical menus do not track hover)".to_string(),
            },
            Event::Leave => match self.menu.presenter_mut().as_horizontal_mut() {
                Some(horizontal) => {
                    horizontal.pointer_leave();
                    "active cleared".to_string()
                }
                None => "ignored (vertical menus do not track hover)".to_string(),
            },
            Event::Click(id) => {
                let interaction = match self.menu.presenter_mut().as_vertical_mut() {
                    Some(vertical) => vertical.click(id),
                    None => self
                        .menu
                        .presenter_mut()
                        .navigate(id)
                        .map_or(Interaction::Ignored, Interaction::Navigated),
                };
                describe(&interaction)
            }
            Event::Outside => {
                self.listeners.dispatch(&ClickEvent::at(
                    ROOT.width / 2.0,
                    ROOT.y + ROOT.height + 100.0,
                ));
                "outside click".to_string()
            }
            Event::Trigger => {
                self.listeners.dispatch(
                    &ClickEvent::at(ROOT.width / 2.0, ROOT.y + ROOT.height + 100.0)
                        .with_path(["header", TRIGGER_ID]),
                );
                let mut store = self.menu.store().borrow_mut();
                let open = !store.is_menu_open();
                store.open_menu(open);
                let outcome = if open { "menu opened" } else { "menu closed" };
                outcome.to_string()
            }
        }
    }

    /// Unregister the outside-click listener.
    pub fn finish(&mut self) {
        if let Some(horizontal) = self.menu.presenter_mut().as_horizontal_mut() {
            horizontal.unmount(&mut self.listeners);
        }
    }
}

fn describe(interaction: &Interaction) -> String {
    match interaction {
        Interaction::Toggled { node_id, open: true } => format!("opened {node_id}"),
        Interaction::Toggled { node_id, open: false } => format!("closed {node_id}"),
        Interaction::Navigated(navigation) => format!("navigate {}", navigation.url),
        Interaction::Ignored => "ignored".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_events() {
        assert_eq!("enter:10".parse::<Event>(), Ok(Event::Enter("10".to_string())));
        assert_eq!(" Click: 11 ".parse::<Event>(), Ok(Event::Click("11".to_string())));
        assert_eq!("leave".parse::<Event>(), Ok(Event::Leave));
        assert_eq!("outside".parse::<Event>(), Ok(Event::Outside));
        assert_eq!("TRIGGER".parse::<Event>(), Ok(Event::Trigger));
    }

    #[test]
    fn rejects_malformed_events() {
        assert!("enter".parse::<Event>().unwrap_err().contains("needs a node id"));
        assert!("click:".parse::<Event>().is_err());
        assert!("leave:1".parse::<Event>().is_err());
        assert!("hover:1".parse::<Event>().unwrap_err().contains("unknown event"));
    }

    #[test]
    fn display_matches_parse() {
        for event in [
            Event::Enter("1".to_string()),
            Event::Leave,
            Event::Click("2".to_string()),
            Event::Outside,
            Event::Trigger,
        ] {
            assert_eq!(event.to_string().parse::<Event>(), Ok(event));
        }
    }
}
