use crate::dom::{Document, ElementId};
use crate::page::{NAV_LINK_CLASS, NAV_MENU_ID, NAV_TOGGLE_CLASS};

const OPEN_CLASS: &str = "is-open";

/// Mobile menu toggle. Mirrors the open state into `aria-expanded`.
#[derive(Debug, Clone)]
pub struct NavController {
    toggle: ElementId,
    menu: ElementId,
    links: Vec<ElementId>,
}

impl NavController {
    /// Wire the nav. Needs both the toggle button and the menu.
    pub fn bind(doc: &Document) -> Option<Self> {
        let toggle = doc.by_class(NAV_TOGGLE_CLASS).into_iter().next()?;
        let menu = doc.by_id(NAV_MENU_ID)?;
        let links = doc.by_class_within(menu, NAV_LINK_CLASS);
        Some(NavController { toggle, menu, links })
    }

    /// Returns true when the click was ours.
    pub fn on_click(&self, doc: &mut Document, target: ElementId) -> bool {
        if target == self.toggle {
            let open = doc.toggle_class(self.menu, OPEN_CLASS);
            doc.set_attr(self.toggle, "aria-expanded", if open { "true" } else { "false" });
            true
        } else if self.links.contains(&target) {
            doc.remove_class(self.menu, OPEN_CLASS);
            doc.set_attr(self.toggle, "aria-expanded", "false");
            true
        } else {
            false
        }
    }

    pub fn is_open(&self, doc: &Document) -> bool {
        doc.has_class(self.menu, OPEN_CLASS)
    }
}
