pub mod contact;
pub mod filter;
pub mod nav;
pub mod reveal;
pub mod year;

use crate::dom::ElementId;

/// Something the host delivers to the page.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Click(ElementId),
    /// Text typed into a control; carries the new value.
    Input(ElementId, String),
    /// Selection changed on a control; carries the new value.
    Change(ElementId, String),
    Submit(ElementId),
    Intersect(Vec<reveal::Intersection>),
}

/// Something the page asks the host to do in response to an event.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Default action suppressed; navigate the window to this URI instead.
    Navigate(String),
}
