use crate::dom::{Document, ElementId};
use crate::page::REVEAL_CLASS;

/// Fraction of an element that must be in view before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.12;
const VISIBLE_CLASS: &str = "is-visible";

/// One observation report: how much of `target` is inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    pub target: ElementId,
    pub ratio: f64,
}

/// Marks reveal elements visible the first time they scroll into view.
/// Visibility never reverts and elements stay observed.
#[derive(Debug, Clone)]
pub struct RevealController {
    observed: Vec<ElementId>,
    threshold: f64,
}

impl RevealController {
    pub fn observe(doc: &Document) -> Self {
        RevealController {
            observed: doc.by_class(REVEAL_CLASS),
            threshold: REVEAL_THRESHOLD,
        }
    }

    pub fn observed(&self) -> &[ElementId] {
        &self.observed
    }

    pub fn on_intersections(&self, doc: &mut Document, entries: &[Intersection]) {
        for e in entries {
            if e.ratio > 0.0 && e.ratio >= self.threshold && self.observed.contains(&e.target) {
                doc.add_class(e.target, VISIBLE_CLASS);
            }
        }
    }
}
