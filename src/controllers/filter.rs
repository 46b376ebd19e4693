use crate::dom::{Document, ElementId};
use crate::page::{FILTER_ID, SEARCH_ID};
use crate::render::render_projects;
use crate::store::{ProjectStore, ALL_TAGS};

/// Binds the search box and tag select to the project store and re-renders
/// the grid on every change.
#[derive(Debug, Clone)]
pub struct FilterController {
    store: ProjectStore,
    grid: Option<ElementId>,
    search: Option<ElementId>,
    select: Option<ElementId>,
}

impl FilterController {
    /// Seed the store, append the tag options once, and draw the full list.
    /// Without a grid the controls still track state but nothing is drawn.
    pub fn bind(doc: &mut Document, grid: Option<ElementId>, store: ProjectStore) -> Self {
        let search = doc.by_id(SEARCH_ID);
        let select = doc.by_id(FILTER_ID);
        if let Some(select) = select {
            populate_tag_options(doc, select, &store.tag_vocabulary());
        }
        let fc = FilterController { store, grid, search, select };
        let all: Vec<_> = fc.store.projects().iter().collect();
        fc.draw(doc, render_projects(&all));
        fc
    }

    pub fn store(&self) -> &ProjectStore {
        &self.store
    }

    /// Handle an input/change event. Returns true when the grid was redrawn.
    pub fn on_value(&mut self, doc: &mut Document, target: ElementId, value: &str) -> bool {
        let is_ours = Some(target) == self.search || Some(target) == self.select;
        if !is_ours {
            return false;
        }
        doc.set_value(target, value);
        self.apply(doc);
        true
    }

    /// Read both controls, recompute the filtered view and replace the grid.
    pub fn apply(&mut self, doc: &mut Document) {
        let query = self.search.map(|s| doc.value(s).to_string()).unwrap_or_default();
        let tag = self
            .select
            .map(|s| doc.value(s).to_string())
            .unwrap_or_else(|| ALL_TAGS.to_string());
        self.store.set_query(&query);
        self.store.set_tag(&tag);
        let html = render_projects(&self.store.apply());
        self.draw(doc, html);
    }

    fn draw(&self, doc: &mut Document, html: String) {
        if let Some(grid) = self.grid {
            doc.set_inner_html(grid, html);
        }
    }
}

fn populate_tag_options(doc: &mut Document, select: ElementId, tags: &[String]) {
    for t in tags {
        let opt = doc.create_in(select, "option", &[("value", t.as_str())]);
        doc.set_text(opt, t);
    }
}
