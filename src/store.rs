use std::cmp::Ordering;
use std::collections::BTreeSet;

use icu_collator::{Collator, CollatorOptions};
use log::warn;

use crate::models::project::Project;

/// Tag filter value meaning "no tag filter".
pub const ALL_TAGS: &str = "all";

/// The loaded project list plus the current search/tag state.
/// The list is fixed at construction; only the query and tag change.
#[derive(Debug, Clone)]
pub struct ProjectStore {
    projects: Vec<Project>,
    query: String,
    tag: String,
}

impl ProjectStore {
    pub fn new(projects: Vec<Project>) -> Self {
        ProjectStore {
            projects,
            query: String::new(),
            tag: ALL_TAGS.to_string(),
        }
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
    }

    /// An empty tag is treated as the "all" sentinel.
    pub fn set_tag(&mut self, tag: &str) {
        self.tag = if tag.is_empty() { ALL_TAGS.to_string() } else { tag.to_string() };
    }

    /// Recompute the filtered view from the full list. Order is preserved.
    pub fn apply(&self) -> Vec<&Project> {
        let q = self.query.trim().to_lowercase();
        self.projects
            .iter()
            .filter(|p| q.is_empty() || p.search_text().contains(&q))
            .filter(|p| self.tag == ALL_TAGS || p.has_tag(&self.tag))
            .collect()
    }

    /// Union of all tags, deduplicated and sorted with `sort_locale`.
    pub fn tag_vocabulary(&self) -> Vec<String> {
        let unique: BTreeSet<&str> = self
            .projects
            .iter()
            .flat_map(|p| p.tags.iter().map(String::as_str))
            .collect();
        let mut tags: Vec<String> = unique.into_iter().map(String::from).collect();
        sort_locale(&mut tags);
        tags
    }
}

/// Sort with the Unicode root collation (base letters, then accents, then
/// case), the ordering a browser's default `localeCompare` uses.
pub fn sort_locale(items: &mut [String]) {
    match Collator::try_new(&Default::default(), CollatorOptions::new()) {
        Ok(collator) => items.sort_by(|a, b| collator.compare(a, b)),
        Err(e) => {
            warn!("Collator unavailable ({}), sorting by case-folded text", e);
            items.sort_by(|a, b| locale_cmp(a, b));
        }
    }
}

/// Fallback ordering: case-folded text first, then lowercase before
/// uppercase, then raw code points.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| {
            let case = |s: &str| s.chars().map(|c| c.is_uppercase()).collect::<Vec<_>>();
            case(a).cmp(&case(b))
        })
        .then_with(|| a.cmp(b))
}
