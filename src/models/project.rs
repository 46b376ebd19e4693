use serde_json::Value;

use super::{list_field, text_field};

/// One portfolio project as supplied by `data/projects.json`.
/// Every field is optional; absent fields render as nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Project {
    pub title: Option<String>,
    pub one_liner: Option<String>,
    pub context: Option<String>,
    pub work: Option<String>,
    pub year: Option<String>,
    pub tags: Vec<String>,
    pub kpis: Vec<String>,
    pub tools: Vec<String>,
    pub demo_url: Option<String>,
    pub repo_url: Option<String>,
    pub case_study_url: Option<String>,
}

impl Project {
    /// Build a project from an arbitrary JSON value. Non-objects yield an
    /// empty record rather than an error.
    pub fn from_value(v: &Value) -> Self {
        if !v.is_object() {
            return Project::default();
        }
        Project {
            title: text_field(v, "title"),
            one_liner: text_field(v, "oneLiner"),
            context: text_field(v, "context"),
            work: text_field(v, "work"),
            year: text_field(v, "year"),
            tags: list_field(v, "tags"),
            kpis: list_field(v, "kpis"),
            tools: list_field(v, "tools"),
            demo_url: text_field(v, "demoUrl"),
            repo_url: text_field(v, "repoUrl"),
            case_study_url: text_field(v, "caseStudyUrl"),
        }
    }

    /// Parse a whole payload. Returns `None` when the payload is not an array.
    pub fn list_from_value(v: &Value) -> Option<Vec<Project>> {
        v.as_array()
            .map(|items| items.iter().map(Project::from_value).collect())
    }

    /// Lower-cased text the search box matches against.
    pub fn search_text(&self) -> String {
        let opt = |s: &Option<String>| s.clone().unwrap_or_default();
        [
            opt(&self.title),
            opt(&self.one_liner),
            opt(&self.context),
            opt(&self.work),
            self.tools.join(" "),
            self.tags.join(" "),
            self.kpis.join(" "),
        ]
        .join(" ")
        .to_lowercase()
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Labeled links in display order, one per present URL.
    pub fn links(&self) -> Vec<(&'static str, &str)> {
        [
            ("Demo", &self.demo_url),
            ("Repo", &self.repo_url),
            ("Case Study", &self.case_study_url),
        ]
        .into_iter()
        .filter_map(|(label, url)| url.as_deref().map(|u| (label, u)))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value_full_record() {
        let p = Project::from_value(&json!({
            "title": "Alpha",
            "oneLiner": "Short",
            "context": "Ctx",
            "work": "Built it",
            "year": 2024,
            "tags": ["ml", "ops"],
            "kpis": ["-30% latency"],
            "tools": ["Rust", "Postgres"],
            "demoUrl": "https://demo",
            "repoUrl": "https://repo",
            "caseStudyUrl": "https://case"
        }));
        assert_eq!(p.title.as_deref(), Some("Alpha"));
        assert_eq!(p.year.as_deref(), Some("2024"));
        assert_eq!(p.tags, vec!["ml", "ops"]);
        assert_eq!(p.links().len(), 3);
    }

    #[test]
    fn test_missing_and_falsy_fields_are_absent() {
        let p = Project::from_value(&json!({
            "title": "",
            "context": null,
            "work": false,
            "year": 0,
            "tags": "not-a-list"
        }));
        assert_eq!(p, Project::default());
    }

    #[test]
    fn test_non_object_record_is_empty() {
        assert_eq!(Project::from_value(&json!("oops")), Project::default());
        assert_eq!(Project::from_value(&json!(42)), Project::default());
    }

    #[test]
    fn test_list_entries_coerced_or_skipped() {
        let p = Project::from_value(&json!({ "tags": ["a", 1, null, {"x": 1}, ["b"]] }));
        assert_eq!(p.tags, vec!["a", "1"]);
    }

    #[test]
    fn test_zero_scalars_are_absent() {
        let p = Project::from_value(&json!({ "title": 0, "context": 0.0, "work": 7 }));
        assert!(p.title.is_none());
        assert!(p.context.is_none());
        assert_eq!(p.work.as_deref(), Some("7"));
    }

    #[test]
    fn test_year_string_kept_verbatim() {
        let p = Project::from_value(&json!({ "year": "2021–2023" }));
        assert_eq!(p.year.as_deref(), Some("2021–2023"));
    }

    #[test]
    fn test_list_from_value_requires_array() {
        assert!(Project::list_from_value(&json!({"title": "x"})).is_none());
        assert_eq!(Project::list_from_value(&json!([{}, {}])).map(|v| v.len()), Some(2));
    }

    #[test]
    fn test_search_text_covers_all_fields() {
        let p = Project::from_value(&json!({
            "title": "T", "oneLiner": "O", "context": "C", "work": "W",
            "tools": ["Tool"], "tags": ["Tag"], "kpis": ["Kpi"]
        }));
        let text = p.search_text();
        for needle in ["t", "o", "c", "w", "tool", "tag", "kpi"] {
            assert!(text.contains(needle), "missing {}", needle);
        }
        assert_eq!(text, text.to_lowercase());
    }

    #[test]
    fn test_links_only_for_present_urls() {
        let p = Project::from_value(&json!({ "repoUrl": "https://r" }));
        assert_eq!(p.links(), vec![("Repo", "https://r")]);
    }
}
