//! Pure list renderers. Output replaces the grid's content wholesale.
//! Every data-derived fragment goes through `html_escape`; tags and classes
//! are authored here and never come from data.

use crate::models::project::Project;
use crate::models::testimonial::Testimonial;
use crate::sanitize::html_escape;

const PROJECTS_PLACEHOLDER: &str = "<div class=\"card projectCard\">\
<h3 class=\"h3\">No projects yet</h3>\
<p class=\"muted\">Add items in <code>data/projects.json</code> and they will appear here automatically.</p>\
</div>";

const TESTIMONIALS_PLACEHOLDER: &str = "<div class=\"card\">\
<h3 class=\"h3\">Add your testimonials</h3>\
<p class=\"muted\">Populate <code>data/testimonials.json</code> with quotes from clients and managers.</p>\
</div>";

/// Render the projects grid, or the placeholder card when `projects` is empty.
pub fn render_projects(projects: &[&Project]) -> String {
    if projects.is_empty() {
        return PROJECTS_PLACEHOLDER.to_string();
    }
    let mut html = String::new();
    for p in projects {
        render_project_card(&mut html, p);
    }
    html
}

fn render_project_card(html: &mut String, p: &Project) {
    let title = p.title.as_deref().unwrap_or("Untitled Project");
    let subtitle = p
        .one_liner
        .as_deref()
        .map(|s| format!("<p class=\"muted\">{}</p>", html_escape(s)))
        .unwrap_or_default();
    let badges = badge_row("projectMeta", "badge", &p.tags);
    let year = p
        .year
        .as_deref()
        .map(|y| format!("<span class=\"tag\">{}</span>", html_escape(y)))
        .unwrap_or_default();

    html.push_str(&format!(
        "<article class=\"card projectCard reveal is-visible\">\
         <div class=\"projectTop\">\
         <div><h3 class=\"h3\">{}</h3>{}{}</div>\
         {}\
         </div>",
        html_escape(title),
        subtitle,
        badges,
        year,
    ));

    let tools = if p.tools.is_empty() {
        None
    } else {
        Some(p.tools.join(", "))
    };
    for (label, value) in [
        ("Context:", p.context.as_deref()),
        ("What I did:", p.work.as_deref()),
        ("Tools:", tools.as_deref()),
    ] {
        if let Some(v) = value {
            html.push_str(&format!(
                "<p class=\"muted\"><strong class=\"label\">{}</strong> {}</p>",
                label,
                html_escape(v)
            ));
        }
    }

    html.push_str(&badge_row("kpis", "kpi", &p.kpis));

    let links = p.links();
    if !links.is_empty() {
        html.push_str("<div class=\"projectLinks\">");
        for (label, url) in links {
            html.push_str(&format!(
                "<a class=\"link\" href=\"{}\" target=\"_blank\" rel=\"noreferrer\">{}</a>",
                html_escape(url),
                label
            ));
        }
        html.push_str("</div>");
    }

    html.push_str("</article>");
}

/// A wrapper div of `<span class="item_class">` badges; empty when `items` is.
fn badge_row(row_class: &str, item_class: &str, items: &[String]) -> String {
    if items.is_empty() {
        return String::new();
    }
    let spans: String = items
        .iter()
        .map(|t| format!("<span class=\"{}\">{}</span>", item_class, html_escape(t)))
        .collect();
    format!("<div class=\"{}\">{}</div>", row_class, spans)
}

/// Render the testimonials grid, or the placeholder card when empty.
pub fn render_testimonials(items: &[Testimonial]) -> String {
    if items.is_empty() {
        return TESTIMONIALS_PLACEHOLDER.to_string();
    }
    let mut html = String::new();
    for t in items {
        let role = t
            .role
            .as_deref()
            .map(|r| format!(", {}", html_escape(r)))
            .unwrap_or_default();
        html.push_str(&format!(
            "<article class=\"card reveal is-visible\">\
             <div class=\"quote\">“{}”</div>\
             <div class=\"quoteBy\">— {}{}</div>\
             </article>",
            html_escape(t.quote.as_deref().unwrap_or("")),
            html_escape(t.display_name()),
            role,
        ));
    }
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn cards(html: &str) -> usize {
        html.matches("<article").count()
    }

    fn placeholders(html: &str) -> usize {
        html.matches("<div class=\"card").count()
    }

    #[test]
    fn test_empty_projects_renders_one_placeholder() {
        let html = render_projects(&[]);
        assert_eq!(placeholders(&html), 1);
        assert_eq!(cards(&html), 0);
        assert!(html.contains("data/projects.json"));
    }

    #[test]
    fn test_empty_testimonials_renders_one_placeholder() {
        let html = render_testimonials(&[]);
        assert_eq!(placeholders(&html), 1);
        assert_eq!(cards(&html), 0);
        assert!(html.contains("data/testimonials.json"));
    }

    #[test]
    fn test_minimal_project_omits_optional_fragments() {
        let p = Project::from_value(&json!({}));
        let html = render_projects(&[&p]);
        assert_eq!(cards(&html), 1);
        assert!(html.contains("Untitled Project"));
        for absent in [
            "undefined",
            "class=\"tag\"",
            "Context:",
            "What I did:",
            "Tools:",
            "class=\"kpis\"",
            "projectLinks",
            "projectMeta",
            "class=\"muted\"",
        ] {
            assert!(!html.contains(absent), "unexpected {}", absent);
        }
    }

    #[test]
    fn test_zero_title_and_context_fall_back() {
        let p = Project::from_value(&json!({ "title": 0, "context": 0 }));
        let html = render_projects(&[&p]);
        assert!(html.contains("<h3 class=\"h3\">Untitled Project</h3>"));
        assert!(!html.contains("Context:"));
        assert!(!html.contains(">0<"));
    }

    #[test]
    fn test_full_project_card() {
        let p = Project::from_value(&json!({
            "title": "Alpha",
            "oneLiner": "One",
            "context": "Ctx",
            "work": "Work",
            "year": 2023,
            "tags": ["ml", "ops"],
            "kpis": ["+10%"],
            "tools": ["Rust", "SQL"],
            "demoUrl": "https://d",
            "caseStudyUrl": "https://c"
        }));
        let html = render_projects(&[&p]);
        assert!(html.contains("<h3 class=\"h3\">Alpha</h3>"));
        assert!(html.contains("<span class=\"tag\">2023</span>"));
        assert_eq!(html.matches("class=\"badge\"").count(), 2);
        assert!(html.contains("Tools:</strong> Rust, SQL"));
        assert!(html.contains("<span class=\"kpi\">+10%</span>"));
        assert!(html.contains(">Demo</a>"));
        assert!(html.contains(">Case Study</a>"));
        assert!(!html.contains(">Repo</a>"));
        assert_eq!(html.matches("target=\"_blank\" rel=\"noreferrer\"").count(), 2);
    }

    #[test]
    fn test_cards_follow_input_order() {
        let a = Project::from_value(&json!({"title": "First"}));
        let b = Project::from_value(&json!({"title": "Second"}));
        let html = render_projects(&[&b, &a]);
        let second = html.find("Second").unwrap();
        let first = html.find("First").unwrap();
        assert!(second < first);
    }

    #[test]
    fn test_project_text_is_escaped() {
        let p = Project::from_value(&json!({
            "title": "<script>alert(1)</script>",
            "tags": ["<b>"],
            "repoUrl": "\" onmouseover=\"x"
        }));
        let html = render_projects(&[&p]);
        assert!(!html.contains("<script>"));
        assert!(!html.contains("<b>"));
        assert!(html.contains("href=\"&quot; onmouseover=&quot;x\""));
    }

    #[test]
    fn test_testimonial_attribution() {
        let items = Testimonial::list_from_value(&json!([
            {"quote": "Great", "name": "Ada", "role": "CTO"},
            {"quote": "Solid"}
        ]));
        let html = render_testimonials(&items);
        assert_eq!(cards(&html), 2);
        assert!(html.contains("— Ada, CTO"));
        assert!(html.contains("— Anonymous</div>"));
    }

    #[test]
    fn test_testimonial_escaped() {
        let items = Testimonial::list_from_value(&json!([{"quote": "a<b", "name": "O'Neil"}]));
        let html = render_testimonials(&items);
        assert!(html.contains("a&lt;b"));
        assert!(html.contains("O&#039;Neil"));
    }
}
