//! Page shell: builds a host document that satisfies the element contract
//! the controllers look for.

use crate::dom::Document;
use crate::store::ALL_TAGS;

pub const YEAR_ID: &str = "year";
pub const NAV_TOGGLE_CLASS: &str = "nav__toggle";
pub const NAV_MENU_ID: &str = "navMenu";
pub const NAV_LINK_CLASS: &str = "nav__link";
pub const REVEAL_CLASS: &str = "reveal";
pub const CONTACT_FORM_ID: &str = "contactForm";
pub const PROJECTS_GRID_ID: &str = "projectsGrid";
pub const TESTIMONIALS_GRID_ID: &str = "testimonialsGrid";
pub const SEARCH_ID: &str = "projectSearch";
pub const FILTER_ID: &str = "projectFilter";

const NAV_LINKS: &[(&str, &str)] = &[
    ("#projects", "Projects"),
    ("#testimonials", "Testimonials"),
    ("#contact", "Contact"),
];

/// Build the standard portfolio page.
pub fn build(site_name: &str) -> Document {
    let mut doc = Document::new();
    let body = doc.root();

    let header = doc.create_in(body, "header", &[("class", "nav")]);
    let brand = doc.create_in(header, "a", &[("class", "nav__brand"), ("href", "#top")]);
    doc.set_text(brand, site_name);
    let toggle = doc.create_in(
        header,
        "button",
        &[
            ("class", NAV_TOGGLE_CLASS),
            ("type", "button"),
            ("aria-controls", NAV_MENU_ID),
            ("aria-expanded", "false"),
        ],
    );
    doc.set_text(toggle, "Menu");
    let menu = doc.create_in(header, "nav", &[("id", NAV_MENU_ID), ("class", "nav__menu")]);
    for &(href, label) in NAV_LINKS {
        let link = doc.create_in(menu, "a", &[("class", NAV_LINK_CLASS), ("href", href)]);
        doc.set_text(link, label);
    }

    let main = doc.create_in(body, "main", &[]);

    let projects = doc.create_in(main, "section", &[("id", "projects"), ("class", "section reveal")]);
    let h2 = doc.create_in(projects, "h2", &[("class", "h2")]);
    doc.set_text(h2, "Projects");
    let controls = doc.create_in(projects, "div", &[("class", "controls")]);
    doc.create_in(
        controls,
        "input",
        &[
            ("id", SEARCH_ID),
            ("type", "search"),
            ("placeholder", "Search projects"),
            ("aria-label", "Search projects"),
        ],
    );
    let select = doc.create_in(
        controls,
        "select",
        &[("id", FILTER_ID), ("aria-label", "Filter by tag"), ("value", ALL_TAGS)],
    );
    let all = doc.create_in(select, "option", &[("value", ALL_TAGS)]);
    doc.set_text(all, "All");
    doc.create_in(projects, "div", &[("id", PROJECTS_GRID_ID), ("class", "grid")]);

    let testimonials = doc.create_in(
        main,
        "section",
        &[("id", "testimonials"), ("class", "section reveal")],
    );
    let h2 = doc.create_in(testimonials, "h2", &[("class", "h2")]);
    doc.set_text(h2, "Testimonials");
    doc.create_in(testimonials, "div", &[("id", TESTIMONIALS_GRID_ID), ("class", "grid")]);

    let contact = doc.create_in(main, "section", &[("id", "contact"), ("class", "section reveal")]);
    let h2 = doc.create_in(contact, "h2", &[("class", "h2")]);
    doc.set_text(h2, "Contact");
    let form = doc.create_in(contact, "form", &[("id", CONTACT_FORM_ID)]);
    doc.create_in(form, "input", &[("name", "name"), ("type", "text"), ("placeholder", "Name")]);
    doc.create_in(form, "input", &[("name", "email"), ("type", "email"), ("placeholder", "Email")]);
    doc.create_in(form, "textarea", &[("name", "message"), ("placeholder", "Message")]);
    let send = doc.create_in(form, "button", &[("type", "submit")]);
    doc.set_text(send, "Send");

    let footer = doc.create_in(body, "footer", &[("class", "footer")]);
    let copy = doc.create_in(footer, "p", &[]);
    doc.set_text(copy, &format!("© {}", site_name));
    doc.create_in(footer, "span", &[("id", YEAR_ID)]);

    doc
}
