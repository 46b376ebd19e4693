//! Page state owner. `App::init` runs the startup sequence once; afterwards
//! the host feeds events through `App::dispatch`.

use log::{info, warn};

use crate::config::SiteConfig;
use crate::controllers::contact::ContactComposer;
use crate::controllers::filter::FilterController;
use crate::controllers::nav::NavController;
use crate::controllers::reveal::RevealController;
use crate::controllers::{year, Effect, Event};
use crate::dom::Document;
use crate::loader::{DataLoader, Loaded};
use crate::models::project::Project;
use crate::models::testimonial::Testimonial;
use crate::page::{PROJECTS_GRID_ID, TESTIMONIALS_GRID_ID};
use crate::render::{render_projects, render_testimonials};
use crate::store::ProjectStore;

pub struct App {
    nav: Option<NavController>,
    reveal: RevealController,
    contact: Option<ContactComposer>,
    filter: Option<FilterController>,
    /// Record counts per data source. A non-array payload counts as zero.
    projects: Loaded<usize>,
    testimonials: Loaded<usize>,
}

impl App {
    /// Wire every feature whose elements are present, then load and draw
    /// projects followed by testimonials.
    pub fn init(doc: &mut Document, loader: &DataLoader, config: &SiteConfig) -> App {
        year::stamp(doc);
        let mut app = App {
            nav: NavController::bind(doc),
            reveal: RevealController::observe(doc),
            contact: ContactComposer::bind(doc, &config.contact_email),
            filter: None,
            projects: Loaded::NotAttempted,
            testimonials: Loaded::NotAttempted,
        };
        app.load_projects(doc, loader, &config.projects_path);
        app.load_testimonials(doc, loader, &config.testimonials_path);
        info!(
            "Page ready: projects={:?} testimonials={:?}",
            app.projects, app.testimonials
        );
        app
    }

    fn load_projects(&mut self, doc: &mut Document, loader: &DataLoader, path: &str) {
        let grid = doc.by_id(PROJECTS_GRID_ID);
        let loaded = loader.load(path);
        let list = loaded.ready().and_then(Project::list_from_value);
        match list {
            Some(projects) => {
                self.projects = Loaded::Ready(projects.len());
                self.filter = Some(FilterController::bind(doc, grid, ProjectStore::new(projects)));
            }
            None => {
                if loaded.ready().is_some() {
                    warn!("{} is not a JSON array, showing empty state", path);
                }
                self.projects = loaded.map(|_| 0);
                if let Some(grid) = grid {
                    doc.set_inner_html(grid, render_projects(&[]));
                }
            }
        }
    }

    fn load_testimonials(&mut self, doc: &mut Document, loader: &DataLoader, path: &str) {
        let loaded = loader.load(path);
        let items = loaded
            .ready()
            .map(Testimonial::list_from_value)
            .unwrap_or_default();
        self.testimonials = loaded.map(|_| items.len());
        if let Some(grid) = doc.by_id(TESTIMONIALS_GRID_ID) {
            doc.set_inner_html(grid, render_testimonials(&items));
        }
    }

    pub fn projects(&self) -> &Loaded<usize> {
        &self.projects
    }

    pub fn testimonials(&self) -> &Loaded<usize> {
        &self.testimonials
    }

    pub fn filter(&self) -> Option<&FilterController> {
        self.filter.as_ref()
    }

    /// Route one event to whichever controller owns its target.
    pub fn dispatch(&mut self, doc: &mut Document, event: Event) -> Option<Effect> {
        match event {
            Event::Click(target) => {
                if let Some(nav) = &self.nav {
                    nav.on_click(doc, target);
                }
                None
            }
            Event::Input(target, value) | Event::Change(target, value) => {
                doc.set_value(target, &value);
                if let Some(filter) = &mut self.filter {
                    filter.on_value(doc, target, &value);
                }
                None
            }
            Event::Submit(target) => self
                .contact
                .as_ref()
                .and_then(|c| c.on_submit(doc, target))
                .map(Effect::Navigate),
            Event::Intersect(entries) => {
                self.reveal.on_intersections(doc, &entries);
                None
            }
        }
    }
}
