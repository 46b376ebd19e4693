use log::error;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::fs::{FileServer, Options};
use rocket::http::Header;
use rocket::response::content::RawHtml;
use rocket::{catch, catchers, get, routes, Build, Rocket, State};

use crate::app::App;
use crate::config::SiteConfig;
use crate::controllers::reveal::Intersection;
use crate::controllers::Event;
use crate::loader::{DataLoader, FileFetcher, HttpFetcher};
use crate::page;
use crate::sanitize::html_escape;

/// Data files must always be revalidated by the browser.
pub struct NoCacheData;

#[rocket::async_trait]
impl Fairing for NoCacheData {
    fn info(&self) -> Info {
        Info { name: "No-Cache Data Files", kind: Kind::Response }
    }

    async fn on_response<'r>(&self, req: &'r rocket::Request<'_>, res: &mut rocket::Response<'r>) {
        if req.uri().path().starts_with("/data/") {
            res.set_header(Header::new("Cache-Control", "no-store, no-cache, must-revalidate, max-age=0"));
            res.set_header(Header::new("Pragma", "no-cache"));
        }
    }
}

/// Pick the fetcher the config asks for. A bad base URL falls back to
/// reading from the site directory.
pub fn loader_for(config: &SiteConfig) -> DataLoader {
    if let Some(base) = &config.data_base_url {
        match HttpFetcher::new(base) {
            Ok(f) => return DataLoader::new(Box::new(f)),
            Err(e) => error!("data_base_url {} unusable ({}), reading from {}", base, e, config.site_root.display()),
        }
    }
    DataLoader::new(Box::new(FileFetcher::new(config.site_root.clone())))
}

/// Build the page, run the startup sequence against it, and serialize it.
/// The snapshot ships without scripts, so every reveal element is reported
/// fully in view before serializing.
pub fn render_snapshot(config: &SiteConfig) -> String {
    let mut doc = page::build(&config.site_name);
    let loader = loader_for(config);
    let mut app = App::init(&mut doc, &loader, config);
    let in_view = doc
        .by_class(page::REVEAL_CLASS)
        .into_iter()
        .map(|target| Intersection { target, ratio: 1.0 })
        .collect();
    app.dispatch(&mut doc, Event::Intersect(in_view));
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\"><head>\
         <meta charset=\"utf-8\">\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
         <title>{}</title>\
         <link rel=\"stylesheet\" href=\"/static/css/site.css\">\
         </head>{}</html>",
        html_escape(&config.site_name),
        doc.to_html()
    )
}

#[get("/")]
async fn index(config: &State<SiteConfig>) -> RawHtml<String> {
    let config = config.inner().clone();
    match rocket::tokio::task::spawn_blocking(move || render_snapshot(&config)).await {
        Ok(html) => RawHtml(html),
        Err(e) => {
            error!("snapshot render failed: {}", e);
            server_error()
        }
    }
}

#[catch(404)]
fn not_found() -> RawHtml<String> {
    RawHtml("<html><body style='font-family:sans-serif;text-align:center;padding:80px'><h1>404</h1><p>Page not found.</p><a href='/'>← Home</a></body></html>".to_string())
}

#[catch(500)]
fn server_error() -> RawHtml<String> {
    RawHtml("<html><body style='font-family:sans-serif;text-align:center;padding:80px'><h1>500</h1><p>Internal server error.</p><a href='/'>← Home</a></body></html>".to_string())
}

pub fn build(config: SiteConfig) -> Rocket<Build> {
    let data_dir = config.site_root.join("data");
    let static_dir = config.site_root.join("static");
    rocket::build()
        .attach(NoCacheData)
        .mount("/", routes![index])
        .mount("/data", FileServer::new(data_dir, Options::Missing))
        .mount("/static", FileServer::new(static_dir, Options::Missing))
        .register("/", catchers![not_found, server_error])
        .manage(config)
}
