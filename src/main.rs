#[macro_use]
extern crate rocket;

use log::{error, info};

use folio::config::SiteConfig;

#[launch]
fn rocket() -> _ {
    env_logger::init();

    let config = SiteConfig::load().unwrap_or_else(|e| {
        error!("{}; falling back to defaults", e);
        SiteConfig::default()
    });

    if !config.site_root.is_dir() {
        error!("Site root {} does not exist; pages will show empty states", config.site_root.display());
    }
    info!("Serving {} from {}", config.site_name, config.site_root.display());

    folio::server::build(config)
}
