// CloudNex Landing Page - Leptos 0.8 Edition

use cloudnex_landing::config::{BRAND, VERSION};
use cloudnex_landing::{App, SiteConfig, logging};
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let loaded = SiteConfig::from_document();
    let config = loaded.as_ref().ok().cloned().unwrap_or_default();
    logging::init(&config.log_level);
    if let Err(err) = loaded {
        tracing::warn!("using default site config: {}", err);
    }

    tracing::info!("{} {} mounting", BRAND, VERSION);
    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}
