//! Todos Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod logger;
mod models;
mod store;
mod sync;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match AppConfig::from_build_env() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };
    logger::init(config.log_level);
    if let Some(e) = config_error {
        tracing::warn!("{}; using defaults", e);
    }
    tracing::info!("starting with api {}", config.api_base_url);

    mount_to_body(move || view! { <App config=config.clone() /> });
}
