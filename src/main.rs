//! ERP Admin Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod pages;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = config::load();
    let logger = rolling_logger::LoggerConfig {
        app_name: "erp-admin".to_string(),
        level: config.log_level_filter(),
        capacity: config.log_capacity,
        echo: true,
    };
    if let Err(err) = rolling_logger::init_logger(logger) {
        web_sys::console::error_1(&format!("[APP] Logger init failed: {}", err).into());
    }
    log::info!("[APP] Backend at {}", config.base_url);

    mount_to_body(move || view! { <App config=config /> });
}
