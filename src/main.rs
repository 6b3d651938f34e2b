//! Todo Widget Entry Point

mod models;
mod todos;
mod draft;
mod config;
mod store;
mod components;
mod app;


use app::App;
use config::WidgetConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if console_logger::init(WidgetConfig::default().log_level).is_err() {
        log::warn!("logger already initialized");
    }
    log::info!("mounting todo widget");
    mount_to_body(App);
}
