//! Clinic Portal Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod history;
mod listing;
mod models;
mod route;
mod router;
mod session;
mod store;
mod validation;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::error_1(&format!("logger init failed: {}", err).into());
    }
    mount_to_body(App);
}
