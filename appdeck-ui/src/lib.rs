use wasm_bindgen::prelude::*;

pub mod app;
pub mod components;
pub mod config;

#[wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);
    config::init_locale();
    leptos::mount_to_body(app::App);
}
