pub mod app;
pub mod dashboards;
pub mod layout;
pub mod reports;
pub mod shared;

use leptos::prelude::*;
use shared::api_utils::ApiConfig;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    let config = ApiConfig::from_location();
    leptos::mount::mount_to_body(move || view! { <app::App config=config.clone() /> });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
