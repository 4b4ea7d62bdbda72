#![deny(unused_crate_dependencies)]
// Fix for html! macro doing unit value assignments. (yew 0.19.3)
#![allow(clippy::let_unit_value)]

mod api;
mod app;
mod components;
mod config;
mod consts;
mod home;
mod layout;
mod logger;
mod registration;
mod services;
mod telegram;
mod utils;

use wasm_bindgen::prelude::*;

pub use config::Config;

use app::App;

use consts::TITLE_BASE;

/// Entry point, called by the host page with its configuration object.
#[wasm_bindgen]
pub fn run(config: JsValue) {
    logger::init();

    let config = match serde_wasm_bindgen::from_value(config) {
        Ok(config) => config,
        Err(err) => {
            log::error!("Invalid start configuration: {}", err);
            return;
        }
    };

    start(config);
}

pub fn start(config: Config) {
    if config::set(config).is_err() {
        log::warn!("Already started, ignoring the new configuration");
        return;
    }

    let mountpoint = &config::get().mountpoint;

    let element = match gloo_utils::document().get_element_by_id(mountpoint) {
        Some(element) => element,
        None => {
            log::error!("No element with id {} to mount the app at", mountpoint);
            return;
        }
    };

    Title::clear();

    yew::start_app_in_element::<App>(element);
}

pub struct Title;

impl Title {
    pub fn set(title: &str) {
        gloo_utils::document().set_title(&format!("{} - {}", title, TITLE_BASE))
    }

    pub fn clear() {
        gloo_utils::document().set_title(TITLE_BASE);
    }
}
