//! Marketplace Page Behaviors Entry Point
//!
//! Attaches client-side behaviors to the server-rendered marketplace pages.

mod behaviors;
mod components;
mod config;
mod counter;
mod dom;
mod error;
mod globals;
mod logger;
mod models;
mod price;
mod search;
mod sorting;

use config::PageConfig;
use components::Confirmer;
use log::LevelFilter;

fn main() {
    console_error_panic_hook::set_once();
    logger::init(LevelFilter::Info);

    if let Err(e) = start() {
        log::error!("page behaviors not started: {}", e);
    }
}

fn start() -> error::Result<()> {
    let window = dom::window()?;
    let document = dom::document()?;

    let config = PageConfig::load(&window, &document);
    logger::init(config.log_level());

    let confirmer = Confirmer::new(&config.confirm.default_message);
    globals::install(&window, confirmer.clone())?;
    behaviors::on_ready(&document, config, confirmer)
}
