//! Runs only the creational demos.
//!
//! Run with: cargo run --bin creational

use design_patterns::{catalogue, logging, CatalogueConfig, Category, StdoutConsole};

fn main() {
    let config = CatalogueConfig::only(Category::Creational);
    logging::init(&config.log_level);

    let out = StdoutConsole::new(config.color);
    catalogue::run(&config, &out);
}
