//! Runs only the behavioral demos.
//!
//! Run with: cargo run --bin behavioral

use design_patterns::{catalogue, logging, CatalogueConfig, Category, StdoutConsole};

fn main() {
    let config = CatalogueConfig::only(Category::Behavioral);
    logging::init(&config.log_level);

    let out = StdoutConsole::new(config.color);
    catalogue::run(&config, &out);
}
