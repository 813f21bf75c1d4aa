//! Runs only the structural demos.
//!
//! Run with: cargo run --bin structural

use design_patterns::{catalogue, logging, CatalogueConfig, Category, StdoutConsole};

fn main() {
    let config = CatalogueConfig::only(Category::Structural);
    logging::init(&config.log_level);

    let out = StdoutConsole::new(config.color);
    catalogue::run(&config, &out);
}
