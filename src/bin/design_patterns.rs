//! Runs every demo in the catalogue: creational, then structural, then
//! behavioral.
//!
//! Run with: cargo run --bin design-patterns

use design_patterns::{catalogue, logging, CatalogueConfig, StdoutConsole};

fn main() {
    let config = CatalogueConfig::default();
    logging::init(&config.log_level);

    let out = StdoutConsole::new(config.color);
    catalogue::run(&config, &out);
}
