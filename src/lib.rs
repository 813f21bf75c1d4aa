//! # Design Patterns
//!
//! The classic object-oriented design patterns expressed with Rust traits,
//! ownership and smart pointers. Every pattern lives in its own module with
//! the roles it needs and a `demo` routine that writes its output through a
//! [`Console`](console::Console).
//!
//! ## Patterns Covered
//!
//! - **Creational**: Singleton, Factory Method, Abstract Factory, Builder, Prototype
//! - **Structural**: Adapter, Bridge, Composite, Decorator, Facade, Flyweight, Proxy
//! - **Behavioral**: Chain of Responsibility, Command, Iterator, Mediator,
//!   Memento, Observer, State, Strategy, Template Method, Visitor
//!
//! ## Running
//!
//! ```bash
//! # Everything, in catalogue order
//! cargo run --bin design-patterns
//!
//! # One category
//! cargo run --bin creational
//! cargo run --bin structural
//! cargo run --bin behavioral
//! ```
//!
//! ## Key Dependencies
//!
//! - `thiserror` - error enums for validation and configuration
//! - `serde` + `toml` - catalogue configuration
//! - `tracing` - diagnostics, separate from demo output
//! - `lazy_static` - one-time initialisation (Singleton, compiled regexes)
//! - `regex` - whitespace detection in the validator chain
//! - `itertools` - `join` for printed sequences
//! - `rustc-hash` - `FxHashMap` behind the Flyweight cache
//! - `colored` - highlighted demo banners on stdout

pub mod behavioral;
pub mod catalogue;
pub mod config;
pub mod console;
pub mod creational;
pub mod logging;
pub mod structural;

pub use catalogue::{Category, PatternDemo};
pub use config::{CatalogueConfig, ConfigError};
pub use console::{Console, MemoryConsole, StdoutConsole};
