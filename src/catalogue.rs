//! Ordered registry of every pattern demo and the runner that drives them.

use std::fmt;

use serde::Deserialize;

use crate::config::CatalogueConfig;
use crate::console::Console;
use crate::{behavioral, creational, structural};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Creational,
    Structural,
    Behavioral,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::Creational,
        Category::Structural,
        Category::Behavioral,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Creational => "Creational",
            Category::Structural => "Structural",
            Category::Behavioral => "Behavioral",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One runnable entry in the catalogue.
#[derive(Clone, Copy)]
pub struct PatternDemo {
    pub category: Category,
    pub name: &'static str,
    pub run: fn(&dyn Console),
}

impl fmt::Debug for PatternDemo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PatternDemo")
            .field("category", &self.category)
            .field("name", &self.name)
            .finish()
    }
}

const fn demo(category: Category, name: &'static str, run: fn(&dyn Console)) -> PatternDemo {
    PatternDemo { category, name, run }
}

pub static DEMOS: [PatternDemo; 22] = [
    demo(Category::Creational, "Singleton", creational::singleton::demo),
    demo(Category::Creational, "Factory Method", creational::factory_method::demo),
    demo(Category::Creational, "Abstract Factory", creational::abstract_factory::demo),
    demo(Category::Creational, "Builder", creational::builder::demo),
    demo(Category::Creational, "Prototype", creational::prototype::demo),
    demo(Category::Structural, "Adapter", structural::adapter::demo),
    demo(Category::Structural, "Bridge", structural::bridge::demo),
    demo(Category::Structural, "Composite", structural::composite::demo),
    demo(Category::Structural, "Decorator", structural::decorator::demo),
    demo(Category::Structural, "Facade", structural::facade::demo),
    demo(Category::Structural, "Flyweight", structural::flyweight::demo),
    demo(Category::Structural, "Proxy", structural::proxy::demo),
    demo(Category::Behavioral, "Chain of Responsibility", behavioral::chain_of_responsibility::demo),
    demo(Category::Behavioral, "Command", behavioral::command::demo),
    demo(Category::Behavioral, "Iterator", behavioral::iterator::demo),
    demo(Category::Behavioral, "Mediator", behavioral::mediator::demo),
    demo(Category::Behavioral, "Memento", behavioral::memento::demo),
    demo(Category::Behavioral, "Observer", behavioral::observer::demo),
    demo(Category::Behavioral, "State", behavioral::state::demo),
    demo(Category::Behavioral, "Strategy", behavioral::strategy::demo),
    demo(Category::Behavioral, "Template Method", behavioral::template_method::demo),
    demo(Category::Behavioral, "Visitor", behavioral::visitor::demo),
];

pub fn demos_in(category: Category) -> impl Iterator<Item = &'static PatternDemo> {
    DEMOS.iter().filter(move |d| d.category == category)
}

pub fn find(name: &str) -> Option<&'static PatternDemo> {
    DEMOS.iter().find(|d| d.name.eq_ignore_ascii_case(name))
}

/// Run a single demo framed by its banner and the closing rule.
pub fn run_demo(demo: &PatternDemo, separator_width: usize, out: &dyn Console) {
    tracing::debug!(category = %demo.category, pattern = demo.name, "running demo");
    out.header(demo.category.label(), demo.name);
    (demo.run)(out);
    out.separator(separator_width);
}

/// Run every demo of the configured categories, category by category.
/// Returns the number of demos executed.
pub fn run(config: &CatalogueConfig, out: &dyn Console) -> usize {
    let mut executed = 0;
    for &category in &config.categories {
        for demo in demos_in(category) {
            run_demo(demo, config.separator_width, out);
            executed += 1;
        }
    }
    tracing::info!(executed, "catalogue finished");
    executed
}
