//! Builder: a consuming, chainable `SandwichBuilder` assembles an immutable
//! `Sandwich`.

use itertools::Itertools;

use crate::console::Console;

const DEFAULT_BREAD: &str = "White";
const NO_MEAT: &str = "None";

#[derive(Debug, Clone, PartialEq)]
pub struct Sandwich {
    bread: String,
    meat: String,
    veggies: Vec<String>,
    toasted: bool,
}

#[derive(Debug, Clone)]
pub struct SandwichBuilder {
    bread: String,
    meat: String,
    veggies: Vec<String>,
    toasted: bool,
}

impl Sandwich {
    // Entry point to the builder; there is no public constructor.
    pub fn builder() -> SandwichBuilder {
        SandwichBuilder::new()
    }

    pub fn bread(&self) -> &str {
        &self.bread
    }

    pub fn meat(&self) -> &str {
        &self.meat
    }

    pub fn veggies(&self) -> &[String] {
        &self.veggies
    }

    pub fn is_toasted(&self) -> bool {
        self.toasted
    }

    /// True when nothing but bread went in.
    pub fn is_plain(&self) -> bool {
        self.meat == NO_MEAT && self.veggies.is_empty()
    }

    pub fn describe(&self, out: &dyn Console) {
        out.line("--- Final Sandwich ---");
        let toasted = if self.toasted { " (TOASTED)" } else { "" };
        out.line(&format!("Bread: {}{}", self.bread, toasted));
        out.line(&format!("Meat: {}", self.meat));
        if self.veggies.is_empty() {
            out.line("Veggies: None");
        } else {
            out.line(&format!("Veggies: {}", self.veggies.iter().join(", ")));
        }
        out.line("----------------------");
    }
}

impl SandwichBuilder {
    pub fn new() -> Self {
        SandwichBuilder {
            bread: DEFAULT_BREAD.to_string(),
            meat: NO_MEAT.to_string(),
            veggies: Vec::new(),
            toasted: false,
        }
    }

    pub fn bread(mut self, bread: impl Into<String>) -> Self {
        self.bread = bread.into();
        self
    }

    pub fn meat(mut self, meat: impl Into<String>) -> Self {
        self.meat = meat.into();
        self
    }

    // Each call appends another topping.
    pub fn veggie(mut self, veggie: impl Into<String>) -> Self {
        self.veggies.push(veggie.into());
        self
    }

    pub fn toasted(mut self, toasted: bool) -> Self {
        self.toasted = toasted;
        self
    }

    pub fn build(self) -> Sandwich {
        let sandwich = Sandwich {
            bread: self.bread,
            meat: self.meat,
            veggies: self.veggies,
            toasted: self.toasted,
        };
        if sandwich.is_plain() {
            tracing::warn!(bread = %sandwich.bread, "building a very plain sandwich");
        }
        sandwich
    }
}

impl Default for SandwichBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn demo(out: &dyn Console) {
    let lunch_sub = Sandwich::builder()
        .bread("Wheat")
        .meat("Turkey")
        .veggie("Lettuce")
        .build();
    lunch_sub.describe(out);

    let custom_sub = Sandwich::builder()
        .bread("Italian Herb & Cheese")
        .meat("Roast Beef")
        .veggie("Pickles")
        .veggie("Onions")
        .toasted(true)
        .build();
    custom_sub.describe(out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::MemoryConsole;

    #[test]
    fn test_defaults() {
        let sandwich = SandwichBuilder::default().build();
        assert_eq!(sandwich.bread(), "White");
        assert_eq!(sandwich.meat(), "None");
        assert!(sandwich.veggies().is_empty());
        assert!(!sandwich.is_toasted());
        assert!(sandwich.is_plain());
    }

    #[test]
    fn test_veggies_accumulate_in_order() {
        let sandwich = Sandwich::builder()
            .veggie("Tomato")
            .veggie("Olives")
            .veggie("Spinach")
            .build();
        assert_eq!(sandwich.veggies(), ["Tomato", "Olives", "Spinach"]);
        assert!(!sandwich.is_plain());
    }

    #[test]
    fn test_describe_toasted_sandwich() {
        let out = MemoryConsole::new();
        Sandwich::builder()
            .bread("Rye")
            .meat("Ham")
            .veggie("Pickles")
            .veggie("Onions")
            .toasted(true)
            .build()
            .describe(&out);

        assert_eq!(
            out.lines(),
            vec![
                "--- Final Sandwich ---",
                "Bread: Rye (TOASTED)",
                "Meat: Ham",
                "Veggies: Pickles, Onions",
                "----------------------",
            ]
        );
    }

    #[test]
    fn test_describe_without_veggies() {
        let out = MemoryConsole::new();
        Sandwich::builder().meat("Tuna").build().describe(&out);
        assert!(out.contains("Bread: White"));
        assert!(out.contains("Veggies: None"));
    }
}
