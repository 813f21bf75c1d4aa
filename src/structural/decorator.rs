//! Decorator: condiments wrap a coffee and extend its description and cost.
//! Wrapped components are reference counted, so one base can sit under
//! several independent decorator chains.

use std::rc::Rc;

use crate::console::Console;

pub trait Coffee {
    fn description(&self) -> String;
    fn cost(&self) -> f64;
}

#[derive(Debug, Default)]
pub struct SimpleCoffee;

impl Coffee for SimpleCoffee {
    fn description(&self) -> String {
        "Simple Coffee".to_string()
    }

    fn cost(&self) -> f64 {
        5.0
    }
}

pub struct MilkDecorator {
    wrapped: Rc<dyn Coffee>,
}

impl MilkDecorator {
    pub const COST: f64 = 2.0;

    pub fn new(wrapped: Rc<dyn Coffee>) -> Self {
        MilkDecorator { wrapped }
    }
}

impl Coffee for MilkDecorator {
    fn description(&self) -> String {
        format!("{}, Milk", self.wrapped.description())
    }

    fn cost(&self) -> f64 {
        self.wrapped.cost() + Self::COST
    }
}

pub struct SugarDecorator {
    wrapped: Rc<dyn Coffee>,
}

impl SugarDecorator {
    pub const COST: f64 = 0.5;

    pub fn new(wrapped: Rc<dyn Coffee>) -> Self {
        SugarDecorator { wrapped }
    }
}

impl Coffee for SugarDecorator {
    fn description(&self) -> String {
        format!("{}, Sugar", self.wrapped.description())
    }

    fn cost(&self) -> f64 {
        self.wrapped.cost() + Self::COST
    }
}

fn serve(coffee: &dyn Coffee, out: &dyn Console) {
    out.line(&format!("{} costs {}", coffee.description(), coffee.cost()));
}

pub fn demo(out: &dyn Console) {
    let base: Rc<dyn Coffee> = Rc::new(SimpleCoffee);
    serve(base.as_ref(), out);

    let with_milk: Rc<dyn Coffee> = Rc::new(MilkDecorator::new(Rc::clone(&base)));
    serve(with_milk.as_ref(), out);

    let with_milk_and_sugar = SugarDecorator::new(Rc::clone(&with_milk));
    serve(&with_milk_and_sugar, out);

    // Second chain over the same base.
    let with_sugar = SugarDecorator::new(Rc::clone(&base));
    serve(&with_sugar, out);
}
