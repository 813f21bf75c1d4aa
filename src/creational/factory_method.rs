//! Factory Method: creators decide which concrete product to build, callers
//! only ever see `Box<dyn Product>`.

use crate::console::Console;

pub trait Product {
    fn name(&self) -> &'static str;

    fn use_product(&self, out: &dyn Console) {
        out.line(&format!("Using {}", self.name()));
    }
}

#[derive(Debug, Default)]
pub struct ConcreteProductA;

#[derive(Debug, Default)]
pub struct ConcreteProductB;

#[derive(Debug, Default)]
pub struct ConcreteProductC;

impl Product for ConcreteProductA {
    fn name(&self) -> &'static str {
        "ConcreteProductA"
    }
}

impl Product for ConcreteProductB {
    fn name(&self) -> &'static str {
        "ConcreteProductB"
    }
}

impl Product for ConcreteProductC {
    fn name(&self) -> &'static str {
        "ConcreteProductC"
    }
}

/// Declares the factory method and a helper built on top of it.
pub trait Creator {
    fn factory_method(&self) -> Box<dyn Product>;

    /// Works with whatever product the concrete creator returns.
    fn create_and_use(&self, out: &dyn Console) {
        let product = self.factory_method();
        product.use_product(out);
    }
}

#[derive(Debug, Default)]
pub struct ConcreteCreatorA;

#[derive(Debug, Default)]
pub struct ConcreteCreatorB;

#[derive(Debug, Default)]
pub struct ConcreteCreatorC;

impl Creator for ConcreteCreatorA {
    fn factory_method(&self) -> Box<dyn Product> {
        Box::new(ConcreteProductA)
    }
}

impl Creator for ConcreteCreatorB {
    fn factory_method(&self) -> Box<dyn Product> {
        Box::new(ConcreteProductB)
    }
}

impl Creator for ConcreteCreatorC {
    fn factory_method(&self) -> Box<dyn Product> {
        Box::new(ConcreteProductC)
    }
}

pub fn demo(out: &dyn Console) {
    let creators: [&dyn Creator; 3] = [&ConcreteCreatorA, &ConcreteCreatorB, &ConcreteCreatorC];

    let products: Vec<Box<dyn Product>> = creators.iter().map(|c| c.factory_method()).collect();
    for product in &products {
        product.use_product(out);
    }
}
