//! Abstract Factory: each factory builds a whole family of products that are
//! meant to be used together (X1 with Y1, X2 with Y2).

use crate::console::Console;

pub trait AbstractProductX {
    fn name(&self) -> &'static str;

    fn use_product(&self, out: &dyn Console) {
        out.line(&format!("Using {}", self.name()));
    }
}

pub trait AbstractProductY {
    fn name(&self) -> &'static str;

    /// Collaborate with a product X, normally one from the same family.
    fn interact_with(&self, x: &dyn AbstractProductX, out: &dyn Console) {
        out.line(&format!("{} interacts with {}", self.name(), x.name()));
    }
}

#[derive(Debug, Default)]
pub struct ProductX1;

#[derive(Debug, Default)]
pub struct ProductY1;

#[derive(Debug, Default)]
pub struct ProductX2;

#[derive(Debug, Default)]
pub struct ProductY2;

impl AbstractProductX for ProductX1 {
    fn name(&self) -> &'static str {
        "ProductX1"
    }
}

impl AbstractProductY for ProductY1 {
    fn name(&self) -> &'static str {
        "ProductY1"
    }
}

impl AbstractProductX for ProductX2 {
    fn name(&self) -> &'static str {
        "ProductX2"
    }
}

impl AbstractProductY for ProductY2 {
    fn name(&self) -> &'static str {
        "ProductY2"
    }
}

pub trait AbstractFactory {
    fn create_product_x(&self) -> Box<dyn AbstractProductX>;
    fn create_product_y(&self) -> Box<dyn AbstractProductY>;
}

/// Builds Family1 products.
#[derive(Debug, Default)]
pub struct ConcreteFactory1;

/// Builds Family2 products.
#[derive(Debug, Default)]
pub struct ConcreteFactory2;

impl AbstractFactory for ConcreteFactory1 {
    fn create_product_x(&self) -> Box<dyn AbstractProductX> {
        Box::new(ProductX1)
    }

    fn create_product_y(&self) -> Box<dyn AbstractProductY> {
        Box::new(ProductY1)
    }
}

impl AbstractFactory for ConcreteFactory2 {
    fn create_product_x(&self) -> Box<dyn AbstractProductX> {
        Box::new(ProductX2)
    }

    fn create_product_y(&self) -> Box<dyn AbstractProductY> {
        Box::new(ProductY2)
    }
}

/// Client code: only knows the abstract factory.
pub fn exercise_family(factory: &dyn AbstractFactory, out: &dyn Console) {
    let x = factory.create_product_x();
    let y = factory.create_product_y();
    x.use_product(out);
    y.interact_with(x.as_ref(), out);
}

pub fn demo(out: &dyn Console) {
    exercise_family(&ConcreteFactory1, out);
    exercise_family(&ConcreteFactory2, out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::MemoryConsole;

    #[test]
    fn test_factories_build_matching_families() {
        let f1 = ConcreteFactory1;
        assert_eq!(f1.create_product_x().name(), "ProductX1");
        assert_eq!(f1.create_product_y().name(), "ProductY1");

        let f2 = ConcreteFactory2;
        assert_eq!(f2.create_product_x().name(), "ProductX2");
        assert_eq!(f2.create_product_y().name(), "ProductY2");
    }

    #[test]
    fn test_demo_output() {
        let out = MemoryConsole::new();
        demo(&out);
        assert_eq!(
            out.lines(),
            vec![
                "Using ProductX1",
                "ProductY1 interacts with ProductX1",
                "Using ProductX2",
                "ProductY2 interacts with ProductX2",
            ]
        );
    }
}
