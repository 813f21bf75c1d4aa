//! Visitor: operations over a closed set of shapes live in visitors, and
//! double dispatch (`accept` -> `visit_*`) picks the right method for each
//! shape without downcasting.

use std::f64::consts::PI;

use crate::console::Console;

pub trait ShapeVisitor {
    fn visit_circle(&mut self, circle: &Circle);
    fn visit_rectangle(&mut self, rectangle: &Rectangle);
}

pub trait Shape {
    fn accept(&self, visitor: &mut dyn ShapeVisitor);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub radius: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    pub width: f64,
    pub height: f64,
}

impl Default for Circle {
    fn default() -> Self {
        Circle { radius: 5.0 }
    }
}

impl Default for Rectangle {
    fn default() -> Self {
        Rectangle {
            width: 3.0,
            height: 4.0,
        }
    }
}

impl Shape for Circle {
    fn accept(&self, visitor: &mut dyn ShapeVisitor) {
        visitor.visit_circle(self);
    }
}

impl Shape for Rectangle {
    fn accept(&self, visitor: &mut dyn ShapeVisitor) {
        visitor.visit_rectangle(self);
    }
}

/// Prints each area to two decimals and keeps a running total.
pub struct AreaCalculator<'a> {
    out: &'a dyn Console,
    total: f64,
}

impl<'a> AreaCalculator<'a> {
    pub fn new(out: &'a dyn Console) -> Self {
        AreaCalculator { out, total: 0.0 }
    }

    pub fn total(&self) -> f64 {
        self.total
    }
}

impl ShapeVisitor for AreaCalculator<'_> {
    fn visit_circle(&mut self, circle: &Circle) {
        let area = PI * circle.radius * circle.radius;
        self.total += area;
        self.out.line(&format!("Circle area: {area:.2}"));
    }

    fn visit_rectangle(&mut self, rectangle: &Rectangle) {
        let area = rectangle.width * rectangle.height;
        self.total += area;
        self.out.line(&format!("Rectangle area: {area:.2}"));
    }
}

/// A second operation over the same shapes; silent, just accumulates.
#[derive(Debug, Default)]
pub struct PerimeterCalculator {
    perimeters: Vec<f64>,
}

impl PerimeterCalculator {
    pub fn perimeters(&self) -> &[f64] {
        &self.perimeters
    }
}

impl ShapeVisitor for PerimeterCalculator {
    fn visit_circle(&mut self, circle: &Circle) {
        self.perimeters.push(2.0 * PI * circle.radius);
    }

    fn visit_rectangle(&mut self, rectangle: &Rectangle) {
        self.perimeters.push(2.0 * (rectangle.width + rectangle.height));
    }
}

pub fn demo(out: &dyn Console) {
    let shapes: Vec<Box<dyn Shape>> = vec![Box::new(Circle::default()), Box::new(Rectangle::default())];

    let mut areas = AreaCalculator::new(out);
    for shape in &shapes {
        shape.accept(&mut areas);
    }
    let total = areas.total();
    out.line(&format!("Total area: {total:.2}"));

    let mut perimeters = PerimeterCalculator::default();
    for shape in &shapes {
        shape.accept(&mut perimeters);
    }
    let formatted: Vec<String> = perimeters.perimeters().iter().map(|p| format!("{p:.2}")).collect();
    out.line(&format!("Perimeters: {}", formatted.join(", ")));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::MemoryConsole;

    #[test]
    fn test_area_visitor_dispatches_per_shape() {
        let out = MemoryConsole::new();
        let mut areas = AreaCalculator::new(&out);
        Circle::default().accept(&mut areas);
        Rectangle::default().accept(&mut areas);

        assert_eq!(out.lines(), vec!["Circle area: 78.54", "Rectangle area: 12.00"]);
        assert!((areas.total() - (25.0 * PI + 12.0)).abs() < 1e-9);
    }

    #[test]
    fn test_perimeter_visitor() {
        let mut perimeters = PerimeterCalculator::default();
        Rectangle { width: 2.0, height: 5.0 }.accept(&mut perimeters);
        Circle { radius: 1.0 }.accept(&mut perimeters);

        assert_eq!(perimeters.perimeters()[0], 14.0);
        assert!((perimeters.perimeters()[1] - 2.0 * PI).abs() < 1e-12);
    }

    #[test]
    fn test_demo_output() {
        let out = MemoryConsole::new();
        demo(&out);
        assert_eq!(
            out.lines(),
            vec![
                "Circle area: 78.54",
                "Rectangle area: 12.00",
                "Total area: 90.54",
                "Perimeters: 31.42, 14.00",
            ]
        );
    }
}
