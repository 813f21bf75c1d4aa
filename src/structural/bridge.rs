//! Bridge: shapes are decoupled from two independent implementation axes,
//! colour and border style. Any shape combines with any colour and border.

use crate::console::Console;

// ============================================================================
// Implementor hierarchies
// ============================================================================

pub trait ColorImplementor {
    fn apply_color(&self) -> String;
}

pub trait BorderImplementor {
    fn apply_border(&self) -> String;
}

#[derive(Debug, Default)]
pub struct RedColor;

#[derive(Debug, Default)]
pub struct BlueColor;

impl ColorImplementor for RedColor {
    fn apply_color(&self) -> String {
        "applied Red".to_string()
    }
}

impl ColorImplementor for BlueColor {
    fn apply_color(&self) -> String {
        "applied Blue".to_string()
    }
}

#[derive(Debug, Default)]
pub struct SolidBorder;

#[derive(Debug, Default)]
pub struct DashedBorder;

impl BorderImplementor for SolidBorder {
    fn apply_border(&self) -> String {
        "with Solid Border".to_string()
    }
}

impl BorderImplementor for DashedBorder {
    fn apply_border(&self) -> String {
        "with Dashed Border".to_string()
    }
}

// ============================================================================
// Abstraction
// ============================================================================

/// The bridge itself: owned handles to both implementors.
pub struct Implementors {
    color: Box<dyn ColorImplementor>,
    border: Box<dyn BorderImplementor>,
}

impl Implementors {
    pub fn new(color: Box<dyn ColorImplementor>, border: Box<dyn BorderImplementor>) -> Self {
        Implementors { color, border }
    }
}

pub trait Shape {
    fn name(&self) -> &'static str;
    fn implementors(&self) -> &Implementors;

    fn render(&self) -> String {
        let imp = self.implementors();
        format!(
            "Drawing {}, {}, {}",
            self.name(),
            imp.color.apply_color(),
            imp.border.apply_border()
        )
    }

    fn draw(&self, out: &dyn Console) {
        out.line(&self.render());
    }
}

macro_rules! refined_shape {
    ($($shape:ident),+ $(,)?) => {
        $(
            pub struct $shape(Implementors);

            impl $shape {
                pub fn new(
                    color: Box<dyn ColorImplementor>,
                    border: Box<dyn BorderImplementor>,
                ) -> Self {
                    $shape(Implementors::new(color, border))
                }
            }

            impl Shape for $shape {
                fn name(&self) -> &'static str {
                    stringify!($shape)
                }

                fn implementors(&self) -> &Implementors {
                    &self.0
                }
            }
        )+
    };
}

refined_shape!(Circle, Square, Triangle);

pub fn demo(out: &dyn Console) {
    let shapes: Vec<Box<dyn Shape>> = vec![
        Box::new(Circle::new(Box::new(RedColor), Box::new(SolidBorder))),
        Box::new(Square::new(Box::new(BlueColor), Box::new(DashedBorder))),
        Box::new(Triangle::new(Box::new(RedColor), Box::new(DashedBorder))),
    ];
    for shape in &shapes {
        shape.draw(out);
    }
}
