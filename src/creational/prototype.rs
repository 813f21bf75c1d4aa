//! Prototype: copy objects through a trait object without knowing their
//! concrete type. `GameCharacter` owns a heap buffer, and every clone gets
//! its own copy of it.

use crate::console::Console;

pub trait Prototype {
    /// Polymorphic deep copy.
    fn clone_box(&self) -> Box<dyn Prototype>;

    fn describe(&self, out: &dyn Console);
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameCharacter {
    name: String,
    buffer: Box<[u8]>,
}

impl GameCharacter {
    /// The buffer starts out as `0, 1, .., size - 1`.
    pub fn new(name: impl Into<String>, size: u8) -> Self {
        GameCharacter {
            name: name.into(),
            buffer: (0..size).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn values(&self) -> &[u8] {
        &self.buffer
    }

    pub fn value_at(&self, index: usize) -> Option<u8> {
        self.buffer.get(index).copied()
    }

    /// Out-of-range indices are ignored.
    pub fn update_array(&mut self, index: usize, value: u8) {
        if let Some(slot) = self.buffer.get_mut(index) {
            *slot = value;
        }
    }

    pub fn fill_array(&mut self, value: u8) {
        self.buffer.fill(value);
    }
}

impl Prototype for GameCharacter {
    fn clone_box(&self) -> Box<dyn Prototype> {
        Box::new(self.clone())
    }

    fn describe(&self, out: &dyn Console) {
        out.line(&format!("GameCharacter name = {} allocated elements:", self.name));
        for (i, value) in self.buffer.iter().enumerate() {
            out.line(&format!("Value {i}: {value}"));
        }
    }
}

pub fn demo(out: &dyn Console) {
    let mut character = GameCharacter::new("Jamie", 5);
    character.describe(out);
    character.fill_array(7);
    character.describe(out);

    let clone1 = character.clone_box();
    clone1.describe(out);

    character.set_name("Jack");
    for (index, value) in (99..=102).enumerate() {
        character.update_array(index, value);
    }
    character.describe(out);
    // Unchanged: the clone owns its own buffer.
    clone1.describe(out);

    let clone2 = character.clone_box();
    clone2.describe(out);
}
