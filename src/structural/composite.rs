//! Composite: leaves and containers share one `Serializable` interface, so a
//! whole tree serializes with a single call on its root.
//!
//! A container exclusively owns its children; dropping it drops the subtree.
//! Serializing any tree yields the pre-order concatenation of its leaves'
//! bytes.

use crate::console::Console;

pub type ByteArray = Vec<u8>;

pub trait Serializable {
    fn serialize(&self, out: &dyn Console) -> ByteArray;

    fn name(&self) -> String;
}

/// Leaf: a single `i32`, written as 4 little-endian bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimpleData {
    value: i32,
}

impl SimpleData {
    pub fn new(value: i32) -> Self {
        SimpleData { value }
    }

    pub fn value(&self) -> i32 {
        self.value
    }
}

impl Serializable for SimpleData {
    fn serialize(&self, out: &dyn Console) -> ByteArray {
        let bytes = self.value.to_le_bytes().to_vec();
        out.line(&format!(
            "[Serializing {} with value {} - Bytes: {}]",
            self.name(),
            self.value,
            bytes.len()
        ));
        bytes
    }

    fn name(&self) -> String {
        "Leaf (SimpleData)".to_string()
    }
}

/// Container node. Children serialize in insertion order.
pub struct ComplexObject {
    object_name: String,
    children: Vec<Box<dyn Serializable>>,
}

impl ComplexObject {
    pub fn new(name: impl Into<String>) -> Self {
        ComplexObject {
            object_name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn add(&mut self, component: Box<dyn Serializable>) -> &mut Self {
        self.children.push(component);
        self
    }

    /// Consuming variant of [`ComplexObject::add`] for building trees inline.
    pub fn with(mut self, component: impl Serializable + 'static) -> Self {
        self.children.push(Box::new(component));
        self
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Serializable for ComplexObject {
    fn serialize(&self, out: &dyn Console) -> ByteArray {
        out.line(&format!("--- Starting serialization of {} ---", self.name()));

        let mut bytes = ByteArray::new();
        for child in &self.children {
            bytes.extend(child.serialize(out));
        }

        out.line(&format!(
            "--- Finished serialization of {} - Total Bytes: {} ---",
            self.name(),
            bytes.len()
        ));
        bytes
    }

    fn name(&self) -> String {
        format!("Composite ({})", self.object_name)
    }
}

pub fn demo(out: &dyn Console) {
    out.line("Starting Composite Serialization Demonstration...");

    let mut header = ComplexObject::new("HeaderSection");
    header.add(Box::new(SimpleData::new(42)));
    header.add(Box::new(SimpleData::new(99)));

    let mut root = ComplexObject::new("RootDocument");
    root.add(Box::new(SimpleData::new(1001)))
        .add(Box::new(header))
        .add(Box::new(SimpleData::new(2025)));

    let total = root.serialize(out);
    out.line(&format!(
        "Total size of the entire serialized object graph: {} bytes.",
        total.len()
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::MemoryConsole;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Leaf that counts its own drops.
    struct TrackedLeaf {
        drops: Rc<Cell<usize>>,
    }

    impl Drop for TrackedLeaf {
        fn drop(&mut self) {
            self.drops.set(self.drops.get() + 1);
        }
    }

    impl Serializable for TrackedLeaf {
        fn serialize(&self, _out: &dyn Console) -> ByteArray {
            ByteArray::new()
        }

        fn name(&self) -> String {
            "TrackedLeaf".to_string()
        }
    }

    fn leaf_bytes(values: &[i32]) -> ByteArray {
        values.iter().flat_map(|v| v.to_le_bytes()).collect()
    }

    #[test]
    fn test_leaf_is_four_little_endian_bytes() {
        let out = MemoryConsole::new();
        assert_eq!(SimpleData::new(1001).serialize(&out), vec![0xE9, 0x03, 0x00, 0x00]);
        assert_eq!(SimpleData::new(-1).serialize(&out), vec![0xFF; 4]);
        assert!(out.contains("[Serializing Leaf (SimpleData) with value 1001 - Bytes: 4]"));
    }

    #[test]
    fn test_nesting_does_not_change_bytes() {
        let out = MemoryConsole::new();
        let nested = ComplexObject::new("Root")
            .with(SimpleData::new(1001))
            .with(
                ComplexObject::new("Header")
                    .with(SimpleData::new(42))
                    .with(SimpleData::new(99)),
            )
            .with(SimpleData::new(2025));

        let flat = ComplexObject::new("Flat")
            .with(SimpleData::new(1001))
            .with(SimpleData::new(42))
            .with(SimpleData::new(99))
            .with(SimpleData::new(2025));

        let expected = leaf_bytes(&[1001, 42, 99, 2025]);
        assert_eq!(nested.serialize(&out), expected);
        assert_eq!(flat.serialize(&out), expected);
    }

    #[test]
    fn test_empty_composite_serializes_to_nothing() {
        let out = MemoryConsole::new();
        let empty = ComplexObject::new("Empty");
        assert!(empty.is_empty());
        assert!(empty.serialize(&out).is_empty());
        assert!(out.contains("--- Finished serialization of Composite (Empty) - Total Bytes: 0 ---"));
    }

    #[test]
    fn test_dropping_root_drops_whole_subtree() {
        let drops = Rc::new(Cell::new(0));
        let leaf = || TrackedLeaf { drops: Rc::clone(&drops) };

        let root = ComplexObject::new("Root")
            .with(leaf())
            .with(
                ComplexObject::new("Middle")
                    .with(leaf())
                    .with(ComplexObject::new("Inner").with(leaf()).with(leaf())),
            );
        assert_eq!(drops.get(), 0);

        drop(root);
        assert_eq!(drops.get(), 4);
    }

    #[test]
    fn test_demo_reports_total() {
        let out = MemoryConsole::new();
        demo(&out);
        assert_eq!(out.lines()[0], "Starting Composite Serialization Demonstration...");
        assert!(out.contains("--- Starting serialization of Composite (RootDocument) ---"));
        assert!(out.contains("--- Finished serialization of Composite (HeaderSection) - Total Bytes: 8 ---"));
        assert!(out.contains("Total size of the entire serialized object graph: 16 bytes."));
    }
}
