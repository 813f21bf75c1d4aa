//! Memento: the originator snapshots its state into opaque mementos that a
//! caretaker stores. Any snapshot can be restored later.

use std::rc::Rc;

use crate::console::Console;

/// Opaque snapshot: only the originator can read it back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Memento {
    state: i32,
}

#[derive(Debug, Default)]
pub struct Originator {
    state: i32,
}

impl Originator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> i32 {
        self.state
    }

    pub fn set_state(&mut self, state: i32, out: &dyn Console) {
        self.state = state;
        out.line(&format!("State set to {state}"));
    }

    pub fn save(&self) -> Rc<Memento> {
        Rc::new(Memento { state: self.state })
    }

    pub fn restore(&mut self, memento: &Memento, out: &dyn Console) {
        self.state = memento.state;
        out.line(&format!("State restored to {}", self.state));
    }
}

/// Keeps snapshots without ever looking inside them.
#[derive(Debug, Default)]
pub struct Caretaker {
    history: Vec<Rc<Memento>>,
}

impl Caretaker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, memento: Rc<Memento>) {
        self.history.push(memento);
    }

    pub fn get(&self, index: usize) -> Option<Rc<Memento>> {
        self.history.get(index).cloned()
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}

pub fn demo(out: &dyn Console) {
    let mut originator = Originator::new();
    let mut caretaker = Caretaker::new();

    originator.set_state(1, out);
    caretaker.add(originator.save());
    originator.set_state(2, out);
    caretaker.add(originator.save());
    originator.set_state(3, out);

    for index in [0, 1, 5] {
        match caretaker.get(index) {
            Some(memento) => originator.restore(&memento, out),
            None => tracing::debug!(index, "no snapshot at index"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::MemoryConsole;

    #[test]
    fn test_restore_any_snapshot() {
        let out = MemoryConsole::new();
        let mut originator = Originator::new();
        let mut caretaker = Caretaker::new();

        for state in [10, 20, 30] {
            originator.set_state(state, &out);
            caretaker.add(originator.save());
        }
        originator.set_state(99, &out);

        originator.restore(&caretaker.get(1).unwrap(), &out);
        assert_eq!(originator.state(), 20);
        originator.restore(&caretaker.get(0).unwrap(), &out);
        assert_eq!(originator.state(), 10);
        assert_eq!(caretaker.len(), 3);
    }

    #[test]
    fn test_snapshot_unaffected_by_later_changes() {
        let out = MemoryConsole::new();
        let mut originator = Originator::new();
        originator.set_state(5, &out);
        let snapshot = originator.save();
        originator.set_state(6, &out);

        originator.restore(&snapshot, &out);
        assert_eq!(originator.state(), 5);
    }

    #[test]
    fn test_out_of_range_index_returns_none() {
        let caretaker = Caretaker::new();
        assert!(caretaker.is_empty());
        assert!(caretaker.get(0).is_none());
    }

    #[test]
    fn test_demo_output() {
        let out = MemoryConsole::new();
        demo(&out);
        assert_eq!(
            out.lines(),
            vec![
                "State set to 1",
                "State set to 2",
                "State set to 3",
                "State restored to 1",
                "State restored to 2",
            ]
        );
    }
}
