//! Observer: a subject pushes every state change to the observers attached
//! to it, in attachment order.
//!
//! The subject does not own its observers. It keeps `Weak` handles, so an
//! observer that has been dropped just stops receiving updates.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::console::Console;

pub trait Observer {
    fn update(&self, value: i32, out: &dyn Console);
}

#[derive(Default)]
pub struct Subject {
    observers: Vec<Weak<dyn Observer>>,
    state: i32,
}

impl Subject {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&mut self, observer: &Rc<dyn Observer>) {
        self.observers.push(Rc::downgrade(observer));
    }

    /// Remove by identity. Returns `false` if the observer was not attached.
    pub fn detach(&mut self, observer: &Rc<dyn Observer>) -> bool {
        let target = Rc::downgrade(observer);
        match self.observers.iter().position(|o| o.ptr_eq(&target)) {
            Some(index) => {
                self.observers.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn state(&self) -> i32 {
        self.state
    }

    pub fn set_state(&mut self, value: i32, out: &dyn Console) {
        self.state = value;
        self.notify(out);
    }

    /// Observers still alive, in attachment order.
    pub fn observer_count(&self) -> usize {
        self.observers.iter().filter(|o| o.strong_count() > 0).count()
    }

    fn notify(&self, out: &dyn Console) {
        for observer in self.observers.iter().filter_map(Weak::upgrade) {
            observer.update(self.state, out);
        }
    }
}

/// Prints each update and remembers the values it has seen.
#[derive(Debug)]
pub struct ConcreteObserver {
    name: String,
    received: RefCell<Vec<i32>>,
}

impl ConcreteObserver {
    pub fn new(name: impl Into<String>) -> Self {
        ConcreteObserver {
            name: name.into(),
            received: RefCell::new(Vec::new()),
        }
    }

    pub fn received(&self) -> Vec<i32> {
        self.received.borrow().clone()
    }
}

impl Observer for ConcreteObserver {
    fn update(&self, value: i32, out: &dyn Console) {
        self.received.borrow_mut().push(value);
        out.line(&format!("{} received update: {}", self.name, value));
    }
}

pub fn demo(out: &dyn Console) {
    let first: Rc<dyn Observer> = Rc::new(ConcreteObserver::new("Observer1"));
    let second: Rc<dyn Observer> = Rc::new(ConcreteObserver::new("Observer2"));

    let mut subject = Subject::new();
    subject.attach(&first);
    subject.attach(&second);

    subject.set_state(10, out);
    subject.set_state(20, out);

    subject.detach(&first);
    subject.set_state(30, out);
}
