//! State: a traffic light delegates `request` to its current state, and each
//! state installs its successor (Red -> Green -> Yellow -> Red).

use std::rc::Rc;

use crate::console::Console;

pub trait State {
    fn name(&self) -> &'static str;

    /// Act, then (optionally) move the context to another state.
    fn handle(&self, context: &mut TrafficLight, out: &dyn Console);
}

#[derive(Debug, Default)]
pub struct Red;

#[derive(Debug, Default)]
pub struct Green;

#[derive(Debug, Default)]
pub struct Yellow;

impl State for Red {
    fn name(&self) -> &'static str {
        "Red"
    }

    fn handle(&self, context: &mut TrafficLight, out: &dyn Console) {
        out.line("Red Light");
        context.set_state(Rc::new(Green));
    }
}

impl State for Green {
    fn name(&self) -> &'static str {
        "Green"
    }

    fn handle(&self, context: &mut TrafficLight, out: &dyn Console) {
        out.line("Green Light");
        context.set_state(Rc::new(Yellow));
    }
}

impl State for Yellow {
    fn name(&self) -> &'static str {
        "Yellow"
    }

    fn handle(&self, context: &mut TrafficLight, out: &dyn Console) {
        out.line("Yellow Light");
        context.set_state(Rc::new(Red));
    }
}

/// The context. Without a state, `request` does nothing.
#[derive(Default)]
pub struct TrafficLight {
    state: Option<Rc<dyn State>>,
}

impl TrafficLight {
    pub fn new(initial: Rc<dyn State>) -> Self {
        TrafficLight {
            state: Some(initial),
        }
    }

    pub fn set_state(&mut self, state: Rc<dyn State>) {
        if let Some(current) = &self.state {
            tracing::debug!(from = current.name(), to = state.name(), "state transition");
        }
        self.state = Some(state);
    }

    pub fn current(&self) -> Option<&'static str> {
        self.state.as_ref().map(|s| s.name())
    }

    pub fn request(&mut self, out: &dyn Console) {
        // Hold our own handle: the state may replace itself while running.
        if let Some(state) = self.state.clone() {
            state.handle(self, out);
        }
    }
}

pub fn demo(out: &dyn Console) {
    let mut light = TrafficLight::new(Rc::new(Red));
    for _ in 0..4 {
        light.request(out);
    }
}
