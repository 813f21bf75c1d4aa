//! Command: requests are wrapped as objects, so a remote control can store
//! and fire them without knowing what they do.

use std::cell::Cell;
use std::rc::Rc;

use crate::console::Console;

pub trait Command {
    fn execute(&self, out: &dyn Console);
}

/// The receiver.
#[derive(Debug, Default)]
pub struct Light {
    on: Cell<bool>,
}

impl Light {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_on(&self) -> bool {
        self.on.get()
    }

    pub fn turn_on(&self, out: &dyn Console) {
        self.on.set(true);
        out.line("Light is ON");
    }

    pub fn turn_off(&self, out: &dyn Console) {
        self.on.set(false);
        out.line("Light is OFF");
    }
}

pub struct TurnOnCommand {
    light: Rc<Light>,
}

impl TurnOnCommand {
    pub fn new(light: Rc<Light>) -> Self {
        TurnOnCommand { light }
    }
}

impl Command for TurnOnCommand {
    fn execute(&self, out: &dyn Console) {
        self.light.turn_on(out);
    }
}

pub struct TurnOffCommand {
    light: Rc<Light>,
}

impl TurnOffCommand {
    pub fn new(light: Rc<Light>) -> Self {
        TurnOffCommand { light }
    }
}

impl Command for TurnOffCommand {
    fn execute(&self, out: &dyn Console) {
        self.light.turn_off(out);
    }
}

/// The invoker. Buttons are numbered in the order commands were added.
#[derive(Default)]
pub struct RemoteControl {
    commands: Vec<Box<dyn Command>>,
}

impl RemoteControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_command(&mut self, command: Box<dyn Command>) {
        self.commands.push(command);
    }

    pub fn button_count(&self) -> usize {
        self.commands.len()
    }

    /// Pressing a button that does not exist does nothing and returns `false`.
    pub fn press_button(&self, index: usize, out: &dyn Console) -> bool {
        match self.commands.get(index) {
            Some(command) => {
                command.execute(out);
                true
            }
            None => {
                tracing::debug!(index, buttons = self.commands.len(), "no command on button");
                false
            }
        }
    }
}

pub fn demo(out: &dyn Console) {
    let light = Rc::new(Light::new());

    let mut remote = RemoteControl::new();
    remote.add_command(Box::new(TurnOnCommand::new(Rc::clone(&light))));
    remote.add_command(Box::new(TurnOffCommand::new(Rc::clone(&light))));

    remote.press_button(0, out);
    remote.press_button(1, out);
    remote.press_button(7, out);
}
