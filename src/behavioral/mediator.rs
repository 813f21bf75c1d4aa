//! Mediator: widgets never talk to each other directly. A button reports its
//! click to the dialog, and the dialog decides that the text box should change.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::console::Console;

/// Identifies which colleague raised an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    Button,
    TextBox,
}

pub trait Mediator {
    fn notify(&self, sender: Sender, event: &str, out: &dyn Console);
}

/// Holds a non-owning handle back to its mediator.
pub struct Button {
    mediator: Weak<dyn Mediator>,
}

impl Button {
    pub fn new(mediator: Weak<dyn Mediator>) -> Self {
        Button { mediator }
    }

    pub fn click(&self, out: &dyn Console) {
        match self.mediator.upgrade() {
            Some(mediator) => mediator.notify(Sender::Button, "click", out),
            None => tracing::warn!("button clicked after its dialog was dropped"),
        }
    }
}

#[derive(Debug, Default)]
pub struct TextBox {
    text: RefCell<String>,
}

impl TextBox {
    pub fn text(&self) -> String {
        self.text.borrow().clone()
    }

    pub fn set_text(&self, text: &str, out: &dyn Console) {
        *self.text.borrow_mut() = text.to_string();
        out.line(&format!("TextBox: {text}"));
    }
}

/// Concrete mediator; owns the colleagues it coordinates.
pub struct Dialog {
    button: Button,
    text_box: TextBox,
}

impl Dialog {
    pub fn new() -> Rc<Dialog> {
        Rc::new_cyclic(|me: &Weak<Dialog>| {
            let mediator: Weak<dyn Mediator> = me.clone();
            Dialog {
                button: Button::new(mediator),
                text_box: TextBox::default(),
            }
        })
    }

    pub fn button(&self) -> &Button {
        &self.button
    }

    pub fn text_box(&self) -> &TextBox {
        &self.text_box
    }
}

impl Mediator for Dialog {
    fn notify(&self, sender: Sender, event: &str, out: &dyn Console) {
        match (sender, event) {
            (Sender::Button, "click") => self.text_box.set_text("Button was clicked!", out),
            _ => tracing::debug!(?sender, event, "dialog ignored event"),
        }
    }
}

pub fn demo(out: &dyn Console) {
    let dialog = Dialog::new();
    dialog.button().click(out);
}
