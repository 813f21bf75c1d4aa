//! Singleton: one lazily-built, process-wide instance.
//!
//! `lazy_static` gives the initialise-once guard: however many threads race
//! on the first call to [`Singleton::instance`], the constructor runs exactly
//! once. The instance holds no mutable state, so tests sharing the process
//! never need to reset it.

use std::sync::atomic::{AtomicUsize, Ordering};

use lazy_static::lazy_static;

use crate::console::Console;

static CONSTRUCTIONS: AtomicUsize = AtomicUsize::new(0);

lazy_static! {
    static ref INSTANCE: Singleton = Singleton::new();
}

#[derive(Debug)]
pub struct Singleton {
    // Private field: the only way to get a `Singleton` is `instance()`.
    _private: (),
}

impl Singleton {
    fn new() -> Self {
        CONSTRUCTIONS.fetch_add(1, Ordering::SeqCst);
        tracing::debug!("constructing singleton instance");
        Singleton { _private: () }
    }

    pub fn instance() -> &'static Singleton {
        &INSTANCE
    }

    /// How many times the constructor has run in this process (0 or 1).
    pub fn construction_count() -> usize {
        CONSTRUCTIONS.load(Ordering::SeqCst)
    }

    pub fn do_something(&self, out: &dyn Console) {
        out.line("Singleton: doing something");
    }
}

pub fn demo(out: &dyn Console) {
    let singleton = Singleton::instance();
    singleton.do_something(out);
}
