//! Creational patterns: different ways of building objects while hiding the
//! concrete types or the construction steps from the caller.

pub mod abstract_factory;
pub mod builder;
pub mod factory_method;
pub mod prototype;
pub mod singleton;
