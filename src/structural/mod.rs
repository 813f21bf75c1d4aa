//! Structural patterns: composing and wrapping objects to change their
//! interface, share state or control access.

pub mod adapter;
pub mod bridge;
pub mod composite;
pub mod decorator;
pub mod facade;
pub mod flyweight;
pub mod proxy;
