//! Platform abstraction layer
//!
//! Physical devices stay outside the crate; the simulation only sees
//! abstract input events.

pub mod input;

pub use input::{InputEvent, InputGate};
