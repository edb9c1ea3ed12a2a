//! Platform abstraction layer
//!
//! Turns host input events into `TickInput`. Drawing and timing stay with the
//! host; see `Session` for the per-frame callback.

pub mod input;

pub use input::{KeyState, TouchButton};
