//! Render primitive emission
//!
//! The core never draws. Each tick it produces a flat list of screen-space
//! primitives that a host (canvas, GPU, terminal) can paint in order.

pub mod frame;
pub mod primitives;

pub use frame::build_frame;
pub use primitives::{Color, DrawPrimitive, Shape, colors};
