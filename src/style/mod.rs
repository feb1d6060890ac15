//! Resolved value types and the per-element style model.

pub mod color;
pub mod direction;
pub mod graphic;
pub mod node;
mod palette;
pub mod time;
