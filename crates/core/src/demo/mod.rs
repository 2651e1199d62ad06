//! Example programs exercising the binding.
//!
//! - [`grid`] -- an indexed grid mesh of two-triangle quads.
//! - [`offset`] -- a triangle moved around by keyboard input through a uniform.

pub mod grid;
pub mod offset;

pub use grid::{grid, grid_shaders, GridVertex};
pub use offset::{Direction, Message, OffsetDemo};
