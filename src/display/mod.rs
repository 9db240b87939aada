//! Text rendering of cube state.
//!
//! Renderers only read the cube; the core never depends on this module.
//!
//! - `NetRenderer`: the unfolded 2D net, one code letter per square
//! - `FaceListRenderer`: each face as rows of colour names

mod net;

pub use net::{FaceListRenderer, NetRenderer};

use crate::core::Cube;

/// A presentation mode for a cube.
pub trait Renderable {
    /// Render the cube as text.
    fn display(&self, cube: &Cube) -> String;
}
