//! Core cube types: colours, faces, the cube state and its rotations,
//! errors and configuration.
//!
//! Nothing in here knows about move notation; that lives in `notation`.

pub mod colour;
pub mod face;
pub mod error;
pub mod cube;
pub mod rotation;
pub mod config;

pub use colour::Colour;
pub use face::{ColumnMove, Face, RowMove, Spin, FACE_COUNT};
pub use error::{Axis, CubeError, IndexKind};
pub use cube::Cube;
pub use config::SimulatorConfig;
