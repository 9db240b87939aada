//! # cube-sim
//!
//! An NxN Rubik's Cube simulator.
//!
//! ## Design Principles
//!
//! 1. **Size-Agnostic Core**: The cube state and its rotations work for any
//!    size ≥ 1. Nothing below `profiles` knows about 3x3 notation.
//!
//! 2. **Configuration Over Convention**: Move letters are not hardcoded.
//!    Profiles supply an alphabet mapping symbols to primitive turns.
//!
//! 3. **All or Nothing**: A failed call leaves the cube and history exactly
//!    as they were.
//!
//! ## Architecture
//!
//! - **Flat State**: Six faces in one `Vec<Colour>`, face-major. The same
//!   order is used for iteration and the string form.
//!
//! - **Deterministic Scrambles**: Scrambles draw from a seeded ChaCha8 RNG.
//!
//! - **Persistent History**: History is an `im` vector, so cloning a
//!   simulator is cheap.
//!
//! ## Modules
//!
//! - `core`: Colours, faces, cube state, rotations, errors, configuration
//! - `notation`: Turns, move alphabets, tokens, sequences, parsing
//! - `profiles`: Size plus alphabet (3x3 notation, outer faces for any size)
//! - `simulator`: Performing, undoing and scrambling moves; the scramble RNG
//! - `display`: Text renderers
//!
//! ## Example
//!
//! ```
//! use cube_sim::{Cube3x3, Simulator};
//!
//! let mut sim = Simulator::with_profile(&Cube3x3).unwrap();
//! sim.perform_moves("M2 E2 S2").unwrap();
//! assert_eq!(
//!     sim.cube().to_code_string(),
//!     "GBGBGBGBGRORORORORBGBGBGBGBOROROROROWYWYWYWYWYWYWYWYWY"
//! );
//! ```

pub mod core;
pub mod notation;
pub mod profiles;
pub mod simulator;
pub mod display;

// Re-export commonly used types
pub use crate::core::{
    Axis, Colour, ColumnMove, Cube, CubeError, Face, IndexKind, RowMove,
    SimulatorConfig, Spin,
};

pub use crate::notation::{
    parse_moves, Modifier, MoveAlphabet, MoveDefinition, MoveSequence, MoveToken, Turn,
};

pub use crate::profiles::{Cube3x3, OuterFaces, Profile};

pub use crate::simulator::{ScrambleRng, Simulator};

pub use crate::display::{FaceListRenderer, NetRenderer, Renderable};
