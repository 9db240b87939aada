//! Cube profiles: a size plus the move alphabet that goes with it.
//!
//! Profiles configure the simulator at startup, the same way a game
//! configures an engine. The simulator never hardcodes move letters.
//!
//! - `Cube3x3`: standard 3x3 notation, including slice and wide moves
//! - `OuterFaces`: any size, outer-face turns and whole-cube rotations

mod three;
mod outer;

pub use three::Cube3x3;
pub use outer::OuterFaces;

use crate::notation::MoveAlphabet;

/// A cube size and its named moves.
pub trait Profile {
    /// Face width of the cube this profile drives.
    fn size(&self) -> usize;

    /// The named moves this profile understands.
    fn alphabet(&self) -> MoveAlphabet;

    /// Default number of random moves in a scramble.
    fn scramble_move_count(&self) -> usize;
}
