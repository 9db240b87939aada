//! Move simulation with history.
//!
//! A `Simulator` owns one cube and the move alphabet of the profile it was
//! built from. It parses move strings, performs them, records them for
//! undo, and scrambles from a seeded RNG.

mod engine;
mod scramble;

pub use engine::Simulator;
pub use scramble::ScrambleRng;
