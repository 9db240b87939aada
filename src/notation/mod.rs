//! Move notation: primitive turns, named-move alphabets, tokens, sequences
//! and the move-string parser.

pub mod turn;
pub mod sequence;
pub mod alphabet;
pub mod parser;

pub use turn::Turn;
pub use sequence::{Modifier, MoveSequence, MoveToken};
pub use alphabet::{MoveAlphabet, MoveDefinition};
pub use parser::parse_moves;
