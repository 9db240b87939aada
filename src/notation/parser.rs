//! Move-string parsing.
//!
//! Reads left to right, skipping whitespace. A move letter becomes the
//! pending move; a following `'` or `2` closes it with that modifier. A new
//! letter while one is pending closes the old one as a plain turn, as does
//! the end of the input.
//!
//! ```
//! use cube_sim::notation::parse_moves;
//! use cube_sim::profiles::{Cube3x3, Profile};
//!
//! let alphabet = Cube3x3.alphabet();
//! let sequence = parse_moves(&alphabet, "RUR'U'").unwrap();
//! assert_eq!(sequence.to_string(), "R U R' U'");
//! ```

use super::alphabet::MoveAlphabet;
use super::sequence::{Modifier, MoveSequence, MoveToken};
use crate::core::CubeError;

/// Parse a move string against an alphabet.
///
/// Nothing is performed here; the simulator executes the returned sequence
/// only once the whole string has parsed.
pub fn parse_moves(alphabet: &MoveAlphabet, input: &str) -> Result<MoveSequence, CubeError> {
    let mut sequence = MoveSequence::new();
    let mut pending: Option<char> = None;

    for symbol in input.chars().filter(|c| !c.is_whitespace()) {
        if let Some(modifier) = Modifier::from_symbol(symbol) {
            let base = pending.take().ok_or(CubeError::DanglingModifier(symbol))?;
            sequence.push(MoveToken::new(base, modifier));
            continue;
        }

        if !alphabet.contains(symbol) {
            return Err(CubeError::UnknownMoveSymbol(symbol));
        }
        if let Some(previous) = pending.replace(symbol) {
            sequence.push(MoveToken::plain(previous));
        }
    }

    if let Some(last) = pending {
        sequence.push(MoveToken::plain(last));
    }
    Ok(sequence)
}
