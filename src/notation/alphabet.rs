//! Named-move alphabets.
//!
//! An alphabet maps each move symbol to the primitive turns it performs.
//! Profiles build one at startup; the parser and simulator only look
//! symbols up.
//!
//! ```
//! use cube_sim::core::{ColumnMove, RowMove};
//! use cube_sim::notation::{MoveAlphabet, Turn};
//!
//! let alphabet = MoveAlphabet::new()
//!     .define('U', &[Turn::y(1, RowMove::Left)])
//!     .define('R', &[Turn::x(3, ColumnMove::Up)]);
//!
//! assert!(alphabet.contains('U'));
//! assert_eq!(alphabet.symbols().collect::<String>(), "UR");
//! ```

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use super::sequence::{Modifier, MoveToken};
use super::turn::Turn;
use crate::core::{Cube, CubeError};

/// The turns behind one move symbol, in their plain direction.
///
/// A prime move undoes the turns last to first, so definitions may mix
/// axes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveDefinition {
    pub symbol: char,
    /// SmallVec covers face, wide and whole-cube moves on small cubes
    /// without heap allocation.
    pub turns: SmallVec<[Turn; 3]>,
}

impl MoveDefinition {
    /// Perform this move with the given modifier.
    pub fn apply(&self, cube: &mut Cube, modifier: Modifier) -> Result<(), CubeError> {
        match modifier {
            Modifier::Plain => self.apply_turns(cube, false),
            Modifier::Prime => self.apply_turns(cube, true),
            Modifier::Double => {
                self.apply_turns(cube, false)?;
                self.apply_turns(cube, false)
            }
        }
    }

    fn apply_turns(&self, cube: &mut Cube, inverted: bool) -> Result<(), CubeError> {
        if inverted {
            for turn in self.turns.iter().rev() {
                turn.inverse().apply(cube)?;
            }
        } else {
            for turn in &self.turns {
                turn.apply(cube)?;
            }
        }
        Ok(())
    }
}

/// Ordered table of move definitions with O(1) symbol lookup.
#[derive(Clone, Debug, Default)]
pub struct MoveAlphabet {
    definitions: Vec<MoveDefinition>,
    index: FxHashMap<char, usize>,
}

impl MoveAlphabet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the definition of `symbol`.
    ///
    /// `'` and `2` are always read as modifiers, so defining them has no
    /// effect on parsing.
    #[must_use]
    pub fn define(mut self, symbol: char, turns: &[Turn]) -> Self {
        let definition = MoveDefinition {
            symbol,
            turns: SmallVec::from_slice(turns),
        };
        match self.index.get(&symbol) {
            Some(&i) => self.definitions[i] = definition,
            None => {
                self.index.insert(symbol, self.definitions.len());
                self.definitions.push(definition);
            }
        }
        self
    }

    #[must_use]
    pub fn get(&self, symbol: char) -> Option<&MoveDefinition> {
        self.index.get(&symbol).map(|&i| &self.definitions[i])
    }

    #[must_use]
    pub fn contains(&self, symbol: char) -> bool {
        self.index.contains_key(&symbol)
    }

    /// Move symbols in definition order.
    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.definitions.iter().map(|definition| definition.symbol)
    }

    pub fn definitions(&self) -> impl Iterator<Item = &MoveDefinition> {
        self.definitions.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Check every turn fits a cube of `size`.
    pub fn validate(&self, size: usize) -> Result<(), CubeError> {
        for definition in &self.definitions {
            for turn in &definition.turns {
                turn.validate(size)?;
            }
        }
        Ok(())
    }

    /// Perform one token on a cube.
    pub fn apply(&self, cube: &mut Cube, token: MoveToken) -> Result<(), CubeError> {
        let definition = self
            .get(token.symbol)
            .ok_or(CubeError::UnknownMoveSymbol(token.symbol))?;
        definition.apply(cube, token.modifier)
    }
}
