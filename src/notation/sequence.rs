//! Move tokens and sequences.
//!
//! A token is a move symbol plus a modifier. A sequence is what one call to
//! `perform_moves` produced, and is the unit the history stores and undoes.

use serde::{Deserialize, Serialize};

/// How many times, and which way, to perform a named move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Modifier {
    /// One quarter turn in the move's own direction.
    Plain,
    /// One quarter turn the other way (`'`).
    Prime,
    /// Two quarter turns in the move's own direction (`2`).
    Double,
}

impl Modifier {
    pub const ALL: [Modifier; 3] = [Modifier::Plain, Modifier::Prime, Modifier::Double];

    /// Notation suffix, if any.
    #[must_use]
    pub const fn symbol(self) -> Option<char> {
        match self {
            Modifier::Plain => None,
            Modifier::Prime => Some('\''),
            Modifier::Double => Some('2'),
        }
    }

    /// Parse a suffix character.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '\'' => Some(Modifier::Prime),
            '2' => Some(Modifier::Double),
            _ => None,
        }
    }

    /// The modifier that undoes this one. A double turn is its own inverse.
    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            Modifier::Plain => Modifier::Prime,
            Modifier::Prime => Modifier::Plain,
            Modifier::Double => Modifier::Double,
        }
    }
}

/// One named move with its modifier, e.g. `R'`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveToken {
    pub symbol: char,
    pub modifier: Modifier,
}

impl MoveToken {
    #[must_use]
    pub const fn new(symbol: char, modifier: Modifier) -> Self {
        Self { symbol, modifier }
    }

    #[must_use]
    pub const fn plain(symbol: char) -> Self {
        Self::new(symbol, Modifier::Plain)
    }

    /// The token that undoes this one.
    #[must_use]
    pub const fn inverse(self) -> Self {
        Self::new(self.symbol, self.modifier.inverse())
    }
}

impl std::fmt::Display for MoveToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol)?;
        if let Some(suffix) = self.modifier.symbol() {
            write!(f, "{}", suffix)?;
        }
        Ok(())
    }
}

/// An ordered list of move tokens.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveSequence {
    tokens: Vec<MoveToken>,
}

impl MoveSequence {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, token: MoveToken) {
        self.tokens.push(token);
    }

    #[must_use]
    pub fn tokens(&self) -> &[MoveToken] {
        &self.tokens
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MoveToken> {
        self.tokens.iter()
    }

    /// The sequence that undoes this one: tokens in reverse order, each
    /// inverted.
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self {
            tokens: self.tokens.iter().rev().map(|token| token.inverse()).collect(),
        }
    }
}

impl FromIterator<MoveToken> for MoveSequence {
    fn from_iter<I: IntoIterator<Item = MoveToken>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a MoveSequence {
    type Item = &'a MoveToken;
    type IntoIter = std::slice::Iter<'a, MoveToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::fmt::Display for MoveSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", token)?;
        }
        Ok(())
    }
}
