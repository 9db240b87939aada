//! Square colours and their one-character codes.

use serde::{Deserialize, Serialize};

use super::error::CubeError;

/// Colour of a single square.
///
/// Declaration order matters: a solved cube gives face `i` the `i`-th colour,
/// so reordering the variants reorders the solved layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Colour {
    Green,
    Red,
    Blue,
    Orange,
    White,
    Yellow,
}

impl Colour {
    /// All colours in declaration (solved face) order.
    pub const ALL: [Colour; 6] = [
        Colour::Green,
        Colour::Red,
        Colour::Blue,
        Colour::Orange,
        Colour::White,
        Colour::Yellow,
    ];

    /// One-character serialization code.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Colour::Green => 'G',
            Colour::Red => 'R',
            Colour::Blue => 'B',
            Colour::Orange => 'O',
            Colour::White => 'W',
            Colour::Yellow => 'Y',
        }
    }

    /// Parse a one-character code.
    pub fn from_code(code: char) -> Result<Self, CubeError> {
        match code {
            'G' => Ok(Colour::Green),
            'R' => Ok(Colour::Red),
            'B' => Ok(Colour::Blue),
            'O' => Ok(Colour::Orange),
            'W' => Ok(Colour::White),
            'Y' => Ok(Colour::Yellow),
            other => Err(CubeError::InvalidColourCode(other)),
        }
    }

    /// Human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Colour::Green => "green",
            Colour::Red => "red",
            Colour::Blue => "blue",
            Colour::Orange => "orange",
            Colour::White => "white",
            Colour::Yellow => "yellow",
        }
    }

    /// Colour of the solved face at the given index.
    #[must_use]
    pub(crate) const fn for_face(face: usize) -> Self {
        Self::ALL[face]
    }
}

impl std::fmt::Display for Colour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for colour in Colour::ALL {
            assert_eq!(Colour::from_code(colour.code()), Ok(colour));
        }
    }

    #[test]
    fn test_codes_are_distinct() {
        let codes: String = Colour::ALL.iter().map(|c| c.code()).collect();
        assert_eq!(codes, "GRBOWY");
    }

    #[test]
    fn test_invalid_code() {
        assert_eq!(Colour::from_code('g'), Err(CubeError::InvalidColourCode('g')));
        assert_eq!(Colour::from_code('X'), Err(CubeError::InvalidColourCode('X')));
    }

    #[test]
    fn test_display_name() {
        assert_eq!(Colour::Orange.to_string(), "orange");
        assert_eq!(Colour::Yellow.name(), "yellow");
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Colour::Blue).unwrap();
        let back: Colour = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Colour::Blue);
    }
}
