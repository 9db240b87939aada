//! Cube state: six `size`×`size` grids of colours.
//!
//! ## Storage
//!
//! Squares live in a single flat arena indexed
//! `(face * size + row) * size + column`. That is also the serialization
//! and iteration order: face-major, then row-major, then column-minor.
//!
//! ## String form
//!
//! A cube serializes to exactly `6 * size²` colour codes:
//!
//! ```
//! use cube_sim::core::Cube;
//!
//! let cube = Cube::new(2).unwrap();
//! assert_eq!(cube.to_code_string(), "GGGGRRRRBBBBOOOOWWWWYYYY");
//!
//! let parsed: Cube = "GGGGRRRRBBBBOOOOWWWWYYYY".parse().unwrap();
//! assert_eq!(parsed, cube);
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::colour::Colour;
use super::error::{CubeError, IndexKind};
use super::face::FACE_COUNT;

/// An NxN Rubik's Cube.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "CubeRepr", into = "CubeRepr")]
pub struct Cube {
    size: usize,
    squares: Vec<Colour>,
}

impl Cube {
    /// Create a solved cube with `size`×`size` faces.
    pub fn new(size: usize) -> Result<Self, CubeError> {
        Self::square_count(size)?;
        Ok(Self {
            size,
            squares: Self::solved_squares(size),
        })
    }

    /// Build a cube from its colour-code string.
    ///
    /// The layout is not checked for solvability.
    pub fn from_code_string(size: usize, codes: &str) -> Result<Self, CubeError> {
        let expected = Self::square_count(size)?;
        let actual = codes.chars().count();
        if actual != expected {
            return Err(CubeError::InvalidStringLength { expected, actual });
        }
        let squares = codes
            .chars()
            .map(Colour::from_code)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { size, squares })
    }

    /// Build a cube from nested `[face][row][column]` grids.
    ///
    /// There must be exactly six faces, all square and of the same size.
    pub fn from_faces(faces: Vec<Vec<Vec<Colour>>>) -> Result<Self, CubeError> {
        if faces.len() != FACE_COUNT {
            return Err(CubeError::InvalidFaceShape);
        }
        let size = faces[0].len();
        if size == 0 {
            return Err(CubeError::InvalidSize(size));
        }
        let well_formed = faces
            .iter()
            .all(|face| face.len() == size && face.iter().all(|row| row.len() == size));
        if !well_formed {
            return Err(CubeError::InvalidFaceShape);
        }
        let squares = faces.into_iter().flatten().flatten().collect();
        Ok(Self { size, squares })
    }

    /// `6 * size²`, or `InvalidSize` when that is zero or overflows.
    fn square_count(size: usize) -> Result<usize, CubeError> {
        size.checked_mul(size)
            .and_then(|area| area.checked_mul(FACE_COUNT))
            .filter(|&count| count > 0)
            .ok_or(CubeError::InvalidSize(size))
    }

    fn solved_squares(size: usize) -> Vec<Colour> {
        (0..FACE_COUNT)
            .flat_map(|face| std::iter::repeat(Colour::for_face(face)).take(size * size))
            .collect()
    }

    /// Restore the solved layout in place.
    pub fn reset(&mut self) {
        self.squares = Self::solved_squares(self.size);
    }

    /// Face width in squares.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of squares (`6 * size²`).
    #[must_use]
    pub fn len(&self) -> usize {
        self.squares.len()
    }

    /// Always false; a cube has at least six squares.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    /// True if every face is a single colour.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        let area = self.size * self.size;
        self.squares
            .chunks(area)
            .all(|face| face.iter().all(|square| *square == face[0]))
    }

    // === Accessors ===

    /// Colour at `(face, row, column)`, all 0-indexed.
    pub fn square(&self, face: usize, row: usize, column: usize) -> Result<Colour, CubeError> {
        self.check_face(face)?;
        self.check_coordinate(IndexKind::Row, row)?;
        self.check_coordinate(IndexKind::Column, column)?;
        Ok(self.squares[self.offset(face, row, column)])
    }

    /// A row of a face, left to right.
    pub fn row(&self, face: usize, row: usize) -> Result<Vec<Colour>, CubeError> {
        self.check_face(face)?;
        self.check_coordinate(IndexKind::Row, row)?;
        Ok(self.read_row(face, row))
    }

    /// A column of a face, top to bottom.
    pub fn column(&self, face: usize, column: usize) -> Result<Vec<Colour>, CubeError> {
        self.check_face(face)?;
        self.check_coordinate(IndexKind::Column, column)?;
        Ok(self.read_column(face, column))
    }

    /// Every square in serialization order.
    pub fn squares(&self) -> std::iter::Copied<std::slice::Iter<'_, Colour>> {
        self.squares.iter().copied()
    }

    /// The colour-code string for this cube.
    #[must_use]
    pub fn to_code_string(&self) -> String {
        self.squares().map(Colour::code).collect()
    }

    fn check_face(&self, face: usize) -> Result<(), CubeError> {
        if face < FACE_COUNT {
            Ok(())
        } else {
            Err(CubeError::IndexOutOfRange {
                kind: IndexKind::Face,
                index: face,
                bound: FACE_COUNT,
            })
        }
    }

    fn check_coordinate(&self, kind: IndexKind, index: usize) -> Result<(), CubeError> {
        if index < self.size {
            Ok(())
        } else {
            Err(CubeError::IndexOutOfRange {
                kind,
                index,
                bound: self.size,
            })
        }
    }

    // === Unchecked internals used by the rotation engine ===

    #[inline]
    pub(crate) fn offset(&self, face: usize, row: usize, column: usize) -> usize {
        (face * self.size + row) * self.size + column
    }

    pub(crate) fn read_row(&self, face: usize, row: usize) -> Vec<Colour> {
        let start = self.offset(face, row, 0);
        self.squares[start..start + self.size].to_vec()
    }

    pub(crate) fn read_column(&self, face: usize, column: usize) -> Vec<Colour> {
        (0..self.size)
            .map(|row| self.squares[self.offset(face, row, column)])
            .collect()
    }

    /// Write `strip` into a row, reversed if asked.
    pub(crate) fn write_row(&mut self, face: usize, row: usize, strip: &[Colour], reverse: bool) {
        let last = self.size - 1;
        for column in 0..self.size {
            let source = if reverse { last - column } else { column };
            let at = self.offset(face, row, column);
            self.squares[at] = strip[source];
        }
    }

    /// Write `strip` (top-most square first) into a column, reversed if asked.
    pub(crate) fn write_column(&mut self, face: usize, column: usize, strip: &[Colour], reverse: bool) {
        let last = self.size - 1;
        for row in 0..self.size {
            let source = if reverse { last - row } else { row };
            let at = self.offset(face, row, column);
            self.squares[at] = strip[source];
        }
    }

    pub(crate) fn set_square(&mut self, face: usize, row: usize, column: usize, colour: Colour) {
        let at = self.offset(face, row, column);
        self.squares[at] = colour;
    }
}

impl<'a> IntoIterator for &'a Cube {
    type Item = Colour;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Colour>>;

    fn into_iter(self) -> Self::IntoIter {
        self.squares()
    }
}

impl std::fmt::Display for Cube {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for square in self.squares() {
            write!(f, "{}", square.code())?;
        }
        Ok(())
    }
}

impl FromStr for Cube {
    type Err = CubeError;

    /// Parse a code string, inferring the size from its length.
    fn from_str(codes: &str) -> Result<Self, Self::Err> {
        let actual = codes.chars().count();
        let area = actual / FACE_COUNT;
        let size = (1usize..).take_while(|n| n * n <= area).last().unwrap_or(0);
        if size == 0 || FACE_COUNT * size * size != actual {
            return Err(CubeError::InvalidStringLength {
                expected: FACE_COUNT * size.max(1) * size.max(1),
                actual,
            });
        }
        Self::from_code_string(size, codes)
    }
}

/// Serialized form of a [`Cube`]: its size plus the code string.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct CubeRepr {
    size: usize,
    squares: String,
}

impl From<Cube> for CubeRepr {
    fn from(cube: Cube) -> Self {
        Self {
            size: cube.size,
            squares: cube.to_code_string(),
        }
    }
}

impl TryFrom<CubeRepr> for Cube {
    type Error = CubeError;

    fn try_from(repr: CubeRepr) -> Result<Self, Self::Error> {
        Cube::from_code_string(repr.size, &repr.squares)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOLVED_3: &str = "GGGGGGGGGRRRRRRRRRBBBBBBBBBOOOOOOOOOWWWWWWWWWYYYYYYYYY";

    #[test]
    fn test_new_is_solved() {
        let cube = Cube::new(3).unwrap();
        assert_eq!(cube.size(), 3);
        assert_eq!(cube.len(), 54);
        assert!(cube.is_solved());
        assert_eq!(cube.to_code_string(), SOLVED_3);
    }

    #[test]
    fn test_face_colours_follow_declaration_order() {
        let cube = Cube::new(2).unwrap();
        for (face, colour) in Colour::ALL.iter().enumerate() {
            for row in 0..2 {
                for column in 0..2 {
                    assert_eq!(cube.square(face, row, column), Ok(*colour));
                }
            }
        }
    }

    #[test]
    fn test_zero_size_rejected() {
        assert_eq!(Cube::new(0), Err(CubeError::InvalidSize(0)));
        assert_eq!(Cube::from_code_string(0, ""), Err(CubeError::InvalidSize(0)));
    }

    #[test]
    fn test_overflowing_size_rejected() {
        let huge = 1usize << (usize::BITS / 2);
        assert_eq!(Cube::new(huge), Err(CubeError::InvalidSize(huge)));
        assert_eq!(Cube::new(usize::MAX), Err(CubeError::InvalidSize(usize::MAX)));
        assert_eq!(Cube::from_code_string(huge, ""), Err(CubeError::InvalidSize(huge)));

        let json = r#"{"size":4294967296,"squares":""}"#;
        assert!(serde_json::from_str::<Cube>(json).is_err());
    }

    #[test]
    fn test_from_code_string_wrong_length() {
        assert_eq!(
            Cube::from_code_string(3, "GGG"),
            Err(CubeError::InvalidStringLength { expected: 54, actual: 3 })
        );
    }

    #[test]
    fn test_from_code_string_bad_colour() {
        let mut codes = SOLVED_3.to_string();
        codes.replace_range(10..11, "x");
        assert_eq!(Cube::from_code_string(3, &codes), Err(CubeError::InvalidColourCode('x')));
    }

    #[test]
    fn test_from_code_string_fills_row_major() {
        let codes = "GRBOGRBOGRBOGRBOGRBOGRBO";
        let cube = Cube::from_code_string(2, codes).unwrap();
        assert_eq!(cube.row(0, 0).unwrap(), vec![Colour::Green, Colour::Red]);
        assert_eq!(cube.row(0, 1).unwrap(), vec![Colour::Blue, Colour::Orange]);
        assert_eq!(cube.column(0, 1).unwrap(), vec![Colour::Red, Colour::Orange]);
        assert_eq!(cube.to_code_string(), codes);
    }

    #[test]
    fn test_from_str_infers_size() {
        let cube: Cube = SOLVED_3.parse().unwrap();
        assert_eq!(cube.size(), 3);
        assert_eq!(cube, Cube::new(3).unwrap());

        let single: Cube = "GRBOWY".parse().unwrap();
        assert_eq!(single.size(), 1);

        assert!(matches!(
            "GRBOWYG".parse::<Cube>(),
            Err(CubeError::InvalidStringLength { actual: 7, .. })
        ));
        assert!(matches!("".parse::<Cube>(), Err(CubeError::InvalidStringLength { actual: 0, .. })));
    }

    #[test]
    fn test_from_faces() {
        let faces: Vec<Vec<Vec<Colour>>> = Colour::ALL
            .iter()
            .map(|colour| vec![vec![*colour; 2]; 2])
            .collect();
        assert_eq!(Cube::from_faces(faces).unwrap(), Cube::new(2).unwrap());

        let ragged = vec![vec![vec![Colour::Red; 2], vec![Colour::Red; 1]]; 6];
        assert_eq!(Cube::from_faces(ragged), Err(CubeError::InvalidFaceShape));

        let five = vec![vec![vec![Colour::Red; 1]; 1]; 5];
        assert_eq!(Cube::from_faces(five), Err(CubeError::InvalidFaceShape));
    }

    #[test]
    fn test_accessor_bounds() {
        let cube = Cube::new(3).unwrap();
        assert_eq!(
            cube.square(6, 0, 0),
            Err(CubeError::IndexOutOfRange { kind: IndexKind::Face, index: 6, bound: 6 })
        );
        assert_eq!(
            cube.square(0, 3, 0),
            Err(CubeError::IndexOutOfRange { kind: IndexKind::Row, index: 3, bound: 3 })
        );
        assert_eq!(
            cube.column(0, 5),
            Err(CubeError::IndexOutOfRange { kind: IndexKind::Column, index: 5, bound: 3 })
        );
        assert!(cube.row(5, 2).is_ok());
    }

    #[test]
    fn test_reset() {
        let mut cube = Cube::from_code_string(1, "YWORBG").unwrap();
        assert!(!cube.is_solved());
        cube.reset();
        assert_eq!(cube, Cube::new(1).unwrap());
    }

    #[test]
    fn test_equality_needs_same_size() {
        assert_ne!(Cube::new(2).unwrap(), Cube::new(3).unwrap());
        let a = Cube::from_code_string(1, "GRBOWY").unwrap();
        let b = Cube::from_code_string(1, "GRBOYW").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_iteration_is_restartable() {
        let cube = Cube::from_code_string(1, "YWORBG").unwrap();
        let first: Vec<Colour> = cube.squares().collect();
        let second: Vec<Colour> = (&cube).into_iter().collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 6);
        assert_eq!(first[0], Colour::Yellow);
        assert_eq!(first[5], Colour::Green);
    }

    #[test]
    fn test_display_matches_code_string() {
        let cube = Cube::new(2).unwrap();
        assert_eq!(cube.to_string(), cube.to_code_string());
    }

    #[test]
    fn test_write_strips_with_reverse() {
        let mut cube = Cube::new(3).unwrap();
        let strip = [Colour::Red, Colour::Blue, Colour::White];

        cube.write_row(0, 1, &strip, false);
        assert_eq!(cube.read_row(0, 1), strip.to_vec());

        cube.write_row(0, 1, &strip, true);
        assert_eq!(cube.read_row(0, 1), vec![Colour::White, Colour::Blue, Colour::Red]);

        cube.write_column(4, 2, &strip, true);
        assert_eq!(cube.read_column(4, 2), vec![Colour::White, Colour::Blue, Colour::Red]);
        assert_eq!(cube.square(4, 0, 2), Ok(Colour::White));
    }

    #[test]
    fn test_serialization() {
        let cube = Cube::from_code_string(1, "YWORBG").unwrap();
        let json = serde_json::to_string(&cube).unwrap();
        assert_eq!(json, r#"{"size":1,"squares":"YWORBG"}"#);
        let back: Cube = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cube);

        let bad = r#"{"size":2,"squares":"YWORBG"}"#;
        assert!(serde_json::from_str::<Cube>(bad).is_err());
    }
}
