//! Face positions and rotation directions.
//!
//! Faces are laid out as a net:
//!
//! ```text
//!        [4]
//!    [0] [1] [2] [3]
//!        [5]
//! ```
//!
//! Index 1 is the front. The `x` axis runs left to right across the front,
//! `y` runs bottom to top and `z` runs from the front towards the back.

use serde::{Deserialize, Serialize};

use super::error::CubeError;

/// Number of faces on a cube.
pub const FACE_COUNT: usize = 6;

/// A face position. The discriminant is the storage index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Face {
    Left = 0,
    Front = 1,
    Right = 2,
    Back = 3,
    Top = 4,
    Bottom = 5,
}

impl Face {
    /// All faces in storage order.
    pub const ALL: [Face; FACE_COUNT] = [
        Face::Left,
        Face::Front,
        Face::Right,
        Face::Back,
        Face::Top,
        Face::Bottom,
    ];

    /// Storage index of this face.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<usize> for Face {
    type Error = CubeError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Face::ALL.get(index).copied().ok_or(CubeError::IndexOutOfRange {
            kind: super::error::IndexKind::Face,
            index,
            bound: FACE_COUNT,
        })
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Face::Left => "left",
            Face::Front => "front",
            Face::Right => "right",
            Face::Back => "back",
            Face::Top => "top",
            Face::Bottom => "bottom",
        };
        f.write_str(name)
    }
}

/// Direction for a column slice (`rotate_x` and `rotate_z`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnMove {
    Up,
    Down,
}

impl ColumnMove {
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            ColumnMove::Up => ColumnMove::Down,
            ColumnMove::Down => ColumnMove::Up,
        }
    }
}

/// Direction for a row slice (`rotate_y`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RowMove {
    Left,
    Right,
}

impl RowMove {
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            RowMove::Left => RowMove::Right,
            RowMove::Right => RowMove::Left,
        }
    }
}

/// Quarter-turn direction of a face's own grid, as seen looking at the net.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Spin {
    Anticlockwise,
    Clockwise,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_indices() {
        for (i, face) in Face::ALL.iter().enumerate() {
            assert_eq!(face.index(), i);
            assert_eq!(Face::try_from(i), Ok(*face));
        }
    }

    #[test]
    fn test_face_out_of_range() {
        assert!(matches!(
            Face::try_from(6),
            Err(CubeError::IndexOutOfRange { index: 6, .. })
        ));
    }

    #[test]
    fn test_opposites() {
        assert_eq!(ColumnMove::Up.opposite(), ColumnMove::Down);
        assert_eq!(ColumnMove::Down.opposite().opposite(), ColumnMove::Down);
        assert_eq!(RowMove::Left.opposite(), RowMove::Right);
    }
}
