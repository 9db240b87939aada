//! Primitive turns: one slice, one axis, one quarter turn.

use serde::{Deserialize, Serialize};

use crate::core::{Axis, ColumnMove, Cube, CubeError, RowMove};

/// A single quarter-turn of one slice.
///
/// Named moves are tables of these; they are resolved by lookup rather than
/// by calling per-move functions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Turn {
    /// `Cube::rotate_x` on a 1-indexed column.
    X { slice: usize, direction: ColumnMove },
    /// `Cube::rotate_y` on a 1-indexed row.
    Y { slice: usize, direction: RowMove },
    /// `Cube::rotate_z` on a 1-indexed slice counted from the front.
    Z { slice: usize, direction: ColumnMove },
}

impl Turn {
    #[must_use]
    pub const fn x(slice: usize, direction: ColumnMove) -> Self {
        Turn::X { slice, direction }
    }

    #[must_use]
    pub const fn y(slice: usize, direction: RowMove) -> Self {
        Turn::Y { slice, direction }
    }

    #[must_use]
    pub const fn z(slice: usize, direction: ColumnMove) -> Self {
        Turn::Z { slice, direction }
    }

    /// The axis this turn rotates around.
    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Turn::X { .. } => Axis::X,
            Turn::Y { .. } => Axis::Y,
            Turn::Z { .. } => Axis::Z,
        }
    }

    /// The 1-indexed slice this turn rotates.
    #[must_use]
    pub const fn slice(self) -> usize {
        match self {
            Turn::X { slice, .. } | Turn::Y { slice, .. } | Turn::Z { slice, .. } => slice,
        }
    }

    /// The same slice turned the other way.
    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            Turn::X { slice, direction } => Turn::X { slice, direction: direction.opposite() },
            Turn::Y { slice, direction } => Turn::Y { slice, direction: direction.opposite() },
            Turn::Z { slice, direction } => Turn::Z { slice, direction: direction.opposite() },
        }
    }

    /// Check the slice exists on a cube of `size`.
    pub fn validate(self, size: usize) -> Result<(), CubeError> {
        let slice = self.slice();
        if (1..=size).contains(&slice) {
            Ok(())
        } else {
            Err(CubeError::InvalidIndex {
                axis: self.axis(),
                index: slice,
                size,
            })
        }
    }

    /// Perform this turn on a cube.
    pub fn apply(self, cube: &mut Cube) -> Result<(), CubeError> {
        match self {
            Turn::X { slice, direction } => cube.rotate_x(slice, direction),
            Turn::Y { slice, direction } => cube.rotate_y(slice, direction),
            Turn::Z { slice, direction } => cube.rotate_z(slice, direction),
        }
    }
}
