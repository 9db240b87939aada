//! Outer-face notation for a cube of any size.

use super::Profile;
use crate::core::{ColumnMove, RowMove};
use crate::notation::{MoveAlphabet, Turn};

/// Any NxN cube driven by outer-face turns and whole-cube rotations.
///
/// `U D L R F B` turn the outermost slice on that side; `x y z` turn every
/// slice on the axis, following `R`, `U` and `F` respectively. Directions
/// match [`Cube3x3`](super::Cube3x3).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OuterFaces {
    size: usize,
}

impl OuterFaces {
    /// Profile for a `size`×`size` cube. Size validation happens when the
    /// simulator builds the cube.
    #[must_use]
    pub const fn new(size: usize) -> Self {
        Self { size }
    }
}

impl Profile for OuterFaces {
    fn size(&self) -> usize {
        self.size
    }

    fn alphabet(&self) -> MoveAlphabet {
        let n = self.size;
        let all_x: Vec<Turn> = (1..=n).map(|slice| Turn::x(slice, ColumnMove::Up)).collect();
        let all_y: Vec<Turn> = (1..=n).map(|slice| Turn::y(slice, RowMove::Left)).collect();
        let all_z: Vec<Turn> = (1..=n).map(|slice| Turn::z(slice, ColumnMove::Down)).collect();

        MoveAlphabet::new()
            .define('U', &[Turn::y(1, RowMove::Left)])
            .define('D', &[Turn::y(n, RowMove::Right)])
            .define('L', &[Turn::x(1, ColumnMove::Down)])
            .define('R', &[Turn::x(n, ColumnMove::Up)])
            .define('F', &[Turn::z(1, ColumnMove::Down)])
            .define('B', &[Turn::z(n, ColumnMove::Up)])
            .define('x', &all_x)
            .define('y', &all_y)
            .define('z', &all_z)
    }

    fn scramble_move_count(&self) -> usize {
        match self.size {
            0 | 1 => 5,
            2 => 11,
            n => 22 + 10 * (n - 3),
        }
    }
}
