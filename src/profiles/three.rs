//! Standard 3x3 notation.

use super::Profile;
use crate::core::{ColumnMove, RowMove};
use crate::notation::{MoveAlphabet, Turn};

const U: Turn = Turn::y(1, RowMove::Left);
const D: Turn = Turn::y(3, RowMove::Right);
const L: Turn = Turn::x(1, ColumnMove::Down);
const R: Turn = Turn::x(3, ColumnMove::Up);
const F: Turn = Turn::z(1, ColumnMove::Down);
const B: Turn = Turn::z(3, ColumnMove::Up);
const M: Turn = Turn::x(2, ColumnMove::Down);
const E: Turn = Turn::y(2, RowMove::Right);
const S: Turn = Turn::z(2, ColumnMove::Down);

/// The 3x3 cube with full notation.
///
/// - Faces: `U D L R F B`
/// - Slices: `M` (follows `L`), `E` (follows `D`), `S` (follows `F`)
/// - Wide (face plus adjacent slice): `u d l r f b`
/// - Whole cube: `x` (follows `R`), `y` (follows `U`), `z` (follows `F`)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cube3x3;

impl Profile for Cube3x3 {
    fn size(&self) -> usize {
        3
    }

    fn alphabet(&self) -> MoveAlphabet {
        MoveAlphabet::new()
            .define('U', &[U])
            .define('D', &[D])
            .define('L', &[L])
            .define('R', &[R])
            .define('F', &[F])
            .define('B', &[B])
            .define('M', &[M])
            .define('E', &[E])
            .define('S', &[S])
            .define('u', &[U, E.inverse()])
            .define('d', &[D, E])
            .define('l', &[L, M])
            .define('r', &[R, M.inverse()])
            .define('f', &[F, S])
            .define('b', &[B, S.inverse()])
            .define('x', &[R, L.inverse(), M.inverse()])
            .define('y', &[U, D.inverse(), E.inverse()])
            .define('z', &[F, B.inverse(), S])
    }

    fn scramble_move_count(&self) -> usize {
        22
    }
}
