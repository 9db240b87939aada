//! Error type shared by the whole crate.

use thiserror::Error;

/// Which coordinate an accessor rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IndexKind {
    Face,
    Row,
    Column,
}

impl std::fmt::Display for IndexKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            IndexKind::Face => "face",
            IndexKind::Row => "row",
            IndexKind::Column => "column",
        };
        f.write_str(name)
    }
}

/// Rotation axis, used to report a bad slice index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        };
        f.write_str(name)
    }
}

/// Everything that can go wrong building, reading, turning or driving a cube.
///
/// All variants are local validation failures; none are retryable.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum CubeError {
    #[error("invalid cube size {0}, must be at least 1")]
    InvalidSize(usize),

    #[error("invalid {axis} slice {index}, must be in 1..={size}")]
    InvalidIndex { axis: Axis, index: usize, size: usize },

    #[error("{kind} index {index} out of range, must be below {bound}")]
    IndexOutOfRange {
        kind: IndexKind,
        index: usize,
        bound: usize,
    },

    #[error("cube string has {actual} squares, expected {expected}")]
    InvalidStringLength { expected: usize, actual: usize },

    #[error("invalid colour code {0:?}")]
    InvalidColourCode(char),

    #[error("face grid is not 6 faces of equal square size")]
    InvalidFaceShape,

    #[error("unknown move {0:?}")]
    UnknownMoveSymbol(char),

    #[error("modifier {0:?} has no move before it")]
    DanglingModifier(char),

    #[error("no moves to undo")]
    EmptyHistory,

    #[error("cube size {actual} does not match simulator size {expected}")]
    SizeMismatch { expected: usize, actual: usize },
}
