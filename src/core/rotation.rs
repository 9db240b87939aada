//! Slice rotations around the three axes.
//!
//! Each rotation cycles one strip through the four faces around its axis,
//! and spins the adjacent side face when the slice is outermost. Slice
//! numbers are 1-indexed at this boundary.
//!
//! Strips are copied out of the grid before any write, so a rotation never
//! reads a square it has already overwritten.
//!
//! Some neighbours store their shared edge the "other" way round: the back
//! face sees the front's columns mirrored, and around the `z` axis the top
//! and bottom faces carry the slice as a row. Those transfers are where the
//! `reverse` flags below come from.

use log::trace;

use super::cube::Cube;
use super::error::{Axis, CubeError};
use super::face::{ColumnMove, Face, RowMove, Spin};

impl Cube {
    /// Rotate column `column` (1-indexed) a quarter turn around the x axis.
    ///
    /// `Up` carries the front column to the top, the top to the back, the
    /// back to the bottom and the bottom to the front. The left face spins
    /// with column 1 and the right face with column `size`.
    pub fn rotate_x(&mut self, column: usize, direction: ColumnMove) -> Result<(), CubeError> {
        let column = self.slice_index(Axis::X, column)?;
        let opposite = self.size() - 1 - column;
        trace!("rotate_x column={} direction={:?}", column, direction);

        let front = self.read_column(Face::Front.index(), column);
        let top = self.read_column(Face::Top.index(), column);
        let back = self.read_column(Face::Back.index(), opposite);
        let bottom = self.read_column(Face::Bottom.index(), column);

        match direction {
            ColumnMove::Up => {
                self.write_column(Face::Front.index(), column, &bottom, false);
                self.write_column(Face::Top.index(), column, &front, false);
                self.write_column(Face::Back.index(), opposite, &top, true);
                self.write_column(Face::Bottom.index(), column, &back, true);
            }
            ColumnMove::Down => {
                self.write_column(Face::Front.index(), column, &top, false);
                self.write_column(Face::Top.index(), column, &back, true);
                self.write_column(Face::Back.index(), opposite, &bottom, true);
                self.write_column(Face::Bottom.index(), column, &front, false);
            }
        }

        if column == 0 {
            let spin = match direction {
                ColumnMove::Up => Spin::Anticlockwise,
                ColumnMove::Down => Spin::Clockwise,
            };
            self.rotate_face(Face::Left, spin);
        }
        if column == self.size() - 1 {
            let spin = match direction {
                ColumnMove::Up => Spin::Clockwise,
                ColumnMove::Down => Spin::Anticlockwise,
            };
            self.rotate_face(Face::Right, spin);
        }
        Ok(())
    }

    /// Rotate row `row` (1-indexed) a quarter turn around the y axis.
    ///
    /// `Left` moves each of the four side faces' row one face to the left.
    /// The top face spins with row 1 and the bottom face with row `size`.
    pub fn rotate_y(&mut self, row: usize, direction: RowMove) -> Result<(), CubeError> {
        let row = self.slice_index(Axis::Y, row)?;
        trace!("rotate_y row={} direction={:?}", row, direction);

        let left = self.read_row(Face::Left.index(), row);
        let front = self.read_row(Face::Front.index(), row);
        let right = self.read_row(Face::Right.index(), row);
        let back = self.read_row(Face::Back.index(), row);

        let (to_left, to_front, to_right, to_back) = match direction {
            RowMove::Left => (&front, &right, &back, &left),
            RowMove::Right => (&back, &left, &front, &right),
        };
        self.write_row(Face::Left.index(), row, to_left, false);
        self.write_row(Face::Front.index(), row, to_front, false);
        self.write_row(Face::Right.index(), row, to_right, false);
        self.write_row(Face::Back.index(), row, to_back, false);

        if row == 0 {
            let spin = match direction {
                RowMove::Left => Spin::Clockwise,
                RowMove::Right => Spin::Anticlockwise,
            };
            self.rotate_face(Face::Top, spin);
        }
        if row == self.size() - 1 {
            let spin = match direction {
                RowMove::Left => Spin::Anticlockwise,
                RowMove::Right => Spin::Clockwise,
            };
            self.rotate_face(Face::Bottom, spin);
        }
        Ok(())
    }

    /// Rotate slice `column` (1-indexed, counted from the front) a quarter
    /// turn around the z axis.
    ///
    /// The slice is a column on the right and left faces but a row on the
    /// top and bottom faces. The front face spins with slice 1 and the back
    /// face with slice `size`.
    pub fn rotate_z(&mut self, column: usize, direction: ColumnMove) -> Result<(), CubeError> {
        let column = self.slice_index(Axis::Z, column)?;
        let opposite = self.size() - 1 - column;
        trace!("rotate_z column={} direction={:?}", column, direction);

        let right = self.read_column(Face::Right.index(), column);
        let top = self.read_row(Face::Top.index(), opposite);
        let left = self.read_column(Face::Left.index(), opposite);
        let bottom = self.read_row(Face::Bottom.index(), column);

        match direction {
            ColumnMove::Up => {
                self.write_column(Face::Right.index(), column, &bottom, true);
                self.write_row(Face::Top.index(), opposite, &right, false);
                self.write_column(Face::Left.index(), opposite, &top, true);
                self.write_row(Face::Bottom.index(), column, &left, false);
            }
            ColumnMove::Down => {
                self.write_column(Face::Right.index(), column, &top, false);
                self.write_row(Face::Top.index(), opposite, &left, true);
                self.write_column(Face::Left.index(), opposite, &bottom, false);
                self.write_row(Face::Bottom.index(), column, &right, true);
            }
        }

        if column == 0 {
            let spin = match direction {
                ColumnMove::Up => Spin::Anticlockwise,
                ColumnMove::Down => Spin::Clockwise,
            };
            self.rotate_face(Face::Front, spin);
        }
        if column == self.size() - 1 {
            let spin = match direction {
                ColumnMove::Up => Spin::Clockwise,
                ColumnMove::Down => Spin::Anticlockwise,
            };
            self.rotate_face(Face::Back, spin);
        }
        Ok(())
    }

    /// Spin one face's own grid a quarter turn. Other faces are untouched.
    pub(crate) fn rotate_face(&mut self, face: Face, spin: Spin) {
        let face = face.index();
        let last = self.size() - 1;
        let columns: Vec<_> = (0..self.size())
            .map(|column| self.read_column(face, column))
            .collect();

        match spin {
            Spin::Anticlockwise => {
                for row in 0..self.size() {
                    self.write_row(face, row, &columns[last - row], false);
                }
            }
            Spin::Clockwise => {
                for row in 0..self.size() {
                    for column in 0..self.size() {
                        self.set_square(face, row, column, columns[row][last - column]);
                    }
                }
            }
        }
    }

    /// Convert a 1-indexed slice number to 0-indexed, validating it.
    fn slice_index(&self, axis: Axis, index: usize) -> Result<usize, CubeError> {
        if (1..=self.size()).contains(&index) {
            Ok(index - 1)
        } else {
            Err(CubeError::InvalidIndex {
                axis,
                index,
                size: self.size(),
            })
        }
    }
}
