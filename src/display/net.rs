//! Plain-text renderers.

use super::Renderable;
use crate::core::{Cube, Face};

/// Draws the cube unfolded, top face above the front and bottom below it:
///
/// ```text
///       W W W
///       W W W
///       W W W
/// G G G R R R B B B O O O
/// G G G R R R B B B O O O
/// G G G R R R B B B O O O
///       Y Y Y
///       Y Y Y
///       Y Y Y
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct NetRenderer;

impl NetRenderer {
    fn face_row(cube: &Cube, face: Face, row: usize) -> String {
        cube.row(face.index(), row)
            .unwrap_or_default()
            .iter()
            .map(|square| square.code().to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Renderable for NetRenderer {
    fn display(&self, cube: &Cube) -> String {
        let size = cube.size();
        let indent = " ".repeat(size * 2);
        let mut lines = Vec::with_capacity(size * 3);

        for row in 0..size {
            lines.push(format!("{}{}", indent, Self::face_row(cube, Face::Top, row)));
        }
        for row in 0..size {
            let band: Vec<String> = [Face::Left, Face::Front, Face::Right, Face::Back]
                .iter()
                .map(|face| Self::face_row(cube, *face, row))
                .collect();
            lines.push(band.join(" "));
        }
        for row in 0..size {
            lines.push(format!("{}{}", indent, Self::face_row(cube, Face::Bottom, row)));
        }
        lines.join("\n")
    }
}

/// Lists each face as rows of colour names.
///
/// ```text
/// left:
///   green green
///   green green
/// front:
/// ...
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct FaceListRenderer;

impl Renderable for FaceListRenderer {
    fn display(&self, cube: &Cube) -> String {
        let mut out = String::new();

        for face in Face::ALL {
            out.push_str(&format!("{}:\n", face));
            for row in 0..cube.size() {
                let squares = cube.row(face.index(), row).unwrap_or_default();
                let names: Vec<&str> = squares.iter().map(|square| square.name()).collect();
                out.push_str(&format!("  {}\n", names.join(" ")));
            }
        }
        out.pop();
        out
    }
}
