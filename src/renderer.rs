use crate::grids::count_grid::CountGrid;
use std::io::{self, Write};

pub const WALL_GLYPH: &str = "\u{25A0}  ";
pub const OPEN_GLYPH: &str = "   ";

/// Draws standing walls as filled blocks and everything carved as blanks,
/// one grid row per line.
pub fn render(grid: &CountGrid) -> String {
    let mut out = String::with_capacity(grid.cells.len() * WALL_GLYPH.len() + grid.dims.rows);

    for row in grid.rows() {
        for &count in row {
            out.push_str(if count == 0 { WALL_GLYPH } else { OPEN_GLYPH });
        }
        out.push('\n');
    }

    out
}

pub fn print_maze<W: Write>(out: &mut W, grid: &CountGrid) -> io::Result<()> {
    out.write_all(render(grid).as_bytes())?;
    out.flush()
}
