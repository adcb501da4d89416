use crate::error::{MazeError, Result};
use crate::grids::count_grid::CountGrid;
use crate::grids::Position;
use log::{debug, error};
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpeningAxis {
    /// Entrance on the east border, exit on the west.
    EastWest,
    /// Entrance on the north border, exit on the south.
    NorthSouth,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Openings {
    pub axis: OpeningAxis,
    pub entrance: Position,
    pub exit: Position,
}

/// Punches an entrance and an exit through opposite borders of a carved grid.
/// Each opening sits next to a carved slot, so the two are always joined.
pub fn place_openings<R: Rng>(grid: &mut CountGrid, rng: &mut R) -> Result<Openings> {
    let rows = grid.dims.rows;
    let columns = grid.dims.columns;

    let openings = if rng.gen_range(0, 2) == 0 {
        let entrance_row = pick_index(rng, rows, |row| grid.is_set(row, columns - 2))?;
        let exit_row = pick_index(rng, rows, |row| grid.is_set(row, 1))?;

        Openings {
            axis: OpeningAxis::EastWest,
            entrance: (entrance_row, columns - 1),
            exit: (exit_row, 0),
        }
    } else {
        let entrance_col = pick_index(rng, columns, |col| grid.is_set(1, col))?;
        let exit_col = pick_index(rng, columns, |col| grid.is_set(rows - 2, col))?;

        Openings {
            axis: OpeningAxis::NorthSouth,
            entrance: (0, entrance_col),
            exit: (rows - 1, exit_col),
        }
    };

    grid.visit_cell(openings.entrance.0, openings.entrance.1);
    grid.visit_cell(openings.exit.0, openings.exit.1);
    debug!(
        "openings on {:?}: entrance {:?}, exit {:?}",
        openings.axis, openings.entrance, openings.exit
    );

    Ok(openings)
}

// rejection sample an index in [1, dim - 2] until it lines up with a carved slot
fn pick_index<R, F>(rng: &mut R, dim: usize, is_open: F) -> Result<usize>
where
    R: Rng,
    F: Fn(usize) -> bool,
{
    if !(1..dim - 1).any(&is_open) {
        error!("no carved slot along the border, cannot place opening");
        return Err(MazeError::InternalInvariantViolation(
            "no carved slot next to border",
        ));
    }

    loop {
        let index = rng.gen_range(1, dim - 1);
        if is_open(index) {
            break Ok(index);
        }
    }
}
