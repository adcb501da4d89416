use crate::error::{MazeError, Result};
use crate::generators::Generator;
use crate::grids::count_grid::CountGrid;
use crate::grids::{Dimensions, Direction, Position};
use log::{debug, error, info, trace};
use rand::Rng;

pub const MIN_DIMENSION: usize = 5;

/// Carves a perfect maze by walking the odd/odd cells depth first, knocking
/// down the wall slot in front of every new cell and retreating along the
/// least traveled slot once boxed in. The grid keeps the visit counts, so
/// the walk needs no explicit stack.
pub struct RecursiveBacktracker<R: Rng> {
    grid: CountGrid,
    rng: R,
    start_cell: Position,
    current_cell: Position,
    steps: usize,
    done: bool,
}

impl<R: Rng> RecursiveBacktracker<R> {
    pub fn new(rows: usize, cols: usize, mut rng: R) -> Result<Self> {
        validate_dims(rows, cols)?;

        let start_col = random_odd_index(&mut rng, cols);
        let start_row = random_odd_index(&mut rng, rows);
        let start_cell = (start_row, start_col);
        debug!("carving {}x{} maze from {:?}", rows, cols, start_cell);

        Ok(Self {
            grid: CountGrid::with_dims(rows, cols),
            rng,
            start_cell,
            current_cell: start_cell,
            steps: 0,
            done: false,
        })
    }

    pub fn start(&self) -> Position {
        self.start_cell
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Hands back the grid and the random source for the opening pass.
    pub fn into_parts(self) -> (CountGrid, R) {
        (self.grid, self.rng)
    }

    /// Directions whose wall slot and far cell are both untouched, with the
    /// far cell still inside the border.
    fn valid_new_paths(&self) -> Vec<Direction> {
        let dims = self.grid.dims;
        Direction::ALL
            .iter()
            .copied()
            .filter(|&direction| {
                match (
                    direction.walk(self.current_cell, 1, dims),
                    direction.walk(self.current_cell, 2, dims),
                ) {
                    (Some(wall), Some(cell)) => {
                        is_interior(cell, dims)
                            && !self.grid.is_set(wall.0, wall.1)
                            && !self.grid.is_set(cell.0, cell.1)
                    }
                    _ => false,
                }
            })
            .collect()
    }

    /// Smallest nonzero wall slot around the current cell, first one wins on ties.
    fn find_backtrack_path(&self) -> Option<Direction> {
        let (row, column) = self.current_cell;
        let mut best: Option<(u32, Direction)> = None;

        for ((count, _), direction) in self.grid.get_neighborhood_of(row, column) {
            if count == 0 {
                continue;
            }
            match best {
                Some((min, _)) if min <= count => {}
                _ => best = Some((count, direction)),
            }
        }

        best.map(|(_, direction)| direction)
    }

    /// Bumps the wall slot in `direction` and jumps to the cell behind it.
    fn advance(&mut self, direction: Direction) -> Result<()> {
        let dims = self.grid.dims;
        let (wall, cell) = match (
            direction.walk(self.current_cell, 1, dims),
            direction.walk(self.current_cell, 2, dims),
        ) {
            (Some(wall), Some(cell)) => (wall, cell),
            _ => return Err(invariant("carver tried to step off the grid")),
        };

        self.grid.visit_cell(wall.0, wall.1);
        self.current_cell = cell;

        Ok(())
    }
}

impl<R: Rng> Generator for RecursiveBacktracker<R> {
    fn step_generation(&mut self) -> Result<()> {
        if self.done {
            return Ok(());
        }

        let (row, column) = self.current_cell;
        self.grid.visit_cell(row, column);
        self.steps += 1;

        // back at the origin with nothing left to explore
        if self.grid.get_cell(self.start_cell.0, self.start_cell.1) > 1 {
            self.done = true;
            debug!("carver back at {:?}, nothing left to explore", self.start_cell);
            return Ok(());
        }

        let paths = self.valid_new_paths();
        if !paths.is_empty() {
            let direction = paths[self.rng.gen_range(0, paths.len())];
            trace!("carve {:?} from {:?}", direction, self.current_cell);
            self.advance(direction)
        } else {
            let direction = self
                .find_backtrack_path()
                .ok_or_else(|| invariant("no forward or backtrack path from current cell"))?;
            trace!("backtrack {:?} from {:?}", direction, self.current_cell);
            self.advance(direction)
        }
    }

    fn grid(&self) -> &CountGrid {
        &self.grid
    }

    fn is_done(&self) -> bool {
        self.done
    }
}

/// Carves a full maze interior. Openings are placed separately.
pub fn generate<R: Rng>(rows: usize, cols: usize, rng: R) -> Result<CountGrid> {
    let mut carver = RecursiveBacktracker::new(rows, cols, rng)?;
    carver.generate_maze()?;
    info!(
        "maze carved from {:?} in {} steps ({} cells)",
        carver.start(),
        carver.steps(),
        carver.grid().dims.cell_count()
    );
    let (grid, _) = carver.into_parts();

    Ok(grid)
}

pub fn validate_dims(rows: usize, cols: usize) -> Result<()> {
    // the whole count buffer has to be addressable
    let fits = rows
        .checked_mul(cols)
        .and_then(|cells| cells.checked_mul(std::mem::size_of::<u32>()))
        .map_or(false, |bytes| bytes <= isize::MAX as usize);

    if !fits || rows < MIN_DIMENSION || cols < MIN_DIMENSION || rows % 2 == 0 || cols % 2 == 0 {
        return Err(MazeError::InvalidDimensions {
            rows,
            columns: cols,
        });
    }

    Ok(())
}

/// Odd index in `[1, dim - 2]`, resampled until the parity matches.
fn random_odd_index<R: Rng>(rng: &mut R, dim: usize) -> usize {
    loop {
        let index = rng.gen_range(1, dim - 1);
        if index % 2 == 1 {
            break index;
        }
    }
}

#[inline]
fn is_interior(position: Position, dims: Dimensions) -> bool {
    let (row, column) = position;
    row >= 1 && column >= 1 && row <= dims.rows - 2 && column <= dims.columns - 2
}

fn invariant(what: &'static str) -> MazeError {
    error!("maze carver invariant violated: {}", what);
    MazeError::InternalInvariantViolation(what)
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::grids::count_grid::CountGrid;
    use crate::grids::Position;
    use std::collections::VecDeque;

    pub fn is_cell(position: Position) -> bool {
        position.0 % 2 == 1 && position.1 % 2 == 1
    }

    /// Carved wall slots that are not on the border.
    pub fn carved_interior_walls(grid: &CountGrid) -> usize {
        let dims = grid.dims;
        (0..dims.rows)
            .flat_map(|row| (0..dims.columns).map(move |col| (row, col)))
            .filter(|&(row, col)| !dims.is_border(row, col) && (row + col) % 2 == 1)
            .filter(|&(row, col)| grid.is_set(row, col))
            .count()
    }

    /// Cells reachable from `from` through carved wall slots.
    pub fn reachable_cells(grid: &CountGrid, from: Position) -> usize {
        let dims = grid.dims;
        let mut seen = vec![false; dims.rows * dims.columns];
        let mut queue = VecDeque::new();
        seen[from.0 * dims.columns + from.1] = true;
        queue.push_back(from);

        let mut count = 0;
        while let Some((row, col)) = queue.pop_front() {
            count += 1;
            for ((wall_count, wall), direction) in grid.get_neighborhood_of(row, col) {
                if wall_count == 0 || dims.is_border(wall.0, wall.1) {
                    continue;
                }
                if let Some(next) = direction.walk((row, col), 2, dims) {
                    let index = next.0 * dims.columns + next.1;
                    if !seen[index] {
                        seen[index] = true;
                        queue.push_back(next);
                    }
                }
            }
        }

        count
    }
}
