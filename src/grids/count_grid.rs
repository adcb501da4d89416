use crate::grids::{Dimensions, Direction, Neighborhood, Position};

/// Row-major grid of visit counts. Zero is a standing wall, anything else has
/// been carved or walked over that many times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountGrid {
    pub dims: Dimensions,

    pub cells: Vec<u32>,
}

impl CountGrid {
    pub fn with_dims(rows: usize, columns: usize) -> Self {
        Self {
            cells: vec![0; rows * columns],
            dims: Dimensions { rows, columns },
        }
    }

    #[inline]
    fn index_of(&self, row: usize, column: usize) -> usize {
        (self.dims.columns * row) + column
    }

    pub fn is_set(&self, row: usize, column: usize) -> bool {
        self.get_cell(row, column) != 0
    }

    #[inline]
    pub fn get_cell(&self, row: usize, column: usize) -> u32 {
        self.cells[self.index_of(row, column)]
    }

    #[cfg(test)]
    #[inline]
    pub fn set_cell(&mut self, row: usize, column: usize, count: u32) -> u32 {
        let index = self.index_of(row, column);
        let prev_count = self.cells[index];
        self.cells[index] = count;

        prev_count
    }

    /// Bumps the visit count, returns the new value.
    #[inline]
    pub fn visit_cell(&mut self, row: usize, column: usize) -> u32 {
        let index = self.index_of(row, column);
        self.cells[index] += 1;

        self.cells[index]
    }

    pub fn get_neighbor_coords_of(
        &self,
        coords: Position,
        direction: Direction,
    ) -> Option<Position> {
        direction.walk(coords, 1, self.dims)
    }

    pub fn get_neighborhood_of(&self, row: usize, column: usize) -> Neighborhood {
        let mut neighbors = Neighborhood::new();

        for &direction in Direction::ALL.iter() {
            let neighbor = self
                .get_neighbor_coords_of((row, column), direction)
                .map(|(n_row, n_col)| (self.get_cell(n_row, n_col), (n_row, n_col)));
            neighbors.set(direction, neighbor);
        }

        neighbors
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.cells.chunks(self.dims.columns)
    }
}
