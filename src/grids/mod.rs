pub mod count_grid;

/// Row, column.
pub type Position = (usize, usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub rows: usize,
    pub columns: usize,
}

impl Dimensions {
    /// Number of odd/odd interior cells.
    pub fn cell_count(&self) -> usize {
        (self.rows / 2) * (self.columns / 2)
    }

    #[cfg(test)]
    #[inline]
    pub fn is_border(&self, row: usize, column: usize) -> bool {
        row == 0 || column == 0 || row == self.rows - 1 || column == self.columns - 1
    }
}

/// Discriminants follow the carving order: east, north, west, south.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    East = 0,
    North = 1,
    West = 2,
    South = 3,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::East,
        Direction::North,
        Direction::West,
        Direction::South,
    ];

    /// Position `distance` steps away, `None` if it would leave the grid.
    pub fn walk(self, from: Position, distance: usize, dims: Dimensions) -> Option<Position> {
        let (row, column) = from;
        let (n_row, n_col) = match self {
            Direction::East => (Some(row), column.checked_add(distance)),
            Direction::North => (row.checked_sub(distance), Some(column)),
            Direction::West => (Some(row), column.checked_sub(distance)),
            Direction::South => (row.checked_add(distance), Some(column)),
        };

        match (n_row, n_col) {
            (Some(r), Some(c)) if r < dims.rows && c < dims.columns => Some((r, c)),
            _ => None,
        }
    }
}

/// Visit count and coordinates of a neighboring slot.
pub type Neighbor = (u32, Position);

#[derive(Debug, Clone, Copy)]
pub struct Neighborhood {
    pub east: Option<Neighbor>,
    pub north: Option<Neighbor>,
    pub west: Option<Neighbor>,
    pub south: Option<Neighbor>,

    counter: usize,
}

impl Neighborhood {
    pub fn new() -> Self {
        Self {
            east: None,
            north: None,
            west: None,
            south: None,
            counter: 0,
        }
    }

    pub fn get(&self, direction: Direction) -> Option<Neighbor> {
        match direction {
            Direction::East => self.east,
            Direction::North => self.north,
            Direction::West => self.west,
            Direction::South => self.south,
        }
    }

    pub fn set(&mut self, direction: Direction, neighbor: Option<Neighbor>) {
        match direction {
            Direction::East => self.east = neighbor,
            Direction::North => self.north = neighbor,
            Direction::West => self.west = neighbor,
            Direction::South => self.south = neighbor,
        }
    }
}

// yields present neighbors in east, north, west, south order
impl Iterator for Neighborhood {
    type Item = (Neighbor, Direction);

    fn next(&mut self) -> Option<Self::Item> {
        while self.counter < Direction::ALL.len() {
            let direction = Direction::ALL[self.counter];
            self.counter += 1;
            if let Some(neighbor) = self.get(direction) {
                return Some((neighbor, direction));
            }
        }

        None
    }
}
