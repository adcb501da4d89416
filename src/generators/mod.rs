pub mod backtracker;
pub mod openings;

use crate::error::Result;
use crate::grids::count_grid::CountGrid;

pub trait Generator {
    fn step_generation(&mut self) -> Result<()>;
    fn grid(&self) -> &CountGrid;
    fn is_done(&self) -> bool;

    fn next_step(&mut self) -> Result<&CountGrid> {
        self.step_generation()?;
        Ok(self.grid())
    }

    fn generate_maze(&mut self) -> Result<&CountGrid> {
        while !self.is_done() {
            self.next_step()?;
        }

        Ok(self.grid())
    }
}
