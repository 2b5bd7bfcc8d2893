use super::{Cell, rules::Rule};
use rayon::prelude::*;

/// Grid holds one generation of the 2D cellular automaton.
/// Uses functional, immutable updates: `evolve` returns a fresh grid and the
/// dimensions never change after construction.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
        }
    }

    /// Get grid dimensions as (width, height)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        (x < self.width && y < self.height).then(|| self.cells[self.get_index(x, y)])
    }

    /// Set cell at position. Construction-time only; evolved grids are never
    /// written in place.
    pub(crate) fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if x < self.width && y < self.height {
            let idx = self.get_index(x, y);
            self.cells[idx] = cell;
        }
    }

    /// Count live neighbors among the 8 Moore offsets inside the bounds.
    /// The boundary is fixed: out-of-bounds neighbors contribute 0, the grid
    /// does not wrap.
    fn count_live_neighbors(&self, x: usize, y: usize) -> u8 {
        (-1i32..=1)
            .flat_map(|dy| (-1i32..=1).map(move |dx| (dx, dy)))
            .filter(|&(dx, dy)| dx != 0 || dy != 0)
            .filter_map(|(dx, dy)| {
                let nx = usize::try_from(x as i32 + dx).ok()?;
                let ny = usize::try_from(y as i32 + dy).ok()?;
                self.get(nx, ny)
            })
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    /// Pure functional evolution - returns new grid (serial).
    /// All neighbor counts come from `self` before any next-generation cell
    /// is written, so the whole-grid update is synchronous.
    pub fn evolve(&self, rule: &dyn Rule) -> Self {
        let cells = (0..self.height)
            .flat_map(|y| (0..self.width).map(move |x| (x, y)))
            .map(|(x, y)| {
                let current = self.cells[self.get_index(x, y)];
                let neighbors = self.count_live_neighbors(x, y);
                rule.evolve(current, neighbors)
            })
            .collect();

        Self {
            width: self.width,
            height: self.height,
            cells,
        }
    }

    /// Parallel evolution using rayon, one task per row.
    /// Neighbor counts have no cross-cell dependency, so rows are independent.
    pub fn evolve_parallel(&self, rule: &(dyn Rule + Sync)) -> Self {
        let cells: Vec<Cell> = (0..self.height)
            .into_par_iter()
            .flat_map_iter(|y| {
                (0..self.width).map(move |x| {
                    let current = self.cells[self.get_index(x, y)];
                    let neighbors = self.count_live_neighbors(x, y);
                    rule.evolve(current, neighbors)
                })
            })
            .collect();

        Self {
            width: self.width,
            height: self.height,
            cells,
        }
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| (x, y)))
            .map(|(x, y)| (x, y, self.cells[self.get_index(x, y)]))
    }

    /// Serialize to rows of 0/1 values, top row first
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        (0..self.height)
            .map(|y| (0..self.width).map(|x| self.cells[self.get_index(x, y)].to_bit()).collect())
            .collect()
    }

    /// Number of live cells in this generation
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }
}
