use thiserror::Error;

use super::{Cell, Grid};

/// Requested canvas cannot hold the pattern
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("pattern '{name}' is {width}x{height}, does not fit a {canvas_size}x{canvas_size} canvas")]
pub struct SizeError {
    pub name: &'static str,
    pub width: usize,
    pub height: usize,
    pub canvas_size: usize,
}

/// A fixed seed shape: an ordered sequence of rows of 0/1 values,
/// meant to be placed centered on a larger all-dead canvas.
#[derive(Clone)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    rows: Vec<Vec<u8>>,
}

impl Pattern {
    /// Create a pattern from literal rows. Rows must be rectangular.
    pub fn new(name: &'static str, description: &'static str, rows: Vec<Vec<u8>>) -> Self {
        debug_assert!(rows.iter().all(|row| row.len() == rows[0].len()));
        Self { name, description, rows }
    }

    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Place the pattern centered on an all-dead square canvas.
    /// The offset on each axis is `(canvas_size - pattern_dim) / 2`, so a
    /// pattern exactly the canvas size lands at the origin.
    pub fn centered_on(&self, canvas_size: usize) -> Result<Grid, SizeError> {
        if self.width() > canvas_size || self.height() > canvas_size {
            return Err(SizeError {
                name: self.name,
                width: self.width(),
                height: self.height(),
                canvas_size,
            });
        }

        let row_offset = (canvas_size - self.height()) / 2;
        let col_offset = (canvas_size - self.width()) / 2;

        let mut grid = Grid::new(canvas_size, canvas_size);
        for (dy, row) in self.rows.iter().enumerate() {
            for (dx, &bit) in row.iter().enumerate() {
                grid.set(col_offset + dx, row_offset + dy, Cell::from_bit(bit));
            }
        }
        Ok(grid)
    }
}

/// Classic seed pattern library
pub mod presets {
    use super::*;

    /// Kok's Galaxy - period 8 oscillator
    pub fn koks_galaxy() -> Pattern {
        Pattern::new(
            "koks-galaxy",
            "Oscillator (period 8)",
            vec![
                vec![1, 1, 1, 1, 1, 1, 0, 1, 1],
                vec![1, 1, 1, 1, 1, 1, 0, 1, 1],
                vec![0, 0, 0, 0, 0, 0, 0, 1, 1],
                vec![1, 1, 0, 0, 0, 0, 0, 1, 1],
                vec![1, 1, 0, 0, 0, 0, 0, 1, 1],
                vec![1, 1, 0, 0, 0, 0, 0, 1, 1],
                vec![1, 1, 0, 0, 0, 0, 0, 0, 0],
                vec![1, 1, 0, 1, 1, 1, 1, 1, 1],
                vec![1, 1, 0, 1, 1, 1, 1, 1, 1],
            ],
        )
    }

    /// Glider - simplest spaceship, moves diagonally
    pub fn glider() -> Pattern {
        Pattern::new(
            "glider",
            "Moves diagonally (period 4)",
            vec![
                vec![0, 1, 0],
                vec![0, 0, 1],
                vec![1, 1, 1],
            ],
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new("blinker", "Oscillator (period 2)", vec![vec![1, 1, 1]])
    }

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new(
            "block",
            "Still life",
            vec![
                vec![1, 1],
                vec![1, 1],
            ],
        )
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![koks_galaxy(), glider(), blinker(), block()]
    }

    /// Look up a pattern by its name
    pub fn find(name: &str) -> Option<Pattern> {
        all_patterns().into_iter().find(|p| p.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_galaxy_centers_in_25x25() {
        let grid = presets::koks_galaxy().centered_on(25).unwrap();
        assert_eq!(grid.dimensions(), (25, 25));
        // offset is (25 - 9) / 2 = 8 on both axes
        assert!(grid.get(8, 8).unwrap().is_alive());
        assert!(grid.get(16, 16).unwrap().is_alive());
        assert!(!grid.get(7, 8).unwrap().is_alive());
        assert!(!grid.get(0, 0).unwrap().is_alive());
        assert_eq!(grid.population(), 48);
    }

    #[test]
    fn test_exact_size_pattern_lands_at_origin() {
        let block = presets::block();
        let grid = block.centered_on(2).unwrap();
        assert_eq!(grid.to_rows(), vec![vec![1, 1], vec![1, 1]]);
    }

    #[test]
    fn test_oversized_pattern_is_rejected() {
        let err = presets::koks_galaxy().centered_on(8).unwrap_err();
        assert_eq!(err.canvas_size, 8);
        assert_eq!(err.width, 9);
        assert_eq!(err.height, 9);
    }

    #[test]
    fn test_find_by_name() {
        assert!(presets::find("glider").is_some());
        assert!(presets::find("galaxy-brain").is_none());
    }
}
