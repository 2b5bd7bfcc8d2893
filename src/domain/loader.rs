//! Initial-state construction: uniform random seeding and the CSV-like
//! tabular source (rows of comma-separated 0/1 values, one grid row per line).

use rand::Rng;
use thiserror::Error;

use super::{Cell, Grid};

/// Malformed tabular pattern source
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty pattern source")]
    Empty,

    #[error("row {row} has {got} values, expected {expected}")]
    RaggedRow { row: usize, expected: usize, got: usize },

    #[error("invalid cell value \"{value}\" at row {row}, column {col}: expected 0 or 1")]
    InvalidValue { row: usize, col: usize, value: String },
}

/// Create a square grid with every cell independently and uniformly sampled
/// from {dead, alive}. The randomness source is injected so callers control
/// seeding and reproducibility.
pub fn random_with<R: Rng + ?Sized>(rng: &mut R, size: usize) -> Grid {
    let mut grid = Grid::new(size, size);
    for y in 0..size {
        for x in 0..size {
            if rng.random::<bool>() {
                grid.set(x, y, Cell::Alive);
            }
        }
    }
    grid
}

/// Build a grid from pre-tokenized rows of 0/1 values.
/// Fails on empty input, ragged rows, or any value outside {0, 1}.
pub fn from_rows(rows: &[Vec<u8>]) -> Result<Grid, ParseError> {
    let Some(first) = rows.first() else {
        return Err(ParseError::Empty);
    };
    let width = first.len();
    if width == 0 {
        return Err(ParseError::Empty);
    }

    let mut grid = Grid::new(width, rows.len());
    for (y, row) in rows.iter().enumerate() {
        if row.len() != width {
            return Err(ParseError::RaggedRow {
                row: y,
                expected: width,
                got: row.len(),
            });
        }
        for (x, &value) in row.iter().enumerate() {
            if value > 1 {
                return Err(ParseError::InvalidValue {
                    row: y,
                    col: x,
                    value: value.to_string(),
                });
            }
            grid.set(x, y, Cell::from_bit(value));
        }
    }
    Ok(grid)
}

/// Parse a CSV pattern source: comma-separated integers, one grid row per
/// line. Blank trailing lines are ignored; anything else malformed fails
/// fast before the simulation starts.
pub fn parse_csv(input: &str) -> Result<Grid, ParseError> {
    let mut rows = Vec::new();
    for (y, line) in input.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let row = line
            .split(',')
            .enumerate()
            .map(|(x, token)| {
                let token = token.trim();
                match token {
                    "0" => Ok(0),
                    "1" => Ok(1),
                    _ => Err(ParseError::InvalidValue {
                        row: y,
                        col: x,
                        value: token.to_string(),
                    }),
                }
            })
            .collect::<Result<Vec<u8>, _>>()?;
        rows.push(row);
    }
    from_rows(&rows)
}

/// Serialize a grid back to the CSV row format accepted by `parse_csv`
pub fn to_csv(grid: &Grid) -> String {
    grid.to_rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(u8::to_string)
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_random_dimensions() {
        let mut rng = StdRng::seed_from_u64(7);
        let grid = random_with(&mut rng, 20);
        assert_eq!(grid.dimensions(), (20, 20));
        // Uniform sampling over 400 cells produces both states
        assert!(grid.population() > 0);
        assert!(grid.population() < 400);
    }

    #[test]
    fn test_random_is_reproducible_with_seed() {
        let a = random_with(&mut StdRng::seed_from_u64(42), 16);
        let b = random_with(&mut StdRng::seed_from_u64(42), 16);
        assert_eq!(a, b);
    }

    #[test]
    fn test_parse_csv() {
        let grid = parse_csv("0,1,0\n1,1,1\n0,0,0").unwrap();
        assert_eq!(grid.dimensions(), (3, 3));
        assert_eq!(grid.to_rows(), vec![vec![0, 1, 0], vec![1, 1, 1], vec![0, 0, 0]]);
    }

    #[test]
    fn test_parse_csv_accepts_padding() {
        let grid = parse_csv(" 1, 0\n0, 1\n").unwrap();
        assert_eq!(grid.to_rows(), vec![vec![1, 0], vec![0, 1]]);
    }

    #[test]
    fn test_csv_round_trip() {
        let source = "1,0,1,0\n0,1,0,1\n1,1,0,0";
        let grid = parse_csv(source).unwrap();
        assert_eq!(parse_csv(&to_csv(&grid)).unwrap(), grid);
        assert_eq!(to_csv(&grid), source);
    }

    #[test]
    fn test_empty_source_is_rejected() {
        assert_eq!(parse_csv("").unwrap_err(), ParseError::Empty);
        assert_eq!(parse_csv("\n\n").unwrap_err(), ParseError::Empty);
        assert_eq!(from_rows(&[]).unwrap_err(), ParseError::Empty);
    }

    #[test]
    fn test_ragged_rows_are_rejected() {
        let err = parse_csv("0,1,0\n1,1").unwrap_err();
        assert_eq!(err, ParseError::RaggedRow { row: 1, expected: 3, got: 2 });
    }

    #[test]
    fn test_non_binary_value_is_rejected() {
        let err = parse_csv("0,2,0").unwrap_err();
        assert!(matches!(err, ParseError::InvalidValue { row: 0, col: 1, .. }));
    }

    #[test]
    fn test_non_numeric_value_is_rejected() {
        let err = parse_csv("0,x,0").unwrap_err();
        assert!(matches!(err, ParseError::InvalidValue { row: 0, col: 1, .. }));
    }
}
