//! Solidity grid for the level
//!
//! A rectangular, row-major grid of solid/empty cells, immutable after load.
//! Out-of-bounds queries resolve to solid, so the level boundary acts as an
//! implicit wall and callers never need a separate edge check.

use thiserror::Error;

/// Why a level source failed to load. No partial grid survives a failure.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoadError {
    #[error("level source contains no rows")]
    Empty,
    #[error("row {row} has {found} cells, expected {expected}")]
    InconsistentRowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("row {row}, cell {col}: {value:?} is not a non-negative integer")]
    BadCell {
        row: usize,
        col: usize,
        value: String,
    },
}

/// Immutable rectangular grid of solid/empty tiles.
#[derive(Debug, Clone, PartialEq)]
pub struct TileGrid {
    width: i32,
    height: i32,
    cells: Vec<bool>,
}

impl TileGrid {
    /// Build a grid from rows of cell values. Nonzero means solid.
    ///
    /// Every row must have the same length; an empty row set is an error.
    pub fn from_rows(rows: &[Vec<u32>]) -> Result<Self, LoadError> {
        let first = rows.first().ok_or(LoadError::Empty)?;
        let width = first.len();
        if width == 0 {
            return Err(LoadError::Empty);
        }
        let mut cells = Vec::with_capacity(width * rows.len());
        for (row, values) in rows.iter().enumerate() {
            if values.len() != width {
                return Err(LoadError::InconsistentRowWidth {
                    row,
                    expected: width,
                    found: values.len(),
                });
            }
            cells.extend(values.iter().map(|&v| v != 0));
        }
        Ok(Self {
            width: width as i32,
            height: rows.len() as i32,
            cells,
        })
    }

    /// Parse the CSV level format: one row per line, comma-separated
    /// non-negative integers, `0` empty, anything else solid. Blank lines
    /// are skipped.
    pub fn parse(src: &str) -> Result<Self, LoadError> {
        let mut rows = Vec::new();
        for (row, line) in src.lines().filter(|l| !l.trim().is_empty()).enumerate() {
            let mut values = Vec::new();
            for (col, cell) in line.split(',').enumerate() {
                let value = cell.trim().parse::<u32>().map_err(|_| LoadError::BadCell {
                    row,
                    col,
                    value: cell.trim().to_string(),
                })?;
                values.push(value);
            }
            rows.push(values);
        }
        Self::from_rows(&rows)
    }

    /// Solidity at tile coordinates. Anything outside the grid is solid.
    #[inline]
    pub fn is_solid(&self, tx: i32, ty: i32) -> bool {
        if tx < 0 || ty < 0 || tx >= self.width || ty >= self.height {
            return true;
        }
        self.cells[(ty * self.width + tx) as usize]
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// World-space extent for the given tile size (camera bounds)
    pub fn world_width(&self, tile_size: f32) -> i32 {
        (self.width as f32 * tile_size) as i32
    }

    pub fn world_height(&self, tile_size: f32) -> i32 {
        (self.height as f32 * tile_size) as i32
    }
}
