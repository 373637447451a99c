//! Validated cell grids handed over by the table-locating boundary.
//!
//! The pipeline never searches a page itself: the caller locates the source
//! element and extracts its cells into a [`TableGrid`]. Shape validation
//! happens here, once, so every later pass can index freely.

use crate::constants::{MIN_GRID_COLS, MIN_GRID_ROWS};
use crate::data::error::{TrackerError, TrackerResult};

/// A rectangular grid of cell text, ordered rows of ordered cells.
#[derive(Clone, Debug, PartialEq)]
pub struct TableGrid {
    rows: Vec<Vec<String>>,
}

impl TableGrid {
    /// Build a grid from raw rows, rejecting anything the parser cannot
    /// consume: fewer than 2 rows or columns, or a ragged shape.
    pub fn from_rows(rows: Vec<Vec<String>>) -> TrackerResult<Self> {
        if rows.len() < MIN_GRID_ROWS {
            return Err(TrackerError::MalformedTable(format!(
                "expected at least {} rows, found {}",
                MIN_GRID_ROWS,
                rows.len()
            )));
        }

        let width = rows[0].len();
        if width < MIN_GRID_COLS {
            return Err(TrackerError::MalformedTable(format!(
                "expected at least {} columns, found {}",
                MIN_GRID_COLS, width
            )));
        }

        for (i, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(TrackerError::MalformedTable(format!(
                    "ragged grid: row {} has {} cells, expected {}",
                    i,
                    row.len(),
                    width
                )));
            }
        }

        Ok(Self { rows })
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn col_count(&self) -> usize {
        self.rows[0].len()
    }

    /// Cell text at (row, col); panics on out-of-range indices, which the
    /// shape validation makes unreachable for in-bounds loops.
    pub fn cell(&self, row: usize, col: usize) -> &str {
        &self.rows[row][col]
    }

    pub fn row(&self, row: usize) -> &[String] {
        &self.rows[row]
    }
}

/// The located source tables for one widget.
///
/// The gust variant carries a companion summary table (per-location daily
/// totals); the rainfall variant has only the series table.
#[derive(Clone, Debug)]
pub struct TrackerSource {
    /// Time-series table
    pub series: TableGrid,
    /// Optional one-value-per-location summary table
    pub summary: Option<TableGrid>,
}

impl TrackerSource {
    /// Wrap what the table locator found. `None` means the host marker
    /// element or its table is absent, which is fatal before parsing.
    pub fn located(series: Option<TableGrid>) -> TrackerResult<Self> {
        match series {
            Some(series) => Ok(Self {
                series,
                summary: None,
            }),
            None => Err(TrackerError::SourceNotFound),
        }
    }

    /// Attach the companion summary table
    pub fn with_summary(mut self, summary: TableGrid) -> Self {
        self.summary = Some(summary);
        self
    }
}
