//! Comma-separated grid files.
//!
//! ```text
//! ,0,1,2
//! 0,1,0,1
//! 1,1,1,1
//! ```
//!
//! The header row is an empty field followed by the column indices. Each
//! following row is its row index and one `0` (blocked) or `1` (passable)
//! per column. Blank lines are ignored.

use std::fs;
use std::path::Path;

use log::debug;

use crate::error::{GridError, Result};
use crate::grid::Grid;

/// Parse a grid from its text form.
pub fn parse_grid(text: &str) -> Result<Grid> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty());

    let Some((header_line, header)) = lines.next() else {
        return Err(GridError::malformed(1, "missing header row"));
    };
    let mut header_fields = header.split(',').map(str::trim);
    if header_fields.next() != Some("") {
        return Err(GridError::malformed(
            header_line,
            "header must start with an empty field",
        ));
    }
    let mut cols = 0;
    for field in header_fields {
        if field.parse::<usize>().ok() != Some(cols) {
            return Err(GridError::malformed(
                header_line,
                format!("expected column index {cols} in header, found {field:?}"),
            ));
        }
        cols += 1;
    }
    if cols == 0 {
        return Err(GridError::malformed(header_line, "header lists no columns"));
    }

    let mut matrix: Vec<Vec<bool>> = Vec::new();
    for (line, text) in lines {
        let mut fields = text.split(',').map(str::trim);
        let label = fields.next().unwrap_or_default();
        let expected_row = matrix.len();
        match label.parse::<usize>() {
            Ok(r) if r == expected_row => {}
            _ => {
                return Err(GridError::malformed(
                    line,
                    format!("expected row index {expected_row}, found {label:?}"),
                ));
            }
        }

        let row = fields
            .map(|v| match v {
                "0" => Ok(false),
                "1" => Ok(true),
                other => Err(GridError::malformed(
                    line,
                    format!("cell value must be 0 or 1, found {other:?}"),
                )),
            })
            .collect::<Result<Vec<bool>>>()?;
        if row.len() != cols {
            return Err(GridError::malformed(
                line,
                format!("expected {cols} cells, found {}", row.len()),
            ));
        }
        matrix.push(row);
    }

    if matrix.is_empty() {
        return Err(GridError::malformed(header_line, "no data rows"));
    }
    Grid::from_matrix(&matrix)
}

/// Serialize the passability of `grid` to its text form (no trailing newline).
pub fn export_grid(grid: &Grid) -> String {
    let mut lines = Vec::with_capacity(grid.rows() + 1);
    let header: Vec<String> = (0..grid.cols()).map(|c| c.to_string()).collect();
    lines.push(format!(",{}", header.join(",")));
    for r in 0..grid.rows() {
        let Some(row) = grid.row(r) else { break };
        let values: Vec<&str> = row.iter().map(|&o| if o { "1" } else { "0" }).collect();
        lines.push(format!("{r},{}", values.join(",")));
    }
    lines.join("\n")
}

/// Read and parse a grid file. I/O errors are returned unchanged.
pub fn read_grid(path: impl AsRef<Path>) -> Result<Grid> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let grid = parse_grid(&text)?;
    debug!(
        "loaded {}x{} grid from {}",
        grid.rows(),
        grid.cols(),
        path.display()
    );
    Ok(grid)
}

/// Write `grid` to `path`, replacing any existing file.
pub fn write_grid(path: impl AsRef<Path>, grid: &Grid) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, export_grid(grid))?;
    debug!("wrote {}x{} grid to {}", grid.rows(), grid.cols(), path.display());
    Ok(())
}
