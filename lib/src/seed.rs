//! Seeding: random initial populations and seed files.

use crate::error::Error;
use crate::grid::Coord;
use crate::history::ChangeList;
use rand::Rng;
use std::fs;
use std::path::Path;

/// A parsed seed file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeedFile {
    /// Number of rows.
    pub rows: usize,
    /// Number of columns.
    pub cols: usize,
    /// The live cells, in file order.
    pub live: Vec<Coord>,
}

/// Populates an all-dead grid, marking each cell live independently
/// with the given probability.
///
/// Returns the cells and the seed change-list: every live cell, in
/// row-major order, which is exactly the diff from the all-dead grid.
/// The probability must already be validated to lie within (0, 1].
pub(crate) fn random<R: Rng + ?Sized>(
    rows: usize,
    cols: usize,
    probability: f64,
    rng: &mut R,
) -> (Vec<bool>, ChangeList) {
    let mut cells = vec![false; rows * cols];
    let mut changes = Vec::new();
    for row in 0..rows {
        for col in 0..cols {
            if rng.gen_bool(probability) {
                cells[row * cols + col] = true;
                changes.push((row, col));
            }
        }
    }
    (cells, changes)
}

/// Builds a grid and its seed change-list from an explicit list of
/// live cells.
///
/// The change-list comes out in row-major order regardless of the
/// input order, and duplicate coordinates collapse into a single live
/// cell.
pub(crate) fn from_live_cells(
    rows: usize,
    cols: usize,
    live: &[Coord],
) -> Result<(Vec<bool>, ChangeList), Error> {
    let mut cells = vec![false; rows * cols];
    for &(row, col) in live {
        if row >= rows || col >= cols {
            return Err(Error::SeedOutOfBoundsError((row, col), rows, cols));
        }
        cells[row * cols + col] = true;
    }
    let changes = cells
        .iter()
        .enumerate()
        .filter(|&(_, &alive)| alive)
        .map(|(index, _)| (index / cols, index % cols))
        .collect();
    Ok((cells, changes))
}

/// Loads and parses a seed file.
pub fn load_file(path: impl AsRef<Path>) -> Result<SeedFile, Error> {
    let text =
        fs::read_to_string(path.as_ref()).map_err(|e| Error::SeedFileError(e.to_string()))?;
    parse(&text)
}

/// Parses the contents of a seed file.
///
/// The first line is `ROWS COLS`; every following non-empty line is
/// `ROW COL`, marking one live cell. A malformed line or an
/// out-of-range coordinate is an error naming the offending line, not
/// a silently empty grid.
pub fn parse(text: &str) -> Result<SeedFile, Error> {
    let mut lines = text.lines().enumerate();

    let (_, header) = lines
        .next()
        .ok_or_else(|| Error::SeedFileError(String::from("empty file")))?;
    let (rows, cols) =
        parse_pair(header).ok_or_else(|| Error::SeedLineError(1, header.to_string()))?;
    if rows == 0 || cols == 0 {
        return Err(Error::NonPositiveError);
    }

    let mut live = Vec::new();
    for (line_no, line) in lines {
        if line.trim().is_empty() {
            continue;
        }
        let (row, col) =
            parse_pair(line).ok_or_else(|| Error::SeedLineError(line_no + 1, line.to_string()))?;
        if row >= rows || col >= cols {
            return Err(Error::SeedOutOfBoundsError((row, col), rows, cols));
        }
        live.push((row, col));
    }

    Ok(SeedFile { rows, cols, live })
}

/// Parses a line holding exactly two whitespace-separated integers.
fn parse_pair(line: &str) -> Option<(usize, usize)> {
    let mut fields = line.split_whitespace();
    let a = fields.next()?.parse().ok()?;
    let b = fields.next()?.parse().ok()?;
    if fields.next().is_some() {
        return None;
    }
    Some((a, b))
}
