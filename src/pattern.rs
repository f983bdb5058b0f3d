use thiserror::Error;

use crate::grid::Grid;
use crate::grid::GridError;
use crate::parse_util;

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("Pattern has no rows")]
    Empty,

    #[error("Unexpected '{got}' at line {line}, column {column}: expected 0, 1, '.' or '*'")]
    UnexpectedToken {
        line: usize,
        column: usize,
        got: char,
    },

    #[error("Line {line} has {got} cells, expected {expected}")]
    Ragged {
        line: usize,
        expected: usize,
        got: usize,
    },

    #[error("Grid error: {0}")]
    Grid(#[from] GridError),
}

/// Parse a plain text pattern into a [`Grid`].
///
/// Each non-blank line is one row. `1`/`*` is a live cell and `0`/`.` a dead one, optionally
/// separated by blanks, so the output of [`crate::render::render_grid`] reads back as-is. Lines
/// starting with `#` are comments.
pub fn parse_pattern(text: &str) -> Result<Grid, PatternError> {
    let mut rows: Vec<Vec<bool>> = Vec::new();

    for (line, bytes) in parse_util::lines(text.as_bytes()) {
        let (_, rest) = parse_util::take_blanks(bytes);

        match parse_util::peek_1(rest) {
            None | Some(b'#') => continue,
            Some(_) => {}
        }

        let row = read_row(line, bytes)?;

        match rows.first() {
            Some(first) if first.len() != row.len() => {
                return Err(PatternError::Ragged {
                    line,
                    expected: first.len(),
                    got: row.len(),
                });
            }
            _ => {}
        }

        rows.push(row);
    }

    if rows.is_empty() {
        return Err(PatternError::Empty);
    }

    Ok(Grid::from_rows(rows)?)
}

fn read_row(line: usize, mut bytes: &[u8]) -> Result<Vec<bool>, PatternError> {
    let len = bytes.len();
    let mut row = Vec::new();

    loop {
        let (_, rest) = parse_util::take_blanks(bytes);
        let (Some(b), rest) = parse_util::take_1(rest) else {
            break;
        };

        let alive = match b {
            b'1' | b'*' => true,
            b'0' | b'.' => false,
            got => {
                return Err(PatternError::UnexpectedToken {
                    line,
                    column: len - rest.len(),
                    got: got as char,
                });
            }
        };

        row.push(alive);
        bytes = rest;
    }

    Ok(row)
}
