use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use ndarray::Array2;

use super::util::Position;
use super::visited::MAX_CELLS;
use crate::errors::BoggleError;

/// Immutable rectangular grid of lowercase letters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    state: Array2<char>,
}

impl Board {
    /// Builds a board from its rows. Rows must all be the same, non-zero length and every
    /// cell must be a lowercase letter.
    pub fn new(rows: Vec<Vec<char>>) -> Result<Self, BoggleError> {
        let n_rows = rows.len();
        let n_cols = rows.first().map(|r| r.len()).unwrap_or(0);
        if n_rows == 0 || n_cols == 0 {
            return Err(BoggleError::EmptyBoard);
        }
        if n_rows * n_cols > MAX_CELLS {
            return Err(BoggleError::BoardTooLarge {
                cells: n_rows * n_cols,
                max: MAX_CELLS,
            });
        }

        let mut cells = Vec::with_capacity(n_rows * n_cols);
        for (row, r) in rows.into_iter().enumerate() {
            if r.len() != n_cols {
                return Err(BoggleError::RaggedBoard {
                    row,
                    expected: n_cols,
                    found: r.len(),
                });
            }
            for (col, c) in r.into_iter().enumerate() {
                if !c.is_ascii_lowercase() {
                    return Err(BoggleError::InvalidCell {
                        row,
                        col,
                        value: c.to_string(),
                    });
                }
                cells.push(c);
            }
        }

        let state = Array2::from_shape_vec((n_rows, n_cols), cells)
            .map_err(|e| BoggleError::InvalidInput { str: e.to_string() })?;
        Ok(Self { state })
    }

    /// Loads a board from a JSON array of rows, e.g. `[["t","l"],["e","d"]]`.
    /// Letters are lowercased.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, BoggleError> {
        let mut file = File::open(path.as_ref())?;
        let mut data = String::new();
        file.read_to_string(&mut data)?;
        Self::from_json(&data)
    }

    pub fn from_json(data: &str) -> Result<Self, BoggleError> {
        let raw_board: Vec<Vec<String>> = serde_json::from_str(data)?;
        let mut rows = Vec::with_capacity(raw_board.len());
        for (row, raw_row) in raw_board.iter().enumerate() {
            let mut cells = Vec::with_capacity(raw_row.len());
            for (col, s) in raw_row.iter().enumerate() {
                let mut chars = s.trim().chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => cells.push(c.to_ascii_lowercase()),
                    _ => {
                        return Err(BoggleError::InvalidCell {
                            row,
                            col,
                            value: s.clone(),
                        })
                    }
                }
            }
            rows.push(cells);
        }
        Self::new(rows)
    }

    pub fn rows(&self) -> usize {
        self.state.nrows()
    }

    pub fn cols(&self) -> usize {
        self.state.ncols()
    }

    pub fn n_cells(&self) -> usize {
        self.state.len()
    }

    pub fn get(&self, pos: Position) -> Option<char> {
        self.state.get((pos.row, pos.col)).copied()
    }

    /// All positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let cols = self.cols();
        (0..self.n_cells()).map(move |i| Position::new(i / cols, i % cols))
    }

    /// In-bounds neighbours of `pos`, diagonals included
    pub fn neighbours(&self, pos: Position) -> impl Iterator<Item = Position> {
        pos.adjacent(self.rows(), self.cols())
    }

    pub fn index_of(&self, pos: Position) -> usize {
        pos.as_index(self.cols())
    }
}

impl std::ops::Index<Position> for Board {
    type Output = char;

    fn index(&self, index: Position) -> &Self::Output {
        &self.state[(index.row, index.col)]
    }
}

/// Parses rows separated by `/` or newlines. A row is either contiguous letters (`tlbi`)
/// or whitespace separated cells (`t l b i`). Letters are lowercased.
impl FromStr for Board {
    type Err = BoggleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .split(|c: char| c == '/' || c == '\n')
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .map(|r| {
                r.chars()
                    .filter(|c| !c.is_whitespace())
                    .map(|c| c.to_ascii_lowercase())
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();
        Self::new(rows)
    }
}
