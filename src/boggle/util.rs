use std::slice::Iter;

/// The eight compass directions a path may step in. Boggle adjacency includes diagonals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    pub fn iter() -> Iter<'static, Direction> {
        static DIRS: [Direction; 8] = [
            Direction::North,
            Direction::NorthEast,
            Direction::East,
            Direction::SouthEast,
            Direction::South,
            Direction::SouthWest,
            Direction::West,
            Direction::NorthWest,
        ];
        DIRS.iter()
    }

    /// Row and column offsets for a single step
    pub fn delta(&self) -> (isize, isize) {
        match self {
            Self::North => (-1, 0),
            Self::NorthEast => (-1, 1),
            Self::East => (0, 1),
            Self::SouthEast => (1, 1),
            Self::South => (1, 0),
            Self::SouthWest => (1, -1),
            Self::West => (0, -1),
            Self::NorthWest => (-1, -1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the neighbouring position in the given direction, or None if the step
    /// would leave a `rows` x `cols` grid. There is no wraparound.
    pub fn step(&self, dir: Direction, rows: usize, cols: usize) -> Option<Position> {
        let (dr, dc) = dir.delta();
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        if row < rows && col < cols {
            Some(Position { row, col })
        } else {
            None
        }
    }

    /// Returns all the valid adjacent positions to this position
    pub fn adjacent(self, rows: usize, cols: usize) -> impl Iterator<Item = Position> {
        Direction::iter().filter_map(move |&d| self.step(d, rows, cols))
    }

    /// Converts the row/col to a 1d index
    pub fn as_index(&self, cols: usize) -> usize {
        self.row * cols + self.col
    }

    /// Two positions are adjacent if they differ by at most one in both row and column
    pub fn is_adjacent(&self, other: Position) -> bool {
        *self != other && self.row.abs_diff(other.row) <= 1 && self.col.abs_diff(other.col) <= 1
    }
}
