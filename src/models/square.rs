// src/models/square.rs
// Grid coordinates and compass stepping

use std::fmt;

/// Column letters; a column's index is its `i` coordinate.
pub const COLS: &str = "abcdefgh";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Direction::Up),
            '-' => Some(Direction::Down),
            '<' => Some(Direction::Left),
            '>' => Some(Direction::Right),
            _ => None,
        }
    }

    /// (di, dj) grid delta. Up walks toward higher rows.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (0, 1),
            Direction::Down => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// A cell position: `i` is the column, `j` is the row (rank - 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    pub i: usize,
    pub j: usize,
}

impl Square {
    pub fn new(i: usize, j: usize) -> Self {
        Self { i, j }
    }

    /// The neighbouring square in `direction`.
    ///
    /// Panics when the step leaves a `size` x `size` grid; callers are
    /// expected to only hand over moves that stay on the board.
    pub fn next(self, direction: Direction, size: usize) -> Square {
        self.checked_next(direction, size).unwrap_or_else(|| {
            panic!(
                "step {:?} from {} leaves the {}x{} board",
                direction, self, size, size
            )
        })
    }

    pub fn checked_next(self, direction: Direction, size: usize) -> Option<Square> {
        let (di, dj) = direction.delta();
        let i = self.i.checked_add_signed(di)?;
        let j = self.j.checked_add_signed(dj)?;
        if i < size && j < size {
            Some(Square { i, j })
        } else {
            None
        }
    }

    /// The square `steps` cells away in `direction`. Panics off the grid.
    pub fn walk(self, direction: Direction, steps: usize, size: usize) -> Square {
        (0..steps).fold(self, |sq, _| sq.next(direction, size))
    }

    /// Index into a row-major `size * size` cell list, ordered by column first.
    pub fn index(self, size: usize) -> usize {
        self.i * size + self.j
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match COLS.chars().nth(self.i) {
            Some(col) => write!(f, "{}{}", col, self.j + 1),
            None => write!(f, "({},{})", self.i, self.j),
        }
    }
}
