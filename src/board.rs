//! Board state: an 8x8 grid of cells plus the two players.

use std::fmt;

use thiserror::Error;

use crate::constants::{CELLS, N, OPENING_BLACK, OPENING_WHITE};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    Black,
    White,
}

impl Player {
    /// The other colour.
    pub fn opponent(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Black => write!(f, "Black"),
            Player::White => write!(f, "White"),
        }
    }
}

/// Contents of a single square.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }
}

/// A `(row, col)` coordinate.
pub type Point = (usize, usize);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("coordinate ({row}, {col}) is outside the 8x8 board")]
    OutOfRange { row: usize, col: usize },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; CELLS],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// An empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELLS],
        }
    }

    /// The standard starting position: two discs per colour on the diagonals of the centre.
    pub fn opening() -> Self {
        let mut board = Self::new();
        for (row, col) in OPENING_WHITE {
            board.cells[row * N + col] = Cell::White;
        }
        for (row, col) in OPENING_BLACK {
            board.cells[row * N + col] = Cell::Black;
        }
        board
    }

    fn idx((row, col): Point) -> Result<usize, BoardError> {
        if row >= N || col >= N {
            return Err(BoardError::OutOfRange { row, col });
        }
        Ok(row * N + col)
    }

    pub fn get(&self, pt: Point) -> Result<Cell, BoardError> {
        Ok(self.cells[Self::idx(pt)?])
    }

    /// Overwrite a cell with a player's disc, whatever it held before.
    pub fn set(&mut self, pt: Point, player: Player) -> Result<(), BoardError> {
        let i = Self::idx(pt)?;
        self.cells[i] = player.into();
        Ok(())
    }

    pub fn is_empty_at(&self, pt: Point) -> Result<bool, BoardError> {
        Ok(self.get(pt)? == Cell::Empty)
    }

    /// Number of discs of the given colour.
    pub fn count(&self, player: Player) -> usize {
        let cell = Cell::from(player);
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Number of non-empty cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    pub fn is_full(&self) -> bool {
        self.occupied() == CELLS
    }

    /// All cells in row-major order, paired with their coordinates.
    pub fn cells(&self) -> impl Iterator<Item = (Point, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &c)| ((i / N, i % N), c))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " ")?;
        for col in 0..N {
            write!(f, " {}", (b'a' + col as u8) as char)?;
        }
        writeln!(f)?;
        for row in 0..N {
            write!(f, "{}", row + 1)?;
            for col in 0..N {
                let ch = match self.cells[row * N + col] {
                    Cell::Black => 'X',
                    Cell::White => 'O',
                    Cell::Empty => '.',
                };
                write!(f, " {ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
