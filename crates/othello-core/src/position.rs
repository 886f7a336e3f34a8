//! Grid coordinates and compass directions for the 8x8 board.
//!
//! Positions are row/column pairs ordered row-major, so index 0 is the
//! top-left corner and index 63 the bottom-right:
//!
//! ```text
//!       col 0  1  2  3  4  5  6  7
//! row 0     00 01 02 03 04 05 06 07
//! row 1     08 09 10 11 12 13 14 15
//! row 2     16 17 18 19 20 21 22 23
//! row 3     24 25 26 27 28 29 30 31
//! row 4     32 33 34 35 36 37 38 39
//! row 5     40 41 42 43 44 45 46 47
//! row 6     48 49 50 51 52 53 54 55
//! row 7     56 57 58 59 60 61 62 63
//! ```

use std::fmt;

/// Board dimensions
pub const BOARD_SIZE: usize = 8;
pub const TOTAL_FIELDS: usize = BOARD_SIZE * BOARD_SIZE;

/// One of the eight compass directions, expressed as a unit offset on the
/// grid. Row deltas grow southward, column deltas grow eastward.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl Direction {
    /// All eight directions, in the scan order used by the move-legality
    /// checks.
    pub const ALL: [Direction; 8] = [
        Direction::N,
        Direction::NE,
        Direction::E,
        Direction::SE,
        Direction::S,
        Direction::SW,
        Direction::W,
        Direction::NW,
    ];

    /// Returns the row component of this direction (-1, 0 or 1).
    #[inline]
    pub const fn row_delta(self) -> i8 {
        match self {
            Direction::NW | Direction::N | Direction::NE => -1,
            Direction::W | Direction::E => 0,
            Direction::SW | Direction::S | Direction::SE => 1,
        }
    }

    /// Returns the column component of this direction (-1, 0 or 1).
    #[inline]
    pub const fn col_delta(self) -> i8 {
        match self {
            Direction::NW | Direction::W | Direction::SW => -1,
            Direction::N | Direction::S => 0,
            Direction::NE | Direction::E | Direction::SE => 1,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// A position on the board.
///
/// A `Position` always refers to one of the 64 cells; constructors assert
/// that both coordinates are in range, and grid arithmetic that would step
/// off the board reports failure instead of wrapping. The derived ordering
/// is row-major, matching the linear board index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// All 64 board positions in row-major order.
    pub const ALL: [Position; TOTAL_FIELDS] = {
        let mut all = [Position { row: 0, col: 0 }; TOTAL_FIELDS];
        let mut index = 0;
        while index < TOTAL_FIELDS {
            all[index] = Position {
                row: (index / BOARD_SIZE) as u8,
                col: (index % BOARD_SIZE) as u8,
            };
            index += 1;
        }
        all
    };

    /// Creates a position from row and column coordinates.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is >= 8.
    #[inline]
    pub fn new(row: usize, col: usize) -> Position {
        assert!(row < BOARD_SIZE, "Invalid row: {row}");
        assert!(col < BOARD_SIZE, "Invalid column: {col}");
        Position {
            row: row as u8,
            col: col as u8,
        }
    }

    /// Creates a position from a row-major linear index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is >= 64.
    #[inline]
    pub fn from_index(index: usize) -> Position {
        assert!(index < TOTAL_FIELDS, "Invalid board index: {index}");
        Position {
            row: (index / BOARD_SIZE) as u8,
            col: (index % BOARD_SIZE) as u8,
        }
    }

    /// Returns the row coordinate (0-7).
    #[inline]
    pub fn row(self) -> usize {
        self.row as usize
    }

    /// Returns the column coordinate (0-7).
    #[inline]
    pub fn col(self) -> usize {
        self.col as usize
    }

    /// Returns the row-major linear index (0-63).
    #[inline]
    pub fn index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    /// Returns the neighboring position one step away in `direction`, or
    /// `None` if that step would leave the board.
    #[inline]
    pub fn offset(self, direction: Direction) -> Option<Position> {
        let row = self.row as i8 + direction.row_delta();
        let col = self.col as i8 + direction.col_delta();
        let range = 0..BOARD_SIZE as i8;
        if range.contains(&row) && range.contains(&col) {
            Some(Position {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Returns an iterator over all 64 positions in row-major order.
    #[inline]
    pub fn iter() -> impl Iterator<Item = Position> {
        Self::ALL.into_iter()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
