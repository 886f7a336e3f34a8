//! The 8x8 board: cell storage, move legality, disc flipping, and the
//! text board format.

use std::collections::HashSet;
use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use arrayvec::ArrayVec;

use crate::field::{Field, PlayerColor};
use crate::position::{BOARD_SIZE, Direction, Position, TOTAL_FIELDS};
use crate::score::Score;

/// Longest possible run of occupied cells next to a candidate move.
const MAX_RUN: usize = BOARD_SIZE - 1;

/// Error type for board text that cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardParseError {
    /// After discarding delimiter characters, the text did not contain
    /// exactly 64 cell glyphs.
    WrongFieldCount(usize),
    /// A retained character was not one of the three cell glyphs.
    UnknownGlyph(char),
}

impl fmt::Display for BoardParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardParseError::WrongFieldCount(count) => write!(
                f,
                "Invalid board text: expected {TOTAL_FIELDS} field glyphs, found {count}"
            ),
            BoardParseError::UnknownGlyph(c) => {
                write!(f, "Invalid field glyph {c:?}: must be 'O', '*' or ' '")
            }
        }
    }
}

impl std::error::Error for BoardParseError {}

/// Layout written by [`Board::initialize`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InitialBoardState {
    /// All 64 cells empty.
    Empty,
    /// The standard four-disc opening: dark on (3,3) and (4,4), light on
    /// (3,4) and (4,3).
    CenterSquare,
}

/// An Othello board holding one [`Field`] per cell, stored row-major.
///
/// The board itself enforces no turn order. It answers move-legality
/// queries and applies moves; [`play_move`](Board::play_move) silently
/// ignores illegal moves, so callers that care must check
/// [`is_valid_move`](Board::is_valid_move) first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    fields: [Field; TOTAL_FIELDS],
}

impl Default for Board {
    fn default() -> Board {
        Board {
            fields: [Field::Empty; TOTAL_FIELDS],
        }
    }
}

impl Board {
    /// Creates an all-empty board.
    #[inline]
    pub fn new() -> Board {
        Board::default()
    }

    /// Resets every cell according to `initial_state`.
    pub fn initialize(&mut self, initial_state: InitialBoardState) {
        self.fields = [Field::Empty; TOTAL_FIELDS];
        if initial_state == InitialBoardState::CenterSquare {
            self[Position::new(3, 3)] = Field::Dark;
            self[Position::new(3, 4)] = Field::Light;
            self[Position::new(4, 3)] = Field::Light;
            self[Position::new(4, 4)] = Field::Dark;
        }
    }

    /// Returns `true` if the cell at `pos` is empty.
    #[inline]
    pub fn is_empty(&self, pos: Position) -> bool {
        self[pos].is_empty()
    }

    /// Returns `true` if the cell at `pos` holds a disc.
    #[inline]
    pub fn is_occupied(&self, pos: Position) -> bool {
        self[pos].is_occupied()
    }

    /// Checks whether `color` may move to `pos`.
    ///
    /// A move is valid iff `pos` is empty and placing a disc there flips
    /// at least one opponent disc in at least one direction.
    pub fn is_valid_move(&self, color: PlayerColor, pos: Position) -> bool {
        self.is_empty(pos) && self.flips_any_field(color, pos)
    }

    /// Returns the set of all valid moves for `color`.
    ///
    /// The result is deduplicated but carries no ordering; callers that
    /// present moves to a user sort them explicitly.
    pub fn find_valid_moves(&self, color: PlayerColor) -> HashSet<Position> {
        Position::iter()
            .filter(|&pos| self.is_valid_move(color, pos))
            .collect()
    }

    /// Plays a move for `color` at `pos`, flipping every captured
    /// opponent disc.
    ///
    /// If the move is not valid the board is left unchanged. Rejecting
    /// illegal moves is the game loop's job; the board does not report
    /// them.
    pub fn play_move(&mut self, color: PlayerColor, pos: Position) {
        if !self.is_valid_move(color, pos) {
            return;
        }
        let flipped = self.flipped_by_move(color, pos);
        self[pos] = color.field();
        for flip_pos in flipped {
            self[flip_pos] = color.field();
        }
    }

    /// Counts dark, light and empty cells into a [`Score`].
    pub fn compute_score(&self) -> Score {
        let mut dark = 0;
        let mut light = 0;
        let mut empty = 0;
        for field in &self.fields {
            match field {
                Field::Dark => dark += 1,
                Field::Light => light += 1,
                Field::Empty => empty += 1,
            }
        }
        Score::new(dark, light, empty)
    }

    /// Collects the consecutive occupied cells next to `start` in
    /// `direction`, stopping at the first empty cell or the board edge.
    fn occupied_run(&self, start: Position, direction: Direction) -> ArrayVec<Position, MAX_RUN> {
        let mut run = ArrayVec::new();
        let mut current = start.offset(direction);
        while let Some(pos) = current {
            if self.is_empty(pos) {
                break;
            }
            run.push(pos);
            current = pos.offset(direction);
        }
        run
    }

    /// Returns the discs `color` would flip by moving to `start`, for one
    /// direction.
    ///
    /// Within the occupied run the farthest cell owned by `color` anchors
    /// the capture; every opponent disc before it flips. A run with no
    /// anchoring cell, including one of opponent discs all the way to the
    /// edge, flips nothing.
    fn flips_in_direction(
        &self,
        color: PlayerColor,
        start: Position,
        direction: Direction,
    ) -> ArrayVec<Position, MAX_RUN> {
        let run = self.occupied_run(start, direction);
        match run.iter().rposition(|&pos| self[pos].is_owned_by(color)) {
            Some(anchor) => run[..anchor]
                .iter()
                .copied()
                .filter(|&pos| self[pos].is_owned_by_opponent_of(color))
                .collect(),
            None => ArrayVec::new(),
        }
    }

    fn flips_any_field(&self, color: PlayerColor, start: Position) -> bool {
        Direction::ALL
            .iter()
            .any(|&direction| !self.flips_in_direction(color, start, direction).is_empty())
    }

    fn flipped_by_move(&self, color: PlayerColor, pos: Position) -> Vec<Position> {
        Direction::ALL
            .iter()
            .flat_map(|&direction| self.flips_in_direction(color, pos, direction))
            .collect()
    }
}

impl Index<Position> for Board {
    type Output = Field;

    #[inline]
    fn index(&self, pos: Position) -> &Field {
        &self.fields[pos.index()]
    }
}

impl IndexMut<Position> for Board {
    #[inline]
    fn index_mut(&mut self, pos: Position) -> &mut Field {
        &mut self.fields[pos.index()]
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses the text board format.
    ///
    /// Every character other than the three cell glyphs counts as a
    /// delimiter and is discarded, so both the canonical form produced by
    /// `to_string` and bare 64-glyph strings parse.
    fn from_str(s: &str) -> Result<Board, BoardParseError> {
        let cleaned: Vec<char> = s
            .chars()
            .filter(|&c| Field::from_char(c).is_some())
            .collect();
        if cleaned.len() != TOTAL_FIELDS {
            return Err(BoardParseError::WrongFieldCount(cleaned.len()));
        }

        let mut board = Board::new();
        for (index, c) in cleaned.into_iter().enumerate() {
            board.fields[index] = Field::from_char(c).ok_or(BoardParseError::UnknownGlyph(c))?;
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    /// Writes the canonical text form: eight rows of `|`-wrapped cells
    /// separated by newlines, no trailing newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..BOARD_SIZE {
                write!(f, "|{}", self[Position::new(row, col)])?;
            }
            write!(f, "|")?;
        }
        Ok(())
    }
}
