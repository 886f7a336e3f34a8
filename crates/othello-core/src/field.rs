//! Cell contents and player colors.

use std::fmt;

/// Contents of a single board cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Empty,
    Light,
    Dark,
}

impl Field {
    #[inline]
    pub fn is_empty(self) -> bool {
        self == Field::Empty
    }

    #[inline]
    pub fn is_occupied(self) -> bool {
        self != Field::Empty
    }

    /// Returns `true` if this cell holds a disc of `color`.
    #[inline]
    pub fn is_owned_by(self, color: PlayerColor) -> bool {
        self == color.field()
    }

    /// Returns `true` if this cell holds a disc of the opponent of `color`.
    #[inline]
    pub fn is_owned_by_opponent_of(self, color: PlayerColor) -> bool {
        self == color.other().field()
    }

    /// Returns the single-character glyph used in the text board format.
    #[inline]
    pub fn to_char(self) -> char {
        match self {
            Field::Empty => ' ',
            Field::Light => 'O',
            Field::Dark => '*',
        }
    }

    /// Parses a board glyph, returning `None` for characters that do not
    /// denote a cell.
    #[inline]
    pub fn from_char(c: char) -> Option<Field> {
        match c {
            ' ' => Some(Field::Empty),
            'O' => Some(Field::Light),
            '*' => Some(Field::Dark),
            _ => None,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// One of the two players, identified by disc color. Dark always moves
/// first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlayerColor {
    Dark,
    Light,
}

impl PlayerColor {
    /// Returns the opposing color.
    #[inline]
    pub fn other(self) -> PlayerColor {
        match self {
            PlayerColor::Dark => PlayerColor::Light,
            PlayerColor::Light => PlayerColor::Dark,
        }
    }

    /// Returns the cell contents representing a disc of this color.
    #[inline]
    pub fn field(self) -> Field {
        match self {
            PlayerColor::Dark => Field::Dark,
            PlayerColor::Light => Field::Light,
        }
    }
}

impl From<PlayerColor> for Field {
    fn from(color: PlayerColor) -> Field {
        color.field()
    }
}

impl fmt::Display for PlayerColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerColor::Dark => write!(f, "dark"),
            PlayerColor::Light => write!(f, "light"),
        }
    }
}
