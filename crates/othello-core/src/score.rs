//! Disc tallies taken from a board snapshot.

use std::cmp::Ordering;

use crate::field::PlayerColor;
use crate::position::TOTAL_FIELDS;

/// Cell counts for one board snapshot.
///
/// A score is computed once from a board and never changes afterwards.
/// The three counts always sum to 64.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Score {
    dark: u32,
    light: u32,
    empty: u32,
}

impl Score {
    /// Creates a score from raw cell counts.
    #[inline]
    pub fn new(dark: u32, light: u32, empty: u32) -> Score {
        debug_assert_eq!(
            dark + light + empty,
            TOTAL_FIELDS as u32,
            "Cell counts must cover the whole board"
        );
        Score { dark, light, empty }
    }

    /// Returns the number of discs `color` holds.
    #[inline]
    pub fn fields_for(self, color: PlayerColor) -> u32 {
        match color {
            PlayerColor::Dark => self.dark,
            PlayerColor::Light => self.light,
        }
    }

    #[inline]
    pub fn dark(self) -> u32 {
        self.dark
    }

    #[inline]
    pub fn light(self) -> u32 {
        self.light
    }

    #[inline]
    pub fn empty(self) -> u32 {
        self.empty
    }

    /// Returns `true` if both players hold the same number of discs.
    ///
    /// Empty cells play no part in tie detection.
    #[inline]
    pub fn is_tied(self) -> bool {
        self.dark == self.light
    }

    /// Returns the color holding strictly more discs, or `None` when the
    /// score is tied.
    pub fn winner(self) -> Option<PlayerColor> {
        match self.dark.cmp(&self.light) {
            Ordering::Greater => Some(PlayerColor::Dark),
            Ordering::Less => Some(PlayerColor::Light),
            Ordering::Equal => None,
        }
    }

    /// Renders the score as `"<first>:<second>"`, putting the count for
    /// `first_color` first.
    pub fn format(self, first_color: PlayerColor) -> String {
        format!(
            "{}:{}",
            self.fields_for(first_color),
            self.fields_for(first_color.other())
        )
    }
}
